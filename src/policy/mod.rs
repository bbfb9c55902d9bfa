//! Role and visibility policy.
//!
//! Pure functions over users and the tool catalog. Administrators need
//! visibility into inactive tools to manage and re-enable them; ordinary
//! consumers must never see or attempt to launch a disabled tool unless
//! it was assigned to them directly.

use crate::models::{Role, Tool, ToolStatus, User};

/// Compute the tools a user may see.
///
/// - super_admin sees every tool regardless of status or assignment.
/// - department_admin sees tools scoped to their department, plus tools
///   assigned to them directly, regardless of status.
/// - Every role sees tools assigned to them directly in any status, and
///   tools scoped to their department only while active.
pub fn visible_tools<'a>(user: &User, tools: &'a [Tool]) -> Vec<&'a Tool> {
    tools.iter().filter(|tool| is_visible(user, tool)).collect()
}

/// Whether a single tool is visible to the user.
pub fn is_visible(user: &User, tool: &Tool) -> bool {
    if user.role == Role::SuperAdmin {
        return true;
    }

    let department = user.department.to_string();
    let assigned_to_user = tool.assigned_users.contains(&user.id)
        || user.assigned_tools.contains(&tool.id);
    let assigned_to_department = tool.assigned_departments.contains(&department);

    if user.role == Role::DepartmentAdmin && (assigned_to_department || assigned_to_user) {
        return true;
    }

    assigned_to_user || (assigned_to_department && tool.status == ToolStatus::Active)
}

/// Whether a tool may be launched. Strictly active-only, independent of
/// role; visibility of an inactive tool never implies launchability.
pub fn can_launch(tool: &Tool) -> bool {
    tool.status == ToolStatus::Active
}

/// Whether `actor` may manage (edit or remove) `target`.
pub fn can_manage_user(actor: &User, target: &User) -> bool {
    match actor.role {
        Role::SuperAdmin => true,
        Role::Management => {
            matches!(target.role, Role::DepartmentAdmin | Role::Employee)
        }
        Role::DepartmentAdmin => {
            target.role == Role::Employee && target.department == actor.department
        }
        Role::Employee => false,
    }
}

/// Roles the actor may assign when creating a user.
pub fn assignable_roles(actor: &User) -> &'static [Role] {
    match actor.role {
        Role::SuperAdmin => &[
            Role::SuperAdmin,
            Role::Management,
            Role::DepartmentAdmin,
            Role::Employee,
        ],
        Role::Management => &[Role::DepartmentAdmin, Role::Employee],
        _ => &[Role::Employee],
    }
}

/// Whether the actor may register new tools.
pub fn can_create_tool(actor: &User) -> bool {
    actor.role == Role::SuperAdmin
}

/// Whether the actor may edit an existing tool. Department admins are
/// restricted to tools scoped to their own department.
pub fn can_edit_tool(actor: &User, tool: &Tool) -> bool {
    match actor.role {
        Role::SuperAdmin => true,
        Role::DepartmentAdmin => tool
            .assigned_departments
            .contains(&actor.department.to_string()),
        _ => false,
    }
}
