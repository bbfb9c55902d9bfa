//! User model matching the frontend User interface.

use serde::{Deserialize, Serialize};

/// Privilege tier, ranked descending. Role drives administrative
/// capability and default tool visibility everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Management,
    DepartmentAdmin,
    Employee,
}

impl Role {
    /// All roles that may enter the admin section.
    pub const ADMIN_ROLES: &'static [Role] =
        &[Role::SuperAdmin, Role::Management, Role::DepartmentAdmin];
}

/// Organizational grouping used for coarse-grained tool/user scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Marketing,
    #[serde(rename = "HR")]
    Hr,
    Dev,
    Sales,
    Unassigned,
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Department::Marketing => "Marketing",
            Department::Hr => "HR",
            Department::Dev => "Dev",
            Department::Sales => "Sales",
            Department::Unassigned => "Unassigned",
        };
        f.write_str(name)
    }
}

/// A portal user. Email is the login key (case-sensitive, unique).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub department: Department,
    pub role: Role,
    /// Tool ids assigned directly to this user.
    pub assigned_tools: Vec<String>,
}

/// Request body for creating a new user. The store fills in the id,
/// an empty tool assignment, and a placeholder avatar keyed by email.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

/// Request body for the self-service profile edit. Role and department
/// are deliberately absent: a user can never change their own role.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
