//! Server-side session store.
//!
//! Each session holds a denormalized copy of the logged-in user keyed
//! by an opaque token, mirroring the original per-tab session storage.
//! The copy is adopted as-is on every request and is never re-validated
//! against the live user collection, so a removed or edited user stays
//! "logged in" with stale data until their next login. Profile edits
//! update only this copy.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::User;

/// Token-keyed map of active sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, User>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for the given user and return its token.
    pub fn create(&self, user: User) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions
            .write()
            .expect("sessions lock poisoned")
            .insert(token.clone(), user);
        token
    }

    /// Resolve a token to its session user, if the session exists.
    pub fn get(&self, token: &str) -> Option<User> {
        self.sessions
            .read()
            .expect("sessions lock poisoned")
            .get(token)
            .cloned()
    }

    /// Replace the session's user copy. Returns the updated user, or
    /// `None` when the token is unknown.
    pub fn update(&self, token: &str, user: User) -> Option<User> {
        let mut sessions = self.sessions.write().expect("sessions lock poisoned");
        match sessions.get_mut(token) {
            Some(slot) => {
                *slot = user.clone();
                Some(user)
            }
            None => None,
        }
    }

    /// Remove a session. Unknown tokens are ignored.
    pub fn remove(&self, token: &str) {
        self.sessions
            .write()
            .expect("sessions lock poisoned")
            .remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Role};

    fn demo_user() -> User {
        User {
            id: "user-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@gridai.test".to_string(),
            avatar_url: None,
            department: Department::Dev,
            role: Role::Employee,
            assigned_tools: vec![],
        }
    }

    #[test]
    fn test_create_and_resolve() {
        let sessions = SessionStore::new();
        let token = sessions.create(demo_user());
        assert_eq!(sessions.get(&token).unwrap().name, "Ada");
        assert!(sessions.get("other-token").is_none());
    }

    #[test]
    fn test_update_replaces_copy() {
        let sessions = SessionStore::new();
        let token = sessions.create(demo_user());

        let mut edited = demo_user();
        edited.name = "Ada Lovelace".to_string();
        edited.avatar_url = Some("https://example.com/ada.png".to_string());
        sessions.update(&token, edited).unwrap();

        let current = sessions.get(&token).unwrap();
        assert_eq!(current.name, "Ada Lovelace");
        assert_eq!(
            current.avatar_url.as_deref(),
            Some("https://example.com/ada.png")
        );
    }

    #[test]
    fn test_remove_clears_session() {
        let sessions = SessionStore::new();
        let token = sessions.create(demo_user());
        sessions.remove(&token);
        assert!(sessions.get(&token).is_none());
    }
}
