//! Acting-user context for list requests
//!
//! Identifies who is asking for a listing. The core never validates or
//! interprets this; it travels inside [`FindAllParams`](crate::core::params::FindAllParams)
//! to the listing layer, which applies visibility rules downstream.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity behind a list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Viewer {
    /// Authenticated user
    User { user_id: Uuid, roles: Vec<String> },

    /// Platform administrator (sees unpublished content downstream)
    Admin { admin_id: Uuid },

    /// No authentication (public listing)
    Anonymous,
}

impl Viewer {
    /// Get user_id from the context if available
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Viewer::User { user_id, .. } => Some(*user_id),
            Viewer::Admin { admin_id } => Some(*admin_id),
            Viewer::Anonymous => None,
        }
    }

    /// Check if the viewer is an admin
    pub fn is_admin(&self) -> bool {
        matches!(self, Viewer::Admin { .. })
    }

    /// Check if the viewer is anonymous
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Viewer::Anonymous)
    }

    /// Check if the viewer has a role
    pub fn has_role(&self, role: &str) -> bool {
        match self {
            Viewer::User { roles, .. } => roles.iter().any(|r| r == role),
            _ => false,
        }
    }
}
