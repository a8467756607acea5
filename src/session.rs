use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

pub const ADMIN_ROLE: &str = "admin";

/// The signed-in user as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            role: "user".to_string(),
            name: None,
        }
    }
}

impl Session {
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: None,
        }
    }

    pub fn admin() -> Self {
        Self::with_role(ADMIN_ROLE)
    }

    /// Exact, case-sensitive match on the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(CatalogError::AccessDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_admin_role_passes() {
        assert!(Session::admin().require_admin().is_ok());
        assert!(matches!(
            Session::with_role("Admin").require_admin(),
            Err(CatalogError::AccessDenied)
        ));
        assert!(!Session::with_role("therapist").is_admin());
        assert!(!Session::default().is_admin());
    }

    #[test]
    fn test_session_yaml_without_name() {
        let session: Session = serde_yaml::from_str("role: admin\n").unwrap();
        assert!(session.is_admin());
        assert_eq!(session.name, None);
    }
}
