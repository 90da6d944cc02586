use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
}

impl From<&str> for GhUser {
    fn from(login: &str) -> Self {
        Self {
            login: login.into(),
        }
    }
}
