use serde::{Deserialize, Serialize};

/// GitHub Label.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhLabel {
    /// Name.
    pub name: String,
    /// Color.
    #[serde(default)]
    pub color: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<&str> for GhLabel {
    fn from(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
