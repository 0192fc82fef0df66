use serde::{Deserialize, Serialize};

/// Visual treatment of the navbar.
///
/// Variants share the disclosure and overlay contracts and differ only in
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum NavbarVariant {
    /// Logo left, menu row, search and call-to-action buttons right; mobile
    /// slide-over panel from the right edge.
    #[default]
    Classic,
}

impl NavbarVariant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
        }
    }
}
