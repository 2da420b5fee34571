use std::fmt;

use serde::{Deserialize, Serialize};

/// Account category created by a registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    SoloMother,
    Professional,
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SoloMother => f.write_str("solo_mother"),
            Self::Professional => f.write_str("professional"),
        }
    }
}
