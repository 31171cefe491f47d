//! Opaque identifier types for the board domain.
//!
//! The backing store hands out string identifiers. They are treated as
//! opaque: the only validation is that they are non-empty once trimmed.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns [`BoardDomainError::EmptyIdentifier`] when the value is
            /// empty after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
                let raw = value.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(BoardDomainError::EmptyIdentifier { kind: $kind });
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = BoardDomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a task row.
    TaskId,
    "task"
);

string_id!(
    /// Identifier of the workspace that owns projects, members, and tasks.
    WorkspaceId,
    "workspace"
);

string_id!(
    /// Identifier of a project within a workspace.
    ProjectId,
    "project"
);

string_id!(
    /// Identifier of a workspace membership row; tasks are assigned to members.
    MemberId,
    "member"
);

string_id!(
    /// Identifier of an authenticated user, supplied by the session layer.
    UserId,
    "user"
);

impl TaskId {
    /// Generates a fresh random task identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
