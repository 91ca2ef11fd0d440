use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing an identifier from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} cannot be empty")]
pub struct ParseIdError {
    kind: &'static str,
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier without validation.
            ///
            /// Fixture data and persisted snapshots are trusted; use `parse`
            /// for values coming from a route or user input.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a catalog course (`"1"`, `"3"`, ...).
    CourseId
);
string_id!(
    /// Identifier of a lesson, unique within its course (`"1-2"`).
    LessonId
);
string_id!(
    /// Identifier of a catalog category (`"web-dev"`).
    CategoryId
);
string_id!(
    /// Identifier of a user note.
    NoteId
);
string_id!(
    /// Identifier of a user.
    UserId
);
string_id!(AuthorId);

impl NoteId {
    /// Generates a fresh note id of the form `note-<uuid>`.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("note-{}", uuid::Uuid::new_v4().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_display_is_raw_value() {
        let id = CourseId::new("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "CourseId(\"42\")");
    }

    #[test]
    fn parse_trims_and_rejects_blank() {
        let id: LessonId = " 1-2 ".parse().unwrap();
        assert_eq!(id, LessonId::new("1-2"));

        let err = "   ".parse::<LessonId>().unwrap_err();
        assert_eq!(err.to_string(), "LessonId cannot be empty");
    }

    #[test]
    fn generated_note_ids_are_unique_and_prefixed() {
        let a = NoteId::generate();
        let b = NoteId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("note-"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&CategoryId::new("web-dev")).unwrap();
        assert_eq!(json, "\"web-dev\"");
    }
}
