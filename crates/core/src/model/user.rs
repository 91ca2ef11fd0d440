use serde::{Deserialize, Serialize};

use crate::model::enrollment::EnrolledCourse;
use crate::model::ids::UserId;
use crate::model::note::UserNote;

/// Identity fields of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl UserProfile {
    /// Two-letter initials for avatar fallbacks ("Alex Johnson" -> "AJ").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The user together with their enrollments and notes.
///
/// This is a materialized view assembled from the store; the store itself
/// keeps enrollments and notes in one place only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub enrolled_courses: Vec<EnrolledCourse>,
    pub notes: Vec<UserNote>,
}
