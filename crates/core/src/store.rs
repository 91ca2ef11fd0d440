//! Session, enrollment and note state as a pure reducer.
//!
//! `StoreState::apply` never mutates in place: it returns the next state or
//! the reason the action was refused. A refused action leaves the caller's
//! state exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::fixtures;
use crate::model::{
    CourseId, EnrolledCourse, LessonId, NoteContent, NoteError, NoteId, User, UserNote,
    UserProfile,
};

/// Key under which the materialized store is persisted.
pub const STORAGE_KEY: &str = "lms-storage";

/// Version written into the persisted envelope. Records are not migrated.
pub const SNAPSHOT_VERSION: u32 = 0;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why an action left the store unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("no user is signed in")]
    NotAuthenticated,

    #[error("already enrolled in course {0}")]
    AlreadyEnrolled(CourseId),

    #[error("unknown course {0}")]
    UnknownCourse(CourseId),

    #[error("lesson {lesson_id} is not part of course {course_id}")]
    UnknownLesson {
        course_id: CourseId,
        lesson_id: LessonId,
    },

    #[error("not enrolled in course {0}")]
    NotEnrolled(CourseId),

    #[error(transparent)]
    InvalidNote(#[from] NoteError),

    #[error("note {0} not found")]
    NoteNotFound(NoteId),

    #[error("note id {0} is already in use")]
    DuplicateNoteId(NoteId),
}

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Signs in the demo account; credentials are not checked.
    Login { email: String, password: String },
    Logout,
    Enroll {
        course_id: CourseId,
    },
    /// Marks a lesson complete (the "update progress" event).
    CompleteLesson {
        course_id: CourseId,
        lesson_id: LessonId,
    },
    AddNote {
        note_id: NoteId,
        course_id: CourseId,
        lesson_id: LessonId,
        content: String,
    },
    UpdateNote {
        note_id: NoteId,
        content: String,
    },
    DeleteNote {
        note_id: NoteId,
    },
}

impl Action {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Logout => "logout",
            Action::Enroll { .. } => "enroll",
            Action::CompleteLesson { .. } => "complete_lesson",
            Action::AddNote { .. } => "add_note",
            Action::UpdateNote { .. } => "update_note",
            Action::DeleteNote { .. } => "delete_note",
        }
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Normalized client state: each enrollment and note is stored once.
///
/// Enrollments are unique per course and keep enrollment order; notes keep
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreState {
    authenticated: bool,
    user: Option<UserProfile>,
    enrollments: Vec<EnrolledCourse>,
    notes: Vec<UserNote>,
}

impl StoreState {
    /// Signed out, nothing enrolled.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// First-run state: the demo user is signed in with some history.
    #[must_use]
    pub fn demo(catalog: &Catalog, now: DateTime<Utc>) -> Self {
        let (enrollments, notes) = fixtures::demo_history(catalog, now);
        Self {
            authenticated: true,
            user: Some(fixtures::demo_profile()),
            enrollments,
            notes,
        }
    }

    /// Compute the state after `action`.
    ///
    /// # Errors
    ///
    /// Returns the `StoreError` describing why the action was a no-op.
    pub fn apply(
        &self,
        action: &Action,
        catalog: &Catalog,
        now: DateTime<Utc>,
    ) -> Result<Self, StoreError> {
        match action {
            Action::Login { .. } => Ok(self.login()),
            Action::Logout => Ok(self.logout()),
            Action::Enroll { course_id } => self.enroll(course_id, now),
            Action::CompleteLesson {
                course_id,
                lesson_id,
            } => self.complete_lesson(catalog, course_id, lesson_id),
            Action::AddNote {
                note_id,
                course_id,
                lesson_id,
                content,
            } => self.add_note(note_id, course_id, lesson_id, content, now),
            Action::UpdateNote { note_id, content } => self.update_note(note_id, content, now),
            Action::DeleteNote { note_id } => self.delete_note(note_id),
        }
    }

    fn login(&self) -> Self {
        Self {
            authenticated: true,
            user: Some(fixtures::demo_profile()),
            ..self.clone()
        }
    }

    fn logout(&self) -> Self {
        Self {
            authenticated: false,
            user: None,
            ..self.clone()
        }
    }

    fn require_user(&self) -> Result<&UserProfile, StoreError> {
        self.user.as_ref().ok_or(StoreError::NotAuthenticated)
    }

    fn enroll(&self, course_id: &CourseId, now: DateTime<Utc>) -> Result<Self, StoreError> {
        self.require_user()?;
        if self.is_enrolled(course_id) {
            return Err(StoreError::AlreadyEnrolled(course_id.clone()));
        }

        let mut next = self.clone();
        next.enrollments
            .push(EnrolledCourse::new(course_id.clone(), now));
        Ok(next)
    }

    fn complete_lesson(
        &self,
        catalog: &Catalog,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Self, StoreError> {
        self.require_user()?;
        let course = catalog
            .course(course_id)
            .ok_or_else(|| StoreError::UnknownCourse(course_id.clone()))?;
        if !course.contains_lesson(lesson_id) {
            return Err(StoreError::UnknownLesson {
                course_id: course_id.clone(),
                lesson_id: lesson_id.clone(),
            });
        }

        let mut next = self.clone();
        let enrollment = next
            .enrollments
            .iter_mut()
            .find(|enrollment| enrollment.course_id() == course_id)
            .ok_or_else(|| StoreError::NotEnrolled(course_id.clone()))?;
        enrollment.record_completion(lesson_id.clone(), course.lessons.len());
        Ok(next)
    }

    fn add_note(
        &self,
        note_id: &NoteId,
        course_id: &CourseId,
        lesson_id: &LessonId,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, StoreError> {
        self.require_user()?;
        let content = NoteContent::parse(content)?;
        if self.note(note_id).is_some() {
            return Err(StoreError::DuplicateNoteId(note_id.clone()));
        }

        let mut next = self.clone();
        next.notes.push(UserNote::new(
            note_id.clone(),
            course_id.clone(),
            lesson_id.clone(),
            content,
            now,
        ));
        Ok(next)
    }

    // No sign-in or ownership check: any visible note can be edited.
    fn update_note(
        &self,
        note_id: &NoteId,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, StoreError> {
        let content = NoteContent::parse(content)?;
        let mut next = self.clone();
        let note = next
            .notes
            .iter_mut()
            .find(|note| &note.id == note_id)
            .ok_or_else(|| StoreError::NoteNotFound(note_id.clone()))?;
        note.edit(content, now);
        Ok(next)
    }

    fn delete_note(&self, note_id: &NoteId) -> Result<Self, StoreError> {
        if self.note(note_id).is_none() {
            return Err(StoreError::NoteNotFound(note_id.clone()));
        }
        let mut next = self.clone();
        next.notes.retain(|note| &note.id != note_id);
        Ok(next)
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn enrollments(&self) -> &[EnrolledCourse] {
        &self.enrollments
    }

    #[must_use]
    pub fn enrollment(&self, course_id: &CourseId) -> Option<&EnrolledCourse> {
        self.enrollments
            .iter()
            .find(|enrollment| enrollment.course_id() == course_id)
    }

    #[must_use]
    pub fn is_enrolled(&self, course_id: &CourseId) -> bool {
        self.enrollment(course_id).is_some()
    }

    /// Stored progress, or 0 when not enrolled.
    #[must_use]
    pub fn course_progress(&self, course_id: &CourseId) -> u8 {
        self.enrollment(course_id)
            .map_or(0, EnrolledCourse::progress)
    }

    #[must_use]
    pub fn last_lesson(&self, course_id: &CourseId) -> Option<&LessonId> {
        self.enrollment(course_id)?.last_lesson_id()
    }

    #[must_use]
    pub fn notes(&self) -> &[UserNote] {
        &self.notes
    }

    #[must_use]
    pub fn note(&self, note_id: &NoteId) -> Option<&UserNote> {
        self.notes.iter().find(|note| &note.id == note_id)
    }

    /// Notes for exactly this course and lesson, oldest first.
    pub fn lesson_notes<'a>(
        &'a self,
        course_id: &'a CourseId,
        lesson_id: &'a LessonId,
    ) -> impl Iterator<Item = &'a UserNote> + 'a {
        self.notes
            .iter()
            .filter(move |note| note.belongs_to(course_id, lesson_id))
    }

    /// The signed-in user with their enrollments and notes attached.
    #[must_use]
    pub fn user_view(&self) -> Option<User> {
        self.user.as_ref().map(|profile| User {
            profile: profile.clone(),
            enrolled_courses: self.enrollments.clone(),
            notes: self.notes.clone(),
        })
    }

    //
    // ─── PERSISTENCE SHAPE ─────────────────────────────────────────────────────
    //

    /// The materialized record written to storage.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedStore {
        PersistedStore {
            state: StoreSnapshot {
                is_authenticated: self.authenticated,
                user: self.user_view(),
                enrolled_courses: self.enrollments.clone(),
                notes: self.notes.clone(),
            },
            version: SNAPSHOT_VERSION,
        }
    }

    /// Rehydrate from a stored record.
    ///
    /// The flat lists are authoritative; the user's embedded copies are
    /// ignored. Duplicate enrollments for one course keep the first record.
    #[must_use]
    pub fn from_persisted(record: PersistedStore) -> Self {
        let snapshot = record.state;
        let mut enrollments: Vec<EnrolledCourse> = Vec::new();
        for enrollment in snapshot.enrolled_courses {
            if !enrollments
                .iter()
                .any(|known| known.course_id() == enrollment.course_id())
            {
                enrollments.push(enrollment);
            }
        }
        Self {
            authenticated: snapshot.is_authenticated,
            user: snapshot.user.map(|user| user.profile),
            enrollments,
            notes: snapshot.notes,
        }
    }
}

/// Store contents as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub is_authenticated: bool,
    pub user: Option<User>,
    #[serde(default)]
    pub enrolled_courses: Vec<EnrolledCourse>,
    #[serde(default)]
    pub notes: Vec<UserNote>,
}

/// Envelope around [`StoreSnapshot`], the JSON shape stored under
/// [`STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedStore {
    pub state: StoreSnapshot,
    #[serde(default)]
    pub version: u32,
}
