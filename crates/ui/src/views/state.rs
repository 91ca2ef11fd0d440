use std::time::Duration;

use lms_core::store::StoreError;
use services::StoreServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The action needs a signed-in user.
    SignInRequired,
    /// The course is already on the user's list.
    AlreadyEnrolled,
    /// Progress can only be tracked after enrolling.
    NotEnrolled,
    /// The course or lesson no longer exists.
    MissingContent,
    EmptyNote,
    NoteMissing,
    /// The change could not be saved.
    SaveFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SignInRequired => "Please sign in to continue.",
            ViewError::AlreadyEnrolled => "You are already enrolled in this course.",
            ViewError::NotEnrolled => "Enroll in this course to track your progress.",
            ViewError::MissingContent => "This course or lesson is no longer available.",
            ViewError::EmptyNote => "Notes cannot be empty.",
            ViewError::NoteMissing => "That note no longer exists.",
            ViewError::SaveFailed => "Your change could not be saved. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&StoreServiceError> for ViewError {
    fn from(err: &StoreServiceError) -> Self {
        match err {
            StoreServiceError::Rejected(rejection) => match rejection {
                StoreError::NotAuthenticated => ViewError::SignInRequired,
                StoreError::AlreadyEnrolled(_) => ViewError::AlreadyEnrolled,
                StoreError::NotEnrolled(_) => ViewError::NotEnrolled,
                StoreError::UnknownCourse(_) | StoreError::UnknownLesson { .. } => {
                    ViewError::MissingContent
                }
                StoreError::InvalidNote(_) => ViewError::EmptyNote,
                StoreError::NoteNotFound(_) => ViewError::NoteMissing,
                _ => ViewError::Unknown,
            },
            StoreServiceError::Storage(_) => ViewError::SaveFailed,
            _ => ViewError::Unknown,
        }
    }
}

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Short-lived confirmation or failure shown after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(&'static str),
    Failed(ViewError),
}

impl Notice {
    #[must_use]
    pub fn from_result<T>(result: &Result<T, StoreServiceError>, success: &'static str) -> Self {
        match result {
            Ok(_) => Notice::Success(success),
            Err(err) => Notice::Failed(ViewError::from(err)),
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Notice::Success(text) => text,
            Notice::Failed(err) => err.message(),
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}
