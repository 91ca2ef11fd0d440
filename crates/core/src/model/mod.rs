mod course;
mod enrollment;
mod ids;
mod note;
mod user;

pub use course::{Author, Category, Course, Lesson};
pub use enrollment::{EnrolledCourse, MINUTES_PER_COMPLETION, progress_percent};
pub use ids::{AuthorId, CategoryId, CourseId, LessonId, NoteId, ParseIdError, UserId};
pub use note::{NoteContent, NoteError, UserNote};
pub use user::{User, UserProfile};
