mod components;
mod course_detail;
mod courses;
mod dashboard;
mod home;
mod lesson;
mod login;
mod not_found;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course_detail::CourseDetailView;
pub use courses::CoursesView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use lesson::LessonView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use state::{NOTICE_TTL, Notice, ViewError};

pub(crate) use components::NoticeBanner;
