use lms_core::model::{CourseId, LessonId};
use lms_core::store::{Action, PersistedStore};
use storage::repository::{InMemoryRepository, SnapshotRepository, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};
use super::{Notice, ViewError};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_sections() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Elevate Your Skills with Expert-Led Courses"),
        "missing hero in {html}"
    );
    assert!(html.contains("Featured Courses"), "missing featured in {html}");
    assert!(html.contains("Newest Courses"), "missing newest in {html}");
    assert!(html.contains("Cloud Computing"), "missing category link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_filters_by_category() {
    let mut harness = setup_view_harness(ViewKind::Courses("category=data-science")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 Course in Data Science"), "missing heading in {html}");
    assert!(
        html.contains("Data Science Fundamentals with Python"),
        "missing course in {html}"
    );
    assert!(
        !html.contains("iOS App Development with Swift"),
        "unexpected course in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_renders_empty_message() {
    let mut harness = setup_view_harness(ViewKind::Courses("query=cobol")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No courses match your search criteria"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_resumes_enrolled_course() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("1")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Continue Learning"), "missing resume cta in {html}");
    assert!(html.contains("Your progress: 50%"), "missing progress in {html}");
    assert!(html.contains("Course Content"), "missing lesson list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_offers_enrollment() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("3")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Enroll Now"), "missing enroll button in {html}");
    assert!(!html.contains("Your progress"), "unexpected progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_reflects_store_changes() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("3")).await;
    harness
        .store
        .enroll(CourseId::new("3"))
        .await
        .expect("enroll");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Learning"), "missing start cta in {html}");
    assert!(html.contains("Your progress: 0%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_unknown_course() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("99")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Course not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_player_sidebar_and_notes() {
    let mut harness = setup_view_harness(ViewKind::Lesson("1", "1-1")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Getting Started with React 18"),
        "missing lesson title in {html}"
    );
    assert!(html.contains("youtube.com/embed"), "missing embed in {html}");
    assert!(html.contains("About this lesson"), "missing about in {html}");
    assert!(html.contains("Next Lesson"), "missing next link in {html}");
    assert!(!html.contains("Previous Lesson"), "unexpected previous link in {html}");
    assert!(html.contains("2 lessons • 1 completed"), "missing summary in {html}");
    assert!(html.contains("My Notes"), "missing notes in {html}");
    assert!(
        html.contains("component lifecycle and hooks"),
        "missing saved note in {html}"
    );
    assert!(!html.contains("No notes for this lesson yet"), "unexpected hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_last_lesson_marks_complete() {
    let mut harness = setup_view_harness(ViewKind::Lesson("1", "1-2")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Mark as Complete"), "missing complete button in {html}");
    assert!(html.contains("Previous Lesson"), "missing previous link in {html}");
    assert!(
        html.contains("No notes for this lesson yet"),
        "missing empty hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_unknown_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson("1", "4-1")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not found in {html}");
    assert!(html.contains("Back to Courses"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_progress() {
    let mut harness = setup_view_harness(ViewKind::Dashboard).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome back, Alex Johnson"), "missing greeting in {html}");
    assert!(html.contains("1 of 2 lessons completed"), "missing status in {html}");
    assert!(html.contains("Continue Learning"), "missing cta in {html}");
    assert!(html.contains("45 min"), "missing time spent in {html}");
    assert!(html.contains("Recent Notes"), "missing notes in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_picks_up_completed_lessons() {
    let mut harness = setup_view_harness(ViewKind::Dashboard).await;
    harness
        .store
        .dispatch(Action::CompleteLesson {
            course_id: CourseId::new("1"),
            lesson_id: LessonId::new("1-2"),
        })
        .await
        .expect("complete lesson");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("100%"), "missing completed course in {html}");
    assert!(!html.contains("1 of 2 lessons completed"), "stale progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_signed_out() {
    let mut harness = setup_view_harness(ViewKind::Dashboard).await;
    harness.store.logout().await.expect("logout");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in to see your courses"), "missing prompt in {html}");
}

struct ReadOnlyRepo {
    inner: InMemoryRepository,
}

#[async_trait::async_trait]
impl SnapshotRepository for ReadOnlyRepo {
    async fn load(&self, key: &str) -> Result<Option<PersistedStore>, StorageError> {
        self.inner.load(key).await
    }

    async fn save(&self, _key: &str, _record: &PersistedStore) -> Result<(), StorageError> {
        Err(StorageError::Connection("read-only".to_string()))
    }

    async fn clear(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("read-only".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_keeps_state_when_save_fails() {
    let repo = ReadOnlyRepo {
        inner: InMemoryRepository::new(),
    };
    let mut harness = setup_view_harness_with_storage(
        ViewKind::CourseDetail("3"),
        Storage::from_repository(repo),
    )
    .await;
    let result = harness.store.enroll(CourseId::new("3")).await;
    assert!(result.is_err());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Enroll Now"), "state changed despite failed save: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sign_out_reports_failed_save_and_stays_signed_in() {
    let repo = ReadOnlyRepo {
        inner: InMemoryRepository::new(),
    };
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Dashboard, Storage::from_repository(repo)).await;

    let notice = crate::routes::sign_out(&harness.store).await;
    assert_eq!(notice, Notice::Failed(ViewError::SaveFailed));
    assert!(harness.store.snapshot().is_authenticated());

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Welcome back, Alex Johnson"),
        "user signed out despite failed save: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn sign_out_hides_the_dashboard() {
    let mut harness = setup_view_harness(ViewKind::Dashboard).await;
    let notice = crate::routes::sign_out(&harness.store).await;
    assert_eq!(notice, Notice::Success("Signed out"));

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in to see your courses"), "still signed in: {html}");
}
