use std::sync::Arc;

use lms_core::Clock;
use lms_core::catalog::Catalog;
use lms_core::model::{CourseId, LessonId, NoteId};
use lms_core::store::{Action, STORAGE_KEY, StoreState};
use storage::repository::{SnapshotRepository, StorageError};
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::error::StoreServiceError;

/// Single source of truth for session, enrollment and note state.
///
/// Every mutation runs the reducer, persists the resulting record and only
/// then publishes it, all under one write lock. Readers borrow the latest
/// published state without waiting on writers.
pub struct StoreService {
    clock: Clock,
    catalog: Arc<Catalog>,
    snapshots: Arc<dyn SnapshotRepository>,
    state: watch::Sender<Arc<StoreState>>,
    writes: Mutex<()>,
}

impl StoreService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<Catalog>,
        snapshots: Arc<dyn SnapshotRepository>,
        initial: StoreState,
    ) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        Self {
            clock,
            catalog,
            snapshots,
            state,
            writes: Mutex::new(()),
        }
    }

    /// Rehydrate from storage, or start from the demo state when nothing
    /// usable is stored.
    ///
    /// A freshly seeded state is written back right away so its relative
    /// timestamps stay stable across launches.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. An unreadable
    /// record is not an error; it is replaced by the demo state.
    pub async fn open(
        clock: Clock,
        catalog: Arc<Catalog>,
        snapshots: Arc<dyn SnapshotRepository>,
    ) -> Result<Self, StorageError> {
        let initial = match snapshots.load(STORAGE_KEY).await {
            Ok(Some(record)) => {
                let state = StoreState::from_persisted(record);
                info!(
                    authenticated = state.is_authenticated(),
                    enrollments = state.enrollments().len(),
                    notes = state.notes().len(),
                    "rehydrated store"
                );
                return Ok(Self::new(clock, catalog, snapshots, state));
            }
            Ok(None) => {
                info!("no stored record, starting from demo state");
                StoreState::demo(&catalog, clock.now())
            }
            Err(StorageError::Serialization(reason)) => {
                warn!(%reason, "stored record is unreadable, starting from demo state");
                StoreState::demo(&catalog, clock.now())
            }
            Err(err) => return Err(err),
        };

        if let Err(err) = snapshots.save(STORAGE_KEY, &initial.to_persisted()).await {
            warn!(error = %err, "failed to persist demo state");
        }
        Ok(Self::new(clock, catalog, snapshots, initial))
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<StoreState> {
        Arc::clone(&self.state.borrow())
    }

    /// Receiver that observes every published state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<StoreState>> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Apply `action`, persist the result and publish it.
    ///
    /// # Errors
    ///
    /// Returns `StoreServiceError::Rejected` when the reducer refuses the
    /// action and `StoreServiceError::Storage` when the new state cannot be
    /// persisted. In both cases the published state is unchanged.
    pub async fn dispatch(&self, action: Action) -> Result<Arc<StoreState>, StoreServiceError> {
        let _guard = self.writes.lock().await;
        let current = self.snapshot();

        let next = match current.apply(&action, &self.catalog, self.clock.now()) {
            Ok(next) => next,
            Err(reason) => {
                debug!(action = action.name(), %reason, "store action rejected");
                return Err(reason.into());
            }
        };

        if let Err(err) = self.snapshots.save(STORAGE_KEY, &next.to_persisted()).await {
            warn!(action = action.name(), error = %err, "failed to persist store, state kept");
            return Err(err.into());
        }

        let next = Arc::new(next);
        self.state.send_replace(Arc::clone(&next));
        debug!(action = action.name(), "store updated");
        Ok(next)
    }

    // ─── Convenience wrappers ────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `StoreServiceError::Storage` if persistence fails.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Arc<StoreState>, StoreServiceError> {
        self.dispatch(Action::Login {
            email: email.into(),
            password: password.into(),
        })
        .await
    }

    /// # Errors
    ///
    /// Returns `StoreServiceError::Storage` if persistence fails.
    pub async fn logout(&self) -> Result<Arc<StoreState>, StoreServiceError> {
        self.dispatch(Action::Logout).await
    }

    /// # Errors
    ///
    /// See [`StoreService::dispatch`].
    pub async fn enroll(&self, course_id: CourseId) -> Result<Arc<StoreState>, StoreServiceError> {
        self.dispatch(Action::Enroll { course_id }).await
    }

    /// # Errors
    ///
    /// See [`StoreService::dispatch`].
    pub async fn complete_lesson(
        &self,
        course_id: CourseId,
        lesson_id: LessonId,
    ) -> Result<Arc<StoreState>, StoreServiceError> {
        self.dispatch(Action::CompleteLesson {
            course_id,
            lesson_id,
        })
        .await
    }

    /// Add a note under a freshly generated id and return that id.
    ///
    /// # Errors
    ///
    /// See [`StoreService::dispatch`].
    pub async fn add_note(
        &self,
        course_id: CourseId,
        lesson_id: LessonId,
        content: impl Into<String>,
    ) -> Result<NoteId, StoreServiceError> {
        let note_id = NoteId::generate();
        self.dispatch(Action::AddNote {
            note_id: note_id.clone(),
            course_id,
            lesson_id,
            content: content.into(),
        })
        .await?;
        Ok(note_id)
    }

    /// # Errors
    ///
    /// See [`StoreService::dispatch`].
    pub async fn update_note(
        &self,
        note_id: NoteId,
        content: impl Into<String>,
    ) -> Result<Arc<StoreState>, StoreServiceError> {
        self.dispatch(Action::UpdateNote {
            note_id,
            content: content.into(),
        })
        .await
    }

    /// # Errors
    ///
    /// See [`StoreService::dispatch`].
    pub async fn delete_note(&self, note_id: NoteId) -> Result<Arc<StoreState>, StoreServiceError> {
        self.dispatch(Action::DeleteNote { note_id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::fixtures;
    use lms_core::store::StoreError;
    use lms_core::time::fixed_now;
    use storage::repository::InMemoryRepository;

    fn service(repo: &InMemoryRepository, initial: StoreState) -> StoreService {
        StoreService::new(
            Clock::fixed(fixed_now()),
            Arc::new(fixtures::catalog()),
            Arc::new(repo.clone()),
            initial,
        )
    }

    #[tokio::test]
    async fn open_seeds_and_persists_demo_state() {
        let repo = InMemoryRepository::new();
        let store = StoreService::open(
            Clock::fixed(fixed_now()),
            Arc::new(fixtures::catalog()),
            Arc::new(repo.clone()),
        )
        .await
        .unwrap();

        let state = store.snapshot();
        assert!(state.is_authenticated());
        assert_eq!(state.course_progress(&CourseId::new("1")), 50);
        assert!(repo.load(STORAGE_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn open_prefers_stored_record() {
        let repo = InMemoryRepository::new();
        repo.save(STORAGE_KEY, &StoreState::empty().to_persisted())
            .await
            .unwrap();

        let store = StoreService::open(
            Clock::fixed(fixed_now()),
            Arc::new(fixtures::catalog()),
            Arc::new(repo),
        )
        .await
        .unwrap();
        assert!(!store.snapshot().is_authenticated());
        assert!(store.snapshot().enrollments().is_empty());
    }

    #[tokio::test]
    async fn rejected_action_reports_reason_and_keeps_state() {
        let repo = InMemoryRepository::new();
        let store = service(&repo, StoreState::empty());
        let before = store.snapshot();

        let err = store.enroll(CourseId::new("1")).await.unwrap_err();
        assert_eq!(err.rejection(), Some(&StoreError::NotAuthenticated));
        assert_eq!(*store.snapshot(), *before);
        assert!(repo.load(STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn mutation_persists_and_publishes() {
        let repo = InMemoryRepository::new();
        let store = service(&repo, StoreState::empty());
        let mut updates = store.subscribe();

        store.login("alex@example.com", "secret").await.unwrap();
        store.enroll(CourseId::new("3")).await.unwrap();

        assert!(updates.has_changed().unwrap());
        let seen = updates.borrow_and_update().clone();
        assert!(seen.is_enrolled(&CourseId::new("3")));

        let stored = repo.load(STORAGE_KEY).await.unwrap().unwrap();
        assert_eq!(StoreState::from_persisted(stored), *store.snapshot());
    }

    #[tokio::test]
    async fn add_note_returns_generated_id() {
        let repo = InMemoryRepository::new();
        let store = service(&repo, StoreState::demo(&fixtures::catalog(), fixed_now()));

        let id = store
            .add_note(CourseId::new("1"), LessonId::new("1-2"), "hooks recap")
            .await
            .unwrap();
        assert!(id.as_str().starts_with("note-"));
        assert_eq!(store.snapshot().note(&id).unwrap().content, "hooks recap");
    }
}
