//! Generalized entity editor
//!
//! One state machine drives every edit form (campaign, location, map, note,
//! NPC, character) instead of a copy per entity type. The entity-specific
//! pieces - how to fetch, what the editable draft looks like, where to go
//! afterwards - live behind [`EntityResource`]; the editor owns the
//! transitions:
//!
//! ```text
//! Loading -> Ready -> Saving  -> Closed (navigate to detail)
//!                  \          -> Ready  (failure, draft preserved)
//!                   -> Deleting -> Closed (navigate to list)
//!                               -> Ready  (failure)
//! ```
//!
//! Failures surface as a blocking shell alert mirrored to tracing; local
//! edits are never reverted. Save and delete are guarded on the Ready state,
//! so one editor instance has at most one outstanding request.

use std::sync::Arc;

use async_trait::async_trait;

use lorekeepr_domain::common::trimmed_non_empty;

use crate::application::error::ServiceError;
use crate::ports::outbound::ShellPort;
use crate::routes::Route;

/// Editor lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Mounted, initial fetch not finished.
    Loading,
    /// Draft loaded, accepting edits.
    Ready,
    /// Update request in flight.
    Saving,
    /// Delete request in flight.
    Deleting,
    /// Left the page (successful save/delete, or a failed mount/load).
    Closed,
}

/// Entity capabilities the editor is parametrized over.
///
/// A resource is bound to one specific record (ids are captured at
/// construction); the editor never sees identifiers.
#[async_trait]
pub trait EntityResource: Send + Sync {
    /// The loaded record.
    type Record: Send;
    /// The locally editable state derived from a record.
    type Draft: Send + Sync;

    /// Display label for alerts and confirmation prompts ("location", ...).
    fn label(&self) -> &'static str;

    /// Build the editable draft from a freshly loaded record.
    fn draft_from(&self, record: Self::Record) -> Self::Draft;

    /// The draft's name field, validated before any save request.
    fn draft_name<'a>(&self, draft: &'a Self::Draft) -> &'a str;

    /// Fetch the record this resource is bound to.
    async fn fetch_one(&self) -> Result<Self::Record, ServiceError>;

    /// Persist the draft's current field values.
    async fn update(&self, draft: &Self::Draft) -> Result<(), ServiceError>;

    /// Delete the record.
    async fn remove(&self) -> Result<(), ServiceError>;

    /// Campaigns are deleted through owner account flows, not their editor.
    fn supports_delete(&self) -> bool {
        true
    }

    /// Where a successful save navigates.
    fn detail_route(&self) -> Route;

    /// Where a successful delete (and a failed load) navigates.
    fn list_route(&self) -> Route;
}

/// The generalized form controller.
pub struct EntityEditor<R: EntityResource> {
    resource: R,
    shell: Arc<dyn ShellPort>,
    state: EditorState,
    draft: Option<R::Draft>,
}

impl<R: EntityResource> EntityEditor<R> {
    pub fn new(resource: R, shell: Arc<dyn ShellPort>) -> Self {
        Self {
            resource,
            shell,
            state: EditorState::Loading,
            draft: None,
        }
    }

    /// Mount guard: a route with unparseable/absent identifiers produces no
    /// resource, alerts, and navigates back - the editor never enters Ready.
    pub fn mount(resource: Option<R>, shell: Arc<dyn ShellPort>, back: Route) -> Option<Self> {
        match resource {
            Some(resource) => Some(Self::new(resource, shell)),
            None => {
                tracing::error!("Editor mounted without its required identifiers");
                shell.alert("Missing campaign or entity identifier");
                shell.navigate(back);
                None
            }
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The editable draft, `None` until loaded.
    pub fn draft(&self) -> Option<&R::Draft> {
        self.draft.as_ref()
    }

    /// Mutable access for field edits while Ready.
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        if self.state == EditorState::Ready {
            self.draft.as_mut()
        } else {
            None
        }
    }

    /// Loading -> Ready, or alert + navigate back on failure.
    pub async fn load(&mut self) {
        if self.state != EditorState::Loading {
            return;
        }
        match self.resource.fetch_one().await {
            Ok(record) => {
                self.draft = Some(self.resource.draft_from(record));
                self.state = EditorState::Ready;
            }
            Err(e) => {
                let label = self.resource.label();
                tracing::error!("Failed to load {label}: {e}");
                self.shell.alert(&format!("Failed to load {label}: {e}"));
                self.shell.navigate(self.resource.list_route());
                self.state = EditorState::Closed;
            }
        }
    }

    /// Ready -> Saving -> Closed on success (navigates to the detail view),
    /// back to Ready on failure with the draft preserved.
    ///
    /// An empty (or whitespace-only) name never issues a request.
    pub async fn save(&mut self) {
        if self.state != EditorState::Ready {
            return;
        }
        let Some(draft) = self.draft.as_ref() else {
            return;
        };
        if trimmed_non_empty(self.resource.draft_name(draft)).is_none() {
            let label = self.resource.label();
            tracing::warn!("Rejected save of {label} with empty name");
            self.shell
                .alert(&format!("The {label} name cannot be empty"));
            return;
        }

        self.state = EditorState::Saving;
        match self.resource.update(draft).await {
            Ok(()) => {
                self.state = EditorState::Closed;
                self.shell.navigate(self.resource.detail_route());
            }
            Err(e) => {
                let label = self.resource.label();
                tracing::error!("Failed to save {label}: {e}");
                self.shell.alert(&format!("Failed to save {label}: {e}"));
                self.state = EditorState::Ready;
            }
        }
    }

    /// Ready -> Deleting -> Closed on success (navigates to the list view),
    /// back to Ready on failure.
    ///
    /// Requires an explicit confirmation; declining issues no request.
    pub async fn delete(&mut self) {
        if self.state != EditorState::Ready {
            return;
        }
        if !self.resource.supports_delete() {
            return;
        }
        let label = self.resource.label();
        let confirmed = self
            .shell
            .confirm(&format!("Delete this {label}? This cannot be undone."));
        if !confirmed {
            return;
        }

        self.state = EditorState::Deleting;
        match self.resource.remove().await {
            Ok(()) => {
                self.state = EditorState::Closed;
                self.shell.navigate(self.resource.list_route());
            }
            Err(e) => {
                tracing::error!("Failed to delete {label}: {e}");
                self.shell.alert(&format!("Failed to delete {label}: {e}"));
                self.state = EditorState::Ready;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::testing::{RecordingShell, ShellEvent};
    use crate::ports::outbound::ApiError;
    use crate::routes::Section;
    use lorekeepr_domain::CampaignId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestDraft {
        name: String,
        description: String,
    }

    struct TestResource {
        campaign_id: CampaignId,
        fetch_result: Mutex<Option<Result<TestDraft, ServiceError>>>,
        update_result: Mutex<Result<(), ServiceError>>,
        remove_result: Mutex<Result<(), ServiceError>>,
        updates: Mutex<Vec<TestDraft>>,
        removals: AtomicUsize,
        deletable: bool,
    }

    impl TestResource {
        fn loading(record: TestDraft) -> Self {
            Self {
                campaign_id: CampaignId::new(),
                fetch_result: Mutex::new(Some(Ok(record))),
                update_result: Mutex::new(Ok(())),
                remove_result: Mutex::new(Ok(())),
                updates: Mutex::new(Vec::new()),
                removals: AtomicUsize::new(0),
                deletable: true,
            }
        }

        fn failing_fetch() -> Self {
            let mut resource = Self::loading(TestDraft {
                name: String::new(),
                description: String::new(),
            });
            resource.fetch_result = Mutex::new(Some(Err(ServiceError::Api(
                ApiError::from_response(404, "no such note"),
            ))));
            resource
        }

        fn with_update_error(record: TestDraft, error: ServiceError) -> Self {
            let resource = Self::loading(record);
            *resource.update_result.lock().expect("lock") = Err(error);
            resource
        }

        fn with_remove_error(record: TestDraft, error: ServiceError) -> Self {
            let resource = Self::loading(record);
            *resource.remove_result.lock().expect("lock") = Err(error);
            resource
        }

        fn updates(&self) -> Vec<TestDraft> {
            self.updates.lock().expect("lock").clone()
        }

        fn removals(&self) -> usize {
            self.removals.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EntityResource for TestResource {
        type Record = TestDraft;
        type Draft = TestDraft;

        fn label(&self) -> &'static str {
            "note"
        }

        fn draft_from(&self, record: TestDraft) -> TestDraft {
            record
        }

        fn draft_name<'a>(&self, draft: &'a TestDraft) -> &'a str {
            &draft.name
        }

        async fn fetch_one(&self) -> Result<TestDraft, ServiceError> {
            self.fetch_result
                .lock()
                .expect("lock")
                .take()
                .expect("fetch_one called twice")
        }

        async fn update(&self, draft: &TestDraft) -> Result<(), ServiceError> {
            self.updates.lock().expect("lock").push(draft.clone());
            self.update_result.lock().expect("lock").clone()
        }

        async fn remove(&self) -> Result<(), ServiceError> {
            self.removals.fetch_add(1, Ordering::SeqCst);
            self.remove_result.lock().expect("lock").clone()
        }

        fn supports_delete(&self) -> bool {
            self.deletable
        }

        fn detail_route(&self) -> Route {
            Route::CampaignDetail {
                campaign_id: self.campaign_id,
            }
        }

        fn list_route(&self) -> Route {
            Route::SectionList {
                campaign_id: self.campaign_id,
                section: Section::Notes,
            }
        }
    }

    fn record() -> TestDraft {
        TestDraft {
            name: "Tarokka reading".to_string(),
            description: "The ally is at the mill.".to_string(),
        }
    }

    async fn ready_editor(resource: TestResource) -> (EntityEditor<TestResource>, Arc<RecordingShell>) {
        let shell = Arc::new(RecordingShell::confirming());
        let mut editor = EntityEditor::new(resource, shell.clone());
        editor.load().await;
        (editor, shell)
    }

    #[tokio::test]
    async fn test_load_success_enters_ready_with_draft() {
        let (editor, shell) = ready_editor(TestResource::loading(record())).await;
        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(editor.draft(), Some(&record()));
        assert!(shell.events().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_alerts_and_navigates_back() {
        let (editor, shell) = ready_editor(TestResource::failing_fetch()).await;
        assert_eq!(editor.state(), EditorState::Closed);
        assert!(editor.draft().is_none());
        assert_eq!(shell.alerts(), vec!["Failed to load note: no such note"]);
        assert_eq!(shell.navigations().len(), 1);
    }

    #[tokio::test]
    async fn test_mount_without_identifiers_never_enters_ready() {
        let shell = Arc::new(RecordingShell::confirming());
        let back = Route::CampaignList;
        let editor =
            EntityEditor::<TestResource>::mount(None, shell.clone(), back.clone());
        assert!(editor.is_none());
        assert_eq!(
            shell.events(),
            vec![
                ShellEvent::Alert("Missing campaign or entity identifier".to_string()),
                ShellEvent::Navigate(back),
            ]
        );
    }

    #[tokio::test]
    async fn test_save_with_empty_name_issues_no_request() {
        let (mut editor, shell) = ready_editor(TestResource::loading(record())).await;
        editor.draft_mut().expect("ready draft").name = "   ".to_string();

        editor.save().await;

        assert_eq!(editor.state(), EditorState::Ready);
        assert!(editor.resource.updates().is_empty());
        assert_eq!(shell.alerts(), vec!["The note name cannot be empty"]);
        assert!(shell.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_save_success_navigates_to_detail() {
        let (mut editor, shell) = ready_editor(TestResource::loading(record())).await;
        editor.save().await;

        assert_eq!(editor.state(), EditorState::Closed);
        assert_eq!(editor.resource.updates().len(), 1);
        assert_eq!(shell.navigations().len(), 1);
        assert!(shell.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_noop_save_sends_loaded_values_unchanged() {
        let (mut editor, _shell) = ready_editor(TestResource::loading(record())).await;
        editor.save().await;
        assert_eq!(editor.resource.updates(), vec![record()]);
    }

    #[tokio::test]
    async fn test_failed_save_preserves_edits_and_stays_put() {
        let resource = TestResource::with_update_error(
            record(),
            ServiceError::Api(ApiError::from_response(500, "boom")),
        );
        let (mut editor, shell) = ready_editor(resource).await;
        editor.draft_mut().expect("ready draft").description = "edited".to_string();

        editor.save().await;

        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(
            editor.draft().expect("draft kept").description,
            "edited".to_string()
        );
        assert_eq!(shell.alerts(), vec!["Failed to save note: boom"]);
        assert!(shell.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_save_is_noop_before_load_completes() {
        let resource = TestResource::loading(record());
        let shell = Arc::new(RecordingShell::confirming());
        let mut editor = EntityEditor::new(resource, shell.clone());

        editor.save().await;

        assert_eq!(editor.state(), EditorState::Loading);
        assert!(editor.resource.updates().is_empty());
        assert!(shell.events().is_empty());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let resource = TestResource::loading(record());
        let shell = Arc::new(RecordingShell::declining());
        let mut editor = EntityEditor::new(resource, shell.clone());
        editor.load().await;

        editor.delete().await;

        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(editor.resource.removals(), 0);
        assert_eq!(
            shell.events(),
            vec![ShellEvent::Confirm(
                "Delete this note? This cannot be undone.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_confirmed_delete_navigates_to_list() {
        let (mut editor, shell) = ready_editor(TestResource::loading(record())).await;
        editor.delete().await;

        assert_eq!(editor.state(), EditorState::Closed);
        assert_eq!(editor.resource.removals(), 1);
        assert_eq!(shell.navigations().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_returns_to_ready() {
        let resource = TestResource::with_remove_error(
            record(),
            ServiceError::Api(ApiError::from_response(500, "boom")),
        );
        let (mut editor, shell) = ready_editor(resource).await;
        editor.delete().await;

        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(shell.alerts(), vec!["Failed to delete note: boom"]);
        assert!(shell.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_undeletable_resource_never_prompts() {
        let mut resource = TestResource::loading(record());
        resource.deletable = false;
        let (mut editor, shell) = ready_editor(resource).await;

        editor.delete().await;

        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(editor.resource.removals(), 0);
        assert!(shell.events().is_empty());
    }
}
