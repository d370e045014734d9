//! Shared mock ports for use case tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use subnoto_domain::{Envelope, Preferences, Workspace};

use crate::ports::{ApiError, SigningClient, SigningClientFactory, UploadRequest, UploadResponse};

/// Canned responses for a [`MockClient`]. `Err(text)` simulates a transport
/// failure carrying that text.
#[derive(Debug, Clone)]
pub struct MockBehavior {
    pub workspaces: Result<Vec<Workspace>, String>,
    pub envelopes: Result<Vec<Envelope>, String>,
    pub upload: Result<UploadResponse, String>,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            workspaces: Ok(Vec::new()),
            envelopes: Ok(Vec::new()),
            upload: Ok(UploadResponse::default()),
        }
    }
}

/// Call log shared between a factory and the clients it hands out.
#[derive(Debug, Default)]
pub struct CallLog {
    pub clients_created: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub envelope_calls: Mutex<Vec<(Option<String>, u32)>>,
    pub uploads: Mutex<Vec<UploadRequest>>,
}

/// Factory producing [`MockClient`]s that replay a [`MockBehavior`].
pub struct MockFactory {
    behavior: MockBehavior,
    pub log: Arc<CallLog>,
}

impl MockFactory {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            log: Arc::new(CallLog::default()),
        }
    }
}

impl SigningClientFactory for MockFactory {
    type Client = MockClient;

    fn create(&self, _preferences: &Preferences) -> Result<Self::Client, ApiError> {
        self.log.clients_created.fetch_add(1, Ordering::SeqCst);
        Ok(MockClient {
            behavior: self.behavior.clone(),
            log: Arc::clone(&self.log),
        })
    }
}

/// A `SigningClient` that replays canned responses and records calls.
pub struct MockClient {
    behavior: MockBehavior,
    log: Arc<CallLog>,
}

fn boxed(text: &str) -> Option<Box<dyn std::error::Error + Send + Sync>> {
    Some(text.to_string().into())
}

#[async_trait]
impl SigningClient for MockClient {
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        self.behavior
            .workspaces
            .clone()
            .map_err(|text| ApiError::WorkspaceListFailed {
                source: boxed(&text),
            })
    }

    async fn list_envelopes(
        &self,
        workspace_uuid: Option<&str>,
        page: u32,
    ) -> Result<Vec<Envelope>, ApiError> {
        self.log
            .envelope_calls
            .lock()
            .unwrap()
            .push((workspace_uuid.map(String::from), page));
        self.behavior
            .envelopes
            .clone()
            .map_err(|text| ApiError::EnvelopeListFailed {
                source: boxed(&text),
            })
    }

    async fn upload_document(&self, request: UploadRequest) -> Result<UploadResponse, ApiError> {
        self.log.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.log.uploads.lock().unwrap().push(request);
        self.behavior
            .upload
            .clone()
            .map_err(|text| ApiError::UploadFailed { message: text })
    }
}

/// Builds a minimal envelope for list tests.
pub fn envelope(uuid: &str, workspace: &str) -> Envelope {
    use subnoto_domain::{EnvelopeMetrics, EnvelopeOwner, EnvelopeStatus};

    Envelope {
        uuid: uuid.into(),
        title: format!("Envelope {uuid}"),
        creation_date: 1_700_000_000,
        update_date: 1_700_000_000,
        sent_date: None,
        status: EnvelopeStatus::Draft,
        workspace_uuid: workspace.into(),
        owner: EnvelopeOwner {
            uuid: "owner".into(),
            email: "owner@example.com".into(),
            firstname: None,
            lastname: None,
        },
        metrics: EnvelopeMetrics::default(),
        tags: Vec::new(),
    }
}
