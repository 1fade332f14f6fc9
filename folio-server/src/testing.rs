//! Test doubles for the outbound seams

use async_trait::async_trait;
use folio_client::{ClientError, ContactSender, RepositorySource};
use folio_core::domain::contact::ContactSubmission;
use folio_core::domain::repository::RepositoryEntry;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

/// Ok entries, or the status code of a failed response
pub type StubResponse = Result<Vec<RepositoryEntry>, u16>;

pub fn repo(id: u64, name: &str, language: Option<&str>) -> RepositoryEntry {
    RepositoryEntry {
        id,
        name: name.to_string(),
        description: None,
        language: language.map(str::to_string),
        stargazers_count: 0,
        forks_count: 0,
        html_url: format!("https://github.com/octocat/{name}"),
    }
}

fn into_client_result(response: StubResponse) -> folio_client::Result<Vec<RepositoryEntry>> {
    response.map_err(|status| ClientError::api_error(status, "stub failure"))
}

/// Answers calls in order; the last response repeats
pub struct StubSource {
    responses: Vec<StubResponse>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn sequence(responses: Vec<StubResponse>) -> Self {
        assert!(!responses.is_empty(), "stub needs at least one response");
        Self {
            responses,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(entries: Vec<RepositoryEntry>) -> Self {
        Self::sequence(vec![Ok(entries)])
    }

    pub fn status(status: u16) -> Self {
        Self::sequence(vec![Err(status)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for StubSource {
    async fn list_repositories(&self) -> folio_client::Result<Vec<RepositoryEntry>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let index = call.min(self.responses.len() - 1);
        into_client_result(self.responses[index].clone())
    }
}

/// Holds every call open until the test releases it
#[derive(Default)]
pub struct GatedSource {
    pending: Mutex<Vec<Option<oneshot::Sender<StubResponse>>>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn calls(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Yield until at least `n` calls are waiting
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }

    /// Resolve the `index`-th call
    pub fn release(&self, index: usize, response: StubResponse) {
        let sender = self.pending.lock().unwrap()[index]
            .take()
            .expect("call already released");
        sender.send(response).expect("caller went away");
    }
}

#[async_trait]
impl RepositorySource for GatedSource {
    async fn list_repositories(&self) -> folio_client::Result<Vec<RepositoryEntry>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push(Some(tx));
        let response = rx.await.expect("gate dropped");
        into_client_result(response)
    }
}

/// Records every submission and answers with a fixed outcome
pub struct RecordingSender {
    reject_with: Option<u16>,
    sent: Mutex<Vec<ContactSubmission>>,
}

impl RecordingSender {
    pub fn accepting() -> Self {
        Self {
            reject_with: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactSender for RecordingSender {
    async fn send_contact(&self, submission: &ContactSubmission) -> folio_client::Result<()> {
        self.sent.lock().unwrap().push(submission.clone());
        match self.reject_with {
            Some(status) => Err(ClientError::api_error(status, "stub rejection")),
            None => Ok(()),
        }
    }
}
