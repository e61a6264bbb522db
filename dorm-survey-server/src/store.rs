use std::sync::Arc;

use dorm_survey_types::Responses;
use tokio::sync::RwLock;

/// One accepted submission.
#[derive(Debug, Clone)]
pub struct Submission {
    /// 1-based sequence number within this process.
    pub id: u64,
    pub responses: Responses,
}

/// In-memory list of accepted submissions, shared by all request handlers.
///
/// Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    entries: Arc<RwLock<Vec<Submission>>>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission and return its id.
    pub async fn record(&self, responses: Responses) -> u64 {
        let mut entries = self.entries.write().await;
        let id = entries.len() as u64 + 1;
        entries.push(Submission {
            id,
            responses,
        });
        id
    }

    /// Number of stored submissions.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Copy of every stored submission, oldest first.
    pub async fn snapshot(&self) -> Vec<Submission> {
        self.entries.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential() {
        let store = SubmissionStore::new();
        assert!(store.is_empty().await);

        let mut responses = Responses::new();
        responses.insert(1, "23:00");

        assert_eq!(store.record(responses.clone()).await, 1);
        assert_eq!(store.record(Responses::new()).await, 2);

        let all = store.snapshot().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].responses, responses);
        assert_eq!(all[1].id, 2);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let store = SubmissionStore::new();
        let handle = store.clone();

        handle.record(Responses::new()).await;
        assert_eq!(store.len().await, 1);
    }
}
