//! Mock implementations for testing
//!
//! These mocks enable end-to-end session tests without a database or a
//! chat transport.

use crate::messenger::{Messenger, SendError};
use crate::repository::{
    AreaProblemRecord, ComplaintRecord, ContactInfo, EventFilter, EventRecord, ImprovementRecord,
    LetterType, NewAreaProblem, NewComplaint, NewLetterRequest, NewPersonalRequest,
    NewSurveyResponse, ProblemStatus, RepoError, RepoResult, Repository, SavedRecord, SchemeQuery,
    SchemeRecord, SurveyQuestion, SurveyRecord, UserProfile, VoterRecord, VoterSearchKind,
    WorkRecord, WorkStatus,
};
use crate::state_machine::UserId;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

// ============================================================================
// Mock Repository
// ============================================================================

/// Repository serving canned content and recording every write
#[derive(Default)]
pub struct MockRepository {
    schemes: Vec<SchemeRecord>,
    letter_types: Vec<LetterType>,
    survey: Option<SurveyRecord>,
    fail_reads: bool,
    /// Record of writes
    pub users: Mutex<Vec<(String, UserProfile)>>,
    pub complaints: Mutex<Vec<NewComplaint>>,
    pub area_problems: Mutex<Vec<NewAreaProblem>>,
    pub letters: Mutex<Vec<NewLetterRequest>>,
    pub personal: Mutex<Vec<NewPersonalRequest>>,
    pub survey_responses: Mutex<Vec<NewSurveyResponse>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `count` schemes named "Scheme 01", "Scheme 02", ...
    pub fn with_schemes(mut self, count: usize) -> Self {
        self.schemes = (1..=count)
            .map(|n| SchemeRecord {
                id: n.to_string(),
                name: format!("Scheme {n:02}"),
                name_mr: None,
                description: None,
                description_mr: None,
                benefits: None,
                benefits_mr: None,
            })
            .collect();
        self
    }

    pub fn with_letter_types(mut self, names: &[&str]) -> Self {
        self.letter_types = names
            .iter()
            .map(|name| LetterType {
                name: (*name).to_string(),
                name_localized: None,
            })
            .collect();
        self
    }

    /// Serve one active survey with id "SRV-1"
    pub fn with_survey(mut self, title: &str, questions: Vec<SurveyQuestion>) -> Self {
        self.survey = Some(SurveyRecord {
            id: "SRV-1".to_string(),
            title: title.to_string(),
            questions,
        });
        self
    }

    /// Make every read fail
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn saved_complaints(&self) -> Vec<NewComplaint> {
        self.complaints.lock().unwrap().clone()
    }

    pub fn saved_users(&self) -> Vec<(String, UserProfile)> {
        self.users.lock().unwrap().clone()
    }

    pub fn saved_letters(&self) -> Vec<NewLetterRequest> {
        self.letters.lock().unwrap().clone()
    }

    pub fn saved_survey_responses(&self) -> Vec<NewSurveyResponse> {
        self.survey_responses.lock().unwrap().clone()
    }

    fn read<T>(&self, value: T) -> RepoResult<T> {
        if self.fail_reads {
            Err(RepoError::Decode("mock read failure".into()))
        } else {
            Ok(value)
        }
    }

    fn record<T>(log: &Mutex<Vec<T>>, item: &T, prefix: &str) -> SavedRecord
    where
        T: Clone,
    {
        let mut log = log.lock().unwrap();
        log.push(item.clone());
        SavedRecord {
            id: format!("{prefix}-{}", log.len()),
        }
    }
}

#[async_trait]
impl Repository for MockRepository {
    async fn save_user(&self, user_id: &str, profile: &UserProfile) -> RepoResult<()> {
        self.users
            .lock()
            .unwrap()
            .push((user_id.to_string(), profile.clone()));
        Ok(())
    }

    async fn save_complaint(&self, complaint: &NewComplaint) -> RepoResult<SavedRecord> {
        Ok(Self::record(&self.complaints, complaint, "CMP"))
    }

    async fn complaints_by_mobile(&self, _tenant_id: &str, _mobile: &str) -> RepoResult<Vec<ComplaintRecord>> {
        self.read(Vec::new())
    }

    async fn schemes(&self, _tenant_id: &str, query: &SchemeQuery) -> RepoResult<Vec<SchemeRecord>> {
        let matching = self.schemes.iter().filter(|s| {
            query
                .search
                .as_deref()
                .is_none_or(|needle| s.name.to_lowercase().contains(&needle.to_lowercase()))
        });
        self.read(matching.skip(query.offset).take(query.limit).cloned().collect())
    }

    async fn search_voters(
        &self,
        _tenant_id: &str,
        _query: &str,
        _kind: VoterSearchKind,
    ) -> RepoResult<Vec<VoterRecord>> {
        self.read(Vec::new())
    }

    async fn events(&self, _tenant_id: &str, _filter: EventFilter) -> RepoResult<Vec<EventRecord>> {
        self.read(Vec::new())
    }

    async fn works(&self, _tenant_id: &str, _status: WorkStatus) -> RepoResult<Vec<WorkRecord>> {
        self.read(Vec::new())
    }

    async fn improvements(&self, _tenant_id: &str) -> RepoResult<Vec<ImprovementRecord>> {
        self.read(Vec::new())
    }

    async fn area_problems_by_user(&self, _user_id: &str, _limit: usize) -> RepoResult<Vec<AreaProblemRecord>> {
        self.read(Vec::new())
    }

    async fn area_problems(
        &self,
        _tenant_id: &str,
        _status: ProblemStatus,
        _limit: usize,
    ) -> RepoResult<Vec<AreaProblemRecord>> {
        self.read(Vec::new())
    }

    async fn report_area_problem(&self, problem: &NewAreaProblem) -> RepoResult<Option<SavedRecord>> {
        Ok(Some(Self::record(&self.area_problems, problem, "AP")))
    }

    async fn contact_info(&self, _tenant_id: &str) -> RepoResult<Option<ContactInfo>> {
        self.read(None)
    }

    async fn letter_types(&self, _tenant_id: &str) -> RepoResult<Vec<LetterType>> {
        self.read(self.letter_types.clone())
    }

    async fn save_letter_request(&self, request: &NewLetterRequest) -> RepoResult<Option<SavedRecord>> {
        Ok(Some(Self::record(&self.letters, request, "LTR")))
    }

    async fn save_personal_request(&self, request: &NewPersonalRequest) -> RepoResult<SavedRecord> {
        Ok(Self::record(&self.personal, request, "REQ"))
    }

    async fn active_survey(&self, _tenant_id: &str) -> RepoResult<Option<SurveyRecord>> {
        self.read(self.survey.clone())
    }

    async fn save_survey_response(&self, response: &NewSurveyResponse) -> RepoResult<SavedRecord> {
        Ok(Self::record(&self.survey_responses, response, "SR"))
    }
}

// ============================================================================
// Recording Messenger
// ============================================================================

/// Messenger that keeps every outbound text
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<(UserId, String)>>,
    fail: AtomicBool,
    held: AtomicBool,
    entered: Notify,
    released: Notify,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every later send, still recording the attempt
    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Park every later send until [`Self::release`]
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        self.released.notify_waiters();
    }

    /// Wait until some send is parked by [`Self::hold`]
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn texts_for(&self, user: &str) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| id.as_str() == user)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, user_id: &UserId, text: &str) -> Result<(), SendError> {
        let released = self.released.notified();
        tokio::pin!(released);
        released.as_mut().enable();
        if self.held.load(Ordering::SeqCst) {
            self.entered.notify_one();
            released.await;
        }

        self.sent.lock().unwrap().push((user_id.clone(), text.to_string()));
        if self.fail.load(Ordering::SeqCst) {
            Err(SendError::Rejected { status: 503 })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_schemes_respect_offset_and_search() {
        let repo = MockRepository::new().with_schemes(12);
        let page = repo
            .schemes(
                "t",
                &SchemeQuery {
                    limit: 10,
                    offset: 10,
                    ..SchemeQuery::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.len(), 2);

        let found = repo
            .schemes(
                "t",
                &SchemeQuery {
                    limit: 10,
                    search: Some("scheme 03".into()),
                    ..SchemeQuery::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn recording_messenger_records_failed_sends() {
        let messenger = RecordingMessenger::new();
        messenger.fail_sends();
        assert!(messenger.send(&UserId::new("u1"), "hi").await.is_err());
        assert_eq!(messenger.texts_for("u1"), vec!["hi".to_string()]);
    }

    #[tokio::test]
    async fn held_sends_wait_for_release() {
        let messenger = std::sync::Arc::new(RecordingMessenger::new());
        messenger.hold();
        let pending = {
            let messenger = messenger.clone();
            tokio::spawn(async move { messenger.send(&UserId::new("u1"), "hi").await })
        };
        messenger.wait_entered().await;
        assert!(messenger.texts_for("u1").is_empty());

        messenger.release();
        assert!(pending.await.unwrap().is_ok());
        assert_eq!(messenger.texts_for("u1"), vec!["hi".to_string()]);
    }
}
