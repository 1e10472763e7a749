//! Repository gateway
//!
//! Narrow persistence boundary used by lookups and form submissions.
//! Every read is tenant-scoped except the per-user listings.

mod records;
mod sqlite;

pub use records::*;
pub use sqlite::SqliteRepository;

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Stored value could not be decoded: {0}")]
    Decode(String),
    #[error("Database connection lock poisoned")]
    Poisoned,
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence operations the conversation core depends on
#[async_trait]
pub trait Repository: Send + Sync {
    async fn save_user(&self, user_id: &str, profile: &UserProfile) -> RepoResult<()>;

    async fn save_complaint(&self, complaint: &NewComplaint) -> RepoResult<SavedRecord>;

    /// Most recent first
    async fn complaints_by_mobile(&self, tenant_id: &str, mobile: &str) -> RepoResult<Vec<ComplaintRecord>>;

    async fn schemes(&self, tenant_id: &str, query: &SchemeQuery) -> RepoResult<Vec<SchemeRecord>>;

    async fn search_voters(
        &self,
        tenant_id: &str,
        query: &str,
        kind: VoterSearchKind,
    ) -> RepoResult<Vec<VoterRecord>>;

    async fn events(&self, tenant_id: &str, filter: EventFilter) -> RepoResult<Vec<EventRecord>>;

    async fn works(&self, tenant_id: &str, status: WorkStatus) -> RepoResult<Vec<WorkRecord>>;

    async fn improvements(&self, tenant_id: &str) -> RepoResult<Vec<ImprovementRecord>>;

    async fn area_problems_by_user(&self, user_id: &str, limit: usize) -> RepoResult<Vec<AreaProblemRecord>>;

    async fn area_problems(
        &self,
        tenant_id: &str,
        status: ProblemStatus,
        limit: usize,
    ) -> RepoResult<Vec<AreaProblemRecord>>;

    /// `None` when the store accepted the call but produced no record
    async fn report_area_problem(&self, problem: &NewAreaProblem) -> RepoResult<Option<SavedRecord>>;

    async fn contact_info(&self, tenant_id: &str) -> RepoResult<Option<ContactInfo>>;

    async fn letter_types(&self, tenant_id: &str) -> RepoResult<Vec<LetterType>>;

    async fn save_letter_request(&self, request: &NewLetterRequest) -> RepoResult<Option<SavedRecord>>;

    async fn save_personal_request(&self, request: &NewPersonalRequest) -> RepoResult<SavedRecord>;

    /// Newest active survey for the tenant
    async fn active_survey(&self, tenant_id: &str) -> RepoResult<Option<SurveyRecord>>;

    async fn save_survey_response(&self, response: &NewSurveyResponse) -> RepoResult<SavedRecord>;
}

// ============================================================================
// Arc implementation for shared repositories
// ============================================================================

#[async_trait]
impl<T: Repository + ?Sized> Repository for Arc<T> {
    async fn save_user(&self, user_id: &str, profile: &UserProfile) -> RepoResult<()> {
        (**self).save_user(user_id, profile).await
    }

    async fn save_complaint(&self, complaint: &NewComplaint) -> RepoResult<SavedRecord> {
        (**self).save_complaint(complaint).await
    }

    async fn complaints_by_mobile(&self, tenant_id: &str, mobile: &str) -> RepoResult<Vec<ComplaintRecord>> {
        (**self).complaints_by_mobile(tenant_id, mobile).await
    }

    async fn schemes(&self, tenant_id: &str, query: &SchemeQuery) -> RepoResult<Vec<SchemeRecord>> {
        (**self).schemes(tenant_id, query).await
    }

    async fn search_voters(
        &self,
        tenant_id: &str,
        query: &str,
        kind: VoterSearchKind,
    ) -> RepoResult<Vec<VoterRecord>> {
        (**self).search_voters(tenant_id, query, kind).await
    }

    async fn events(&self, tenant_id: &str, filter: EventFilter) -> RepoResult<Vec<EventRecord>> {
        (**self).events(tenant_id, filter).await
    }

    async fn works(&self, tenant_id: &str, status: WorkStatus) -> RepoResult<Vec<WorkRecord>> {
        (**self).works(tenant_id, status).await
    }

    async fn improvements(&self, tenant_id: &str) -> RepoResult<Vec<ImprovementRecord>> {
        (**self).improvements(tenant_id).await
    }

    async fn area_problems_by_user(&self, user_id: &str, limit: usize) -> RepoResult<Vec<AreaProblemRecord>> {
        (**self).area_problems_by_user(user_id, limit).await
    }

    async fn area_problems(
        &self,
        tenant_id: &str,
        status: ProblemStatus,
        limit: usize,
    ) -> RepoResult<Vec<AreaProblemRecord>> {
        (**self).area_problems(tenant_id, status, limit).await
    }

    async fn report_area_problem(&self, problem: &NewAreaProblem) -> RepoResult<Option<SavedRecord>> {
        (**self).report_area_problem(problem).await
    }

    async fn contact_info(&self, tenant_id: &str) -> RepoResult<Option<ContactInfo>> {
        (**self).contact_info(tenant_id).await
    }

    async fn letter_types(&self, tenant_id: &str) -> RepoResult<Vec<LetterType>> {
        (**self).letter_types(tenant_id).await
    }

    async fn save_letter_request(&self, request: &NewLetterRequest) -> RepoResult<Option<SavedRecord>> {
        (**self).save_letter_request(request).await
    }

    async fn save_personal_request(&self, request: &NewPersonalRequest) -> RepoResult<SavedRecord> {
        (**self).save_personal_request(request).await
    }

    async fn active_survey(&self, tenant_id: &str) -> RepoResult<Option<SurveyRecord>> {
        (**self).active_survey(tenant_id).await
    }

    async fn save_survey_response(&self, response: &NewSurveyResponse) -> RepoResult<SavedRecord> {
        (**self).save_survey_response(response).await
    }
}

// ============================================================================
// Logging wrapper
// ============================================================================

/// Logs duration and failures of every repository call
pub struct LoggingRepository {
    inner: Arc<dyn Repository>,
}

impl LoggingRepository {
    pub fn new(inner: Arc<dyn Repository>) -> Self {
        Self { inner }
    }
}

async fn timed<T, F>(op: &'static str, fut: F) -> RepoResult<T>
where
    F: Future<Output = RepoResult<T>> + Send,
{
    let start = Instant::now();
    let result = fut.await;
    let duration = start.elapsed();
    match &result {
        Ok(_) => tracing::debug!(op, duration_ms = %duration.as_millis(), "Repository call completed"),
        Err(e) => tracing::error!(op, duration_ms = %duration.as_millis(), error = %e, "Repository call failed"),
    }
    result
}

#[async_trait]
impl Repository for LoggingRepository {
    async fn save_user(&self, user_id: &str, profile: &UserProfile) -> RepoResult<()> {
        timed("save_user", self.inner.save_user(user_id, profile)).await
    }

    async fn save_complaint(&self, complaint: &NewComplaint) -> RepoResult<SavedRecord> {
        timed("save_complaint", self.inner.save_complaint(complaint)).await
    }

    async fn complaints_by_mobile(&self, tenant_id: &str, mobile: &str) -> RepoResult<Vec<ComplaintRecord>> {
        timed("complaints_by_mobile", self.inner.complaints_by_mobile(tenant_id, mobile)).await
    }

    async fn schemes(&self, tenant_id: &str, query: &SchemeQuery) -> RepoResult<Vec<SchemeRecord>> {
        timed("schemes", self.inner.schemes(tenant_id, query)).await
    }

    async fn search_voters(
        &self,
        tenant_id: &str,
        query: &str,
        kind: VoterSearchKind,
    ) -> RepoResult<Vec<VoterRecord>> {
        timed("search_voters", self.inner.search_voters(tenant_id, query, kind)).await
    }

    async fn events(&self, tenant_id: &str, filter: EventFilter) -> RepoResult<Vec<EventRecord>> {
        timed("events", self.inner.events(tenant_id, filter)).await
    }

    async fn works(&self, tenant_id: &str, status: WorkStatus) -> RepoResult<Vec<WorkRecord>> {
        timed("works", self.inner.works(tenant_id, status)).await
    }

    async fn improvements(&self, tenant_id: &str) -> RepoResult<Vec<ImprovementRecord>> {
        timed("improvements", self.inner.improvements(tenant_id)).await
    }

    async fn area_problems_by_user(&self, user_id: &str, limit: usize) -> RepoResult<Vec<AreaProblemRecord>> {
        timed("area_problems_by_user", self.inner.area_problems_by_user(user_id, limit)).await
    }

    async fn area_problems(
        &self,
        tenant_id: &str,
        status: ProblemStatus,
        limit: usize,
    ) -> RepoResult<Vec<AreaProblemRecord>> {
        timed("area_problems", self.inner.area_problems(tenant_id, status, limit)).await
    }

    async fn report_area_problem(&self, problem: &NewAreaProblem) -> RepoResult<Option<SavedRecord>> {
        timed("report_area_problem", self.inner.report_area_problem(problem)).await
    }

    async fn contact_info(&self, tenant_id: &str) -> RepoResult<Option<ContactInfo>> {
        timed("contact_info", self.inner.contact_info(tenant_id)).await
    }

    async fn letter_types(&self, tenant_id: &str) -> RepoResult<Vec<LetterType>> {
        timed("letter_types", self.inner.letter_types(tenant_id)).await
    }

    async fn save_letter_request(&self, request: &NewLetterRequest) -> RepoResult<Option<SavedRecord>> {
        timed("save_letter_request", self.inner.save_letter_request(request)).await
    }

    async fn save_personal_request(&self, request: &NewPersonalRequest) -> RepoResult<SavedRecord> {
        timed("save_personal_request", self.inner.save_personal_request(request)).await
    }

    async fn active_survey(&self, tenant_id: &str) -> RepoResult<Option<SurveyRecord>> {
        timed("active_survey", self.inner.active_survey(tenant_id)).await
    }

    async fn save_survey_response(&self, response: &NewSurveyResponse) -> RepoResult<SavedRecord> {
        timed("save_survey_response", self.inner.save_survey_response(response)).await
    }
}
