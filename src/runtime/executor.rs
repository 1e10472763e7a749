//! Session actor: runs transitions and executes their effects

use super::{Activity, BotServices, Inbound};
use crate::pagination::{self, PAGE_SIZE};
use crate::repository::{RepoResult, SchemeQuery};
use crate::state_machine::{
    transition, Effect, Event, Lookup, LookupOutcome, Session, Submission, UserId,
};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Load a stored session, or start a fresh one.
///
/// A store that cannot be read is treated like a first contact.
pub(super) async fn load_session(services: &BotServices, user_id: &UserId) -> Session {
    match services.store.load(user_id).await {
        Ok(Some(session)) => session,
        Ok(None) => Session::new(user_id.clone(), Utc::now()),
        Err(e) => {
            tracing::error!(user_id = %user_id, error = %e, "Failed to load session, starting fresh");
            Session::new(user_id.clone(), Utc::now())
        }
    }
}

/// Owns one user's session for as long as its inbox is open
pub struct SessionRuntime {
    session: Session,
    services: Arc<BotServices>,
    inbox: mpsc::Receiver<Inbound>,
    activity: Arc<Activity>,
}

impl SessionRuntime {
    pub fn new(
        session: Session,
        services: Arc<BotServices>,
        inbox: mpsc::Receiver<Inbound>,
        activity: Arc<Activity>,
    ) -> Self {
        Self {
            session,
            services,
            inbox,
            activity,
        }
    }

    /// Process messages until the manager drops the inbox
    pub async fn run(mut self) {
        while let Some(inbound) = self.inbox.recv().await {
            let Inbound {
                text,
                user_name,
                received_at,
                reply_tx,
            } = inbound;
            let event = Event::UserInput {
                text,
                user_name,
                received_at,
            };
            let replies = self.process_event(event).await;
            // The caller may have gone away; the replies were still sent
            let _ = reply_tx.send(replies);
            self.activity.finish();
        }
        tracing::debug!(user_id = %self.session.user_id, "Session actor stopped");
    }

    /// Run an event and every event its effects generate, collecting replies
    async fn process_event(&mut self, event: Event) -> Vec<String> {
        let mut replies = Vec::new();
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let result = match transition(&self.session, &self.services.context, event) {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(
                        user_id = %self.session.user_id,
                        state = %self.session.state,
                        error = %e,
                        "Event dropped"
                    );
                    continue;
                }
            };

            let from = self.session.state;
            self.session = result.session;
            if from != self.session.state {
                tracing::debug!(
                    user_id = %self.session.user_id,
                    from = %from,
                    to = %self.session.state,
                    "State change"
                );
            }

            for effect in result.effects {
                if let Some(next) = self.execute_effect(effect, &mut replies).await {
                    queue.push_back(next);
                }
            }
        }
        replies
    }

    async fn execute_effect(&self, effect: Effect, replies: &mut Vec<String>) -> Option<Event> {
        let user_id = &self.session.user_id;
        match effect {
            Effect::Reply { text } => {
                // Delivery failures are logged by the messenger; the
                // conversation carries on
                let _ = self.services.messenger.send(user_id, &text).await;
                replies.push(text);
                None
            }
            Effect::PersistSession => {
                if let Err(e) = self.services.store.save(&self.session).await {
                    tracing::error!(user_id = %user_id, error = %e, "Failed to persist session");
                }
                None
            }
            Effect::SaveUser { profile } => {
                if let Err(e) = self.services.repository.save_user(user_id.as_str(), &profile).await {
                    tracing::warn!(user_id = %user_id, error = %e, "Failed to save user profile");
                }
                None
            }
            Effect::Lookup(lookup) => Some(self.run_lookup(lookup).await),
            Effect::Submit(submission) => Some(self.submit(submission).await),
        }
    }

    async fn run_lookup(&self, lookup: Lookup) -> Event {
        let repo = self.services.repository.as_ref();
        let tenant = self.services.context.tenant_id.as_str();

        let outcome: RepoResult<LookupOutcome> = match &lookup {
            Lookup::ComplaintStatus { mobile } | Lookup::ComplaintList { mobile } => repo
                .complaints_by_mobile(tenant, mobile)
                .await
                .map(LookupOutcome::Complaints),
            Lookup::SchemePage { offset } => pagination::load_page(repo, tenant, *offset)
                .await
                .map(LookupOutcome::SchemePage),
            Lookup::SchemeSearch { query } => {
                let query = SchemeQuery {
                    limit: PAGE_SIZE,
                    search: Some(query.clone()),
                    ..SchemeQuery::default()
                };
                repo.schemes(tenant, &query).await.map(LookupOutcome::Schemes)
            }
            Lookup::SchemesForProfile { exclude_keywords } => {
                let query = SchemeQuery {
                    limit: PAGE_SIZE,
                    exclude_keywords: exclude_keywords.clone(),
                    ..SchemeQuery::default()
                };
                repo.schemes(tenant, &query).await.map(LookupOutcome::Schemes)
            }
            Lookup::Voters { query, kind } => repo
                .search_voters(tenant, query, *kind)
                .await
                .map(LookupOutcome::Voters),
            Lookup::Events(filter) => repo.events(tenant, *filter).await.map(LookupOutcome::Events),
            Lookup::Works(status) => repo.works(tenant, *status).await.map(LookupOutcome::Works),
            Lookup::Improvements => repo.improvements(tenant).await.map(LookupOutcome::Improvements),
            Lookup::AreaProblemsByUser { limit } => repo
                .area_problems_by_user(self.session.user_id.as_str(), *limit)
                .await
                .map(LookupOutcome::AreaProblems),
            Lookup::AreaProblems { status, limit } => repo
                .area_problems(tenant, *status, *limit)
                .await
                .map(LookupOutcome::AreaProblems),
            Lookup::Contact(_) => repo.contact_info(tenant).await.map(LookupOutcome::Contact),
            Lookup::LetterTypes => repo.letter_types(tenant).await.map(LookupOutcome::LetterTypes),
            Lookup::ActiveSurvey => repo.active_survey(tenant).await.map(LookupOutcome::Survey),
        };

        match outcome {
            Ok(outcome) => Event::LookupCompleted { lookup, outcome },
            Err(e) => {
                tracing::warn!(user_id = %self.session.user_id, lookup = ?lookup, error = %e, "Lookup failed");
                Event::LookupFailed {
                    lookup,
                    message: e.to_string(),
                }
            }
        }
    }

    async fn submit(&self, submission: Submission) -> Event {
        let repo = self.services.repository.as_ref();
        let result = match &submission {
            Submission::Complaint(complaint) => repo.save_complaint(complaint).await.map(Some),
            Submission::AreaProblem(problem) => repo.report_area_problem(problem).await,
            Submission::Letter(request) => repo.save_letter_request(request).await,
            Submission::Personal(request) => repo.save_personal_request(request).await.map(Some),
            Submission::SurveyResponse(response) => repo.save_survey_response(response).await.map(Some),
        };

        match result {
            Ok(record) => {
                tracing::info!(
                    user_id = %self.session.user_id,
                    kind = submission.kind(),
                    record_id = ?record.as_ref().map(|r| r.id.as_str()),
                    "Submission saved"
                );
                Event::SubmissionCompleted { submission, record }
            }
            Err(e) => {
                tracing::error!(
                    user_id = %self.session.user_id,
                    kind = submission.kind(),
                    error = %e,
                    "Submission failed"
                );
                Event::SubmissionFailed {
                    submission,
                    message: e.to_string(),
                }
            }
        }
    }
}
