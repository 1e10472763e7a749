//! Runtime for executing sessions
//!
//! Every user gets one actor task that owns their session. Messages for a
//! user queue on that actor's inbox, so one user's steps run in order while
//! different users proceed in parallel.
//!
//! Deliveries into an inbox happen under the manager's map lock (read side),
//! and the idle sweep holds the write side. A sweep therefore never sees a
//! message half-delivered, and it never stops an actor that still has work
//! queued or in progress.

mod executor;

#[cfg(test)]
pub mod testing;

pub use executor::SessionRuntime;

use crate::messenger::Messenger;
use crate::repository::Repository;
use crate::session_store::{SessionStore, StoreError};
use crate::state_machine::{BotContext, Session, UserId};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Inbox depth per user before senders wait
const INBOX_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("session actor for {0} stopped before replying")]
    ActorStopped(UserId),
}

/// Everything an actor needs to run effects
pub struct BotServices {
    pub context: BotContext,
    pub repository: Arc<dyn Repository>,
    pub messenger: Arc<dyn Messenger>,
    pub store: Arc<dyn SessionStore>,
}

/// One inbound chat message, with the channel its replies go back on
#[derive(Debug)]
pub struct Inbound {
    pub text: String,
    pub user_name: Option<String>,
    pub received_at: DateTime<Utc>,
    pub reply_tx: oneshot::Sender<Vec<String>>,
}

/// Work counters shared by a handle and its actor
#[derive(Debug, Default)]
pub struct Activity {
    /// Messages delivered but not yet answered
    in_flight: AtomicUsize,
    last_seen_ms: AtomicI64,
}

impl Activity {
    fn begin(&self, at: DateTime<Utc>) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.last_seen_ms.fetch_max(at.timestamp_millis(), Ordering::SeqCst);
    }

    /// Called once a delivered message has been answered
    pub fn finish(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    fn is_idle(&self, cutoff: DateTime<Utc>) -> bool {
        self.in_flight.load(Ordering::SeqCst) == 0
            && self.last_seen_ms.load(Ordering::SeqCst) < cutoff.timestamp_millis()
    }
}

/// Handle to a running session actor
struct SessionHandle {
    inbox: mpsc::Sender<Inbound>,
    activity: Arc<Activity>,
}

impl SessionHandle {
    fn is_live(&self) -> bool {
        !self.inbox.is_closed()
    }

    /// Queue a message; false when the actor has stopped
    async fn deliver(&self, inbound: Inbound) -> bool {
        self.activity.begin(inbound.received_at);
        if self.inbox.send(inbound).await.is_err() {
            self.activity.finish();
            return false;
        }
        true
    }
}

/// Manager for all session actors
pub struct SessionManager {
    services: Arc<BotServices>,
    actors: RwLock<HashMap<UserId, SessionHandle>>,
    session_ttl: chrono::Duration,
}

impl SessionManager {
    pub fn new(services: BotServices, session_ttl: Duration) -> Self {
        Self {
            services: Arc::new(services),
            actors: RwLock::new(HashMap::new()),
            session_ttl: chrono::Duration::from_std(session_ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Deliver one message and wait for the replies it produced
    pub async fn route(
        &self,
        user_id: UserId,
        text: String,
        user_name: Option<String>,
    ) -> Result<Vec<String>, RouteError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let inbound = Inbound {
            text,
            user_name,
            received_at: Utc::now(),
            reply_tx,
        };

        if !self.deliver(&user_id, inbound).await {
            return Err(RouteError::ActorStopped(user_id));
        }
        reply_rx.await.map_err(|_| RouteError::ActorStopped(user_id))
    }

    /// Stored view of a session
    pub async fn session(&self, user_id: &UserId) -> Result<Option<Session>, StoreError> {
        self.services.store.load(user_id).await
    }

    /// Number of live actors
    pub async fn active_sessions(&self) -> usize {
        self.actors.read().await.len()
    }

    /// Hand a message to the user's actor, starting one if needed
    async fn deliver(&self, user_id: &UserId, inbound: Inbound) -> bool {
        {
            let actors = self.actors.read().await;
            if let Some(handle) = actors.get(user_id).filter(|h| h.is_live()) {
                return handle.deliver(inbound).await;
            }
        }

        let mut actors = self.actors.write().await;
        // Another message may have registered the actor while we waited
        if !actors.get(user_id).is_some_and(SessionHandle::is_live) {
            actors.insert(user_id.clone(), self.spawn_actor(user_id));
        }
        match actors.get(user_id) {
            Some(handle) => handle.deliver(inbound).await,
            None => false,
        }
    }

    fn spawn_actor(&self, user_id: &UserId) -> SessionHandle {
        let (inbox_tx, inbox_rx) = mpsc::channel(INBOX_CAPACITY);
        let activity = Arc::new(Activity::default());
        let services = Arc::clone(&self.services);
        let id = user_id.clone();
        let actor_activity = Arc::clone(&activity);
        tokio::spawn(async move {
            let session = executor::load_session(&services, &id).await;
            SessionRuntime::new(session, services, inbox_rx, actor_activity)
                .run()
                .await;
        });
        tracing::debug!(user_id = %user_id, "Started session actor");
        SessionHandle {
            inbox: inbox_tx,
            activity,
        }
    }

    /// Evict sessions idle longer than the TTL and stop their actors.
    ///
    /// An actor with a message queued or in progress is kept along with its
    /// stored session, whatever the stored `last_active` says. Dropping a
    /// handle closes the inbox and the idle actor exits.
    pub async fn sweep_idle(&self) -> usize {
        let cutoff = Utc::now() - self.session_ttl;
        let mut actors = self.actors.write().await;
        actors.retain(|_, handle| handle.is_live());

        let active: HashSet<UserId> = actors
            .iter()
            .filter(|(_, handle)| !handle.activity.is_idle(cutoff))
            .map(|(user_id, _)| user_id.clone())
            .collect();

        let evicted = match self.services.store.evict_idle(cutoff, &active).await {
            Ok(evicted) => evicted,
            Err(e) => {
                tracing::error!(error = %e, "Idle session sweep failed");
                return 0;
            }
        };

        let before = actors.len();
        actors.retain(|user_id, _| active.contains(user_id));
        let stopped = before - actors.len();

        if !evicted.is_empty() || stopped > 0 {
            tracing::info!(sessions = evicted.len(), actors = stopped, "Evicted idle sessions");
        }
        evicted.len()
    }

    /// Run [`Self::sweep_idle`] every `every` until cancelled
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration, cancel: CancellationToken) -> JoinHandle<()> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        manager.sweep_idle().await;
                    }
                }
            }
            tracing::info!("Idle session sweeper stopped");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{MockRepository, RecordingMessenger};
    use super::*;
    use crate::content::{Language, StaticCatalog};
    use crate::repository::{QuestionKind, SurveyAnswer, SurveyQuestion};
    use crate::session_store::MemorySessionStore;
    use crate::state_machine::BotState;

    struct Harness {
        manager: Arc<SessionManager>,
        repository: Arc<MockRepository>,
        messenger: Arc<RecordingMessenger>,
        store: Arc<MemorySessionStore>,
    }

    fn harness(repository: MockRepository, ttl: Duration) -> Harness {
        let repository = Arc::new(repository);
        let messenger = Arc::new(RecordingMessenger::new());
        let store = Arc::new(MemorySessionStore::new());
        let services = BotServices {
            context: BotContext::new("tenant-1", "WhatsApp", Arc::new(StaticCatalog)),
            repository: repository.clone(),
            messenger: messenger.clone(),
            store: store.clone(),
        };
        Harness {
            manager: Arc::new(SessionManager::new(services, ttl)),
            repository,
            messenger,
            store,
        }
    }

    async fn say(h: &Harness, user: &str, text: &str) -> Vec<String> {
        h.manager
            .route(UserId::new(user), text.to_string(), None)
            .await
            .unwrap()
    }

    async fn state_of(h: &Harness, user: &str) -> BotState {
        h.manager.session(&UserId::new(user)).await.unwrap().unwrap().state
    }

    #[tokio::test]
    async fn complaint_is_saved_exactly_once() {
        let h = harness(MockRepository::new(), Duration::from_secs(3600));
        for text in ["1", "1", "1", "Asha Rao", "9876543210", "2", "Leaking pipe", "Near market"] {
            say(&h, "u1", text).await;
        }
        assert_eq!(state_of(&h, "u1").await, BotState::ComplaintPhoto);

        let replies = say(&h, "u1", "skip").await;
        assert_eq!(state_of(&h, "u1").await, BotState::MainMenu);

        let saved = h.repository.saved_complaints();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].description, "Leaking pipe");
        assert_eq!(saved[0].mobile, "9876543210");
        assert!(saved[0].photos.is_empty());
        assert!(replies.iter().any(|r| r.contains("CMP-1")), "{replies:?}");

        // Everything returned over the API was also pushed to the transport
        let sent = h.messenger.texts_for("u1");
        assert!(sent.ends_with(&replies));
    }

    #[tokio::test]
    async fn scheme_listing_pages_through_twenty_five() {
        let h = harness(MockRepository::new().with_schemes(25), Duration::from_secs(3600));
        say(&h, "u1", "1").await;
        say(&h, "u1", "2").await;

        let first = say(&h, "u1", "1").await.join("\n");
        assert!(first.contains("*Scheme 01*") && first.contains("*Scheme 10*"), "{first}");
        assert!(!first.contains("*Scheme 11*"));
        assert_eq!(state_of(&h, "u1").await, BotState::SchemeMore { offset: 10 });

        let second = say(&h, "u1", "MORE").await.join("\n");
        assert!(second.contains("*Scheme 11*") && second.contains("*Scheme 20*"));
        assert_eq!(state_of(&h, "u1").await, BotState::SchemeMore { offset: 20 });

        let third = say(&h, "u1", "1").await.join("\n");
        assert!(third.contains("*Scheme 25*"));
        assert!(!third.contains("*Scheme 20*"));
        assert_eq!(state_of(&h, "u1").await, BotState::SchemesMenu);
    }

    #[tokio::test]
    async fn letter_request_uses_selected_type() {
        let repo = MockRepository::new().with_letter_types(&["Residence certificate", "Income certificate"]);
        let h = harness(repo, Duration::from_secs(3600));
        say(&h, "u1", "1").await;
        say(&h, "u1", "8").await;
        say(&h, "u1", "1").await;
        assert_eq!(state_of(&h, "u1").await, BotState::LetterType);

        for text in ["2", "Asha Rao", "9876543210", "Ward 12, Pune", "Scholarship"] {
            say(&h, "u1", text).await;
        }
        assert_eq!(state_of(&h, "u1").await, BotState::MainMenu);

        let letters = h.repository.saved_letters();
        assert_eq!(letters.len(), 1);
        assert_eq!(letters[0].letter_type, "Income certificate");
        assert_eq!(letters[0].purpose, "Scholarship");
    }

    #[tokio::test]
    async fn survey_response_is_saved_once() {
        let questions = vec![
            SurveyQuestion {
                text: "Is water supply regular?".into(),
                kind: QuestionKind::YesNo,
            },
            SurveyQuestion {
                text: "Rate the roads".into(),
                kind: QuestionKind::Rating,
            },
        ];
        let h = harness(
            MockRepository::new().with_survey("Ward survey", questions),
            Duration::from_secs(3600),
        );
        say(&h, "u1", "1").await;
        say(&h, "u1", "8").await;
        let intro = say(&h, "u1", "6").await.join("\n");
        assert!(intro.contains("Ward survey") && intro.contains("Question 1/2"), "{intro}");
        assert_eq!(state_of(&h, "u1").await, BotState::Survey { index: 0 });

        say(&h, "u1", "2").await;
        say(&h, "u1", "7").await;
        assert_eq!(state_of(&h, "u1").await, BotState::Survey { index: 1 });
        let replies = say(&h, "u1", "5").await;
        assert!(replies.iter().any(|r| r.contains("Survey complete")), "{replies:?}");
        assert_eq!(state_of(&h, "u1").await, BotState::MainMenu);

        let saved = h.repository.saved_survey_responses();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].survey_id, "SRV-1");
        assert_eq!(saved[0].answers[0].1, Some(SurveyAnswer::Text("no".into())));
        assert_eq!(saved[0].answers[1].1, Some(SurveyAnswer::Rating(5)));
    }

    #[tokio::test]
    async fn lookup_failure_returns_to_menu() {
        let h = harness(MockRepository::new().failing_reads(), Duration::from_secs(3600));
        say(&h, "u1", "1").await;
        say(&h, "u1", "2").await;
        let replies = say(&h, "u1", "1").await;
        assert!(!replies.is_empty());
        assert_eq!(state_of(&h, "u1").await, BotState::SchemesMenu);
    }

    #[tokio::test]
    async fn send_failures_do_not_stop_the_session() {
        let h = harness(MockRepository::new(), Duration::from_secs(3600));
        h.messenger.fail_sends();
        let replies = say(&h, "u1", "2").await;
        assert!(!replies.is_empty());
        assert_eq!(state_of(&h, "u1").await, BotState::MainMenu);
        assert_eq!(h.repository.saved_users().len(), 1);
    }

    #[tokio::test]
    async fn users_are_independent() {
        let h = harness(MockRepository::new(), Duration::from_secs(3600));
        let (a, b) = tokio::join!(say(&h, "a", "1"), say(&h, "b", "3"));
        assert!(!a.is_empty() && !b.is_empty());
        say(&h, "a", "1").await;

        assert_eq!(state_of(&h, "a").await, BotState::ComplaintsMenu);
        assert_eq!(state_of(&h, "b").await, BotState::MainMenu);
        assert_eq!(h.manager.active_sessions().await, 2);
    }

    #[tokio::test]
    async fn concurrent_first_messages_share_one_actor() {
        let h = harness(MockRepository::new(), Duration::from_secs(3600));
        let (a, b) = tokio::join!(say(&h, "u1", "1"), say(&h, "u1", "1"));
        assert!(!a.is_empty() && !b.is_empty());
        assert_eq!(h.manager.active_sessions().await, 1);
        // One message picked English, the other opened complaints
        assert_eq!(state_of(&h, "u1").await, BotState::ComplaintsMenu);
    }

    #[tokio::test]
    async fn sweep_evicts_idle_sessions_and_actors() {
        let h = harness(MockRepository::new(), Duration::ZERO);
        say(&h, "u1", "1").await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert_eq!(h.manager.sweep_idle().await, 1);
        assert!(h.store.load(&UserId::new("u1")).await.unwrap().is_none());
        assert_eq!(h.manager.active_sessions().await, 0);

        // The next message starts over with a fresh session
        let replies = say(&h, "u1", "hello").await;
        assert!(!replies.is_empty());
        assert_eq!(state_of(&h, "u1").await, BotState::LanguageSelection);
    }

    #[tokio::test]
    async fn sweep_skips_session_with_message_in_flight() {
        let h = harness(MockRepository::new(), Duration::ZERO);
        say(&h, "u1", "1").await;

        // Park the actor halfway through its next message
        h.messenger.hold();
        let first = {
            let manager = h.manager.clone();
            tokio::spawn(async move { manager.route(UserId::new("u1"), "1".into(), None).await })
        };
        h.messenger.wait_entered().await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert_eq!(h.manager.sweep_idle().await, 0);
        assert!(h.store.load(&UserId::new("u1")).await.unwrap().is_some());
        assert_eq!(h.manager.active_sessions().await, 1);

        // A message arriving after the sweep queues on the same actor
        let second = {
            let manager = h.manager.clone();
            tokio::spawn(async move { manager.route(UserId::new("u1"), "2".into(), None).await })
        };
        h.messenger.release();
        assert!(!first.await.unwrap().unwrap().is_empty());
        assert!(!second.await.unwrap().unwrap().is_empty());

        let session = h.manager.session(&UserId::new("u1")).await.unwrap().unwrap();
        assert_eq!(session.state, BotState::ComplaintStatusMobile);
        assert_eq!(session.language, Some(Language::English));
        assert_eq!(h.manager.active_sessions().await, 1);

        // Once the work drains the session is idle again
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(h.manager.sweep_idle().await, 1);
        assert_eq!(h.manager.active_sessions().await, 0);
    }

    #[tokio::test]
    async fn sweeper_stops_on_cancel() {
        let h = harness(MockRepository::new(), Duration::from_secs(3600));
        let cancel = CancellationToken::new();
        let task = h.manager.spawn_sweeper(Duration::from_millis(10), cancel.clone());
        cancel.cancel();
        task.await.unwrap();
    }
}
