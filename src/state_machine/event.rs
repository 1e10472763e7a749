//! Events that drive a session

use super::effect::{Lookup, Submission};
use crate::pagination::Page;
use crate::repository::{
    AreaProblemRecord, ComplaintRecord, ContactInfo, EventRecord, ImprovementRecord, LetterType,
    SavedRecord, SchemeRecord, SurveyRecord, VoterRecord, WorkRecord,
};
use chrono::{DateTime, Utc};

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    UserInput {
        text: String,
        /// Display name reported by the transport, if any
        user_name: Option<String>,
        received_at: DateTime<Utc>,
    },

    // Repository events
    LookupCompleted {
        lookup: Lookup,
        outcome: LookupOutcome,
    },
    LookupFailed {
        lookup: Lookup,
        message: String,
    },
    SubmissionCompleted {
        submission: Submission,
        /// `None` when the store accepted the write but returned no record
        record: Option<SavedRecord>,
    },
    SubmissionFailed {
        submission: Submission,
        message: String,
    },
}

impl Event {
    pub fn user_input(text: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Event::UserInput {
            text: text.into(),
            user_name: None,
            received_at,
        }
    }
}

/// Data returned for a [`Lookup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Complaints(Vec<ComplaintRecord>),
    SchemePage(Page<SchemeRecord>),
    Schemes(Vec<SchemeRecord>),
    Voters(Vec<VoterRecord>),
    Events(Vec<EventRecord>),
    Works(Vec<WorkRecord>),
    Improvements(Vec<ImprovementRecord>),
    AreaProblems(Vec<AreaProblemRecord>),
    Contact(Option<ContactInfo>),
    LetterTypes(Vec<LetterType>),
    /// `None` when the tenant has no active survey
    Survey(Option<SurveyRecord>),
}
