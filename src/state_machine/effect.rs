//! Effects produced by state transitions

use crate::repository::{
    EventFilter, NewAreaProblem, NewComplaint, NewLetterRequest, NewPersonalRequest,
    NewSurveyResponse, ProblemStatus, UserProfile, VoterSearchKind, WorkStatus,
};

/// Contact record field shown by the contact menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Address,
    Hours,
    Phone,
    Email,
    Social,
}

/// Repository reads a state can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Latest complaint for a mobile number
    ComplaintStatus { mobile: String },
    /// Every complaint for a mobile number
    ComplaintList { mobile: String },
    /// One page of the scheme listing plus the lookahead probe
    SchemePage { offset: usize },
    SchemeSearch { query: String },
    SchemesForProfile { exclude_keywords: Vec<String> },
    Voters { query: String, kind: VoterSearchKind },
    Events(EventFilter),
    Works(WorkStatus),
    Improvements,
    AreaProblemsByUser { limit: usize },
    AreaProblems { status: ProblemStatus, limit: usize },
    Contact(ContactField),
    LetterTypes,
    ActiveSurvey,
}

/// Terminal writes of the form flows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Complaint(NewComplaint),
    AreaProblem(NewAreaProblem),
    Letter(NewLetterRequest),
    Personal(NewPersonalRequest),
    SurveyResponse(NewSurveyResponse),
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Complaint(_) => "complaint",
            Submission::AreaProblem(_) => "area_problem",
            Submission::Letter(_) => "letter_request",
            Submission::Personal(_) => "personal_request",
            Submission::SurveyResponse(_) => "survey_response",
        }
    }
}

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a message to the user
    Reply { text: String },

    /// Persist the updated session
    PersistSession,

    /// Record the user's language choice
    SaveUser { profile: UserProfile },

    /// Read from the repository; the result comes back as an event
    Lookup(Lookup),

    /// Write a completed form; the result comes back as an event
    Submit(Submission),
}

impl Effect {
    pub fn reply(text: impl Into<String>) -> Self {
        Effect::Reply { text: text.into() }
    }
}
