//! Session and conversational state types

use super::form::FormData;
use crate::content::{Catalog, Language};
use crate::repository::LetterType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// User identity
// ============================================================================

/// Transport address of a user, kept exactly as received
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Conversational State
// ============================================================================

/// Where the user is in the menu tree
///
/// The state alone decides which handler receives the next input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotState {
    #[default]
    LanguageSelection,
    MainMenu,

    // Category menus
    ComplaintsMenu,
    SchemesMenu,
    VoterMenu,
    EventsMenu,
    WorksMenu,
    AreaProblemsMenu,
    ContactMenu,
    OtherMenu,

    // Complaint filing
    ComplaintName,
    ComplaintMobile,
    ComplaintType,
    ComplaintDescription,
    ComplaintLocation,
    /// `0` here means "no photo", not "change language"
    ComplaintPhoto,

    // Complaint lookups
    ComplaintStatusMobile,
    ComplaintListMobile,

    // Schemes
    SchemeSearch,
    /// Showing a scheme page; `offset` is where the next page starts
    SchemeMore {
        offset: usize,
    },
    SchemeProfileAge,
    SchemeProfileGender,
    SchemeProfileCategory,

    VoterSearch,

    // Area problem report
    AreaProblemDescription,
    AreaProblemLocation,

    // Letter request
    LetterType,
    LetterName,
    LetterMobile,
    LetterAddress,
    LetterPurpose,

    // Personal request
    PersonalName,
    PersonalMobile,
    PersonalDescription,

    /// Asking survey question `index` (0-based)
    Survey {
        index: usize,
    },

    /// Stored tag that no longer decodes; recovered on the next input
    #[serde(other)]
    Unknown,
}

impl BotState {
    /// Tag used in logs and the session API
    pub fn name(self) -> &'static str {
        match self {
            BotState::LanguageSelection => "language_selection",
            BotState::MainMenu => "main_menu",
            BotState::ComplaintsMenu => "complaints_menu",
            BotState::SchemesMenu => "schemes_menu",
            BotState::VoterMenu => "voter_menu",
            BotState::EventsMenu => "events_menu",
            BotState::WorksMenu => "works_menu",
            BotState::AreaProblemsMenu => "area_problems_menu",
            BotState::ContactMenu => "contact_menu",
            BotState::OtherMenu => "other_menu",
            BotState::ComplaintName => "complaint_name",
            BotState::ComplaintMobile => "complaint_mobile",
            BotState::ComplaintType => "complaint_type",
            BotState::ComplaintDescription => "complaint_description",
            BotState::ComplaintLocation => "complaint_location",
            BotState::ComplaintPhoto => "complaint_photo",
            BotState::ComplaintStatusMobile => "complaint_status_mobile",
            BotState::ComplaintListMobile => "complaint_list_mobile",
            BotState::SchemeSearch => "scheme_search",
            BotState::SchemeMore { .. } => "scheme_more",
            BotState::SchemeProfileAge => "scheme_profile_age",
            BotState::SchemeProfileGender => "scheme_profile_gender",
            BotState::SchemeProfileCategory => "scheme_profile_category",
            BotState::VoterSearch => "voter_search",
            BotState::AreaProblemDescription => "area_problem_description",
            BotState::AreaProblemLocation => "area_problem_location",
            BotState::LetterType => "letter_type",
            BotState::LetterName => "letter_name",
            BotState::LetterMobile => "letter_mobile",
            BotState::LetterAddress => "letter_address",
            BotState::LetterPurpose => "letter_purpose",
            BotState::PersonalName => "personal_name",
            BotState::PersonalMobile => "personal_mobile",
            BotState::PersonalDescription => "personal_description",
            BotState::Survey { .. } => "survey",
            BotState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Session
// ============================================================================

/// Per-flow data that is never part of a submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowScratch {
    /// Letter types offered in this conversation, in display order
    #[serde(default)]
    pub letter_types: Vec<LetterType>,
}

/// One user's conversational position and accumulated form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub language: Option<Language>,
    pub state: BotState,
    /// Breadcrumb only
    pub previous: Option<BotState>,
    #[serde(default)]
    pub form: FormData,
    #[serde(default)]
    pub scratch: FlowScratch,
    pub last_active: DateTime<Utc>,
}

impl Session {
    /// Fresh session for a first contact
    pub fn new(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            language: None,
            state: BotState::LanguageSelection,
            previous: None,
            form: FormData::Empty,
            scratch: FlowScratch::default(),
            last_active: now,
        }
    }

    /// Move to `next`, remembering the current state as the breadcrumb.
    ///
    /// Re-entering the current state leaves the breadcrumb alone.
    pub(crate) fn enter(&mut self, next: BotState) {
        if self.state != next {
            self.previous = Some(std::mem::replace(&mut self.state, next));
        }
    }

    /// Drop any in-progress form and its scratch data
    pub(crate) fn abandon_flow(&mut self) {
        self.form = FormData::Empty;
        self.scratch = FlowScratch::default();
    }
}

// ============================================================================
// Context
// ============================================================================

/// Deployment configuration the router needs (immutable)
#[derive(Debug, Clone)]
pub struct BotContext {
    pub tenant_id: String,
    /// Recorded as the origin channel on submissions
    pub source: String,
    pub catalog: Arc<dyn Catalog>,
}

impl BotContext {
    pub fn new(tenant_id: impl Into<String>, source: impl Into<String>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            source: source.into(),
            catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serializes_as_tagged_json() {
        let json = serde_json::to_value(BotState::SchemeMore { offset: 10 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "scheme_more", "offset": 10}));

        let back: BotState = serde_json::from_value(json).unwrap();
        assert_eq!(back, BotState::SchemeMore { offset: 10 });
    }

    #[test]
    fn unknown_tag_decodes_to_unknown() {
        let state: BotState = serde_json::from_str(r#"{"type":"survey_question"}"#).unwrap();
        assert_eq!(state, BotState::Unknown);
    }

    #[test]
    fn enter_keeps_breadcrumb() {
        let mut session = Session::new(UserId::new("u1"), Utc::now());
        session.enter(BotState::MainMenu);
        session.enter(BotState::ComplaintsMenu);
        assert_eq!(session.state, BotState::ComplaintsMenu);
        assert_eq!(session.previous, Some(BotState::MainMenu));
    }
}
