//! Records read from and submissions written to the repository

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::Language;

// ============================================================================
// Enumerations shared by menus and storage
// ============================================================================

/// Stored complaint categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintType {
    Road,
    Water,
    StreetLight,
    Cleaning,
    Drainage,
    Other,
}

impl ComplaintType {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintType::Road => "Road",
            ComplaintType::Water => "Water",
            ComplaintType::StreetLight => "StreetLight",
            ComplaintType::Cleaning => "Cleaning",
            ComplaintType::Drainage => "Drainage",
            ComplaintType::Other => "Other",
        }
    }

    /// Human label used in the complaint title
    pub fn label(self) -> &'static str {
        match self {
            ComplaintType::Road => "Road",
            ComplaintType::Water => "Water Supply",
            ComplaintType::StreetLight => "Street Light",
            ComplaintType::Cleaning => "Cleaning",
            ComplaintType::Drainage => "Drainage",
            ComplaintType::Other => "Other",
        }
    }
}

impl fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialCategory {
    General,
    Obc,
    Sc,
    St,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoterSearchKind {
    Name,
    Mobile,
    VoterId,
}

impl VoterSearchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VoterSearchKind::Name => "name",
            VoterSearchKind::Mobile => "mobile",
            VoterSearchKind::VoterId => "voter_id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFilter {
    Upcoming,
    Today,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkStatus {
    InProgress,
    Completed,
    Planned,
}

impl WorkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkStatus::InProgress => "In Progress",
            WorkStatus::Completed => "Completed",
            WorkStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemStatus {
    Pending,
    Resolved,
}

impl ProblemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProblemStatus::Pending => "Pending",
            ProblemStatus::Resolved => "Resolved",
        }
    }
}

// ============================================================================
// Read models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub language: Language,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub id: String,
    pub kind: String,
    pub status: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Parameters for a scheme listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchemeQuery {
    pub limit: usize,
    pub offset: usize,
    pub search: Option<String>,
    pub exclude_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub id: String,
    pub name: String,
    pub name_mr: Option<String>,
    pub description: Option<String>,
    pub description_mr: Option<String>,
    pub benefits: Option<String>,
    pub benefits_mr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub name: String,
    pub name_mr: Option<String>,
    pub voter_id: Option<String>,
    pub age: Option<u32>,
    pub ward: Option<String>,
    pub booth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub title: String,
    pub status: String,
    pub budget: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementRecord {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaProblemRecord {
    pub id: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Office contact fields; any may be missing for a tenant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: Option<String>,
    pub office_hours: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub social: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterType {
    pub name: String,
    pub name_localized: Option<String>,
}

/// How a survey question is answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    YesNo,
    Mcq { options: Vec<String> },
    /// Whole number from 1 to 5
    Rating,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub text: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: String,
    pub title: String,
    pub questions: Vec<SurveyQuestion>,
}

/// Accepted answer to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurveyAnswer {
    Rating(u8),
    Text(String),
}

/// Identifier handed back after a successful save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: String,
}

// ============================================================================
// Submissions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComplaint {
    pub user_name: String,
    pub user_id: String,
    pub mobile: String,
    pub title: String,
    pub description: String,
    pub kind: ComplaintType,
    pub area: String,
    pub location: String,
    pub status: String,
    pub source: String,
    pub urgency: String,
    pub photos: Vec<String>,
    pub tenant_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAreaProblem {
    pub user_id: String,
    pub description: String,
    pub location: String,
    pub status: String,
    pub source: String,
    pub tenant_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLetterRequest {
    pub user_id: String,
    pub letter_type: String,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub purpose: String,
    pub status: String,
    pub source: String,
    pub tenant_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPersonalRequest {
    pub user_id: String,
    pub name: String,
    pub mobile: String,
    pub description: String,
    pub status: String,
    pub source: String,
    pub tenant_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurveyResponse {
    pub survey_id: String,
    pub user_id: String,
    /// Question text with its answer, in question order; `None` when skipped
    pub answers: Vec<(String, Option<SurveyAnswer>)>,
    pub source: String,
    pub tenant_id: String,
}
