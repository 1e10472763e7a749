//! Form accumulators
//!
//! Each multi-step flow owns a draft; a session holds at most one draft at
//! a time, so fields from one flow can never reach another's submission.
//! Drafts turn into repository submissions only when every field is present.

use super::state::{BotContext, UserId};
use crate::repository::{
    ComplaintType, Gender, NewAreaProblem, NewComplaint, NewLetterRequest, NewPersonalRequest,
    NewSurveyResponse, SocialCategory, SurveyAnswer, SurveyQuestion, SurveyRecord,
};
use serde::{Deserialize, Serialize};

const STATUS_PENDING: &str = "Pending";
const URGENCY_MEDIUM: &str = "Medium";

/// Accumulated input for the active flow
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "flow", rename_all = "snake_case")]
pub enum FormData {
    #[default]
    Empty,
    Complaint(ComplaintDraft),
    AreaProblem(AreaProblemDraft),
    Letter(LetterDraft),
    Personal(PersonalDraft),
    SchemeProfile(ProfileDraft),
    Survey(SurveyDraft),
}

impl FormData {
    pub fn is_empty(&self) -> bool {
        matches!(self, FormData::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub kind: Option<ComplaintType>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl ComplaintDraft {
    /// Assemble the complaint; the title reads `"<type> - <location>"`.
    pub fn submission(&self, photo: Option<String>, user_id: &UserId, ctx: &BotContext) -> Option<NewComplaint> {
        let kind = self.kind?;
        let location = self.location.clone()?;
        Some(NewComplaint {
            user_name: self.name.clone()?,
            user_id: user_id.to_string(),
            mobile: self.mobile.clone()?,
            title: format!("{} - {}", kind.label(), location),
            description: self.description.clone()?,
            kind,
            area: location.clone(),
            location,
            status: STATUS_PENDING.to_string(),
            source: ctx.source.clone(),
            urgency: URGENCY_MEDIUM.to_string(),
            photos: photo.into_iter().collect(),
            tenant_id: ctx.tenant_id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AreaProblemDraft {
    pub description: Option<String>,
}

impl AreaProblemDraft {
    pub fn submission(&self, location: String, user_id: &UserId, ctx: &BotContext) -> Option<NewAreaProblem> {
        Some(NewAreaProblem {
            user_id: user_id.to_string(),
            description: self.description.clone()?,
            location,
            status: STATUS_PENDING.to_string(),
            source: ctx.source.clone(),
            tenant_id: ctx.tenant_id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LetterDraft {
    pub letter_type: Option<String>,
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
}

impl LetterDraft {
    pub fn submission(&self, purpose: String, user_id: &UserId, ctx: &BotContext) -> Option<NewLetterRequest> {
        Some(NewLetterRequest {
            user_id: user_id.to_string(),
            letter_type: self.letter_type.clone()?,
            name: self.name.clone()?,
            mobile: self.mobile.clone()?,
            address: self.address.clone()?,
            purpose,
            status: STATUS_PENDING.to_string(),
            source: ctx.source.clone(),
            tenant_id: ctx.tenant_id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalDraft {
    pub name: Option<String>,
    pub mobile: Option<String>,
}

impl PersonalDraft {
    pub fn submission(&self, description: String, user_id: &UserId, ctx: &BotContext) -> Option<NewPersonalRequest> {
        Some(NewPersonalRequest {
            user_id: user_id.to_string(),
            name: self.name.clone()?,
            mobile: self.mobile.clone()?,
            description,
            status: STATUS_PENDING.to_string(),
            source: ctx.source.clone(),
            tenant_id: ctx.tenant_id.clone(),
        })
    }
}

/// A survey being taken, with the answers given so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDraft {
    pub survey_id: String,
    pub title: String,
    pub questions: Vec<SurveyQuestion>,
    /// One entry per question already answered or skipped
    pub answers: Vec<Option<SurveyAnswer>>,
}

impl SurveyDraft {
    pub fn new(survey: SurveyRecord) -> Self {
        Self {
            survey_id: survey.id,
            title: survey.title,
            questions: survey.questions,
            answers: Vec::new(),
        }
    }

    /// Assemble the response once `last` answers the final question
    pub fn submission(
        &self,
        last: Option<SurveyAnswer>,
        user_id: &UserId,
        ctx: &BotContext,
    ) -> Option<NewSurveyResponse> {
        if self.answers.len() + 1 != self.questions.len() {
            return None;
        }
        let answers = self
            .questions
            .iter()
            .map(|q| q.text.clone())
            .zip(self.answers.iter().cloned().chain(std::iter::once(last)))
            .collect();
        Some(NewSurveyResponse {
            survey_id: self.survey_id.clone(),
            user_id: user_id.to_string(),
            answers,
            source: ctx.source.clone(),
            tenant_id: ctx.tenant_id.clone(),
        })
    }
}

/// Answers to the "schemes for me" questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

/// Scheme keywords that never apply to a profile
const WOMEN_ONLY: &[&str] = &["women", "widow", "girl", "maternity", "mahila"];
const SENIOR_ONLY: &[&str] = &["senior citizen", "old age"];
const YOUTH_ONLY: &[&str] = &["student", "scholarship"];
const SC_ONLY: &str = "scheduled caste";
const ST_ONLY: &str = "scheduled tribe";
const OBC_ONLY: &str = "obc";

/// Below this age "senior" schemes are excluded
const SENIOR_AGE: u32 = 60;
/// Above this age student schemes are excluded
const YOUTH_MAX_AGE: u32 = 30;

impl ProfileDraft {
    /// Keywords whose schemes the profile cannot be eligible for
    pub fn exclude_keywords(&self, category: SocialCategory) -> Option<Vec<String>> {
        let age = self.age?;
        let gender = self.gender?;

        let mut keywords: Vec<&str> = Vec::new();
        if gender == Gender::Male {
            keywords.extend(WOMEN_ONLY);
        }
        if age < SENIOR_AGE {
            keywords.extend(SENIOR_ONLY);
        }
        if age > YOUTH_MAX_AGE {
            keywords.extend(YOUTH_ONLY);
        }
        match category {
            SocialCategory::General => keywords.extend([SC_ONLY, ST_ONLY, OBC_ONLY]),
            SocialCategory::Obc => keywords.extend([SC_ONLY, ST_ONLY]),
            SocialCategory::Sc => keywords.extend([ST_ONLY, OBC_ONLY]),
            SocialCategory::St => keywords.extend([SC_ONLY, OBC_ONLY]),
        }
        Some(keywords.into_iter().map(String::from).collect())
    }
}
