//! The state router
//!
//! Pure: given a session, the deployment context and one event, it returns
//! the next session and the effects to run. Repository work is requested
//! through effects and its result arrives as a later event, so the session
//! never moves past a write that has not committed.

use super::effect::{ContactField, Effect, Lookup, Submission};
use super::event::{Event, LookupOutcome};
use super::form::{
    AreaProblemDraft, ComplaintDraft, FormData, LetterDraft, PersonalDraft, ProfileDraft, SurveyDraft,
};
use super::render::{self, Ui};
use super::state::{BotContext, BotState, Session};
use crate::content::{Language, MenuId, MessageId};
use crate::pagination::{self, Page};
use crate::repository::{
    ComplaintType, EventFilter, Gender, LetterType, ProblemStatus, SavedRecord, SchemeRecord,
    SocialCategory, SurveyRecord, UserProfile, VoterSearchKind, WorkStatus,
};
use crate::validate;
use thiserror::Error;

/// Restarts language selection from anywhere but the photo step
const RESTART_TOKEN: &str = "0";
/// Returns to the main menu
const ROOT_TOKEN: &str = "9";
/// Files a complaint without a photo, or leaves a survey question unanswered
const SKIP_WORD: &str = "skip";

const AREA_PROBLEM_LIMIT: usize = 10;
const MY_AREA_PROBLEM_LIMIT: usize = 5;

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    pub session: Session,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Reply texts in send order
    pub fn replies(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Reply { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Internal events that do not fit the session they were delivered to
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("{event} is not expected in state {state}")]
    UnexpectedEvent { event: &'static str, state: BotState },
    #[error("lookup outcome does not answer {0}")]
    OutcomeMismatch(String),
}

/// Pure transition function
pub fn transition(
    session: &Session,
    ctx: &BotContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    let mut next = session.clone();
    let effects = match event {
        Event::UserInput {
            text,
            user_name,
            received_at,
        } => {
            next.last_active = received_at;
            route(&mut next, ctx, text.trim(), user_name)
        }
        Event::LookupCompleted { lookup, outcome } => lookup_completed(&mut next, ctx, &lookup, outcome)?,
        Event::LookupFailed { lookup, .. } => lookup_failed(&mut next, ctx, &lookup)?,
        Event::SubmissionCompleted { submission, record } => {
            submission_finished(&mut next, ctx, &submission, record.as_ref())?
        }
        Event::SubmissionFailed { submission, .. } => submission_finished(&mut next, ctx, &submission, None)?,
    };

    let changed = next != *session;
    let result = TransitionResult::new(next).with_effects(effects);
    Ok(if changed {
        result.with_effect(Effect::PersistSession)
    } else {
        result
    })
}

// ============================================================================
// Routing
// ============================================================================

/// Interrupt tokens first, then the language gate, then the state's handler
fn route(s: &mut Session, ctx: &BotContext, input: &str, user_name: Option<String>) -> Vec<Effect> {
    if input == RESTART_TOKEN && s.state != BotState::ComplaintPhoto {
        return restart_language(s, ctx);
    }

    let Some(lang) = s.language else {
        return if s.state == BotState::LanguageSelection {
            select_language(s, ctx, input, user_name)
        } else {
            restart_language(s, ctx)
        };
    };
    let ui = Ui::new(ctx.catalog.as_ref(), lang);

    if input == ROOT_TOKEN && s.state != BotState::MainMenu {
        return main_menu_root(s, ui);
    }

    match s.state {
        BotState::LanguageSelection => select_language(s, ctx, input, user_name),
        BotState::MainMenu => main_menu(s, ui, input),
        BotState::ComplaintsMenu => complaints_menu(s, ui, input),
        BotState::SchemesMenu => schemes_menu(s, ui, input),
        BotState::VoterMenu => voter_menu(s, ui, input),
        BotState::EventsMenu => events_menu(ui, input),
        BotState::WorksMenu => works_menu(ui, input),
        BotState::AreaProblemsMenu => area_problems_menu(s, ui, input),
        BotState::ContactMenu => contact_menu(ui, input),
        BotState::OtherMenu => other_menu(s, ui, input),

        BotState::ComplaintName
        | BotState::ComplaintMobile
        | BotState::ComplaintType
        | BotState::ComplaintDescription
        | BotState::ComplaintLocation
        | BotState::ComplaintPhoto => complaint_form(s, ctx, ui, input),

        BotState::ComplaintStatusMobile | BotState::ComplaintListMobile => complaint_lookup(s.state, ui, input),

        BotState::SchemeSearch => scheme_search(ui, input),
        BotState::SchemeMore { offset } => scheme_more(s, ui, input, offset),
        BotState::SchemeProfileAge | BotState::SchemeProfileGender | BotState::SchemeProfileCategory => {
            scheme_profile(s, ctx, ui, input)
        }

        BotState::VoterSearch => voter_search(ui, input),

        BotState::AreaProblemDescription | BotState::AreaProblemLocation => area_problem_form(s, ctx, ui, input),

        BotState::LetterType
        | BotState::LetterName
        | BotState::LetterMobile
        | BotState::LetterAddress
        | BotState::LetterPurpose => letter_form(s, ctx, ui, input),

        BotState::PersonalName | BotState::PersonalMobile | BotState::PersonalDescription => {
            personal_form(s, ctx, ui, input)
        }

        BotState::Survey { index } => survey_step(s, ctx, ui, input, index),

        BotState::Unknown => restart_language(s, ctx),
    }
}

fn ui_for<'a>(s: &Session, ctx: &'a BotContext) -> Ui<'a> {
    Ui::new(ctx.catalog.as_ref(), s.language.unwrap_or(Language::English))
}

fn reply(text: impl Into<String>) -> Effect {
    Effect::reply(text)
}

/// Enter `state` and show `menu`
fn open_menu(s: &mut Session, ui: Ui<'_>, state: BotState, menu: MenuId) -> Vec<Effect> {
    s.enter(state);
    vec![reply(ui.menu(menu))]
}

/// Enter `state` and ask for its field
fn prompt(s: &mut Session, ui: Ui<'_>, state: BotState, message: MessageId) -> Vec<Effect> {
    s.enter(state);
    vec![reply(ui.msg(message))]
}

/// Discard any previous flow and begin a new one
fn start_flow(s: &mut Session, ui: Ui<'_>, form: FormData, state: BotState, message: MessageId) -> Vec<Effect> {
    s.abandon_flow();
    s.form = form;
    prompt(s, ui, state, message)
}

/// Re-ask the current field with a notice in front
fn retry(ui: Ui<'_>, notice: MessageId, message: MessageId) -> Vec<Effect> {
    vec![reply(ui.with_notice(notice, &ui.msg(message)))]
}

/// Show `text`, then land on `state` and show its menu
fn show_and_return(s: &mut Session, ui: Ui<'_>, text: String, state: BotState, menu: MenuId) -> Vec<Effect> {
    s.enter(state);
    vec![reply(text), reply(ui.menu(menu))]
}

/// Also used as recovery for sessions whose stored data no longer fits
fn restart_language(s: &mut Session, ctx: &BotContext) -> Vec<Effect> {
    s.abandon_flow();
    s.enter(BotState::LanguageSelection);
    vec![reply(ui_for(s, ctx).menu(MenuId::Language))]
}

fn main_menu_root(s: &mut Session, ui: Ui<'_>) -> Vec<Effect> {
    s.abandon_flow();
    open_menu(s, ui, BotState::MainMenu, MenuId::Main)
}

// ============================================================================
// Menus
// ============================================================================

fn select_language(s: &mut Session, ctx: &BotContext, input: &str, user_name: Option<String>) -> Vec<Effect> {
    let Some(lang) = Language::from_choice(input) else {
        return vec![reply(ui_for(s, ctx).invalid(MenuId::Language))];
    };
    s.language = Some(lang);
    s.enter(BotState::MainMenu);
    let ui = Ui::new(ctx.catalog.as_ref(), lang);
    vec![
        Effect::SaveUser {
            profile: UserProfile {
                language: lang,
                name: user_name,
            },
        },
        reply(ui.msg(MessageId::LanguageSelected)),
        reply(ui.menu(MenuId::Main)),
    ]
}

const MAIN_OPTIONS: [(&str, (BotState, MenuId)); 8] = [
    ("1", (BotState::ComplaintsMenu, MenuId::Complaints)),
    ("2", (BotState::SchemesMenu, MenuId::Schemes)),
    ("3", (BotState::VoterMenu, MenuId::Voter)),
    ("4", (BotState::EventsMenu, MenuId::Events)),
    ("5", (BotState::WorksMenu, MenuId::Works)),
    ("6", (BotState::AreaProblemsMenu, MenuId::AreaProblems)),
    ("7", (BotState::ContactMenu, MenuId::Contact)),
    ("8", (BotState::OtherMenu, MenuId::Other)),
];

fn main_menu(s: &mut Session, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    match validate::choice(input, &MAIN_OPTIONS) {
        Some((state, menu)) => open_menu(s, ui, state, menu),
        None if input == ROOT_TOKEN => vec![reply(ui.menu(MenuId::Main))],
        None => vec![reply(ui.invalid(MenuId::Main))],
    }
}

fn complaints_menu(s: &mut Session, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    match input {
        "1" => start_flow(
            s,
            ui,
            FormData::Complaint(ComplaintDraft::default()),
            BotState::ComplaintName,
            MessageId::ComplaintNamePrompt,
        ),
        "2" => prompt(s, ui, BotState::ComplaintStatusMobile, MessageId::StatusMobilePrompt),
        "3" => prompt(s, ui, BotState::ComplaintListMobile, MessageId::ListMobilePrompt),
        _ => vec![reply(ui.invalid(MenuId::Complaints))],
    }
}

fn schemes_menu(s: &mut Session, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    match input {
        "1" => vec![Effect::Lookup(Lookup::SchemePage { offset: 0 })],
        "2" => prompt(s, ui, BotState::SchemeSearch, MessageId::SchemeSearchPrompt),
        "3" => start_flow(
            s,
            ui,
            FormData::SchemeProfile(ProfileDraft::default()),
            BotState::SchemeProfileAge,
            MessageId::SchemeAgePrompt,
        ),
        "4" => vec![reply(ui.msg(MessageId::HowToApply)), reply(ui.menu(MenuId::Schemes))],
        _ => vec![reply(ui.invalid(MenuId::Schemes))],
    }
}

fn voter_menu(s: &mut Session, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    match input {
        "1" => prompt(s, ui, BotState::VoterSearch, MessageId::VoterSearchPrompt),
        "2" | "3" | "4" => vec![reply(ui.msg(MessageId::ComingSoon)), reply(ui.menu(MenuId::Voter))],
        _ => vec![reply(ui.invalid(MenuId::Voter))],
    }
}

fn events_menu(ui: Ui<'_>, input: &str) -> Vec<Effect> {
    const FILTERS: [(&str, EventFilter); 3] = [
        ("1", EventFilter::Upcoming),
        ("2", EventFilter::Today),
        ("3", EventFilter::Past),
    ];
    match validate::choice(input, &FILTERS) {
        Some(filter) => vec![Effect::Lookup(Lookup::Events(filter))],
        None if input == "4" => vec![reply(ui.msg(MessageId::EventGallery)), reply(ui.menu(MenuId::Events))],
        None => vec![reply(ui.invalid(MenuId::Events))],
    }
}

fn works_menu(ui: Ui<'_>, input: &str) -> Vec<Effect> {
    const STATUSES: [(&str, WorkStatus); 3] = [
        ("1", WorkStatus::InProgress),
        ("2", WorkStatus::Completed),
        ("3", WorkStatus::Planned),
    ];
    match validate::choice(input, &STATUSES) {
        Some(status) => vec![Effect::Lookup(Lookup::Works(status))],
        None if input == "4" => vec![Effect::Lookup(Lookup::Improvements)],
        None => vec![reply(ui.invalid(MenuId::Works))],
    }
}

fn area_problems_menu(s: &mut Session, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let lookup = match input {
        "1" => {
            return start_flow(
                s,
                ui,
                FormData::AreaProblem(AreaProblemDraft::default()),
                BotState::AreaProblemDescription,
                MessageId::AreaProblemDescriptionPrompt,
            )
        }
        "2" => Lookup::AreaProblems {
            status: ProblemStatus::Pending,
            limit: AREA_PROBLEM_LIMIT,
        },
        "3" => Lookup::AreaProblemsByUser {
            limit: MY_AREA_PROBLEM_LIMIT,
        },
        "4" => Lookup::AreaProblems {
            status: ProblemStatus::Resolved,
            limit: AREA_PROBLEM_LIMIT,
        },
        _ => return vec![reply(ui.invalid(MenuId::AreaProblems))],
    };
    vec![Effect::Lookup(lookup)]
}

fn contact_menu(ui: Ui<'_>, input: &str) -> Vec<Effect> {
    const FIELDS: [(&str, ContactField); 5] = [
        ("1", ContactField::Address),
        ("2", ContactField::Hours),
        ("3", ContactField::Phone),
        ("4", ContactField::Email),
        ("5", ContactField::Social),
    ];
    match validate::choice(input, &FIELDS) {
        Some(field) => vec![Effect::Lookup(Lookup::Contact(field))],
        None => vec![reply(ui.invalid(MenuId::Contact))],
    }
}

fn other_menu(s: &mut Session, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let notice = match input {
        "1" => return vec![Effect::Lookup(Lookup::LetterTypes)],
        "2" => {
            return start_flow(
                s,
                ui,
                FormData::Personal(PersonalDraft::default()),
                BotState::PersonalName,
                MessageId::PersonalNamePrompt,
            )
        }
        "3" => MessageId::MeetingDiary,
        "4" => MessageId::PhotoGallery,
        "5" => MessageId::WardBudget,
        "6" => return vec![Effect::Lookup(Lookup::ActiveSurvey)],
        _ => return vec![reply(ui.invalid(MenuId::Other))],
    };
    vec![reply(ui.msg(notice)), reply(ui.menu(MenuId::Other))]
}

// ============================================================================
// Forms
// ============================================================================

const COMPLAINT_TYPES: [(&str, ComplaintType); 7] = [
    ("1", ComplaintType::Road),
    ("2", ComplaintType::Water),
    ("3", ComplaintType::StreetLight),
    ("4", ComplaintType::Cleaning),
    ("5", ComplaintType::StreetLight),
    ("6", ComplaintType::Drainage),
    ("7", ComplaintType::Other),
];

const GENDERS: [(&str, Gender); 3] = [("1", Gender::Male), ("2", Gender::Female), ("3", Gender::Other)];

const CATEGORIES: [(&str, SocialCategory); 4] = [
    ("1", SocialCategory::General),
    ("2", SocialCategory::Obc),
    ("3", SocialCategory::Sc),
    ("4", SocialCategory::St),
];

fn complaint_form(s: &mut Session, ctx: &BotContext, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let FormData::Complaint(mut draft) = std::mem::take(&mut s.form) else {
        return restart_language(s, ctx);
    };

    let effects = match s.state {
        BotState::ComplaintName => {
            draft.name = Some(validate::free_text(input));
            prompt(s, ui, BotState::ComplaintMobile, MessageId::ComplaintMobilePrompt)
        }
        BotState::ComplaintMobile => match validate::mobile(input) {
            Some(mobile) => {
                draft.mobile = Some(mobile);
                prompt(s, ui, BotState::ComplaintType, MessageId::ComplaintTypePrompt)
            }
            None => retry(ui, MessageId::InvalidMobile, MessageId::ComplaintMobilePrompt),
        },
        BotState::ComplaintType => match validate::choice(input, &COMPLAINT_TYPES) {
            Some(kind) => {
                draft.kind = Some(kind);
                prompt(s, ui, BotState::ComplaintDescription, MessageId::ComplaintDescriptionPrompt)
            }
            None => retry(ui, MessageId::InvalidOption, MessageId::ComplaintTypePrompt),
        },
        BotState::ComplaintDescription => {
            draft.description = Some(validate::free_text(input));
            prompt(s, ui, BotState::ComplaintLocation, MessageId::ComplaintLocationPrompt)
        }
        BotState::ComplaintLocation => {
            draft.location = Some(validate::free_text(input));
            prompt(s, ui, BotState::ComplaintPhoto, MessageId::ComplaintPhotoPrompt)
        }
        BotState::ComplaintPhoto => {
            // Any reply that is not a link files the complaint without a photo
            let photo = if input == RESTART_TOKEN || input.eq_ignore_ascii_case(SKIP_WORD) {
                None
            } else {
                validate::photo_url(input)
            };
            let Some(complaint) = draft.submission(photo, &s.user_id, ctx) else {
                return restart_language(s, ctx);
            };
            vec![Effect::Submit(Submission::Complaint(complaint))]
        }
        _ => return restart_language(s, ctx),
    };

    s.form = FormData::Complaint(draft);
    effects
}

fn complaint_lookup(state: BotState, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let status = state == BotState::ComplaintStatusMobile;
    let Some(mobile) = validate::mobile(input) else {
        let prompt = if status {
            MessageId::StatusMobilePrompt
        } else {
            MessageId::ListMobilePrompt
        };
        return retry(ui, MessageId::InvalidMobile, prompt);
    };
    let lookup = if status {
        Lookup::ComplaintStatus { mobile }
    } else {
        Lookup::ComplaintList { mobile }
    };
    vec![Effect::Lookup(lookup)]
}

fn scheme_search(ui: Ui<'_>, input: &str) -> Vec<Effect> {
    match validate::search_query(input) {
        Some(query) => vec![Effect::Lookup(Lookup::SchemeSearch { query })],
        None => retry(ui, MessageId::SearchTooShort, MessageId::SchemeSearchPrompt),
    }
}

fn scheme_more(s: &mut Session, ui: Ui<'_>, input: &str, offset: usize) -> Vec<Effect> {
    if pagination::is_continuation(input) {
        vec![Effect::Lookup(Lookup::SchemePage { offset })]
    } else {
        open_menu(s, ui, BotState::SchemesMenu, MenuId::Schemes)
    }
}

fn scheme_profile(s: &mut Session, ctx: &BotContext, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let FormData::SchemeProfile(mut draft) = std::mem::take(&mut s.form) else {
        return restart_language(s, ctx);
    };

    let effects = match s.state {
        BotState::SchemeProfileAge => match validate::age(input) {
            Some(age) => {
                draft.age = Some(age);
                prompt(s, ui, BotState::SchemeProfileGender, MessageId::SchemeGenderPrompt)
            }
            None => retry(ui, MessageId::InvalidAge, MessageId::SchemeAgePrompt),
        },
        BotState::SchemeProfileGender => match validate::choice(input, &GENDERS) {
            Some(gender) => {
                draft.gender = Some(gender);
                prompt(s, ui, BotState::SchemeProfileCategory, MessageId::SchemeCategoryPrompt)
            }
            None => retry(ui, MessageId::InvalidOption, MessageId::SchemeGenderPrompt),
        },
        BotState::SchemeProfileCategory => match validate::choice(input, &CATEGORIES) {
            Some(category) => {
                let Some(exclude_keywords) = draft.exclude_keywords(category) else {
                    return restart_language(s, ctx);
                };
                vec![Effect::Lookup(Lookup::SchemesForProfile { exclude_keywords })]
            }
            None => retry(ui, MessageId::InvalidOption, MessageId::SchemeCategoryPrompt),
        },
        _ => return restart_language(s, ctx),
    };

    s.form = FormData::SchemeProfile(draft);
    effects
}

/// Ten digits search by mobile, three letters then digits by card number
fn voter_search_kind(query: &str) -> VoterSearchKind {
    if validate::mobile(query).is_some() {
        return VoterSearchKind::Mobile;
    }
    let upper = query.to_uppercase();
    let mut chars = upper.chars();
    let prefix = chars.by_ref().take(3).filter(char::is_ascii_uppercase).count();
    if prefix == 3 && chars.next().is_some_and(|c| c.is_ascii_digit()) {
        VoterSearchKind::VoterId
    } else {
        VoterSearchKind::Name
    }
}

fn voter_search(ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let Some(query) = validate::search_query(input) else {
        return retry(ui, MessageId::SearchTooShort, MessageId::VoterSearchPrompt);
    };
    let kind = voter_search_kind(&query);
    vec![Effect::Lookup(Lookup::Voters { query, kind })]
}

fn area_problem_form(s: &mut Session, ctx: &BotContext, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let FormData::AreaProblem(mut draft) = std::mem::take(&mut s.form) else {
        return restart_language(s, ctx);
    };

    let effects = match s.state {
        BotState::AreaProblemDescription => {
            draft.description = Some(validate::free_text(input));
            prompt(s, ui, BotState::AreaProblemLocation, MessageId::AreaProblemLocationPrompt)
        }
        BotState::AreaProblemLocation => {
            let Some(problem) = draft.submission(validate::free_text(input), &s.user_id, ctx) else {
                return restart_language(s, ctx);
            };
            vec![Effect::Submit(Submission::AreaProblem(problem))]
        }
        _ => return restart_language(s, ctx),
    };

    s.form = FormData::AreaProblem(draft);
    effects
}

fn letter_form(s: &mut Session, ctx: &BotContext, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let FormData::Letter(mut draft) = std::mem::take(&mut s.form) else {
        return restart_language(s, ctx);
    };

    let effects = match s.state {
        BotState::LetterType => {
            let types = &s.scratch.letter_types;
            match validate::index(input, types.len()).and_then(|i| types.get(i)) {
                Some(letter) => {
                    let display = render::letter_type_name(ui, letter);
                    draft.letter_type = Some(letter.name.clone());
                    s.enter(BotState::LetterName);
                    vec![reply(ui.fill(MessageId::LetterNamePrompt, &[("kind", &display)]))]
                }
                None => vec![reply(ui.with_notice(
                    MessageId::InvalidOption,
                    &render::letter_types(ui, types),
                ))],
            }
        }
        BotState::LetterName => {
            draft.name = Some(validate::free_text(input));
            prompt(s, ui, BotState::LetterMobile, MessageId::LetterMobilePrompt)
        }
        BotState::LetterMobile => match validate::mobile(input) {
            Some(mobile) => {
                draft.mobile = Some(mobile);
                prompt(s, ui, BotState::LetterAddress, MessageId::LetterAddressPrompt)
            }
            None => retry(ui, MessageId::InvalidMobile, MessageId::LetterMobilePrompt),
        },
        BotState::LetterAddress => {
            draft.address = Some(validate::free_text(input));
            prompt(s, ui, BotState::LetterPurpose, MessageId::LetterPurposePrompt)
        }
        BotState::LetterPurpose => {
            let Some(request) = draft.submission(validate::free_text(input), &s.user_id, ctx) else {
                return restart_language(s, ctx);
            };
            vec![Effect::Submit(Submission::Letter(request))]
        }
        _ => return restart_language(s, ctx),
    };

    s.form = FormData::Letter(draft);
    effects
}

fn personal_form(s: &mut Session, ctx: &BotContext, ui: Ui<'_>, input: &str) -> Vec<Effect> {
    let FormData::Personal(mut draft) = std::mem::take(&mut s.form) else {
        return restart_language(s, ctx);
    };

    let effects = match s.state {
        BotState::PersonalName => {
            draft.name = Some(validate::free_text(input));
            prompt(s, ui, BotState::PersonalMobile, MessageId::PersonalMobilePrompt)
        }
        BotState::PersonalMobile => match validate::mobile(input) {
            Some(mobile) => {
                draft.mobile = Some(mobile);
                prompt(s, ui, BotState::PersonalDescription, MessageId::PersonalDescriptionPrompt)
            }
            None => retry(ui, MessageId::InvalidMobile, MessageId::PersonalMobilePrompt),
        },
        BotState::PersonalDescription => {
            let Some(request) = draft.submission(validate::free_text(input), &s.user_id, ctx) else {
                return restart_language(s, ctx);
            };
            vec![Effect::Submit(Submission::Personal(request))]
        }
        _ => return restart_language(s, ctx),
    };

    s.form = FormData::Personal(draft);
    effects
}

/// Record one survey reply and ask the next question.
///
/// The reply to the last question is not kept in the draft; it goes
/// straight into the submission, so the session stays put until the
/// response is stored.
fn survey_step(s: &mut Session, ctx: &BotContext, ui: Ui<'_>, input: &str, index: usize) -> Vec<Effect> {
    let FormData::Survey(mut draft) = std::mem::take(&mut s.form) else {
        return restart_language(s, ctx);
    };
    let total = draft.questions.len();
    let Some(question) = draft.questions.get(index).cloned() else {
        return restart_language(s, ctx);
    };
    if draft.answers.len() != index {
        return restart_language(s, ctx);
    }

    let mut effects = Vec::new();
    let answer = if input.eq_ignore_ascii_case(SKIP_WORD) {
        None
    } else {
        let Some(answer) = validate::survey_answer(&question.kind, input) else {
            let again = render::survey_question(ui, &question, index, total);
            s.form = FormData::Survey(draft);
            return vec![reply(format!("{}\n\n{again}", render::survey_invalid(ui, &question.kind)))];
        };
        let shown = render::survey_answer(ui, &answer);
        effects.push(reply(ui.fill(MessageId::SurveyAnswerRecorded, &[("answer", &shown)])));
        Some(answer)
    };

    if index + 1 == total {
        let Some(response) = draft.submission(answer, &s.user_id, ctx) else {
            return restart_language(s, ctx);
        };
        effects.push(Effect::Submit(Submission::SurveyResponse(response)));
    } else {
        draft.answers.push(answer);
        if let Some(next) = draft.questions.get(index + 1) {
            effects.push(reply(render::survey_question(ui, next, index + 1, total)));
        }
        s.enter(BotState::Survey { index: index + 1 });
    }

    s.form = FormData::Survey(draft);
    effects
}

// ============================================================================
// Repository results
// ============================================================================

/// Whether `state` is where `lookup` is issued from
fn awaits_lookup(state: BotState, lookup: &Lookup) -> bool {
    match lookup {
        Lookup::ComplaintStatus { .. } => state == BotState::ComplaintStatusMobile,
        Lookup::ComplaintList { .. } => state == BotState::ComplaintListMobile,
        Lookup::SchemePage { .. } => matches!(state, BotState::SchemesMenu | BotState::SchemeMore { .. }),
        Lookup::SchemeSearch { .. } => state == BotState::SchemeSearch,
        Lookup::SchemesForProfile { .. } => state == BotState::SchemeProfileCategory,
        Lookup::Voters { .. } => state == BotState::VoterSearch,
        Lookup::Events(_) => state == BotState::EventsMenu,
        Lookup::Works(_) | Lookup::Improvements => state == BotState::WorksMenu,
        Lookup::AreaProblemsByUser { .. } | Lookup::AreaProblems { .. } => state == BotState::AreaProblemsMenu,
        Lookup::Contact(_) => state == BotState::ContactMenu,
        Lookup::LetterTypes | Lookup::ActiveSurvey => state == BotState::OtherMenu,
    }
}

/// Menu a lookup returns to once its result has been shown
fn lookup_home(lookup: &Lookup) -> (BotState, MenuId) {
    match lookup {
        Lookup::ComplaintStatus { .. } | Lookup::ComplaintList { .. } => (BotState::ComplaintsMenu, MenuId::Complaints),
        Lookup::SchemePage { .. } | Lookup::SchemeSearch { .. } => (BotState::SchemesMenu, MenuId::Schemes),
        Lookup::SchemesForProfile { .. } => (BotState::MainMenu, MenuId::Main),
        Lookup::Voters { .. } => (BotState::VoterMenu, MenuId::Voter),
        Lookup::Events(_) => (BotState::EventsMenu, MenuId::Events),
        Lookup::Works(_) | Lookup::Improvements => (BotState::WorksMenu, MenuId::Works),
        Lookup::AreaProblemsByUser { .. } | Lookup::AreaProblems { .. } => {
            (BotState::AreaProblemsMenu, MenuId::AreaProblems)
        }
        Lookup::Contact(_) => (BotState::ContactMenu, MenuId::Contact),
        Lookup::LetterTypes | Lookup::ActiveSurvey => (BotState::OtherMenu, MenuId::Other),
    }
}

fn lookup_completed(
    s: &mut Session,
    ctx: &BotContext,
    lookup: &Lookup,
    outcome: LookupOutcome,
) -> Result<Vec<Effect>, TransitionError> {
    if !awaits_lookup(s.state, lookup) {
        return Err(TransitionError::UnexpectedEvent {
            event: "lookup_completed",
            state: s.state,
        });
    }
    let ui = ui_for(s, ctx);
    let (home, menu) = lookup_home(lookup);

    let text = match (lookup, outcome) {
        (Lookup::SchemePage { .. }, LookupOutcome::SchemePage(page)) => return Ok(scheme_page(s, ui, &page)),
        (Lookup::LetterTypes, LookupOutcome::LetterTypes(types)) => return Ok(letter_types_loaded(s, ui, types)),
        (Lookup::ActiveSurvey, LookupOutcome::Survey(survey)) => return Ok(survey_loaded(s, ui, survey)),
        (Lookup::SchemesForProfile { .. }, LookupOutcome::Schemes(items)) => {
            s.abandon_flow();
            profile_schemes(ui, &items)
        }
        (Lookup::ComplaintStatus { .. }, LookupOutcome::Complaints(records)) => render::complaint_status(ui, &records),
        (Lookup::ComplaintList { .. }, LookupOutcome::Complaints(records)) => render::complaint_list(ui, &records),
        (Lookup::SchemeSearch { query }, LookupOutcome::Schemes(items)) => search_results(ui, query, &items),
        (Lookup::Voters { .. }, LookupOutcome::Voters(records)) => render::voters(ui, &records),
        (Lookup::Events(_), LookupOutcome::Events(records)) => render::events(ui, &records),
        (Lookup::Works(_), LookupOutcome::Works(records)) => render::works(ui, &records),
        (Lookup::Improvements, LookupOutcome::Improvements(records)) => render::improvements(ui, &records),
        (Lookup::AreaProblemsByUser { .. } | Lookup::AreaProblems { .. }, LookupOutcome::AreaProblems(records)) => {
            render::area_problems(ui, &records)
        }
        (Lookup::Contact(field), LookupOutcome::Contact(info)) => render::contact(ui, *field, info.as_ref()),
        (lookup, _) => return Err(TransitionError::OutcomeMismatch(format!("{lookup:?}"))),
    };
    Ok(show_and_return(s, ui, text, home, menu))
}

fn lookup_failed(s: &mut Session, ctx: &BotContext, lookup: &Lookup) -> Result<Vec<Effect>, TransitionError> {
    if !awaits_lookup(s.state, lookup) {
        return Err(TransitionError::UnexpectedEvent {
            event: "lookup_failed",
            state: s.state,
        });
    }
    let ui = ui_for(s, ctx);
    let (home, menu) = lookup_home(lookup);
    s.abandon_flow();
    Ok(show_and_return(s, ui, ui.msg(MessageId::LookupFailed), home, menu))
}

/// Render a page and offer MORE only when the probe found another one
fn scheme_page(s: &mut Session, ui: Ui<'_>, page: &Page<SchemeRecord>) -> Vec<Effect> {
    if page.items.is_empty() {
        let notice = if page.offset == 0 {
            MessageId::NoSchemes
        } else {
            MessageId::NoMoreSchemes
        };
        return show_and_return(s, ui, ui.msg(notice), BotState::SchemesMenu, MenuId::Schemes);
    }

    let listing = render::schemes(ui, &page.items, page.offset);
    if page.has_more {
        s.enter(BotState::SchemeMore {
            offset: page.next_offset(),
        });
        vec![reply(listing), reply(ui.msg(MessageId::SchemeMorePrompt))]
    } else {
        show_and_return(s, ui, listing, BotState::SchemesMenu, MenuId::Schemes)
    }
}

fn search_results(ui: Ui<'_>, query: &str, items: &[SchemeRecord]) -> String {
    if items.is_empty() {
        return ui.fill(MessageId::NoSchemesForQuery, &[("query", query)]);
    }
    format!(
        "{}\n\n{}",
        ui.fill(MessageId::SchemeSearchResults, &[("query", query)]),
        render::schemes(ui, items, 0)
    )
}

fn profile_schemes(ui: Ui<'_>, items: &[SchemeRecord]) -> String {
    if items.is_empty() {
        return ui.msg(MessageId::NoSchemes);
    }
    format!(
        "{}\n\n{}",
        ui.msg(MessageId::SchemesForProfileHeader),
        render::schemes(ui, items, 0)
    )
}

/// Offer the tenant's letter types and start the letter form
fn letter_types_loaded(s: &mut Session, ui: Ui<'_>, types: Vec<LetterType>) -> Vec<Effect> {
    if types.is_empty() {
        return show_and_return(s, ui, ui.msg(MessageId::NoLetterTypes), BotState::OtherMenu, MenuId::Other);
    }
    let listing = render::letter_types(ui, &types);
    s.abandon_flow();
    s.form = FormData::Letter(LetterDraft::default());
    s.scratch.letter_types = types;
    s.enter(BotState::LetterType);
    vec![reply(listing)]
}

/// Start the survey at its first question, or say there is none
fn survey_loaded(s: &mut Session, ui: Ui<'_>, survey: Option<SurveyRecord>) -> Vec<Effect> {
    let Some(survey) = survey.filter(|survey| !survey.questions.is_empty()) else {
        return show_and_return(s, ui, ui.msg(MessageId::NoActiveSurvey), BotState::OtherMenu, MenuId::Other);
    };
    let draft = SurveyDraft::new(survey);
    let intro = ui.fill(MessageId::SurveyIntro, &[("title", &draft.title)]);
    let mut effects = vec![reply(intro)];
    if let Some(first) = draft.questions.first() {
        effects.push(reply(render::survey_question(ui, first, 0, draft.questions.len())));
    }
    s.abandon_flow();
    s.form = FormData::Survey(draft);
    s.enter(BotState::Survey { index: 0 });
    effects
}

/// Whether `state` is the form step `submission` is sent from
fn sent_from(state: BotState, submission: &Submission) -> bool {
    match submission {
        Submission::Complaint(_) => state == BotState::ComplaintPhoto,
        Submission::AreaProblem(_) => state == BotState::AreaProblemLocation,
        Submission::Letter(_) => state == BotState::LetterPurpose,
        Submission::Personal(_) => state == BotState::PersonalDescription,
        Submission::SurveyResponse(_) => matches!(state, BotState::Survey { .. }),
    }
}

/// Success or failure, a submission ends its flow at the main menu
fn submission_finished(
    s: &mut Session,
    ctx: &BotContext,
    submission: &Submission,
    record: Option<&SavedRecord>,
) -> Result<Vec<Effect>, TransitionError> {
    if !sent_from(s.state, submission) {
        return Err(TransitionError::UnexpectedEvent {
            event: "submission_result",
            state: s.state,
        });
    }
    let ui = ui_for(s, ctx);
    let text = match (submission, record) {
        (_, None) => ui.msg(MessageId::SubmissionFailed),
        (Submission::Complaint(_), Some(saved)) => ui.fill(MessageId::ComplaintRegistered, &[("id", &saved.id)]),
        (Submission::AreaProblem(_), Some(saved)) => ui.fill(MessageId::AreaProblemReported, &[("id", &saved.id)]),
        (Submission::Letter(request), Some(saved)) => ui.fill(
            MessageId::LetterRequested,
            &[("kind", &request.letter_type), ("id", &saved.id)],
        ),
        (Submission::Personal(_), Some(saved)) => {
            ui.fill(MessageId::PersonalRequestReceived, &[("id", &saved.id)])
        }
        (Submission::SurveyResponse(_), Some(_)) => ui.msg(MessageId::SurveyCompleted),
    };
    s.abandon_flow();
    Ok(show_and_return(s, ui, text, BotState::MainMenu, MenuId::Main))
}
