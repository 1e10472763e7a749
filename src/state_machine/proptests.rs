//! Property-based tests for the router
//!
//! These check the routing invariants across arbitrary input.

use super::form::{ComplaintDraft, LetterDraft, ProfileDraft, SurveyDraft};
use super::*;
use crate::content::{Catalog, Language, MenuId, MessageId, StaticCatalog};
use crate::repository::{ComplaintType, QuestionKind, SurveyQuestion, SurveyRecord};
use chrono::Utc;
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> BotContext {
    BotContext::new("tenant-1", "WhatsApp", Arc::new(StaticCatalog))
}

fn session_at(state: BotState, language: Option<Language>, form: FormData) -> Session {
    let mut session = Session::new(UserId::new("user-1"), Utc::now());
    session.state = state;
    session.language = language;
    session.form = form;
    session
}

fn send(session: &Session, text: &str) -> TransitionResult {
    transition(session, &test_context(), Event::user_input(text, Utc::now())).unwrap()
}

/// Menus with the option tokens they accept
const MENUS: [(BotState, MenuId, &[&str]); 9] = [
    (BotState::MainMenu, MenuId::Main, &["1", "2", "3", "4", "5", "6", "7", "8", "9"]),
    (BotState::ComplaintsMenu, MenuId::Complaints, &["1", "2", "3"]),
    (BotState::SchemesMenu, MenuId::Schemes, &["1", "2", "3", "4"]),
    (BotState::VoterMenu, MenuId::Voter, &["1", "2", "3", "4"]),
    (BotState::EventsMenu, MenuId::Events, &["1", "2", "3", "4"]),
    (BotState::WorksMenu, MenuId::Works, &["1", "2", "3", "4"]),
    (BotState::AreaProblemsMenu, MenuId::AreaProblems, &["1", "2", "3", "4"]),
    (BotState::ContactMenu, MenuId::Contact, &["1", "2", "3", "4", "5"]),
    (BotState::OtherMenu, MenuId::Other, &["1", "2", "3", "4", "5", "6"]),
];

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_language() -> impl Strategy<Value = Language> {
    prop_oneof![
        Just(Language::English),
        Just(Language::Marathi),
        Just(Language::Hindi),
    ]
}

fn arb_menu() -> impl Strategy<Value = (BotState, MenuId, &'static [&'static str])> {
    (0..MENUS.len()).prop_map(|i| MENUS[i])
}

fn arb_form_state() -> impl Strategy<Value = BotState> {
    prop_oneof![
        Just(BotState::ComplaintName),
        Just(BotState::ComplaintMobile),
        Just(BotState::ComplaintType),
        Just(BotState::ComplaintDescription),
        Just(BotState::ComplaintLocation),
        Just(BotState::ComplaintPhoto),
        Just(BotState::SchemeProfileAge),
        Just(BotState::SchemeProfileGender),
        Just(BotState::SchemeProfileCategory),
        Just(BotState::AreaProblemDescription),
        Just(BotState::AreaProblemLocation),
        Just(BotState::LetterType),
        Just(BotState::LetterName),
        Just(BotState::LetterMobile),
        Just(BotState::LetterAddress),
        Just(BotState::LetterPurpose),
        Just(BotState::PersonalName),
        Just(BotState::PersonalMobile),
        Just(BotState::PersonalDescription),
        Just(BotState::Survey { index: 0 }),
    ]
}

fn arb_form() -> impl Strategy<Value = FormData> {
    prop_oneof![
        Just(FormData::Empty),
        ("[A-Za-z ]{1,20}", "[0-9]{10}").prop_map(|(name, mobile)| FormData::Complaint(ComplaintDraft {
            name: Some(name),
            mobile: Some(mobile),
            kind: Some(ComplaintType::Water),
            description: None,
            location: None,
        })),
        (1u32..=120).prop_map(|age| FormData::SchemeProfile(ProfileDraft {
            age: Some(age),
            gender: None,
        })),
        "[A-Za-z ]{1,20}".prop_map(|name| FormData::Letter(LetterDraft {
            letter_type: Some("Residence certificate".into()),
            name: Some(name),
            ..LetterDraft::default()
        })),
        arb_question_kind().prop_map(|kind| FormData::Survey(SurveyDraft::new(SurveyRecord {
            id: "S-1".into(),
            title: "Ward survey".into(),
            questions: vec![SurveyQuestion {
                text: "Question".into(),
                kind,
            }],
        }))),
    ]
}

fn arb_question_kind() -> impl Strategy<Value = QuestionKind> {
    prop_oneof![
        Just(QuestionKind::YesNo),
        Just(QuestionKind::Rating),
        Just(QuestionKind::Text),
        Just(QuestionKind::Mcq {
            options: vec!["Water".into(), "Roads".into()],
        }),
    ]
}

fn arb_state() -> impl Strategy<Value = BotState> {
    prop_oneof![
        arb_menu().prop_map(|(state, _, _)| state),
        arb_form_state(),
        Just(BotState::LanguageSelection),
        Just(BotState::ComplaintStatusMobile),
        Just(BotState::ComplaintListMobile),
        Just(BotState::SchemeSearch),
        Just(BotState::VoterSearch),
        Just(BotState::Unknown),
        (0usize..5).prop_map(|page| BotState::SchemeMore { offset: page * 10 }),
    ]
}

fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..=12).prop_map(|n| n.to_string()),
        "[a-zA-Z ]{0,16}",
        "[0-9 -]{0,14}",
        Just("MORE".to_string()),
        Just("skip".to_string()),
        Just("https://cdn.example.org/p.jpg".to_string()),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Without a language every input lands on the language menu
    #[test]
    fn prop_unset_language_shows_language_menu(text in arb_input()) {
        prop_assume!(Language::from_choice(text.trim()).is_none());
        let session = session_at(BotState::LanguageSelection, None, FormData::Empty);
        let result = send(&session, &text);

        prop_assert_eq!(result.session.state, BotState::LanguageSelection);
        prop_assert_eq!(result.session.language, None);
        prop_assert_eq!(&result.session.form, &FormData::Empty);
        prop_assert_eq!(result.session.previous, None);
        let language_menu = StaticCatalog.menu(MenuId::Language, Language::English);
        prop_assert!(result.replies().all(|r| r.contains(language_menu)));
        let touched_repository = result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Lookup(_) | Effect::Submit(_) | Effect::SaveUser { .. }));
        prop_assert!(!touched_repository);
    }

    /// The root token abandons any form, however far it got
    #[test]
    fn prop_root_token_abandons_forms(
        state in arb_form_state(),
        form in arb_form(),
        lang in arb_language(),
    ) {
        let session = session_at(state, Some(lang), form);
        let result = send(&session, "9");

        prop_assert_eq!(result.session.state, BotState::MainMenu);
        prop_assert!(result.session.form.is_empty());
        let root = StaticCatalog.menu(MenuId::Main, lang);
        prop_assert_eq!(result.replies().collect::<Vec<_>>(), vec![root]);
    }

    /// Invalid options leave the menu untouched and repeat its prompt
    #[test]
    fn prop_invalid_option_is_idempotent(
        (state, menu, valid) in arb_menu(),
        text in arb_input(),
        form in arb_form(),
        lang in arb_language(),
    ) {
        let token = text.trim();
        prop_assume!(!valid.contains(&token) && token != "0" && token != "9");

        let session = session_at(state, Some(lang), form);
        let result = send(&session, &text);

        prop_assert_eq!(result.session.state, state);
        prop_assert_eq!(&result.session.form, &session.form);
        let expected = format!(
            "{}\n\n{}",
            StaticCatalog.message(MessageId::InvalidOption, lang),
            StaticCatalog.menu(menu, lang)
        );
        prop_assert_eq!(result.replies().collect::<Vec<_>>(), vec![expected.as_str()]);
    }

    /// Repository requests never advance the session ahead of their result
    #[test]
    fn prop_no_optimistic_mutation(
        state in arb_state(),
        form in arb_form(),
        text in arb_input(),
        lang in arb_language(),
    ) {
        let session = session_at(state, Some(lang), form);
        let result = send(&session, &text);
        let requests_repository = result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Lookup(_) | Effect::Submit(_)));
        if requests_repository {
            prop_assert_eq!(result.session.state, session.state);
            prop_assert_eq!(&result.session.form, &session.form);
        }
    }

    /// Every input gets an answer or starts a repository call
    #[test]
    fn prop_input_is_never_dropped(
        state in arb_state(),
        form in arb_form(),
        text in arb_input(),
        lang in proptest::option::of(arb_language()),
    ) {
        let session = session_at(state, lang, form);
        let result = send(&session, &text);
        let answered = result
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Reply { .. } | Effect::Lookup(_) | Effect::Submit(_)));
        prop_assert!(answered);
        if result.session.language.is_none() {
            prop_assert_eq!(result.session.state, BotState::LanguageSelection);
        }
    }
}

#[test]
fn complaint_walkthrough_submits_once() {
    let mut session = Session::new(UserId::new("user-1"), Utc::now());
    let steps = [
        ("1", BotState::MainMenu),
        ("1", BotState::ComplaintsMenu),
        ("1", BotState::ComplaintName),
        ("Asha Rao", BotState::ComplaintMobile),
        ("9876543210", BotState::ComplaintType),
        ("2", BotState::ComplaintDescription),
        ("Leaking pipe", BotState::ComplaintLocation),
        ("Near market", BotState::ComplaintPhoto),
    ];
    for (text, expected) in steps {
        session = send(&session, text).session;
        assert_eq!(session.state, expected, "after {text:?}");
    }

    let result = send(&session, "0");
    let submissions: Vec<_> = result
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::Submit(Submission::Complaint(c)) => Some(c),
            _ => None,
        })
        .collect();
    assert_eq!(submissions.len(), 1);
    let complaint = submissions[0];
    assert_eq!(complaint.kind, ComplaintType::Water);
    assert_eq!(complaint.location, "Near market");
    assert_eq!(complaint.status, "Pending");
    assert_eq!(complaint.user_name, "Asha Rao");
    assert_eq!(complaint.tenant_id, "tenant-1");
}
