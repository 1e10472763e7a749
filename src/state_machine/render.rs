//! Turning records into localized reply text

use super::effect::ContactField;
use crate::content::{extract_language_part, fill, Catalog, Language, MenuId, MessageId};
use crate::repository::{
    AreaProblemRecord, ComplaintRecord, ContactInfo, EventRecord, ImprovementRecord, LetterType,
    QuestionKind, SchemeRecord, SurveyAnswer, SurveyQuestion, VoterRecord, WorkRecord,
};
use chrono::{DateTime, Utc};
use std::fmt::Write;

const SCHEME_DESCRIPTION_CHARS: usize = 100;
const IMPROVEMENT_DESCRIPTION_CHARS: usize = 80;

/// Catalog bound to one language
#[derive(Clone, Copy)]
pub(crate) struct Ui<'a> {
    catalog: &'a dyn Catalog,
    lang: Language,
}

impl<'a> Ui<'a> {
    pub fn new(catalog: &'a dyn Catalog, lang: Language) -> Self {
        Self { catalog, lang }
    }

    pub fn menu(&self, id: MenuId) -> String {
        self.catalog.menu(id, self.lang).to_string()
    }

    pub fn msg(&self, id: MessageId) -> String {
        self.catalog.message(id, self.lang).to_string()
    }

    pub fn fill(&self, id: MessageId, values: &[(&str, &str)]) -> String {
        fill(self.catalog.message(id, self.lang), values)
    }

    /// Notice followed by the prompt it refers to
    pub fn with_notice(&self, notice: MessageId, prompt: &str) -> String {
        format!("{}\n\n{}", self.msg(notice), prompt)
    }

    /// Invalid-option notice followed by a menu
    pub fn invalid(&self, menu: MenuId) -> String {
        self.with_notice(MessageId::InvalidOption, &self.menu(menu))
    }

    /// Pick the Marathi column when present, otherwise resolve a mixed field
    fn localized(&self, primary: &str, marathi: Option<&str>) -> String {
        match (self.lang, marathi) {
            (Language::Marathi, Some(mr)) if !mr.trim().is_empty() => mr.to_string(),
            _ => extract_language_part(primary, self.lang),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text.get(..idx).unwrap_or(text),
        None => text,
    }
}

fn short_date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

fn status_emoji(status: &str) -> &'static str {
    match status {
        "Pending" => "⏳",
        "In Progress" | "InProgress" => "🔄",
        "Resolved" | "Completed" | "Closed" => "✅",
        "Rejected" => "❌",
        _ => "📋",
    }
}

// ============================================================================
// Complaints
// ============================================================================

/// Latest complaint for a mobile number; `records` is newest first
pub(crate) fn complaint_status(ui: Ui<'_>, records: &[ComplaintRecord]) -> String {
    let Some(latest) = records.first() else {
        return ui.msg(MessageId::NoComplaintsFound);
    };
    let total = records.len().to_string();
    ui.fill(
        MessageId::ComplaintStatus,
        &[
            ("emoji", status_emoji(&latest.status)),
            ("id", &latest.id),
            ("status", &latest.status),
            ("kind", &latest.kind),
            ("description", &latest.description),
            ("total", &total),
        ],
    )
}

pub(crate) fn complaint_list(ui: Ui<'_>, records: &[ComplaintRecord]) -> String {
    if records.is_empty() {
        return ui.msg(MessageId::NoComplaintsFound);
    }
    let mut out = ui.fill(MessageId::ComplaintListHeader, &[("count", &records.len().to_string())]);
    for (i, record) in records.iter().enumerate() {
        out.push_str(&ui.fill(
            MessageId::ComplaintListItem,
            &[
                ("index", &(i + 1).to_string()),
                ("emoji", status_emoji(&record.status)),
                ("id", &record.id),
                ("kind", &record.kind),
                ("status", &record.status),
                ("date", &short_date(record.created_at)),
            ],
        ));
    }
    out.trim_end().to_string()
}

// ============================================================================
// Schemes
// ============================================================================

/// Numbered scheme list; numbering continues from `offset`
pub(crate) fn schemes(ui: Ui<'_>, items: &[SchemeRecord], offset: usize) -> String {
    let mut out = ui.fill(MessageId::SchemeListHeader, &[("count", &items.len().to_string())]);
    for (i, scheme) in items.iter().enumerate() {
        let name = ui.localized(&scheme.name, scheme.name_mr.as_deref());
        let _ = writeln!(out, "{}. *{}*", offset + i + 1, name);
        if let Some(desc) = scheme.description.as_deref().filter(|d| !d.is_empty()) {
            let desc = ui.localized(desc, scheme.description_mr.as_deref());
            let _ = writeln!(out, "   {}...", truncate(&desc, SCHEME_DESCRIPTION_CHARS));
        }
        if let Some(benefits) = scheme.benefits.as_deref().filter(|b| !b.is_empty()) {
            let benefits = ui.localized(benefits, scheme.benefits_mr.as_deref());
            let _ = writeln!(out, "   💰 {benefits}");
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

// ============================================================================
// Voters, events, works
// ============================================================================

pub(crate) fn voters(ui: Ui<'_>, records: &[VoterRecord]) -> String {
    if records.is_empty() {
        return ui.msg(MessageId::NoVotersFound);
    }
    let na = "N/A";
    let mut out = ui.fill(MessageId::VoterResultsHeader, &[("count", &records.len().to_string())]);
    for (i, voter) in records.iter().enumerate() {
        let name = ui.localized(&voter.name, voter.name_mr.as_deref());
        let age = voter.age.map_or_else(|| na.to_string(), |a| a.to_string());
        out.push_str(&ui.fill(
            MessageId::VoterItem,
            &[
                ("index", &(i + 1).to_string()),
                ("name", &name),
                ("card", voter.voter_id.as_deref().unwrap_or(na)),
                ("age", &age),
                ("ward", voter.ward.as_deref().unwrap_or(na)),
                ("booth", voter.booth.as_deref().unwrap_or(na)),
            ],
        ));
    }
    out.trim_end().to_string()
}

pub(crate) fn events(ui: Ui<'_>, records: &[EventRecord]) -> String {
    if records.is_empty() {
        return ui.msg(MessageId::NoEvents);
    }
    let mut out = ui.fill(MessageId::EventsHeader, &[("count", &records.len().to_string())]);
    for (i, event) in records.iter().enumerate() {
        let title = extract_language_part(&event.title, ui.lang);
        let location = event.location.as_deref().unwrap_or("TBA");
        let _ = write!(
            out,
            "{}. *{}*\n   📅 {}\n   📍 {}\n\n",
            i + 1,
            title,
            event.starts_at.format("%d %b %Y"),
            location
        );
    }
    out.trim_end().to_string()
}

pub(crate) fn works(ui: Ui<'_>, records: &[WorkRecord]) -> String {
    if records.is_empty() {
        return ui.msg(MessageId::NoWorks);
    }
    let mut out = ui.fill(MessageId::WorksHeader, &[("count", &records.len().to_string())]);
    for (i, work) in records.iter().enumerate() {
        let budget = work.budget.map_or_else(|| "N/A".to_string(), |b| b.to_string());
        out.push_str(&ui.fill(
            MessageId::WorkItem,
            &[
                ("index", &(i + 1).to_string()),
                ("title", &extract_language_part(&work.title, ui.lang)),
                ("status", &work.status),
                ("budget", &budget),
            ],
        ));
    }
    out.trim_end().to_string()
}

pub(crate) fn improvements(ui: Ui<'_>, records: &[ImprovementRecord]) -> String {
    if records.is_empty() {
        return ui.msg(MessageId::NoImprovements);
    }
    let mut out = ui.fill(MessageId::ImprovementsHeader, &[("count", &records.len().to_string())]);
    for (i, item) in records.iter().enumerate() {
        let title = extract_language_part(&item.title, ui.lang);
        let desc = item.description.as_deref().unwrap_or_default();
        let _ = write!(
            out,
            "{}. *{}*\n   {}...\n\n",
            i + 1,
            title,
            truncate(desc, IMPROVEMENT_DESCRIPTION_CHARS)
        );
    }
    out.trim_end().to_string()
}

// ============================================================================
// Area problems, contact, letters
// ============================================================================

pub(crate) fn area_problems(ui: Ui<'_>, records: &[AreaProblemRecord]) -> String {
    if records.is_empty() {
        return ui.msg(MessageId::NoAreaProblems);
    }
    let mut out = ui.fill(MessageId::AreaProblemsHeader, &[("count", &records.len().to_string())]);
    for (i, problem) in records.iter().enumerate() {
        let _ = write!(
            out,
            "{}. {} #{}\n   {}\n   📍 {}\n   {}\n\n",
            i + 1,
            status_emoji(&problem.status),
            problem.id,
            truncate(&problem.description, SCHEME_DESCRIPTION_CHARS),
            problem.location,
            short_date(problem.created_at)
        );
    }
    out.trim_end().to_string()
}

/// One contact field, falling back to a localized default
pub(crate) fn contact(ui: Ui<'_>, field: ContactField, info: Option<&ContactInfo>) -> String {
    let missing = ui.msg(MessageId::NotAvailable);
    let info = info.cloned().unwrap_or_default();
    let pick = |raw: Option<String>| -> Option<String> {
        raw.filter(|v| !v.trim().is_empty())
            .map(|v| extract_language_part(&v, ui.lang))
    };
    match field {
        ContactField::Address => {
            let address = pick(info.address).unwrap_or_else(|| ui.msg(MessageId::DefaultOfficeAddress));
            ui.fill(MessageId::ContactAddress, &[("value", &address)])
        }
        ContactField::Hours => {
            let hours = pick(info.office_hours).unwrap_or_else(|| ui.msg(MessageId::DefaultOfficeHours));
            ui.fill(MessageId::ContactHours, &[("value", &hours)])
        }
        ContactField::Phone => {
            let office = pick(info.phone).unwrap_or_else(|| missing.clone());
            let mobile = pick(info.mobile).unwrap_or_else(|| missing.clone());
            ui.fill(MessageId::ContactPhone, &[("office", &office), ("mobile", &mobile)])
        }
        ContactField::Email => {
            let email = pick(info.email).unwrap_or(missing);
            ui.fill(MessageId::ContactEmail, &[("value", &email)])
        }
        ContactField::Social => {
            let social = pick(info.social).unwrap_or(missing);
            ui.fill(MessageId::ContactSocial, &[("value", &social)])
        }
    }
}

/// Display name of a letter type in the session language
pub(crate) fn letter_type_name(ui: Ui<'_>, letter: &LetterType) -> String {
    match letter.name_localized.as_deref() {
        Some(local) if ui.lang.uses_devanagari() && !local.trim().is_empty() => {
            extract_language_part(local, ui.lang)
        }
        _ => extract_language_part(&letter.name, ui.lang),
    }
}

pub(crate) fn letter_types(ui: Ui<'_>, types: &[LetterType]) -> String {
    let mut out = ui.msg(MessageId::LetterTypesHeader);
    for (i, letter) in types.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, letter_type_name(ui, letter));
    }
    out.trim_end().to_string()
}

// ============================================================================
// Surveys
// ============================================================================

/// Question `index` (0-based) of `total`, with its answer hint
pub(crate) fn survey_question(ui: Ui<'_>, question: &SurveyQuestion, index: usize, total: usize) -> String {
    let mut out = ui.fill(
        MessageId::SurveyQuestionHeader,
        &[("number", &(index + 1).to_string()), ("total", &total.to_string())],
    );
    let _ = write!(out, "\n\n*{}*\n", question.text);
    match &question.kind {
        QuestionKind::YesNo => {
            let _ = write!(out, "\n{}", ui.msg(MessageId::SurveyYesNoOptions));
        }
        QuestionKind::Mcq { options } => {
            for (i, option) in options.iter().enumerate() {
                let _ = write!(out, "\n{}. {option}", i + 1);
            }
        }
        QuestionKind::Rating => {
            let _ = write!(out, "\n{}", ui.msg(MessageId::SurveyRatingHint));
        }
        QuestionKind::Text => {
            let _ = write!(out, "\n{}", ui.msg(MessageId::SurveyTextHint));
        }
    }
    out
}

/// Notice shown before a question is asked again
pub(crate) fn survey_invalid(ui: Ui<'_>, kind: &QuestionKind) -> String {
    match kind {
        QuestionKind::YesNo => ui.msg(MessageId::SurveyInvalidYesNo),
        QuestionKind::Mcq { options } => {
            ui.fill(MessageId::SurveyInvalidChoice, &[("count", &options.len().to_string())])
        }
        QuestionKind::Rating => ui.msg(MessageId::SurveyInvalidRating),
        QuestionKind::Text => ui.msg(MessageId::SurveyInvalidText),
    }
}

pub(crate) fn survey_answer(ui: Ui<'_>, answer: &SurveyAnswer) -> String {
    match answer {
        SurveyAnswer::Rating(n) => format!("{n} ⭐"),
        SurveyAnswer::Text(text) if text == "yes" => ui.msg(MessageId::SurveyYes),
        SurveyAnswer::Text(text) if text == "no" => ui.msg(MessageId::SurveyNo),
        SurveyAnswer::Text(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StaticCatalog;

    fn ui(lang: Language) -> Ui<'static> {
        Ui::new(&StaticCatalog, lang)
    }

    fn scheme(name: &str, name_mr: Option<&str>) -> SchemeRecord {
        SchemeRecord {
            id: "1".into(),
            name: name.into(),
            name_mr: name_mr.map(String::from),
            description: Some("x".repeat(150)),
            description_mr: None,
            benefits: Some("₹5000".into()),
            benefits_mr: None,
        }
    }

    #[test]
    fn scheme_numbering_continues_from_offset() {
        let text = schemes(ui(Language::English), &[scheme("A", None), scheme("B", None)], 10);
        assert!(text.contains("11. *A*"));
        assert!(text.contains("12. *B*"));
        assert!(text.contains(&format!("   {}...", "x".repeat(100))));
        assert!(text.contains("💰 ₹5000"));
    }

    #[test]
    fn scheme_names_follow_language() {
        let items = [scheme("Housing / घरकुल योजना", Some("प्रधानमंत्री आवास"))];
        assert!(schemes(ui(Language::Marathi), &items, 0).contains("*प्रधानमंत्री आवास*"));
        assert!(schemes(ui(Language::English), &items, 0).contains("*Housing*"));
        assert!(schemes(ui(Language::Hindi), &items, 0).contains("*घरकुल योजना*"));
    }

    #[test]
    fn status_shows_latest_and_total() {
        let at = Utc::now();
        let records = [
            ComplaintRecord {
                id: "7".into(),
                kind: "Water".into(),
                status: "Pending".into(),
                description: "Leak".into(),
                created_at: at,
            },
            ComplaintRecord {
                id: "3".into(),
                kind: "Road".into(),
                status: "Resolved".into(),
                description: "Pothole".into(),
                created_at: at,
            },
        ];
        let text = complaint_status(ui(Language::English), &records);
        assert!(text.contains("#7"));
        assert!(text.contains("Total: 2"));
        assert!(!text.contains("#3"));
    }

    #[test]
    fn contact_fields_fall_back() {
        let text = contact(ui(Language::English), ContactField::Address, None);
        assert!(text.contains("Ward Office"));

        let info = ContactInfo {
            email: Some("office@ward.example".into()),
            ..ContactInfo::default()
        };
        let text = contact(ui(Language::Hindi), ContactField::Email, Some(&info));
        assert!(text.contains("office@ward.example"));
        let text = contact(ui(Language::Hindi), ContactField::Social, Some(&info));
        assert!(text.contains("उपलब्ध नहीं"));
    }

    #[test]
    fn survey_questions_show_their_options() {
        let question = SurveyQuestion {
            text: "Biggest issue?".into(),
            kind: QuestionKind::Mcq {
                options: vec!["Water".into(), "Roads".into()],
            },
        };
        let text = survey_question(ui(Language::English), &question, 1, 3);
        assert!(text.starts_with("📋 *Question 2/3*"));
        assert!(text.contains("*Biggest issue?*"));
        assert!(text.contains("1. Water\n2. Roads"));
        assert_eq!(
            survey_invalid(ui(Language::English), &question.kind),
            "❌ Invalid answer. Please type a number from 1 to 2."
        );

        let rating = SurveyQuestion {
            text: "Rate the roads".into(),
            kind: QuestionKind::Rating,
        };
        assert!(survey_question(ui(Language::Marathi), &rating, 0, 1).contains("1 ते 5"));
        assert_eq!(survey_answer(ui(Language::Hindi), &SurveyAnswer::Text("yes".into())), "हां");
        assert_eq!(survey_answer(ui(Language::English), &SurveyAnswer::Rating(4)), "4 ⭐");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("योजना", 2), "यो");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
