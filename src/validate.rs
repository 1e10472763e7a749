//! Field validators for form input
//!
//! All validators are pure and operate on already-trimmed text.

use crate::repository::{QuestionKind, SurveyAnswer};

/// Digits required in a mobile number
pub const MOBILE_DIGITS: usize = 10;

/// Inclusive bounds for a valid age
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=120;

/// Minimum characters in a scheme search query
pub const MIN_SEARCH_CHARS: usize = 2;

/// Highest survey rating
pub const MAX_RATING: u8 = 5;

const YES_WORDS: &[&str] = &["1", "yes", "y", "होय", "हो", "हां", "ha"];
const NO_WORDS: &[&str] = &["2", "no", "n", "नाही", "नहीं", "nahi"];

/// Strip everything but ASCII digits; valid iff exactly ten remain.
///
/// Returns the normalized digits.
pub fn mobile(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == MOBILE_DIGITS).then_some(digits)
}

/// Parse an age in years.
pub fn age(input: &str) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|years| AGE_RANGE.contains(years))
}

/// Map an option token to a value using a fixed table.
pub fn choice<T: Copy>(input: &str, options: &[(&str, T)]) -> Option<T> {
    let token = input.trim();
    options
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, value)| *value)
}

/// Parse a 1-based selection into a 0-based index below `len`.
pub fn index(input: &str, len: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

/// Free text is accepted as-is after trimming, including empty input.
pub fn free_text(input: &str) -> String {
    input.trim().to_string()
}

/// A scheme search needs at least two characters.
pub fn search_query(input: &str) -> Option<String> {
    let query = input.trim();
    (query.chars().count() >= MIN_SEARCH_CHARS).then(|| query.to_string())
}

/// Check a survey reply against its question type.
///
/// Yes/no answers are stored as `"yes"` or `"no"`. A multiple-choice reply
/// is an option number or text found in an option's label, ignoring case;
/// the first matching option wins.
pub fn survey_answer(kind: &QuestionKind, input: &str) -> Option<SurveyAnswer> {
    let input = input.trim();
    match kind {
        QuestionKind::YesNo => {
            let word = input.to_lowercase();
            if YES_WORDS.contains(&word.as_str()) {
                Some(SurveyAnswer::Text("yes".to_string()))
            } else if NO_WORDS.contains(&word.as_str()) {
                Some(SurveyAnswer::Text("no".to_string()))
            } else {
                None
            }
        }
        QuestionKind::Mcq { options } => {
            if let Some(i) = index(input, options.len()) {
                return options.get(i).cloned().map(SurveyAnswer::Text);
            }
            if input.is_empty() {
                return None;
            }
            let needle = input.to_lowercase();
            options
                .iter()
                .find(|option| option.to_lowercase().contains(&needle))
                .cloned()
                .map(SurveyAnswer::Text)
        }
        QuestionKind::Rating => input
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=MAX_RATING).contains(n))
            .map(SurveyAnswer::Rating),
        QuestionKind::Text => (!input.is_empty()).then(|| SurveyAnswer::Text(input.to_string())),
    }
}

/// Whether the text looks like a link to an uploaded photo
pub fn photo_url(input: &str) -> Option<String> {
    let url = input.trim();
    let is_http = url.starts_with("https://") || url.starts_with("http://");
    (is_http && !url.contains(char::is_whitespace)).then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mobile_numbers() {
        assert_eq!(mobile("9876543210").as_deref(), Some("9876543210"));
        assert_eq!(mobile("987-654-3210").as_deref(), Some("9876543210"));
        assert_eq!(mobile("+91 98765 43210"), None); // twelve digits
        assert_eq!(mobile("98765432100"), None);
        assert_eq!(mobile("12345"), None);
        assert_eq!(mobile(""), None);
    }

    #[test]
    fn ages() {
        assert_eq!(age("45"), Some(45));
        assert_eq!(age("1"), Some(1));
        assert_eq!(age("120"), Some(120));
        assert_eq!(age("0"), None);
        assert_eq!(age("121"), None);
        assert_eq!(age("abc"), None);
        assert_eq!(age("-5"), None);
    }

    #[test]
    fn choices_and_indices() {
        let options = [("1", 'a'), ("2", 'b')];
        assert_eq!(choice("2", &options), Some('b'));
        assert_eq!(choice("3", &options), None);

        assert_eq!(index("1", 3), Some(0));
        assert_eq!(index("3", 3), Some(2));
        assert_eq!(index("4", 3), None);
        assert_eq!(index("0", 3), None);
        assert_eq!(index("1", 0), None);
    }

    #[test]
    fn free_text_is_permissive() {
        assert_eq!(free_text("  Near market "), "Near market");
        assert_eq!(free_text("   "), "");
    }

    #[test]
    fn search_query_needs_two_chars() {
        assert_eq!(search_query(" a "), None);
        assert_eq!(search_query("पी").as_deref(), Some("पी"));
        assert_eq!(search_query("loan").as_deref(), Some("loan"));
    }

    #[test]
    fn survey_answers_by_question_type() {
        let yes = Some(SurveyAnswer::Text("yes".into()));
        let no = Some(SurveyAnswer::Text("no".into()));
        assert_eq!(survey_answer(&QuestionKind::YesNo, "1"), yes);
        assert_eq!(survey_answer(&QuestionKind::YesNo, "YES"), yes);
        assert_eq!(survey_answer(&QuestionKind::YesNo, "होय"), yes);
        assert_eq!(survey_answer(&QuestionKind::YesNo, "नाही"), no);
        assert_eq!(survey_answer(&QuestionKind::YesNo, "maybe"), None);

        let mcq = QuestionKind::Mcq {
            options: vec!["Water supply".into(), "Roads".into()],
        };
        assert_eq!(survey_answer(&mcq, "2"), Some(SurveyAnswer::Text("Roads".into())));
        assert_eq!(survey_answer(&mcq, "water"), Some(SurveyAnswer::Text("Water supply".into())));
        assert_eq!(survey_answer(&mcq, "3"), None);
        assert_eq!(survey_answer(&mcq, ""), None);

        assert_eq!(survey_answer(&QuestionKind::Rating, "5"), Some(SurveyAnswer::Rating(5)));
        assert_eq!(survey_answer(&QuestionKind::Rating, "0"), None);
        assert_eq!(survey_answer(&QuestionKind::Rating, "6"), None);
        assert_eq!(survey_answer(&QuestionKind::Rating, "4 stars"), None);

        assert_eq!(
            survey_answer(&QuestionKind::Text, "  more buses "),
            Some(SurveyAnswer::Text("more buses".into()))
        );
        assert_eq!(survey_answer(&QuestionKind::Text, "   "), None);
    }

    #[test]
    fn photo_links() {
        assert!(photo_url("https://cdn.example.org/p/1.jpg").is_some());
        assert!(photo_url("skip").is_none());
        assert!(photo_url("http://a b").is_none());
    }

    proptest! {
        #[test]
        fn accepted_mobile_is_always_ten_digits(input in "[0-9 +()-]{0,20}") {
            if let Some(m) = mobile(&input) {
                prop_assert_eq!(m.len(), 10);
                prop_assert!(m.chars().all(|c| c.is_ascii_digit()));
            }
        }

        #[test]
        fn accepted_age_is_in_range(n in 0u32..500) {
            let parsed = age(&n.to_string());
            prop_assert_eq!(parsed.is_some(), (1..=120).contains(&n));
        }
    }
}
