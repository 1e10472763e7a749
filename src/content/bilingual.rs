//! Best-effort language extraction for legacy mixed-language record fields
//!
//! Older records store e.g. `"Road repair / रस्ता दुरुस्ती"` in a single
//! column. Resolution tries explicit separators, then a sentence boundary
//! that switches script, then any script switch. If nothing matches, the
//! text is returned unchanged.

use super::Language;

const SEPARATORS: [&str; 2] = [" / ", " | "];
const SENTENCE_ENDS: [char; 4] = ['.', '!', '?', '।'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Devanagari,
}

fn script_of(c: char) -> Option<Script> {
    // Danda marks are punctuation, not letters
    if matches!(c, '\u{0964}' | '\u{0965}') {
        None
    } else if ('\u{0900}'..='\u{097F}').contains(&c) {
        Some(Script::Devanagari)
    } else if c.is_ascii_alphabetic() {
        Some(Script::Latin)
    } else {
        None
    }
}

/// Share of script-bearing characters that are Devanagari
fn devanagari_share(segment: &str) -> f64 {
    let (mut deva, mut total) = (0u32, 0u32);
    for script in segment.chars().filter_map(script_of) {
        total += 1;
        if script == Script::Devanagari {
            deva += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        f64::from(deva) / f64::from(total)
    }
}

fn clean(segment: &str) -> &str {
    segment.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ',' | ':' | '(' | ')'))
}

/// Pick the segment matching the target language.
///
/// Three or more segments follow the en/mr/hi column order; two segments
/// are told apart by script.
fn pick<'a>(segments: &[&'a str], lang: Language) -> Option<&'a str> {
    let segments: Vec<&str> = segments.iter().map(|s| clean(s)).filter(|s| !s.is_empty()).collect();
    match segments.len() {
        0 => None,
        1 => Some(segments[0]),
        2 => {
            let (a, b) = (segments[0], segments[1]);
            let a_deva = devanagari_share(a) > devanagari_share(b);
            let want_deva = lang.uses_devanagari();
            Some(if a_deva == want_deva { a } else { b })
        }
        n => Some(segments[lang.index().min(n - 1)]),
    }
}

/// Byte index of a sentence end followed by text in the other script
fn sentence_script_boundary(text: &str) -> Option<usize> {
    let mut last_script = None;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if let Some(script) = script_of(c) {
            last_script = Some(script);
            continue;
        }
        if !SENTENCE_ENDS.contains(&c) {
            continue;
        }
        let rest = text.get(idx + c.len_utf8()..).unwrap_or_default();
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let next_script = rest.chars().find_map(script_of);
        if next_script.is_some() && last_script.is_some() && next_script != last_script {
            return Some(idx + c.len_utf8());
        }
    }
    None
}

/// Byte index of the first character whose script differs from the leading one
fn script_boundary(text: &str) -> Option<usize> {
    let mut leading = None;
    for (idx, c) in text.char_indices() {
        let Some(script) = script_of(c) else { continue };
        match leading {
            None => leading = Some(script),
            Some(first) if first != script => return Some(idx),
            Some(_) => {}
        }
    }
    None
}

/// Resolve the part of a combined bilingual field that belongs to `lang`.
///
/// Never fails; when no split can be found the input comes back as-is.
pub fn extract_language_part(text: &str, lang: Language) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }

    for sep in SEPARATORS {
        if trimmed.contains(sep) {
            let segments: Vec<&str> = trimmed.split(sep).collect();
            if let Some(found) = pick(&segments, lang) {
                return found.to_string();
            }
        }
    }

    let boundary = sentence_script_boundary(trimmed).or_else(|| script_boundary(trimmed));
    if let Some(idx) = boundary {
        let (left, right) = trimmed.split_at(idx);
        if let Some(found) = pick(&[left, right], lang) {
            return found.to_string();
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_on_slash_by_script() {
        let text = "Road repair / रस्ता दुरुस्ती";
        assert_eq!(extract_language_part(text, Language::English), "Road repair");
        assert_eq!(extract_language_part(text, Language::Marathi), "रस्ता दुरुस्ती");

        // Order of the halves does not matter
        let flipped = "रस्ता दुरुस्ती / Road repair";
        assert_eq!(extract_language_part(flipped, Language::English), "Road repair");
    }

    #[test]
    fn three_segments_follow_column_order() {
        let text = "Water | पाणी | पानी";
        assert_eq!(extract_language_part(text, Language::English), "Water");
        assert_eq!(extract_language_part(text, Language::Marathi), "पाणी");
        assert_eq!(extract_language_part(text, Language::Hindi), "पानी");
    }

    #[test]
    fn sentence_boundary_with_script_change() {
        let text = "Free health checkup for all. सर्वांसाठी मोफत आरोग्य तपासणी.";
        assert_eq!(
            extract_language_part(text, Language::English),
            "Free health checkup for all."
        );
        assert_eq!(
            extract_language_part(text, Language::Hindi),
            "सर्वांसाठी मोफत आरोग्य तपासणी."
        );
    }

    #[test]
    fn bare_script_switch() {
        let text = "Pension योजना";
        assert_eq!(extract_language_part(text, Language::English), "Pension");
        assert_eq!(extract_language_part(text, Language::Marathi), "योजना");
    }

    #[test]
    fn single_language_text_is_unchanged() {
        assert_eq!(extract_language_part("Drainage cleaning", Language::Marathi), "Drainage cleaning");
        assert_eq!(extract_language_part("गटार सफाई", Language::English), "गटार सफाई");
        assert_eq!(extract_language_part("", Language::English), "");
        assert_eq!(extract_language_part("  ", Language::Hindi), "  ");
    }

    proptest! {
        #[test]
        fn never_panics_and_never_empties(text in "\\PC{0,40}") {
            for lang in Language::ALL {
                let out = extract_language_part(&text, lang);
                if !text.trim().is_empty() {
                    prop_assert!(!out.trim().is_empty());
                }
            }
        }
    }
}
