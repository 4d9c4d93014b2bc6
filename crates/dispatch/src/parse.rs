//! Light utterance parsing — the keyword layer the dispatcher uses to
//! pull structured fields out of free text. Deliberately simple: real
//! language understanding is the external collaborator's job.

use skillsphere_core::matching::CareerMatch;
use skillsphere_tools::extract::contains_term;

/// Extract a display name from patterns like "my name is Dana" or
/// "call me Dana". Returns the name in its original casing.
pub fn parse_display_name(utterance: &str) -> Option<String> {
    let words: Vec<&str> = utterance.split_whitespace().collect();
    let lowered: Vec<String> = words.iter().map(|w| trim_punct(w).to_lowercase()).collect();

    for pattern in [&["my", "name", "is"][..], &["call", "me"][..], &["i", "am"][..]] {
        if let Some(pos) = lowered
            .windows(pattern.len())
            .position(|w| w.iter().map(String::as_str).eq(pattern.iter().copied()))
        {
            if let Some(name) = words.get(pos + pattern.len()).map(|w| trim_punct(w))
                && name.chars().next().is_some_and(char::is_alphabetic)
            {
                return Some(name.to_string());
            }
        }
    }
    None
}

/// Extract a weekly time budget from patterns like "10 hours per week"
/// or "about 6 hrs a week". The number must be followed by an hour unit
/// within the next two words.
pub fn parse_weekly_hours(utterance: &str) -> Option<f64> {
    let words: Vec<&str> = utterance.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        let Ok(value) = trim_punct(word).parse::<f64>() else {
            continue;
        };
        let unit_follows = words[i + 1..]
            .iter()
            .take(2)
            .any(|w| {
                let w = trim_punct(w).to_lowercase();
                w.starts_with("hour") || w.starts_with("hr")
            });
        if unit_follows && value > 0.0 {
            return Some(value);
        }
    }
    None
}

/// Resolve a career the utterance names against the ranked matches —
/// by title ("data scientist") or id with dashes spoken as spaces
/// ("frontend developer").
pub fn resolve_career<'a>(utterance: &str, matches: &'a [CareerMatch]) -> Option<&'a CareerMatch> {
    let lowered = utterance.to_lowercase();
    matches.iter().find(|m| {
        contains_term(&lowered, &m.title.to_lowercase())
            || contains_term(&lowered, &m.career_id.replace('-', " "))
    })
}

fn trim_punct(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}
