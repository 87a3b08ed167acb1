//! Contact block extraction.

use crate::parser::record::ContactInfo;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("Invalid email regex"));

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("Invalid phone regex")
});

static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+").expect("Invalid LinkedIn regex")
});

static WEBSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?[\w.-]+\.\w+").expect("Invalid URL regex")
});

/// Location patterns in the order they are tried.
static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?i:located\s+in|location)\b\s*:?\s*([^,.]+(?:,\s*[^,.]+)?)",
        r"([A-Z][a-zA-Z]+(?:[\s,]+[A-Z][a-zA-Z]+)+(?:[\s,]+[A-Z]{2})?(?:\s*\d{5})?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid location regex"))
    .collect()
});

pub fn extract_contact<S: AsRef<str>>(lines: &[S], max_name_chars: usize) -> ContactInfo {
    let text = lines.iter().map(|l| l.as_ref()).collect::<Vec<_>>().join(" ");

    let name = lines
        .first()
        .map(|l| l.as_ref())
        .filter(|first| first.chars().count() < max_name_chars)
        .unwrap_or_default()
        .to_string();

    let linkedin = LINKEDIN.find(&text).map(|m| {
        let url = m.as_str();
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    });

    let website = WEBSITE
        .find_iter(&text)
        .map(|m| m.as_str())
        .find(|url| !url.contains("linkedin.com"))
        .map(str::to_string);

    let location = LOCATION_PATTERNS
        .iter()
        .find_map(|re| re.captures(&text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|l| !l.is_empty());

    ContactInfo {
        name,
        email: EMAIL.find(&text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(&text).map(|m| m.as_str().to_string()),
        location,
        linkedin,
        website,
    }
}
