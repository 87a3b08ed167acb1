//! Skills list extraction.

/// Characters that separate individual skills.
pub const SKILL_SEPARATORS: &[char] = &['|', '•', ',', ';', '\n'];

/// Split the bucket into skill tokens, order kept and duplicates left in.
pub fn extract_skills<S: AsRef<str>>(lines: &[S], max_skill_chars: usize) -> Vec<String> {
    let text = lines.iter().map(|l| l.as_ref()).collect::<Vec<_>>().join("\n");

    text.split(SKILL_SEPARATORS)
        .map(str::trim)
        .filter(|skill| !skill.is_empty() && skill.chars().count() < max_skill_chars)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        let skills = extract_skills(&["Python, JavaScript | Leadership"], 50);
        assert_eq!(skills, vec!["Python", "JavaScript", "Leadership"]);
    }

    #[test]
    fn test_lines_and_bullets() {
        let skills = extract_skills(&["• Rust • Go", "SQL; Python", "Rust"], 50);
        assert_eq!(skills, vec!["Rust", "Go", "SQL", "Python", "Rust"]);
    }

    #[test]
    fn test_sentences_are_dropped() {
        let lines = ["Rust, I have spent many years building large distributed systems in production"];
        assert_eq!(extract_skills(&lines, 50), vec!["Rust"]);
    }
}
