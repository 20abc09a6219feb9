use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A character record recovered from the synthesizer's free-text answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub description: String,
    pub personality: String,
}

fn character_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Name:\s*(.*?),\s*Description:\s*(.*?),\s*Personality:\s*(.*)")
            .unwrap_or_else(|e| panic!("invalid character pattern: {}", e))
    })
}

/// Parse a model response into character records, one line at a time.
///
/// The response is natural-language-adjacent and not guaranteed well-formed,
/// so extraction is total over lines: a line either matches
/// `Name: ..., Description: ..., Personality: ...` and yields a record, or
/// it is skipped. Zero matches is a normal outcome, not a parse failure.
pub fn extract_characters(response: &str) -> Vec<Character> {
    response
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Character> {
    let captures = character_pattern().captures(line)?;
    Some(Character {
        name: captures.get(1)?.as_str().trim().to_string(),
        description: captures.get(2)?.as_str().trim().to_string(),
        personality: captures.get(3)?.as_str().trim().to_string(),
    })
}
