//! Ordered pattern cascades with first-match-wins semantics.
//!
//! A cascade is an ordered list of candidate patterns for one field, tried
//! in the literal order they were registered. Each pattern contributes only
//! its leftmost match in the scanned text; the first pattern whose match
//! survives cleanup and the minimum-length check wins and the cascade
//! stops. Reordering patterns (e.g. by specificity) changes observable
//! behavior, so the registration order is part of the field's contract.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that terminate a captured phrase. Everything from the first
/// standalone occurrence of one of these onward is dropped before the
/// minimum-length check.
static CONNECTOR_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(?:and|or|before|after|then|to|does|miles)\b.*$")
        .expect("connector tail regex")
});

/// One candidate pattern in a cascade. The regex must have exactly one
/// capture group (the phrase of interest).
struct Rule {
    re: Regex,
    cleanup: bool,
    min_len: usize,
}

/// Ordered list of rules for a single field.
pub struct Cascade {
    rules: Vec<Rule>,
}

impl Cascade {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a pattern that is accepted as captured (no cleanup, no
    /// minimum length).
    pub fn pattern(self, re: &str) -> Self {
        self.push(re, false, 0)
    }

    /// Register a pattern whose capture gets connector-tail cleanup and
    /// must be at least `min_len` chars afterwards. A capture failing the
    /// minimum does not abort the cascade; the next pattern is tried.
    pub fn cleaned_pattern(self, re: &str, min_len: usize) -> Self {
        self.push(re, true, min_len)
    }

    fn push(mut self, re: &str, cleanup: bool, min_len: usize) -> Self {
        let re = Regex::new(re).unwrap_or_else(|e| panic!("cascade regex `{re}`: {e}"));
        self.rules.push(Rule { re, cleanup, min_len });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the cascade over `text`. Patterns are tried in registration
    /// order; each contributes only its leftmost match.
    pub fn first_match(&self, text: &str) -> Option<String> {
        for rule in &self.rules {
            let Some(caps) = rule.re.captures(text) else {
                continue;
            };
            let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

            let candidate = if rule.cleanup {
                strip_connector_tail(raw)
            } else {
                raw.trim().to_string()
            };

            if candidate.len() >= rule.min_len && !candidate.is_empty() {
                return Some(candidate);
            }
            // Too short after cleanup: fall through to the next pattern.
        }
        None
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut a captured phrase at the first standalone connector word and trim.
pub fn strip_connector_tail(phrase: &str) -> String {
    CONNECTOR_TAIL.replace(phrase, "").trim().to_string()
}
