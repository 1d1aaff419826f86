//! # Club Directory
//!
//! Configurable mapping from RunCrew club ids (and their informal names)
//! to a home city. The generate endpoint uses it to turn a `runClubId`
//! into the bundle's contextual city; the extraction core itself never
//! performs lookups.
//!
//! - Loads from JSON config (clubs + aliases).
//! - Case-insensitive lookup with normalization of punctuation and dashes.
//! - Aliases map informal spellings/handles to canonical club ids.
//! - Fallback order: aliases → exact match → substring match → none.
//!   There is deliberately no default city: an unknown club yields no
//!   contextual city rather than a wrong one.
//! - Includes a built-in `default_seed()` used when no config is found.

use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

pub const DEFAULT_CLUB_DIRECTORY_PATH: &str = "config/clubs.json";
pub const ENV_CLUB_DIRECTORY_PATH: &str = "CLUB_DIRECTORY_PATH";

/// Club-to-city directory, loaded from JSON or seeded defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubDirectory {
    /// Canonical club ids → home city.
    #[serde(default)]
    pub clubs: HashMap<String, String>,
    /// Aliases mapping informal names/handles → canonical club ids.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl ClubDirectory {
    /// Load from a JSON file, falling back to `default_seed()` on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Load from `CLUB_DIRECTORY_PATH`, or the default path.
    pub fn load_from_env() -> Self {
        let path = std::env::var(ENV_CLUB_DIRECTORY_PATH)
            .unwrap_or_else(|_| DEFAULT_CLUB_DIRECTORY_PATH.to_string());
        Self::load_from_file(path)
    }

    /// Home city for a club reference.
    ///
    /// Steps:
    /// 1. Alias lookup (normalized) → canonical id → city.
    /// 2. Exact id match.
    /// 3. Substring fallback (e.g. "The Back Bay Run Crew" → "back bay run crew").
    /// 4. None (never a guessed city).
    pub fn city_for(&self, club: &str) -> Option<String> {
        let c = normalize(club);
        if c.is_empty() {
            return None;
        }

        // 1) Alias resolution.
        if let Some(canon) = self.aliases.get(&c) {
            let canon = normalize(canon);
            if let Some(city) = self.clubs.get(&canon) {
                return Some(city.clone());
            }
        }

        // 2) Exact id match.
        if let Some(city) = self.clubs.get(&c) {
            return Some(city.clone());
        }

        // 3) Substring fallback.
        for (id, city) in &self.clubs {
            if c.contains(id.as_str()) {
                return Some(city.clone());
            }
        }

        // 4) Unknown club.
        None
    }

    /// Built-in seed with a handful of known crews. Used as fallback when
    /// no config file is present (tests, fresh checkouts).
    pub(crate) fn default_seed() -> Self {
        let mut clubs = HashMap::new();
        let mut aliases = HashMap::new();

        for (id, city) in [
            ("back bay run crew", "Boston"),
            ("southie striders", "Boston"),
            ("brooklyn track club", "New York"),
            ("east river runners", "New York"),
            ("wicker park pacers", "Chicago"),
            ("golden gate gallop", "San Francisco"),
            ("district run collective", "Washington"),
        ] {
            clubs.insert(id.to_string(), city.to_string());
        }

        for (alias, canon) in [
            ("bbrc", "back bay run crew"),
            ("@backbayruncrew", "back bay run crew"),
            ("btc", "brooklyn track club"),
            ("@bktrackclub", "brooklyn track club"),
            ("striders", "southie striders"),
            ("drc", "district run collective"),
        ] {
            aliases.insert(alias.to_string(), canon.to_string());
        }

        Self { clubs, aliases }
    }
}

/// Normalize input string: lowercase, replace punctuation/dashes with
/// spaces, collapse multiple spaces into one.
fn normalize(s: &str) -> String {
    let mut out = s.trim().to_ascii_lowercase();

    // Replace common separators with spaces.
    for ch in ['—', '–', '-', '_', '/', '\\'] {
        out = out.replace(ch, " ");
    }

    // Replace disruptive punctuation/whitespace with spaces.
    out = out.replace(['\n', '\r', '\t', '.', ',', '‚', '’', '\''], " ");

    // Collapse multiple spaces.
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> ClubDirectory {
        ClubDirectory::default_seed()
    }

    #[test]
    fn exact_match() {
        assert_eq!(dir().city_for("back bay run crew").as_deref(), Some("Boston"));
    }

    #[test]
    fn alias_match() {
        let d = dir();
        assert_eq!(d.city_for("bbrc").as_deref(), Some("Boston"));
        assert_eq!(d.city_for("@bktrackclub").as_deref(), Some("New York"));
    }

    #[test]
    fn substring_match() {
        assert_eq!(
            dir().city_for("The Back Bay Run Crew (official)").as_deref(),
            Some("Boston")
        );
    }

    #[test]
    fn unknown_club_yields_none() {
        assert_eq!(dir().city_for("totally unknown crew"), None);
        assert_eq!(dir().city_for(""), None);
    }

    #[test]
    fn dash_and_case_normalization() {
        let d = dir();
        assert_eq!(d.city_for("Back-Bay-Run-Crew").as_deref(), Some("Boston"));
        assert_eq!(d.city_for("SOUTHIE STRIDERS").as_deref(), Some("Boston"));
    }

    #[test]
    #[serial_test::serial]
    fn missing_config_file_falls_back_to_seed() {
        std::env::set_var(ENV_CLUB_DIRECTORY_PATH, "__club_directory_should_not_exist__.json");
        let d = ClubDirectory::load_from_env();
        assert_eq!(d.city_for("bbrc").as_deref(), Some("Boston"));
        // cleanup
        std::env::remove_var(ENV_CLUB_DIRECTORY_PATH);
    }
}
