//! Date and start-time token parsing.
//!
//! A token that looks like a date but fails calendar validation is a soft
//! miss (None), never an error: one bad sub-field must not spoil the rest
//! of the extraction. Only the first date-like token is considered; the
//! extractor does not hunt for a second candidate when the first is bogus.

use chrono::NaiveDate;

use super::patterns::{DATE_TOKEN, TIME_TOKEN};

/// Parsed `H:MM` token with its (possibly defaulted) am/pm period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTime {
    pub hour: String,
    pub minute: String,
    /// "AM" or "PM"; "AM" when the token carried no suffix.
    pub period: String,
}

/// First date-like token in `text`, reformatted to ISO `YYYY-MM-DD`.
/// Slash dates read as M/D/Y; two-digit years land in 2000–2099.
pub fn extract_date(text: &str) -> Option<String> {
    let caps = DATE_TOKEN.captures(text)?;
    if let Some(m) = caps.get(1) {
        parse_slash_date(m.as_str())
    } else {
        caps.get(2).and_then(|m| parse_iso_date(m.as_str()))
    }
}

fn parse_slash_date(token: &str) -> Option<String> {
    let mut parts = token.split('/');
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let mut year: i32 = parts.next()?.parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.format("%Y-%m-%d").to_string())
}

fn parse_iso_date(token: &str) -> Option<String> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// First `H:MM` token in `text`, split into form-ready parts.
pub fn extract_start_time(text: &str) -> Option<StartTime> {
    let caps = TIME_TOKEN.captures(text)?;
    let hour = caps.get(1)?.as_str().to_string();
    let minute = caps.get(2)?.as_str().to_string();
    let period = caps
        .get(3)
        .map(|m| m.as_str().to_ascii_uppercase())
        .unwrap_or_else(|| "AM".to_string());
    Some(StartTime { hour, minute, period })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_date_round_trips_to_iso() {
        assert_eq!(
            extract_date("Long run on 3/15/2025, be there!").as_deref(),
            Some("2025-03-15")
        );
    }

    #[test]
    fn two_digit_year_lands_in_2000s() {
        assert_eq!(extract_date("see you 7/4/26").as_deref(), Some("2026-07-04"));
    }

    #[test]
    fn iso_date_passes_through() {
        assert_eq!(
            extract_date("scheduled for 2025-11-02").as_deref(),
            Some("2025-11-02")
        );
    }

    #[test]
    fn invalid_calendar_date_is_a_soft_miss() {
        assert_eq!(extract_date("posted 15/45/2025 lol"), None);
        assert_eq!(extract_date("bad iso 2025-13-40 here"), None);
    }

    #[test]
    fn first_token_wins_even_when_invalid() {
        // The extractor does not skip past a bogus first token.
        assert_eq!(extract_date("15/45/2025 or maybe 3/15/2025"), None);
    }

    #[test]
    fn time_with_pm_suffix() {
        let t = extract_start_time("We roll at 6:30pm sharp").unwrap();
        assert_eq!((t.hour.as_str(), t.minute.as_str(), t.period.as_str()), ("6", "30", "PM"));
    }

    #[test]
    fn time_period_defaults_to_am() {
        let t = extract_start_time("meet 7:15 at the gate").unwrap();
        assert_eq!(t.period, "AM");
    }

    #[test]
    fn no_time_token_yields_none() {
        assert_eq!(extract_start_time("no numbers here"), None);
    }
}
