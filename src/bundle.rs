//! # Raw Source Bundle
//!
//! Input container for one extraction request: pasted Strava text, pasted
//! web page text, a social post caption, the two URLs, and an optional
//! contextual city resolved upstream from the referenced club.
//!
//! - All fields are optional; a bundle is usable iff at least one text/URL
//!   field is non-empty after trimming (the contextual city alone is not).
//! - `combined_text()` concatenates the non-empty sources into the single
//!   string every extraction pattern scans, each block prefixed with a
//!   labeled tag. Source order is fixed: strava text, web text, social
//!   text, strava URL, web URL. Patterns take the leftmost match, so this
//!   order decides which source wins when several state the same fact.
//! - Pasted text blocks get HTML entities decoded during assembly; URLs
//!   are kept verbatim.

use serde::{Deserialize, Serialize};

/// Tag markers prefixed to each source block in the combined text.
pub const TAG_STRAVA_TEXT: &str = "[STRAVA TEXT]";
pub const TAG_WEB_TEXT: &str = "[WEB TEXT]";
pub const TAG_SOCIAL_POST_TEXT: &str = "[SOCIAL POST TEXT]";
pub const TAG_STRAVA_URL: &str = "[STRAVA URL]";
pub const TAG_WEB_URL: &str = "[WEB URL]";

/// One extraction request's worth of raw sources. Constructed per request,
/// used once, discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSourceBundle {
    pub strava_url: Option<String>,
    pub strava_text: Option<String>,
    pub web_url: Option<String>,
    pub web_text: Option<String>,
    pub social_post_text: Option<String>,
    /// Resolved upstream (club id → home city). Never derived from text.
    pub contextual_city: Option<String>,
}

impl RawSourceBundle {
    /// True iff at least one text/URL source is non-empty after trimming.
    /// `contextual_city` deliberately does not count.
    pub fn has_usable_input(&self) -> bool {
        [
            &self.strava_text,
            &self.web_text,
            &self.social_post_text,
            &self.strava_url,
            &self.web_url,
        ]
        .into_iter()
        .any(|f| non_empty(f).is_some())
    }

    /// Trimmed, explicitly-provided Strava URL (takes precedence over any
    /// strava.com link found inside the combined text).
    pub fn explicit_strava_url(&self) -> Option<&str> {
        non_empty(&self.strava_url)
    }

    /// Build the combined text all extraction patterns scan.
    ///
    /// Blocks appear in the fixed source order, each as `TAG\ncontent`,
    /// separated by a blank line. Empty sources are skipped entirely.
    pub fn combined_text(&self) -> String {
        let mut blocks: Vec<String> = Vec::with_capacity(5);

        for (tag, value, decode) in [
            (TAG_STRAVA_TEXT, &self.strava_text, true),
            (TAG_WEB_TEXT, &self.web_text, true),
            (TAG_SOCIAL_POST_TEXT, &self.social_post_text, true),
            (TAG_STRAVA_URL, &self.strava_url, false),
            (TAG_WEB_URL, &self.web_url, false),
        ] {
            let Some(raw) = non_empty(value) else {
                continue;
            };
            let body = if decode {
                html_escape::decode_html_entities(raw).into_owned()
            } else {
                raw.to_string()
            };
            blocks.push(format!("{tag}\n{body}"));
        }

        blocks.join("\n\n")
    }
}

/// Trimmed view of an optional field, `None` when absent or whitespace-only.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle_with(strava: Option<&str>, web: Option<&str>, social: Option<&str>) -> RawSourceBundle {
        RawSourceBundle {
            strava_text: strava.map(str::to_string),
            web_text: web.map(str::to_string),
            social_post_text: social.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn empty_bundle_is_unusable() {
        assert!(!RawSourceBundle::default().has_usable_input());
    }

    #[test]
    fn whitespace_only_does_not_count() {
        let b = bundle_with(Some("   \n  "), None, None);
        assert!(!b.has_usable_input());
    }

    #[test]
    fn city_alone_does_not_count() {
        let b = RawSourceBundle {
            contextual_city: Some("Boston".into()),
            ..Default::default()
        };
        assert!(!b.has_usable_input());
    }

    #[test]
    fn combined_text_preserves_source_order() {
        let b = RawSourceBundle {
            strava_text: Some("strava block".into()),
            web_text: Some("web block".into()),
            social_post_text: Some("social block".into()),
            strava_url: Some("https://strava.com/routes/1".into()),
            web_url: Some("https://example.com/run".into()),
            ..Default::default()
        };
        let c = b.combined_text();

        let idx = |needle: &str| c.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
        assert!(idx(TAG_STRAVA_TEXT) < idx(TAG_WEB_TEXT));
        assert!(idx(TAG_WEB_TEXT) < idx(TAG_SOCIAL_POST_TEXT));
        assert!(idx(TAG_SOCIAL_POST_TEXT) < idx(TAG_STRAVA_URL));
        assert!(idx(TAG_STRAVA_URL) < idx(TAG_WEB_URL));
    }

    #[test]
    fn combined_text_skips_empty_sources() {
        let b = bundle_with(None, None, Some("only social"));
        let c = b.combined_text();
        assert!(c.starts_with(TAG_SOCIAL_POST_TEXT));
        assert!(!c.contains(TAG_STRAVA_TEXT));
        assert!(!c.contains(TAG_WEB_TEXT));
    }

    #[test]
    fn html_entities_are_decoded_in_text_blocks() {
        let b = bundle_with(None, Some("Coffee &amp; donuts at the finish"), None);
        let c = b.combined_text();
        assert!(c.contains("Coffee & donuts"));
        assert!(!c.contains("&amp;"));
    }
}
