use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::i18n::{Language, PAGE_STRINGS};

/// Display format for publication timestamps, e.g. `1/15/2024, 2:05:09 PM`.
const DATE_DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Naive timestamp layouts produced by the articles API, tried in order.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// One news item as returned by the articles API.
///
/// Every field is optional. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Article {
    pub headline: Option<String>,
    pub published_date: Option<String>,
    pub source_name: Option<String>,
    pub original_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub sdg16_score: Option<f64>,
    pub summary_en: Option<String>,
    pub summary_hi: Option<String>,
}

/// Accept any JSON value for the score; anything that is not a number is treated as absent.
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Article {
    /// Headline, or the "Untitled" placeholder.
    pub fn title(&self) -> &str {
        non_empty(&self.headline).unwrap_or(PAGE_STRINGS.untitled)
    }

    /// Publication date formatted for display, if the article has one.
    pub fn published_display(&self) -> Option<String> {
        non_empty(&self.published_date).map(format_published_date)
    }

    /// Source name and date, joined by the separator only when both are present.
    pub fn meta_line(&self) -> String {
        match (non_empty(&self.source_name), self.published_display()) {
            (Some(source), Some(date)) => {
                format!("{} {} {}", source, PAGE_STRINGS.meta_separator, date)
            }
            (Some(source), None) => source.to_string(),
            (None, Some(date)) => date,
            (None, None) => String::new(),
        }
    }

    /// Score badge text: `SDG16 0.86`, or `SDG16 -` when there is no numeric score.
    pub fn score_label(&self) -> String {
        match self.sdg16_score {
            Some(score) => format!("{} {}", PAGE_STRINGS.score_prefix, format_score(score)),
            None => format!("{} {}", PAGE_STRINGS.score_prefix, PAGE_STRINGS.score_missing),
        }
    }

    /// Summary text in the given language (empty when missing).
    pub fn summary(&self, language: Language) -> &str {
        let summary = if language == Language::HINDI {
            &self.summary_hi
        } else {
            &self.summary_en
        };
        summary.as_deref().unwrap_or("")
    }
}

/// Format a score with two decimals, rounding exact ties away from zero.
///
/// `{:.2}` already rounds the exact binary value correctly; it only differs on
/// exact two-decimal ties, which for an `f64` are the odd multiples of 1/8.
/// Negative zero prints as `0.00`.
pub fn format_score(score: f64) -> String {
    if score == 0.0 {
        return "0.00".to_string();
    }

    let eighths = score * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (score * 100.0).round() / 100.0);
    }

    format!("{:.2}", score)
}

/// Format a publication timestamp for display.
///
/// RFC 3339 timestamps are shown in their own offset, naive timestamps as-is,
/// and bare dates at midnight. Text that does not parse is returned verbatim.
pub fn format_published_date(raw: &str) -> String {
    match parse_timestamp(raw.trim()) {
        Some(timestamp) => timestamp.format(DATE_DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
