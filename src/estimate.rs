//! Derived figures: page counts and reading time
//!
//! Pure functions from measured metrics plus a configuration snapshot to
//! page counts (three alternative size models) and reading-time estimates
//! (nine reader profiles or a custom rate). Total over their domain.

use crate::config::{PageConfig, PageModel, ReadingSpeed, ReadingTimeConfig};
use crate::metrics::DocumentMetrics;

/// Midpoint of the published 220-350 wpm adult silent-reading range.
/// Also the fallback when a custom rate is malformed.
const ADULTS_WPM: f64 = 285.0;

/// Page count for one document under the configured size model.
///
/// An absent document yields 0 pages without ever dividing.
pub fn page_count(metrics: Option<&DocumentMetrics>, pages: &PageConfig) -> usize {
    let Some(metrics) = metrics else {
        return 0;
    };
    let (amount, page_size) = match pages.calculation {
        PageModel::Words => (metrics.word_count, pages.effective_size_in_words()),
        PageModel::Lines => (metrics.line_count, pages.effective_size_in_lines()),
        PageModel::Characters => (
            metrics.character_count,
            pages.effective_size_in_characters(),
        ),
    };
    amount.div_ceil(page_size)
}

/// Words-per-minute rate for the configured reader profile.
///
/// Each named profile is the midpoint of a literature-sourced [low, high]
/// range; `custom` takes the configured rate, falling back to the adult
/// midpoint when that rate is not positive.
pub fn words_per_minute(reading: &ReadingTimeConfig) -> f64 {
    match reading.reading_speed {
        ReadingSpeed::Age6To7 => 82.0,      // 53-111
        ReadingSpeed::Age7To8 => 119.0,     // 89-149
        ReadingSpeed::Age8To9 => 134.5,     // 107-162
        ReadingSpeed::Age9To10 => 151.5,    // 123-180
        ReadingSpeed::Age10To11 => 166.5,   // 139-194
        ReadingSpeed::Age11To14 => 177.0,   // 150-204
        ReadingSpeed::Highschool => 250.0,  // 200-300
        ReadingSpeed::College => 325.0,     // 300-350
        ReadingSpeed::Adults => ADULTS_WPM, // 220-350
        ReadingSpeed::Custom if reading.words_per_minute > 0.0 => reading.words_per_minute,
        ReadingSpeed::Custom => ADULTS_WPM,
    }
}

/// Estimated reading time in minutes for a word count.
pub fn reading_minutes(word_count: usize, reading: &ReadingTimeConfig) -> f64 {
    word_count as f64 / words_per_minute(reading)
}

/// Render a minute figure as prose.
///
/// Under a minute reads "less than a minute"; whole minutes up to an hour
/// are rounded up; beyond an hour the remainder maps to a quarter-fraction
/// by its 15-minute bracket, with anything past 45 minutes rounding to the
/// next whole hour.
pub fn format_reading_time(minutes: f64) -> String {
    if minutes < 1.0 {
        return "less than a minute".to_string();
    }
    let whole = minutes.ceil() as u64;
    match whole {
        1 => "1 minute".to_string(),
        2..=59 => format!("{} minutes", whole),
        60 => "an hour".to_string(),
        _ => {
            let hours = whole / 60;
            match whole % 60 {
                0 => format!("{} hours", hours),
                1..=15 => format!("{} ¼ hours", hours),
                16..=30 => format!("{} ½ hours", hours),
                31..=45 => format!("{} ¾ hours", hours),
                _ => format!("{} hours", hours + 1),
            }
        }
    }
}
