// Configuration type definitions

use serde::Deserialize;

/// Which metric a page is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageModel {
    Lines,
    Words,
    #[default]
    Characters,
}

/// Page sizing section
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub calculation: PageModel,
    #[serde(default = "default_size_in_words")]
    pub size_in_words: usize,
    #[serde(default = "default_size_in_lines")]
    pub size_in_lines: usize,
    #[serde(default = "default_size_in_characters")]
    pub size_in_characters: usize,
}

fn default_size_in_words() -> usize {
    250
}

fn default_size_in_lines() -> usize {
    25
}

fn default_size_in_characters() -> usize {
    1500
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            calculation: PageModel::default(),
            size_in_words: default_size_in_words(),
            size_in_lines: default_size_in_lines(),
            size_in_characters: default_size_in_characters(),
        }
    }
}

impl PageConfig {
    /// A configured size of 0 is malformed; the documented default applies.
    pub fn effective_size_in_words(&self) -> usize {
        if self.size_in_words == 0 {
            default_size_in_words()
        } else {
            self.size_in_words
        }
    }

    pub fn effective_size_in_lines(&self) -> usize {
        if self.size_in_lines == 0 {
            default_size_in_lines()
        } else {
            self.size_in_lines
        }
    }

    pub fn effective_size_in_characters(&self) -> usize {
        if self.size_in_characters == 0 {
            default_size_in_characters()
        } else {
            self.size_in_characters
        }
    }
}

/// Workspace discovery section
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// Glob selecting which documents the scan tracks
    #[serde(default = "default_include")]
    pub include: String,
    /// Ordered glob patterns removing documents from workspace totals
    #[serde(default)]
    pub exclude_from_total: Vec<String>,
}

fn default_include() -> String {
    "**/*.md".to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        WorkspaceConfig {
            include: default_include(),
            exclude_from_total: Vec::new(),
        }
    }
}

/// Reader speed profile selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ReadingSpeed {
    #[serde(rename = "age-6-7")]
    Age6To7,
    #[serde(rename = "age-7-8")]
    Age7To8,
    #[serde(rename = "age-8-9")]
    Age8To9,
    #[serde(rename = "age-9-10")]
    Age9To10,
    #[serde(rename = "age-10-11")]
    Age10To11,
    #[serde(rename = "age-11-14")]
    Age11To14,
    #[serde(rename = "highschool")]
    Highschool,
    #[serde(rename = "college")]
    College,
    #[default]
    #[serde(rename = "adults")]
    Adults,
    /// Uses the configured `words_per_minute` rate instead of a profile
    #[serde(rename = "custom")]
    Custom,
}

/// Reading time section
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingTimeConfig {
    #[serde(default)]
    pub reading_speed: ReadingSpeed,
    /// Only consulted when `reading_speed` is `custom`
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: f64,
}

fn default_words_per_minute() -> f64 {
    285.0
}

impl Default for ReadingTimeConfig {
    fn default() -> Self {
        ReadingTimeConfig {
            reading_speed: ReadingSpeed::default(),
            words_per_minute: default_words_per_minute(),
        }
    }
}

/// Display section: which figures and surfaces are rendered
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_word_count: bool,
    #[serde(default = "default_true")]
    pub show_line_count: bool,
    #[serde(default = "default_true")]
    pub show_page_count: bool,
    #[serde(default = "default_true")]
    pub show_document_count: bool,
    #[serde(default = "default_true")]
    pub show_estimated_reading_time: bool,
    #[serde(default = "default_true")]
    pub show_current_stats_in_statusbar: bool,
    #[serde(default = "default_true")]
    pub show_total_stats_in_statusbar: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_word_count: true,
            show_line_count: true,
            show_page_count: true,
            show_document_count: true,
            show_estimated_reading_time: true,
            show_current_stats_in_statusbar: true,
            show_total_stats_in_statusbar: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pages: PageConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub reading_time: ReadingTimeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_page_config() {
        let pages = PageConfig::default();
        assert_eq!(pages.calculation, PageModel::Characters);
        assert_eq!(pages.size_in_words, 250);
        assert_eq!(pages.size_in_lines, 25);
        assert_eq!(pages.size_in_characters, 1500);
    }

    #[test]
    fn test_default_workspace_config() {
        let workspace = WorkspaceConfig::default();
        assert_eq!(workspace.include, "**/*.md");
        assert!(workspace.exclude_from_total.is_empty());
    }

    #[test]
    fn test_default_reading_time_config() {
        let reading = ReadingTimeConfig::default();
        assert_eq!(reading.reading_speed, ReadingSpeed::Adults);
    }

    #[test]
    fn test_default_display_flags_are_all_on() {
        let display = DisplayConfig::default();
        assert!(display.show_word_count);
        assert!(display.show_line_count);
        assert!(display.show_page_count);
        assert!(display.show_document_count);
        assert!(display.show_estimated_reading_time);
        assert!(display.show_current_stats_in_statusbar);
        assert!(display.show_total_stats_in_statusbar);
    }

    #[test]
    fn test_parse_page_section() {
        let toml = r#"
[pages]
calculation = "words"
size_in_words = 300
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pages.calculation, PageModel::Words);
        assert_eq!(config.pages.size_in_words, 300);
        // Untouched fields keep their defaults
        assert_eq!(config.pages.size_in_lines, 25);
    }

    #[test]
    fn test_parse_reading_speed_profiles() {
        for (name, expected) in [
            ("age-6-7", ReadingSpeed::Age6To7),
            ("age-11-14", ReadingSpeed::Age11To14),
            ("highschool", ReadingSpeed::Highschool),
            ("college", ReadingSpeed::College),
            ("adults", ReadingSpeed::Adults),
            ("custom", ReadingSpeed::Custom),
        ] {
            let toml = format!("[reading_time]\nreading_speed = \"{}\"\n", name);
            let config: Config = toml::from_str(&toml).unwrap();
            assert_eq!(config.reading_time.reading_speed, expected, "profile {}", name);
        }
    }

    #[test]
    fn test_parse_exclude_patterns() {
        let toml = r#"
[workspace]
exclude_from_total = ["**/drafts/**", "**/archive.md"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.workspace.exclude_from_total,
            vec!["**/drafts/**".to_string(), "**/archive.md".to_string()]
        );
    }

    #[test]
    fn test_parse_display_overrides() {
        let toml = r#"
[display]
show_page_count = false
show_document_count = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.display.show_page_count);
        assert!(!config.display.show_document_count);
        assert!(config.display.show_word_count);
    }

    #[test]
    fn test_invalid_page_model_fails_to_parse() {
        let toml = r#"
[pages]
calculation = "paragraphs"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Unknown page model should fail to parse");
    }

    #[test]
    fn test_zero_sizes_fall_back_to_defaults() {
        let toml = r#"
[pages]
size_in_words = 0
size_in_lines = 0
size_in_characters = 0
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pages.effective_size_in_words(), 250);
        assert_eq!(config.pages.effective_size_in_lines(), 25);
        assert_eq!(config.pages.effective_size_in_characters(), 1500);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any valid page model string parses to the matching variant.
        #[test]
        fn prop_valid_page_model_parsing(
            model in prop::sample::select(vec!["lines", "words", "characters"])
        ) {
            let toml = format!("[pages]\ncalculation = \"{}\"\n", model);
            let config: Result<Config, _> = toml::from_str(&toml);
            prop_assert!(config.is_ok(), "Failed to parse valid model: {}", model);

            let expected = match model {
                "lines" => PageModel::Lines,
                "words" => PageModel::Words,
                "characters" => PageModel::Characters,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().pages.calculation, expected);
        }

        // Unknown reading-speed names are rejected by serde, which the
        // loader turns into a full fall-back to defaults.
        #[test]
        fn prop_invalid_reading_speed_fails(
            name in "[a-z]{3,12}".prop_filter("not a profile name", |s| {
                !["adults", "college", "highschool", "custom"].contains(&s.as_str())
            })
        ) {
            let toml = format!("[reading_time]\nreading_speed = \"{}\"\n", name);
            let config: Result<Config, _> = toml::from_str(&toml);
            prop_assert!(config.is_err(), "Invalid profile should fail to parse: {}", name);
        }

        // Missing sections and missing fields always fall back to defaults.
        #[test]
        fn prop_missing_fields_use_defaults(
            include_pages in prop::bool::ANY,
            include_display in prop::bool::ANY,
        ) {
            let mut toml = String::new();
            if include_pages {
                toml.push_str("[pages]\n");
            }
            if include_display {
                toml.push_str("[display]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml);
            prop_assert!(config.is_ok(), "Sparse config should parse");

            let config = config.unwrap();
            prop_assert_eq!(config.pages.calculation, PageModel::Characters);
            prop_assert_eq!(config.pages.size_in_characters, 1500);
            prop_assert!(config.display.show_word_count);
            prop_assert_eq!(config.workspace.include, "**/*.md");
        }
    }
}
