//! Text cleanup pipeline for recognized-text artifacts.
//!
//! Document-analysis services hand back OCR text with the usual debris:
//! ligature codepoints, replacement characters, private-use glyphs from
//! embedded fonts, and runs of stray whitespace. The pipeline normalizes
//! rendered output without touching the structured document itself.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization only
    Minimal,
    /// Standard cleanup: NFC + ligatures + replacement chars + whitespace
    #[default]
    Standard,
    /// Aggressive cleanup: Standard plus PUA and control-character removal
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Remove Private Use Area (PUA) characters
    pub remove_pua: bool,

    /// Remove non-printing control characters (except newline and tab)
    pub remove_control_chars: bool,

    /// Collapse runs of spaces and tabs into a single space
    pub collapse_whitespace: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: false,
            remove_replacement_char: false,
            remove_pua: false,
            remove_control_chars: false,
            collapse_whitespace: false,
            max_consecutive_newlines: 0,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            remove_replacement_char: true,
            remove_pua: false,
            remove_control_chars: false,
            collapse_whitespace: true,
            max_consecutive_newlines: 2,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            remove_replacement_char: true,
            remove_pua: true,
            remove_control_chars: true,
            collapse_whitespace: true,
            max_consecutive_newlines: 2,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    space_run_regex: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            space_run_regex: Regex::new(r"[ \t]{2,}").unwrap(),
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ (long s + t)
                ("\u{FB06}", "st"),  // ﬆ
            ],
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.remove_pua {
            result = self.remove_pua_chars(&result);
        }

        if self.options.remove_control_chars {
            result = self.remove_control_chars(&result);
        }

        if self.options.collapse_whitespace {
            result = self.space_run_regex.replace_all(&result, " ").to_string();
        }

        if self.options.max_consecutive_newlines > 0 {
            result = limit_newlines(&result, self.options.max_consecutive_newlines as usize);
        }

        result
    }

    fn remove_pua_chars(&self, text: &str) -> String {
        text.chars()
            .filter(|c| {
                !matches!(c,
                    '\u{E000}'..='\u{F8FF}'
                        | '\u{F0000}'..='\u{FFFFD}'
                        | '\u{100000}'..='\u{10FFFD}')
            })
            .collect()
    }

    fn remove_control_chars(&self, text: &str) -> String {
        text.chars()
            .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
            .collect()
    }
}

fn limit_newlines(text: &str, max: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = 0;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run > max {
                continue;
            }
        } else {
            run = 0;
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_normalizes_nfc() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        // e + combining acute -> é
        let result = pipeline.process("e\u{0301}");
        assert_eq!(result, "é");
    }

    #[test]
    fn test_standard_fixes_ligatures() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("e\u{FB03}cient"), "efficient");
    }

    #[test]
    fn test_standard_removes_replacement_char() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("ab\u{FFFD}cd"), "abcd");
    }

    #[test]
    fn test_standard_collapses_whitespace() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("a   b\t\tc"), "a b c");
        assert_eq!(pipeline.process("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_aggressive_removes_pua() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Aggressive);
        assert_eq!(pipeline.process("x\u{E001}y"), "xy");
    }

    #[test]
    fn test_aggressive_keeps_newline_and_tab() {
        let options = CleanupOptions {
            collapse_whitespace: false,
            ..CleanupOptions::aggressive()
        };
        let pipeline = CleanupPipeline::new(options);
        assert_eq!(pipeline.process("a\tb\nc\u{0007}"), "a\tb\nc");
    }

    #[test]
    fn test_minimal_leaves_whitespace_alone() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        assert_eq!(pipeline.process("a   b"), "a   b");
    }
}
