//! Rendering options and configuration.

use super::CleanupOptions;

/// Options for rendering a resolved document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How to render form fields in Markdown
    pub field_style: FieldStyle,

    /// Emit section headings ("## Form Fields", "## Table N")
    pub include_headings: bool,

    /// Include the verbatim block list in JSON output
    pub include_raw_blocks: bool,

    /// Text cleanup options
    pub cleanup: Option<CleanupOptions>,

    /// Collect resolution statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form-field rendering style.
    pub fn with_field_style(mut self, style: FieldStyle) -> Self {
        self.field_style = style;
        self
    }

    /// Enable or disable section headings.
    pub fn with_headings(mut self, include: bool) -> Self {
        self.include_headings = include;
        self
    }

    /// Enable or disable raw block passthrough in JSON output.
    pub fn with_raw_blocks(mut self, include: bool) -> Self {
        self.include_raw_blocks = include;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            field_style: FieldStyle::List,
            include_headings: true,
            include_raw_blocks: false,
            cleanup: None,
            collect_stats: false,
        }
    }
}

/// How form fields are rendered in Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStyle {
    /// One bullet per field: `- **label**: value`
    #[default]
    List,
    /// A two-column Field/Value table
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_field_style(FieldStyle::Table)
            .with_headings(false)
            .with_raw_blocks(true);

        assert_eq!(options.field_style, FieldStyle::Table);
        assert!(!options.include_headings);
        assert!(options.include_raw_blocks);
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.field_style, FieldStyle::List);
        assert!(options.include_headings);
        assert!(options.cleanup.is_none());
    }
}
