//! Preview state handed to the rendering surface
//!
//! The core decides *what* to draw (text, face, size); drawing it is the GUI's job.

use crate::collection::FontCollection;
use crate::constants::preview::*;
use crate::view::SectionId;

/// One piece of text to render in one face at one size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub font: String,
    pub point_size: u32,
    pub text: String,
}

/// Contents of a section preview: every member rendered in its own face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPanel {
    pub section: SectionId,
    pub rows: Vec<PreviewRequest>,
}

impl PreviewPanel {
    /// Build the panel for `section`, or `None` if the section no longer exists.
    /// Rebuilt from scratch on each call.
    pub fn for_section(collection: &FontCollection, section: &SectionId) -> Option<Self> {
        let members = section.sorted_members(collection)?;
        Some(Self {
            section: section.clone(),
            rows: members
                .into_iter()
                .map(|font| PreviewRequest {
                    font: font.to_string(),
                    point_size: SECTION_PREVIEW_SIZE,
                    text: font.to_string(),
                })
                .collect(),
        })
    }

    pub fn title(&self) -> String {
        format!("Preview of {}", self.section)
    }
}

/// State of the main preview canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePreview {
    selected_font: Option<String>,
    sample_text: String,
    point_size: u32,
}

impl Default for ActivePreview {
    fn default() -> Self {
        Self {
            selected_font: None,
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl ActivePreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_font(&self) -> Option<&str> {
        self.selected_font.as_deref()
    }

    pub fn select_font(&mut self, font: &str) {
        self.selected_font = Some(font.to_string());
    }

    /// Mutable access for an inline text editor. Call [`Self::clamp`] after
    /// every edit.
    pub fn sample_text_mut(&mut self) -> &mut String {
        &mut self.sample_text
    }

    pub fn clamp(&mut self) {
        clamp_sample_text(&mut self.sample_text);
    }

    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    pub fn set_point_size(&mut self, size: u32) {
        self.point_size = size.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE);
    }

    /// What the canvas should draw right now
    pub fn request(&self) -> PreviewRequest {
        let text = if self.sample_text.is_empty() {
            DEFAULT_SAMPLE_TEXT
        } else {
            &self.sample_text
        };
        PreviewRequest {
            font: self.selected_font.as_deref().unwrap_or(FALLBACK_FONT).to_string(),
            point_size: self.point_size,
            text: text.to_string(),
        }
    }
}

/// Truncate `text` to at most [`MAX_SAMPLE_CHARS`] characters
pub fn clamp_sample_text(text: &mut String) {
    if let Some((byte_idx, _)) = text.char_indices().nth(MAX_SAMPLE_CHARS) {
        text.truncate(byte_idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let preview = ActivePreview::new();
        let request = preview.request();
        assert_eq!(request.font, FALLBACK_FONT);
        assert_eq!(request.point_size, 30);
        assert_eq!(request.text, DEFAULT_SAMPLE_TEXT);
    }

    #[test]
    fn test_empty_text_falls_back_to_default() {
        let mut preview = ActivePreview::new();
        preview.select_font("Zapf");
        preview.sample_text_mut().clear();
        let request = preview.request();
        assert_eq!(request.text, DEFAULT_SAMPLE_TEXT);
        assert_eq!(request.font, "Zapf");
    }

    #[test]
    fn test_typing_never_exceeds_limit() {
        let mut preview = ActivePreview::new();
        preview.sample_text_mut().clear();
        let input = "x".repeat(80);
        for ch in input.chars() {
            preview.sample_text_mut().push(ch);
            preview.clamp();
            assert!(preview.request().text.chars().count() <= MAX_SAMPLE_CHARS);
        }
        assert_eq!(preview.request().text, "x".repeat(MAX_SAMPLE_CHARS));
    }

    #[test]
    fn test_clamp_counts_characters_not_bytes() {
        let mut text = "é".repeat(60);
        clamp_sample_text(&mut text);
        assert_eq!(text.chars().count(), 50);
        assert_eq!(text.len(), 100);

        let mut short = "ünïcödé".to_string();
        clamp_sample_text(&mut short);
        assert_eq!(short, "ünïcödé");
    }

    #[test]
    fn test_point_size_clamped() {
        let mut preview = ActivePreview::new();
        preview.set_point_size(4);
        assert_eq!(preview.point_size(), MIN_POINT_SIZE);
        preview.set_point_size(100);
        assert_eq!(preview.point_size(), MAX_POINT_SIZE);
        preview.set_point_size(22);
        assert_eq!(preview.point_size(), 22);
    }

    #[test]
    fn test_section_panel_sorted_at_fixed_size() {
        let mut collection = FontCollection::new();
        collection.create_folder("Display").unwrap();
        for font in ["Zapf", "Arial", "Courier"] {
            collection.add_font_to_folder("Display", font).unwrap();
        }

        let section = SectionId::Folder("Display".into());
        let panel = PreviewPanel::for_section(&collection, &section).unwrap();
        let fonts: Vec<&str> = panel.rows.iter().map(|r| r.font.as_str()).collect();
        assert_eq!(fonts, vec!["Arial", "Courier", "Zapf"]);
        assert!(panel.rows.iter().all(|r| r.point_size == 20 && r.text == r.font));
        assert_eq!(panel.title(), "Preview of Display");

        // Opening again gives the same panel
        assert_eq!(PreviewPanel::for_section(&collection, &section), Some(panel));
    }

    #[test]
    fn test_favorites_panel() {
        let mut collection = FontCollection::new();
        collection.add_favorite("b");
        collection.add_favorite("a");
        let panel = PreviewPanel::for_section(&collection, &SectionId::Favorites).unwrap();
        assert_eq!(panel.rows.len(), 2);
        assert_eq!(panel.rows[0].font, "a");
        assert_eq!(panel.title(), "Preview of Favoris");
    }

    #[test]
    fn test_missing_section_has_no_panel() {
        let collection = FontCollection::new();
        assert!(PreviewPanel::for_section(&collection, &SectionId::Folder("x".into())).is_none());
    }
}
