//! Stacked, scrollable rendering of a section preview panel

use eframe::egui;

use crate::gui::fonts::FontRegistry;
use crate::preview::PreviewPanel;
use crate::view::SectionId;

/// Keyed on the section itself: a folder may share the favorites label
pub fn section_id(kind: &str, section: &SectionId) -> egui::Id {
    egui::Id::new((kind, section))
}

/// Draw every row of `panel` in its own face. Used by both the inline column
/// and the detached windows.
pub fn ui(ui: &mut egui::Ui, panel: &PreviewPanel, fonts: &mut FontRegistry) {
    fonts.request(ui.ctx(), panel.rows.iter().map(|r| r.font.as_str()));

    if panel.rows.is_empty() {
        ui.label(egui::RichText::new("(No fonts in this section)").italics().weak());
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt(section_id("section_preview", &panel.section))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for request in &panel.rows {
                let family = fonts.family(&request.font);
                let font_id = egui::FontId::new(request.point_size as f32, family);
                ui.label(egui::RichText::new(&request.text).font(font_id));
            }
        });
}
