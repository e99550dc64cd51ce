//! Main preview canvas: sample text editor, size control and rendered text

use eframe::egui;

use crate::constants::preview::*;
use crate::gui::constants::*;
use crate::gui::fonts::FontRegistry;
use crate::preview::ActivePreview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasAction {
    None,
    AddFavorite,
    NewFolder,
}

pub fn ui(
    ui: &mut egui::Ui,
    preview: &mut ActivePreview,
    fonts: &mut FontRegistry,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    let request = preview.request();
    fonts.request(ui.ctx(), [request.font.as_str()]);

    let wrap_width = ui.available_width() * WRAP_WIDTH_FRACTION;
    let text_height = ui.available_height() * 0.6;

    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), text_height),
        egui::Layout::centered_and_justified(egui::Direction::TopDown),
        |ui| {
            ui.set_max_width(wrap_width);
            let font_id = egui::FontId::new(request.point_size as f32, fonts.family(&request.font));
            ui.add(egui::Label::new(egui::RichText::new(&request.text).font(font_id)).wrap());
        },
    );

    ui.add_space(SECTION_SPACING);

    ui.vertical_centered(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(preview.sample_text_mut())
                .char_limit(MAX_SAMPLE_CHARS)
                .desired_width(wrap_width),
        );
        if response.changed() {
            preview.clamp();
        }

        ui.add_space(ITEM_SPACING);

        let mut size = preview.point_size();
        if ui
            .add(egui::Slider::new(&mut size, MIN_POINT_SIZE..=MAX_POINT_SIZE).text("pt"))
            .changed()
        {
            preview.set_point_size(size);
        }

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            let has_font = preview.selected_font().is_some();
            if ui
                .add_enabled(has_font, egui::Button::new("★ Add to favorites"))
                .clicked()
            {
                action = CanvasAction::AddFavorite;
            }
            if ui.button("📁 New folder").clicked() {
                action = CanvasAction::NewFolder;
            }
        });

        match preview.selected_font() {
            Some(font) => ui.label(egui::RichText::new(font).small().weak()),
            None => ui.label(egui::RichText::new("(No font selected)").small().weak()),
        };
    });

    action
}
