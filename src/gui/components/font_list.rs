//! Searchable font list with per-row context menus

use eframe::egui;

use crate::collection::{FontCollection, FontUniverse};
use crate::gui::constants::*;
use crate::view::{self, ContextAction, Row, SectionId};

/// Something the user did in the list
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    None,
    QueryChanged,
    Activate(Row),
    Context(ContextAction),
    RemoveFromFolder { folder: String, font: String },
}

fn context_label(action: &ContextAction) -> String {
    match action {
        ContextAction::DeleteFolder(_) => "🗑 Delete folder".to_string(),
        ContextAction::RenameFolder(_) => "✏ Rename folder".to_string(),
        ContextAction::PreviewSection(SectionId::Favorites) => "👁 Preview favorites".to_string(),
        ContextAction::PreviewSection(SectionId::Folder(_)) => "👁 Preview folder".to_string(),
        ContextAction::RemoveFavorite(_) => "☆ Remove from favorites".to_string(),
        ContextAction::AddFavorite(_) => "★ Add to favorites".to_string(),
        ContextAction::AddToFolder { folder, .. } => format!("Add to '{folder}'"),
        ContextAction::RemoveFromFolder { .. } => "Remove from folder".to_string(),
    }
}

/// Renders the search box and the synthesized rows.
/// `query` is the search box contents; `selected` highlights matching font rows.
/// Stored names missing from `universe` are drawn dimmed.
pub fn ui(
    ui: &mut egui::Ui,
    rows: &[Row],
    universe: &FontUniverse,
    collection: &FontCollection,
    query: &mut String,
    selected: Option<&str>,
) -> ListAction {
    let mut action = ListAction::None;

    ui.horizontal(|ui| {
        ui.label("🔍");
        let response = ui.add(
            egui::TextEdit::singleline(query)
                .hint_text("Search fonts")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            action = ListAction::QueryChanged;
        }
    });

    ui.add_space(ITEM_SPACING / 2.0);

    egui::Frame::NONE.fill(LIST_BACKGROUND).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, LIST_ROW_HEIGHT, rows.len(), |ui, range| {
                for row in &rows[range] {
                    if let Some(row_action) = row_ui(ui, row, universe, collection, selected) {
                        action = row_action;
                    }
                }
            });
    });

    action
}

fn row_ui(
    ui: &mut egui::Ui,
    row: &Row,
    universe: &FontUniverse,
    collection: &FontCollection,
    selected: Option<&str>,
) -> Option<ListAction> {
    let mut action = None;

    let response = match row {
        Row::Header(_) => ui.selectable_label(false, egui::RichText::new(row.label()).strong()),
        Row::Font(name) if universe.contains(name) => {
            ui.selectable_label(selected == Some(name.as_str()), row.label())
        }
        Row::Font(name) => ui
            .selectable_label(
                selected == Some(name.as_str()),
                egui::RichText::new(row.label()).italics().weak(),
            )
            .on_hover_text("Not installed"),
        Row::Blank => ui.add_sized(
            [ui.available_width(), LIST_ROW_HEIGHT],
            egui::Label::new("").sense(egui::Sense::click()),
        ),
    };

    if response.clicked() {
        action = Some(ListAction::Activate(row.clone()));
    }

    let menu_actions = view::context_actions(collection, row);
    if !menu_actions.is_empty() {
        response.context_menu(|ui| {
            for menu_action in menu_actions {
                match menu_action {
                    ContextAction::RemoveFromFolder { font, folders } => {
                        ui.menu_button("Remove from folder", |ui| {
                            ui.label(egui::RichText::new("From which folder?").weak());
                            for folder in folders {
                                if ui.button(&folder).clicked() {
                                    action = Some(ListAction::RemoveFromFolder {
                                        folder,
                                        font: font.clone(),
                                    });
                                    ui.close();
                                }
                            }
                        });
                    }
                    other => {
                        if ui.button(context_label(&other)).clicked() {
                            action = Some(ListAction::Context(other));
                            ui.close();
                        }
                    }
                }
            }
        });
    }

    action
}
