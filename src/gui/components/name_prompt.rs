//! Modal name entry for creating and renaming folders

use eframe::egui;

use crate::engine::Command;
use crate::gui::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Purpose {
    CreateFolder,
    RenameFolder(String),
}

/// Single-line text prompt.
///
/// Produces a [`Command`] once the user confirms or cancels; a cancel yields
/// the command with `None` as the name.
pub struct NamePrompt {
    purpose: Option<Purpose>,
    name: String,
}

impl NamePrompt {
    pub fn new() -> Self {
        Self {
            purpose: None,
            name: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.purpose.is_some()
    }

    pub fn open_create(&mut self) {
        self.purpose = Some(Purpose::CreateFolder);
        self.name.clear();
    }

    pub fn open_rename(&mut self, folder: &str) {
        self.purpose = Some(Purpose::RenameFolder(folder.to_string()));
        self.name = folder.to_string();
    }

    fn finish(&mut self, name: Option<String>) -> Option<Command> {
        let purpose = self.purpose.take()?;
        self.name.clear();
        Some(match purpose {
            Purpose::CreateFolder => Command::CreateFolder(name),
            Purpose::RenameFolder(from) => Command::RenameFolder { from, to: name },
        })
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<Command> {
        let (title, message) = match &self.purpose {
            None => return None,
            Some(Purpose::CreateFolder) => (
                "New folder".to_string(),
                "Enter a name for the new folder:".to_string(),
            ),
            Some(Purpose::RenameFolder(from)) => (
                "Rename folder".to_string(),
                format!("Enter a new name for the folder '{from}':"),
            ),
        };

        let mut outcome: Option<Option<String>> = None;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                let response = ui.text_edit_singleline(&mut self.name);
                response.request_focus();

                ui.add_space(ITEM_SPACING);

                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    let has_name = !self.name.is_empty();
                    let ok = ui.add_enabled(has_name, egui::Button::new("OK")).clicked();
                    if (ok || submitted) && has_name {
                        outcome = Some(Some(self.name.clone()));
                    }

                    let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
                    if ui.button("Cancel").clicked() || escape {
                        outcome = Some(None);
                    }
                });
            });

        outcome.and_then(|name| self.finish(name))
    }
}
