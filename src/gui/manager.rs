//! Font viewer window implemented with egui/eframe

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info};

use super::components::canvas::{self, CanvasAction};
use super::components::font_list::{self, ListAction};
use super::components::name_prompt::NamePrompt;
use super::components::section_preview;
use super::constants::*;
use super::fonts::FontRegistry;
use crate::collection::CollectionFile;
use crate::engine::{Command, MutationEngine, Notice, NoticeLevel};
use crate::preview::{ActivePreview, PreviewPanel};
use crate::view::{ContextAction, RowAction, SectionId};

struct StatusMessage {
    notice: Notice,
    shown_at: Instant,
}

impl StatusMessage {
    fn color(&self) -> egui::Color32 {
        match self.notice.level {
            NoticeLevel::Info => NOTICE_INFO,
            NoticeLevel::Warning => NOTICE_WARNING,
            NoticeLevel::Error => NOTICE_ERROR,
        }
    }
}

struct FontShelfApp {
    engine: MutationEngine,
    file: CollectionFile,
    preview: ActivePreview,
    fonts: FontRegistry,
    search: String,
    name_prompt: NamePrompt,
    /// Section shown in the inline column (left click on a header)
    inline_section: Option<SectionId>,
    /// Sections open in their own windows (context menu "preview")
    detached_sections: Vec<SectionId>,
    messages: Vec<StatusMessage>,
}

impl FontShelfApp {
    fn new(
        cc: &CreationContext<'_>,
        engine: MutationEngine,
        file: CollectionFile,
        startup_notice: Option<Notice>,
    ) -> Self {
        info!("Initializing egui font viewer");

        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = BACKGROUND;
        visuals.window_fill = BACKGROUND;
        visuals.extreme_bg_color = LIST_BACKGROUND;
        visuals.override_text_color = Some(TEXT_COLOR);
        cc.egui_ctx.set_visuals(visuals);

        let mut app = Self {
            engine,
            file,
            preview: ActivePreview::new(),
            fonts: FontRegistry::new(),
            search: String::new(),
            name_prompt: NamePrompt::new(),
            inline_section: None,
            detached_sections: Vec::new(),
            messages: Vec::new(),
        };

        if let Some(notice) = startup_notice {
            app.push_notice(notice);
        }

        app
    }

    fn push_notice(&mut self, notice: Notice) {
        self.messages.push(StatusMessage {
            notice,
            shown_at: Instant::now(),
        });
    }

    fn run(&mut self, command: Command) {
        if let Some(notice) = self.engine.apply(command) {
            self.push_notice(notice);
        }
    }

    fn handle_list_action(&mut self, action: ListAction) {
        match action {
            ListAction::None => {}
            ListAction::QueryChanged => self.engine.set_query(&self.search),
            ListAction::Activate(row) => match row.action() {
                RowAction::PreviewSection(section) => self.inline_section = Some(section),
                RowAction::SelectFont(font) => {
                    self.preview.select_font(&font);
                    self.inline_section = None;
                }
                RowAction::None => {}
            },
            ListAction::Context(context) => self.handle_context_action(context),
            ListAction::RemoveFromFolder { folder, font } => {
                self.run(Command::RemoveFontFromFolder { folder, font });
            }
        }
    }

    fn handle_context_action(&mut self, action: ContextAction) {
        match action {
            ContextAction::DeleteFolder(name) => self.run(Command::DeleteFolder(name)),
            ContextAction::RenameFolder(name) => self.name_prompt.open_rename(&name),
            ContextAction::PreviewSection(section) => {
                if !self.detached_sections.contains(&section) {
                    self.detached_sections.push(section);
                }
            }
            ContextAction::RemoveFavorite(font) => self.run(Command::RemoveFavorite(font)),
            ContextAction::AddFavorite(font) => self.run(Command::AddFavorite(font)),
            ContextAction::AddToFolder { folder, font } => {
                self.run(Command::AddFontToFolder { folder, font });
            }
            // Rendered as a submenu; the chosen folder arrives as ListAction::RemoveFromFolder
            ContextAction::RemoveFromFolder { .. } => {}
        }
    }

    fn handle_canvas_action(&mut self, action: CanvasAction) {
        match action {
            CanvasAction::None => {}
            CanvasAction::AddFavorite => {
                if let Some(font) = self.preview.selected_font().map(str::to_string) {
                    self.run(Command::AddFavorite(font));
                }
            }
            CanvasAction::NewFolder => self.name_prompt.open_create(),
        }
    }

    fn show_messages(&mut self, ctx: &egui::Context) {
        let timeout = Duration::from_millis(NOTICE_TIMEOUT_MS);
        self.messages.retain(|m| m.shown_at.elapsed() < timeout);
        if self.messages.is_empty() {
            return;
        }

        egui::TopBottomPanel::bottom("notices").show(ctx, |ui| {
            for message in &self.messages {
                ui.colored_label(message.color(), &message.notice.text);
            }
        });
        ctx.request_repaint_after(timeout);
    }

    fn show_detached_previews(&mut self, ctx: &egui::Context) {
        let collection = self.engine.collection();
        let fonts = &mut self.fonts;

        self.detached_sections.retain(|section| {
            let Some(panel) = PreviewPanel::for_section(collection, section) else {
                return false;
            };
            let mut open = true;
            egui::Window::new(panel.title())
                .id(section_preview::section_id("detached_preview", section))
                .open(&mut open)
                .default_size([SECTION_PANEL_WIDTH, WINDOW_HEIGHT / 2.0])
                .show(ctx, |ui| section_preview::ui(ui, &panel, fonts));
            open
        });
    }
}

impl eframe::App for FontShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.fonts.begin_pass();

        let list_action = egui::SidePanel::left("font_list")
            .resizable(true)
            .default_width(LIST_WIDTH)
            .show(ctx, |ui| {
                font_list::ui(
                    ui,
                    self.engine.rows(),
                    self.engine.universe(),
                    self.engine.collection(),
                    &mut self.search,
                    self.preview.selected_font(),
                )
            })
            .inner;
        // The name prompt is modal; only the search box stays live
        if !self.name_prompt.is_open() || matches!(list_action, ListAction::QueryChanged) {
            self.handle_list_action(list_action);
        }

        if let Some(section) = self.inline_section.clone() {
            match PreviewPanel::for_section(self.engine.collection(), &section) {
                Some(panel) => {
                    egui::SidePanel::right("section_preview")
                        .default_width(SECTION_PANEL_WIDTH)
                        .show(ctx, |ui| {
                            ui.heading(section.label());
                            ui.add_space(ITEM_SPACING);
                            section_preview::ui(ui, &panel, &mut self.fonts);
                        });
                }
                None => self.inline_section = None,
            }
        }

        self.show_messages(ctx);

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| canvas::ui(ui, &mut self.preview, &mut self.fonts))
            .inner;
        if !self.name_prompt.is_open() {
            self.handle_canvas_action(canvas_action);
        }

        self.show_detached_previews(ctx);

        if let Some(command) = self.name_prompt.ui(ctx) {
            self.run(command);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.file.save(self.engine.collection()) {
            error!(
                path = %self.file.path().display(),
                error = %err,
                "Failed to save font collection"
            );
        }
        info!("Font viewer exiting");
    }
}

pub fn run_gui(
    engine: MutationEngine,
    file: CollectionFile,
    startup_notice: Option<Notice>,
) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Font Shelf"),
        ..Default::default()
    };

    eframe::run_native(
        "Font Shelf",
        options,
        Box::new(move |cc| Ok(Box::new(FontShelfApp::new(cc, engine, file, startup_notice)))),
    )
    .map_err(|err| anyhow!("Failed to launch font viewer: {err}"))
}
