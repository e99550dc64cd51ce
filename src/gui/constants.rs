//! GUI-specific constants for layout, colors and timings

use egui;

/// Main window dimensions
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const WINDOW_MIN_WIDTH: f32 = 800.0;
pub const WINDOW_MIN_HEIGHT: f32 = 500.0;

/// Font list column
pub const LIST_WIDTH: f32 = 280.0;
pub const LIST_ROW_HEIGHT: f32 = 18.0;

/// Inline section preview column
pub const SECTION_PANEL_WIDTH: f32 = 360.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Palette
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xF2, 0xF2, 0xF2);
pub const LIST_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xD0, 0xD0, 0xD0);
pub const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2F, 0x2F, 0x2F);

/// Notice colors
pub const NOTICE_INFO: egui::Color32 = egui::Color32::from_rgb(0, 90, 160);
pub const NOTICE_WARNING: egui::Color32 = egui::Color32::from_rgb(170, 110, 0);
pub const NOTICE_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// How long a notice stays on screen
pub const NOTICE_TIMEOUT_MS: u64 = 6000;
