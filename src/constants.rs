//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Persisted collection document
pub mod storage {
    /// Directory created under the platform data dir
    pub const APP_DIR: &str = "font-shelf";

    /// Collection document file name
    pub const FILENAME: &str = "font_viewer_data.json";

    /// Version written into every saved document.
    /// Documents without a version are read as version 1.
    pub const DOCUMENT_VERSION: u32 = 1;
}

/// Labels shown in the synthesized font list
pub mod labels {
    /// Header label of the favorites section
    pub const FAVORITES: &str = "Favoris";
}

/// Preview canvas and section preview constants
pub mod preview {
    /// Initial sample text on the main canvas
    pub const DEFAULT_SAMPLE_TEXT: &str = "Portez ce vieux whisky au juge blond qui fume";

    /// Maximum sample text length, in characters
    pub const MAX_SAMPLE_CHARS: usize = 50;

    /// Smallest selectable point size
    pub const MIN_POINT_SIZE: u32 = 10;

    /// Largest selectable point size
    pub const MAX_POINT_SIZE: u32 = 40;

    /// Point size used before the user touches the size control
    pub const DEFAULT_POINT_SIZE: u32 = 30;

    /// Fixed point size of every row in a section preview panel
    pub const SECTION_PREVIEW_SIZE: u32 = 20;

    /// Face used when no font is selected
    pub const FALLBACK_FONT: &str = "Arial";

    /// Share of the available width used to wrap the canvas text
    pub const WRAP_WIDTH_FRACTION: f32 = 2.0 / 3.0;
}
