//! Lazily registers installed fonts with egui so previews can draw in them

use std::collections::{HashMap, HashSet};
use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use fontdue::{Font, FontSettings};
use tracing::{debug, info};

use crate::font_discovery;

/// Font families loaded on demand.
///
/// egui applies new font definitions at the start of the next pass, so a
/// family only becomes usable after [`FontRegistry::begin_pass`] has seen it.
/// Until then, and for fonts that cannot be resolved or parsed,
/// [`FontRegistry::family`] returns the default proportional face.
#[derive(Default)]
pub struct FontRegistry {
    loaded: HashMap<String, Arc<FontData>>,
    unavailable: HashSet<String>,
    pending: HashSet<String>,
    active: HashSet<String>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once at the top of every frame
    pub fn begin_pass(&mut self) {
        if !self.pending.is_empty() {
            self.active.extend(self.pending.drain());
        }
    }

    /// Make sure every font in `fonts` is loaded or known to be missing
    pub fn request<'a>(&mut self, ctx: &egui::Context, fonts: impl IntoIterator<Item = &'a str>) {
        let mut added = false;
        for font in fonts {
            if self.is_known(font) {
                continue;
            }
            added |= self.insert(font, load_font_bytes(font));
        }

        if added {
            info!(loaded = self.loaded.len(), "Registering fonts with egui");
            ctx.set_fonts(self.definitions());
            ctx.request_repaint();
        }
    }

    /// Family to draw `font` with right now
    pub fn family(&self, font: &str) -> FontFamily {
        if self.active.contains(font) {
            FontFamily::Name(font.into())
        } else {
            FontFamily::Proportional
        }
    }

    fn is_known(&self, font: &str) -> bool {
        self.loaded.contains_key(font) || self.unavailable.contains(font)
    }

    /// Record the outcome of loading `font`. Returns true when it was added.
    fn insert(&mut self, font: &str, bytes: Result<Vec<u8>>) -> bool {
        match bytes.and_then(validate_font) {
            Ok(bytes) => {
                self.loaded
                    .insert(font.to_string(), Arc::new(FontData::from_owned(bytes)));
                self.pending.insert(font.to_string());
                true
            }
            Err(e) => {
                debug!(font = %font, error = %e, "Font unavailable, using fallback face");
                self.unavailable.insert(font.to_string());
                false
            }
        }
    }

    fn definitions(&self) -> FontDefinitions {
        let mut defs = FontDefinitions::default();
        let fallback_stack = defs
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        for (name, data) in &self.loaded {
            let key = format!("user_font:{name}");
            defs.font_data.insert(key.clone(), data.clone());

            // Glyphs missing from the font come from the default stack
            let mut stack = vec![key];
            stack.extend(fallback_stack.iter().cloned());
            defs.families.insert(FontFamily::Name(name.as_str().into()), stack);
        }
        defs
    }
}

fn load_font_bytes(font: &str) -> Result<Vec<u8>> {
    let path = font_discovery::find_font_path(font)?;
    fs::read(&path).with_context(|| format!("Failed to read font file: {}", path.display()))
}

/// egui panics on font data it cannot parse, so bitmap and Type1 files
/// resolved by fontconfig must be rejected before registration.
fn validate_font(bytes: Vec<u8>) -> Result<Vec<u8>> {
    Font::from_bytes(bytes.as_slice(), FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;
    Ok(bytes)
}
