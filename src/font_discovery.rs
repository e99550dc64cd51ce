//! Font discovery via fontconfig
//!
//! Enumerate installed font families and resolve a family name to its file

use anyhow::{Context, Result};
use fontconfig::{Fontconfig, Pattern};
use std::collections::BTreeSet;
use std::ffi::CString;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// All installed font families (primary family name of each face), deduplicated
pub fn list_font_families() -> Result<Vec<String>> {
    info!("Loading available font families from fontconfig...");
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    // Empty pattern matches every font
    let pattern = Pattern::new(&fc);
    let font_set = fontconfig::list_fonts(&pattern, None);

    let mut families = BTreeSet::new();
    for font_pattern in font_set.iter() {
        // Index 0 is the primary family; later indices are localized or weight aliases
        if let Some(family) = font_pattern.get_string(fontconfig::FC_FAMILY) {
            families.insert(family.to_string());
        }
    }

    info!(count = families.len(), "Discovered font families via fontconfig");
    Ok(families.into_iter().collect())
}

/// Font file for a family name.
///
/// Fails when fontconfig substitutes a different family, so callers can fall
/// back to their default face instead of silently drawing the wrong font.
pub fn find_font_path(family: &str) -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    let mut pattern = Pattern::new(&fc);
    let family_cstr =
        CString::new(family).with_context(|| format!("Invalid family name: {}", family))?;
    pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);

    let matched = pattern.font_match();

    if let Some(matched_family) = matched.get_string(fontconfig::FC_FAMILY) {
        if !matched_family.eq_ignore_ascii_case(family) {
            debug!(
                requested = family,
                matched_family = matched_family,
                "Fontconfig substituted a different family"
            );
            return Err(anyhow::anyhow!(
                "Font '{}' not installed - fontconfig returned family '{}' instead",
                family,
                matched_family
            ));
        }
    }

    let file_path = matched
        .filename()
        .with_context(|| format!("No font file found for '{}'", family))?;

    let path = PathBuf::from(file_path);
    if !path.exists() {
        warn!(
            font = family,
            path = %path.display(),
            "Font file path from fontconfig does not exist"
        );
        return Err(anyhow::anyhow!(
            "Font file path '{}' does not exist",
            path.display()
        ));
    }

    debug!(font = family, path = %path.display(), "Resolved font path");
    Ok(path)
}
