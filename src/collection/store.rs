//! Favorites and user folders
//!
//! The store keeps the membership data exactly as it was entered: favorites
//! newest-first, folder contents in append order and folders in registry order.
//! Sorting for display happens in the view, never here.

use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::error::{CollectionError, Result};

/// A named, user-created group of fonts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    name: String,
    fonts: Vec<String>,
}

impl Folder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fonts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in append order
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    pub fn contains(&self, font: &str) -> bool {
        self.fonts.iter().any(|f| f == font)
    }
}

/// The user's curated collection: one favorites group plus ordered folders.
///
/// Invariants:
/// - no font appears twice in favorites
/// - no font appears twice within a folder
/// - folder names are unique
///
/// Stored names are never checked against the installed fonts; a folder can
/// outlive the fonts it references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontCollection {
    favorites: Vec<String>,
    folders: Vec<Folder>,
}

impl FontCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a collection from raw stored lists.
    ///
    /// Duplicate entries are dropped (first occurrence wins). A folder name seen
    /// twice keeps its first position and the contents of its last occurrence.
    pub fn from_parts(favorites: Vec<String>, folders: Vec<(String, Vec<String>)>) -> Self {
        let mut collection = Self {
            favorites: dedup_keep_first(favorites, "favorites"),
            folders: Vec::with_capacity(folders.len()),
        };

        for (name, fonts) in folders {
            let fonts = dedup_keep_first(fonts, &name);
            match collection.folder_index(&name) {
                Some(idx) => {
                    warn!(folder = %name, "Folder listed twice in document, keeping last contents");
                    collection.folders[idx].fonts = fonts;
                }
                None => collection.folders.push(Folder { name, fonts }),
            }
        }

        collection
    }

    /// Favorites in stored (newest-first) order
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, font: &str) -> bool {
        self.favorites.iter().any(|f| f == font)
    }

    /// Folders in registry order
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    /// Folders that currently list `font`, in registry order
    pub fn folders_containing<'a>(
        &'a self,
        font: &'a str,
    ) -> impl Iterator<Item = &'a Folder> + 'a {
        self.folders.iter().filter(move |f| f.contains(font))
    }

    fn folder_index(&self, name: &str) -> Option<usize> {
        self.folders.iter().position(|f| f.name == name)
    }

    /// Prepend `font` to favorites. Returns false when it was already there.
    pub fn add_favorite(&mut self, font: &str) -> bool {
        if self.is_favorite(font) {
            debug!(font = %font, "Font already a favorite");
            return false;
        }
        self.favorites.insert(0, font.to_string());
        info!(font = %font, count = self.favorites.len(), "Added favorite");
        true
    }

    pub fn remove_favorite(&mut self, font: &str) -> Result<()> {
        let idx = self
            .favorites
            .iter()
            .position(|f| f == font)
            .ok_or_else(|| CollectionError::favorite_not_found(font))?;
        self.favorites.remove(idx);
        info!(font = %font, count = self.favorites.len(), "Removed favorite");
        Ok(())
    }

    /// Create an empty folder at the end of the registry.
    /// The name is taken as-is; blank names are the caller's business.
    pub fn create_folder(&mut self, name: &str) -> Result<()> {
        if self.folder_index(name).is_some() {
            return Err(CollectionError::DuplicateFolder(name.to_string()));
        }
        self.folders.push(Folder::new(name));
        info!(folder = %name, count = self.folders.len(), "Created folder");
        Ok(())
    }

    /// Rename a folder, keeping its contents and its registry position.
    ///
    /// An existing folder already called `new_name` is replaced and its
    /// contents are lost.
    pub fn rename_folder(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let mut idx = self
            .folder_index(old_name)
            .ok_or_else(|| CollectionError::folder_not_found(old_name))?;

        if old_name == new_name {
            debug!(folder = %old_name, "Rename to same name ignored");
            return Ok(());
        }

        if let Some(existing) = self.folder_index(new_name) {
            let replaced = self.folders.remove(existing);
            warn!(
                folder = %new_name,
                lost_fonts = replaced.fonts.len(),
                "Rename target already existed, replacing it"
            );
            if existing < idx {
                idx -= 1;
            }
        }

        self.folders[idx].name = new_name.to_string();
        info!(from = %old_name, to = %new_name, "Renamed folder");
        Ok(())
    }

    /// Remove a folder and all its memberships, returning it
    pub fn delete_folder(&mut self, name: &str) -> Result<Folder> {
        let idx = self
            .folder_index(name)
            .ok_or_else(|| CollectionError::folder_not_found(name))?;
        let folder = self.folders.remove(idx);
        info!(folder = %name, fonts = folder.fonts.len(), "Deleted folder");
        Ok(folder)
    }

    /// Append `font` to a folder.
    ///
    /// A font already in the folder yields [`CollectionError::AlreadyMember`]
    /// and leaves the folder unchanged.
    pub fn add_font_to_folder(&mut self, folder_name: &str, font: &str) -> Result<()> {
        let idx = self
            .folder_index(folder_name)
            .ok_or_else(|| CollectionError::folder_not_found(folder_name))?;
        let folder = &mut self.folders[idx];
        if folder.contains(font) {
            return Err(CollectionError::AlreadyMember {
                folder: folder_name.to_string(),
                font: font.to_string(),
            });
        }
        folder.fonts.push(font.to_string());
        info!(folder = %folder_name, font = %font, "Added font to folder");
        Ok(())
    }

    /// Remove `font` from a folder. Missing folder or member is a no-op;
    /// returns whether anything was removed.
    pub fn remove_font_from_folder(&mut self, folder_name: &str, font: &str) -> bool {
        let Some(idx) = self.folder_index(folder_name) else {
            debug!(folder = %folder_name, "Folder absent, nothing to remove");
            return false;
        };
        let folder = &mut self.folders[idx];
        let Some(pos) = folder.fonts.iter().position(|f| f == font) else {
            debug!(folder = %folder_name, font = %font, "Font not in folder, nothing to remove");
            return false;
        };
        folder.fonts.remove(pos);
        info!(folder = %folder_name, font = %font, "Removed font from folder");
        true
    }
}

fn dedup_keep_first(fonts: Vec<String>, owner: &str) -> Vec<String> {
    let mut seen = HashSet::with_capacity(fonts.len());
    let before = fonts.len();
    let kept: Vec<String> = fonts.into_iter().filter(|f| seen.insert(f.clone())).collect();
    if kept.len() != before {
        warn!(owner = %owner, dropped = before - kept.len(), "Dropped duplicate font entries");
    }
    kept
}
