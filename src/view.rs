//! Display list synthesis
//!
//! The font list is never edited in place. After every mutation the whole list
//! is rebuilt from the universe, the collection and the search query.

use std::collections::HashSet;
use std::fmt;

use crate::collection::{FontCollection, FontUniverse};
use crate::constants::labels;

/// A group of fonts that can be previewed as a whole
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionId {
    Favorites,
    Folder(String),
}

impl SectionId {
    pub fn label(&self) -> &str {
        match self {
            SectionId::Favorites => labels::FAVORITES,
            SectionId::Folder(name) => name,
        }
    }

    /// Section members sorted for display, or `None` if the section is gone
    pub fn sorted_members<'a>(&self, collection: &'a FontCollection) -> Option<Vec<&'a str>> {
        match self {
            SectionId::Favorites => Some(sorted(collection.favorites())),
            SectionId::Folder(name) => collection.folder(name).map(|f| sorted(f.fonts())),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the font list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Row {
    Header(SectionId),
    Blank,
    Font(String),
}

/// What a left click on a row does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    PreviewSection(SectionId),
    SelectFont(String),
    None,
}

impl Row {
    pub fn action(&self) -> RowAction {
        match self {
            Row::Header(section) => RowAction::PreviewSection(section.clone()),
            Row::Font(name) => RowAction::SelectFont(name.clone()),
            Row::Blank => RowAction::None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Row::Header(section) => section.label(),
            Row::Font(name) => name,
            Row::Blank => "",
        }
    }
}

/// Entry of the right-click menu for a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextAction {
    DeleteFolder(String),
    RenameFolder(String),
    PreviewSection(SectionId),
    RemoveFavorite(String),
    AddFavorite(String),
    AddToFolder { folder: String, font: String },
    /// Opens a submenu listing `folders`
    RemoveFromFolder { font: String, folders: Vec<String> },
}

/// Case-insensitive substring filter. A blank query means "no filter".
pub fn matches_query(font: &str, query: &str) -> bool {
    font.to_lowercase().contains(&query.to_lowercase())
}

fn sorted(fonts: &[String]) -> Vec<&str> {
    let mut fonts: Vec<&str> = fonts.iter().map(String::as_str).collect();
    fonts.sort_unstable();
    fonts
}

/// Build the ordered display list.
///
/// Without a query: favorites section, then one section per folder in registry
/// order, then every installed font that is not a favorite. Folder members are
/// not removed from the tail. With a query: only the matching installed fonts.
pub fn synthesize(universe: &FontUniverse, collection: &FontCollection, query: &str) -> Vec<Row> {
    if !query.is_empty() {
        return universe
            .iter()
            .filter(|font| matches_query(font, query))
            .map(|font| Row::Font(font.to_string()))
            .collect();
    }

    let mut rows = Vec::with_capacity(universe.len() + collection.favorites().len());

    if !collection.favorites().is_empty() {
        rows.push(Row::Header(SectionId::Favorites));
        rows.extend(sorted(collection.favorites()).into_iter().map(|f| Row::Font(f.to_string())));
        rows.push(Row::Blank);
    }

    for folder in collection.folders() {
        rows.push(Row::Header(SectionId::Folder(folder.name().to_string())));
        rows.extend(sorted(folder.fonts()).into_iter().map(|f| Row::Font(f.to_string())));
        rows.push(Row::Blank);
    }

    let favorites: HashSet<&str> = collection.favorites().iter().map(String::as_str).collect();
    rows.extend(
        universe
            .iter()
            .filter(|font| !favorites.contains(font))
            .map(|font| Row::Font(font.to_string())),
    );

    rows
}

/// Right-click menu entries for `row`, in menu order
pub fn context_actions(collection: &FontCollection, row: &Row) -> Vec<ContextAction> {
    match row {
        Row::Header(SectionId::Folder(name)) => vec![
            ContextAction::DeleteFolder(name.clone()),
            ContextAction::RenameFolder(name.clone()),
            ContextAction::PreviewSection(SectionId::Folder(name.clone())),
        ],
        Row::Header(SectionId::Favorites) => {
            vec![ContextAction::PreviewSection(SectionId::Favorites)]
        }
        Row::Font(font) if collection.is_favorite(font) => {
            vec![ContextAction::RemoveFavorite(font.clone())]
        }
        Row::Font(font) => {
            let mut actions = vec![ContextAction::AddFavorite(font.clone())];
            actions.extend(collection.folders().iter().map(|folder| ContextAction::AddToFolder {
                folder: folder.name().to_string(),
                font: font.clone(),
            }));
            let containing: Vec<String> = collection
                .folders_containing(font)
                .map(|f| f.name().to_string())
                .collect();
            if !containing.is_empty() {
                actions.push(ContextAction::RemoveFromFolder {
                    font: font.clone(),
                    folders: containing,
                });
            }
            actions
        }
        Row::Blank => Vec::new(),
    }
}
