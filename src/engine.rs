//! Command surface over the font collection
//!
//! Every user action goes through [`MutationEngine::apply`]. Store errors never
//! escape: they come back as a [`Notice`] for the UI to show, and the display
//! list is rebuilt after each command.

use std::fmt;
use tracing::{debug, error, warn};

use crate::collection::{CollectionError, CollectionFile, FontCollection, FontUniverse};
use crate::view::{self, Row};

/// A mutation requested by the user.
///
/// Name-entry prompts produce `Option<String>`; `None` means the user cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddFavorite(String),
    RemoveFavorite(String),
    CreateFolder(Option<String>),
    RenameFolder { from: String, to: Option<String> },
    DeleteFolder(String),
    AddFontToFolder { folder: String, font: String },
    RemoveFontFromFolder { folder: String, font: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&CollectionError> for Notice {
    fn from(err: &CollectionError) -> Self {
        match err {
            CollectionError::AlreadyMember { font, folder } => {
                Notice::info(format!("'{font}' is already in '{folder}'."))
            }
            CollectionError::NotFound { .. }
            | CollectionError::DuplicateFolder(_)
            | CollectionError::CorruptState { .. } => Notice::warning(err.to_string()),
            CollectionError::Io { source, .. } => Notice::error(format!("{err}: {source}")),
        }
    }
}

/// Load the collection, degrading an unreadable document to an empty one.
///
/// The returned notice, if any, should be shown once the UI is up.
pub fn load_or_empty(file: &CollectionFile) -> (FontCollection, Option<Notice>) {
    match file.load() {
        Ok(collection) => (collection, None),
        Err(err) => {
            error!(
                path = %file.path().display(),
                error = %err,
                "Failed to load collection, starting empty"
            );
            let notice = Notice::warning(format!(
                "{err}. Starting with an empty collection; the file will be overwritten on exit."
            ));
            (FontCollection::new(), Some(notice))
        }
    }
}

/// Owns the collection for the session and keeps the display list current
#[derive(Debug)]
pub struct MutationEngine {
    universe: FontUniverse,
    collection: FontCollection,
    query: String,
    rows: Vec<Row>,
}

impl MutationEngine {
    pub fn new(universe: FontUniverse, collection: FontCollection) -> Self {
        let mut engine = Self {
            universe,
            collection,
            query: String::new(),
            rows: Vec::new(),
        };
        engine.resynthesize();
        engine
    }

    pub fn universe(&self) -> &FontUniverse {
        &self.universe
    }

    pub fn collection(&self) -> &FontCollection {
        &self.collection
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Change the search filter and rebuild the list
    pub fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.resynthesize();
    }

    fn resynthesize(&mut self) {
        self.rows = view::synthesize(&self.universe, &self.collection, &self.query);
        debug!(rows = self.rows.len(), query = %self.query, "Synthesized font list");
    }

    /// Run a command. Returns a notice when the user should be told something.
    pub fn apply(&mut self, command: Command) -> Option<Notice> {
        debug!(?command, "Applying command");
        let result = match command {
            Command::AddFavorite(font) => {
                self.collection.add_favorite(&font);
                Ok(())
            }
            Command::RemoveFavorite(font) => self.collection.remove_favorite(&font),
            Command::CreateFolder(None) | Command::RenameFolder { to: None, .. } => {
                debug!("Name prompt cancelled");
                return None;
            }
            Command::CreateFolder(Some(name)) => self.collection.create_folder(&name),
            Command::RenameFolder { from, to: Some(to) } => {
                self.collection.rename_folder(&from, &to)
            }
            Command::DeleteFolder(name) => self.collection.delete_folder(&name).map(|_| ()),
            Command::AddFontToFolder { folder, font } => {
                self.collection.add_font_to_folder(&folder, &font)
            }
            Command::RemoveFontFromFolder { folder, font } => {
                self.collection.remove_font_from_folder(&folder, &font);
                Ok(())
            }
        };

        self.resynthesize();

        result.err().map(|err| {
            match &err {
                CollectionError::AlreadyMember { .. } => debug!(error = %err, "Command reported"),
                _ => warn!(error = %err, "Command rejected"),
            }
            Notice::from(&err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SectionId;
    use std::fs;
    use tempfile::tempdir;

    fn engine() -> MutationEngine {
        MutationEngine::new(
            FontUniverse::new(["Arial", "Courier", "Zapf"]),
            FontCollection::new(),
        )
    }

    fn font(name: &str) -> Row {
        Row::Font(name.to_string())
    }

    fn add_to(folder: &str, font: &str) -> Command {
        Command::AddFontToFolder {
            folder: folder.to_string(),
            font: font.to_string(),
        }
    }

    fn rename(from: &str, to: Option<&str>) -> Command {
        Command::RenameFolder {
            from: from.to_string(),
            to: to.map(str::to_string),
        }
    }

    #[test]
    fn test_initial_rows() {
        let engine = engine();
        assert_eq!(engine.rows(), [font("Arial"), font("Courier"), font("Zapf")]);
    }

    #[test]
    fn test_add_favorite_resynthesizes() {
        let mut engine = engine();
        assert_eq!(engine.apply(Command::AddFavorite("Zapf".into())), None);
        assert_eq!(
            engine.rows(),
            [
                Row::Header(SectionId::Favorites),
                font("Zapf"),
                Row::Blank,
                font("Arial"),
                font("Courier"),
            ]
        );
    }

    #[test]
    fn test_folder_scenario() {
        let mut engine = engine();
        assert_eq!(engine.apply(Command::CreateFolder(Some("Display".into()))), None);
        assert_eq!(engine.apply(add_to("Display", "Arial")), None);
        let rows = engine.rows();
        assert_eq!(
            &rows[..3],
            &[Row::Header(SectionId::Folder("Display".into())), font("Arial"), Row::Blank]
        );
        assert_eq!(rows.iter().filter(|r| **r == font("Arial")).count(), 2);
    }

    #[test]
    fn test_already_member_is_info_notice() {
        let mut engine = engine();
        engine.apply(Command::CreateFolder(Some("f".into())));
        engine.apply(add_to("f", "Arial"));
        let notice = engine.apply(add_to("f", "Arial")).unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(engine.collection().folder("f").unwrap().fonts().len(), 1);
    }

    #[test]
    fn test_errors_become_warnings() {
        let mut engine = engine();
        let notice = engine.apply(Command::RemoveFavorite("Arial".into())).unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);

        engine.apply(Command::CreateFolder(Some("dup".into())));
        let notice = engine.apply(Command::CreateFolder(Some("dup".into()))).unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.text.contains("dup"));

        let notice = engine.apply(Command::DeleteFolder("ghost".into())).unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_cancelled_prompts_are_noops() {
        let mut engine = engine();
        engine.apply(Command::CreateFolder(Some("keep".into())));
        let before = engine.collection().clone();

        assert_eq!(engine.apply(Command::CreateFolder(None)), None);
        assert_eq!(engine.apply(rename("keep", None)), None);
        assert_eq!(engine.collection(), &before);
    }

    #[test]
    fn test_rename_and_delete() {
        let mut engine = engine();
        engine.apply(Command::CreateFolder(Some("a".into())));
        engine.apply(add_to("a", "Zapf"));
        assert_eq!(engine.apply(rename("a", Some("b"))), None);
        assert!(engine.rows().contains(&Row::Header(SectionId::Folder("b".into()))));
        assert!(!engine.rows().contains(&Row::Header(SectionId::Folder("a".into()))));

        assert_eq!(engine.apply(Command::DeleteFolder("b".into())), None);
        assert_eq!(engine.rows().len(), 3);
    }

    #[test]
    fn test_remove_font_from_folder_silent() {
        let mut engine = engine();
        let command = Command::RemoveFontFromFolder {
            folder: "ghost".into(),
            font: "Arial".into(),
        };
        assert_eq!(engine.apply(command), None);
    }

    #[test]
    fn test_query_bypasses_groups() {
        let mut engine = engine();
        engine.apply(Command::AddFavorite("Zapf".into()));
        engine.set_query("Z");
        assert_eq!(engine.rows(), [font("Zapf")]);

        // Mutations keep the active filter
        engine.apply(Command::AddFavorite("Arial".into()));
        assert_eq!(engine.rows(), [font("Zapf")]);

        engine.set_query("");
        assert_eq!(engine.rows()[0], Row::Header(SectionId::Favorites));
    }

    #[test]
    fn test_load_or_empty_degrades_corrupt_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json at all").unwrap();

        let (collection, notice) = load_or_empty(&CollectionFile::new(&path));
        assert_eq!(collection, FontCollection::new());
        assert_eq!(notice.unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_save_failure_is_error_notice() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "plain file").unwrap();

        let mut collection = FontCollection::new();
        collection.add_favorite("Arial");
        let err = CollectionFile::new(blocker.join("data.json"))
            .save(&collection)
            .unwrap_err();
        assert!(matches!(
            err,
            CollectionError::Io { operation: "create directory", .. }
        ));

        let notice = Notice::from(&err);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.text.contains("not_a_dir"));
    }

    #[test]
    fn test_load_or_empty_unreadable_path() {
        let dir = tempdir().unwrap();
        let (collection, notice) = load_or_empty(&CollectionFile::new(dir.path()));
        assert_eq!(collection, FontCollection::new());
        let notice = notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.text.contains("failed to read"));
    }

    #[test]
    fn test_load_or_empty_missing_document_is_quiet() {
        let dir = tempdir().unwrap();
        let file = CollectionFile::new(dir.path().join("none.json"));
        let (collection, notice) = load_or_empty(&file);
        assert_eq!(collection, FontCollection::new());
        assert!(notice.is_none());
    }
}
