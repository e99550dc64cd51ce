//! JSON document storage for the font collection
//!
//! Document layout:
//! ```json
//! { "version": 1,
//!   "favorite_fonts": ["Zapf", "Arial"],
//!   "custom_folders": { "Display": ["Arial"], "Mono": [] } }
//! ```
//! Every key is optional on read. Favorites and folder contents are written in
//! stored order, folders in registry order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::{CollectionError, Result};
use super::store::FontCollection;
use crate::constants::storage;

#[derive(Debug, Serialize, Deserialize)]
struct CollectionDocument {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    favorite_fonts: Vec<String>,
    /// Kept as an ordered list so folder order survives a round trip
    #[serde(default, with = "ordered_folders")]
    custom_folders: Vec<(String, Vec<String>)>,
}

fn default_version() -> u32 {
    storage::DOCUMENT_VERSION
}

impl From<&FontCollection> for CollectionDocument {
    fn from(collection: &FontCollection) -> Self {
        Self {
            version: storage::DOCUMENT_VERSION,
            favorite_fonts: collection.favorites().to_vec(),
            custom_folders: collection
                .folders()
                .iter()
                .map(|f| (f.name().to_string(), f.fonts().to_vec()))
                .collect(),
        }
    }
}

/// (De)serialize folders as a JSON object without losing key order
mod ordered_folders {
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    type Folders = Vec<(String, Vec<String>)>;

    pub fn serialize<S>(folders: &Folders, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(folders.iter().map(|(name, fonts)| (name, fonts)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Folders, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FoldersVisitor;

        impl<'de> Visitor<'de> for FoldersVisitor {
            type Value = Folders;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping folder names to lists of font names")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut folders = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, fonts)) = map.next_entry::<String, Vec<String>>()? {
                    folders.push((name, fonts));
                }
                Ok(folders)
            }
        }

        deserializer.deserialize_map(FoldersVisitor)
    }
}

/// Parse a collection document. `path` is only used for error reporting.
pub fn from_json(contents: &str, path: &Path) -> Result<FontCollection> {
    let document: CollectionDocument =
        serde_json::from_str(contents).map_err(|e| CollectionError::CorruptState {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if document.version > storage::DOCUMENT_VERSION {
        return Err(CollectionError::CorruptState {
            path: path.to_path_buf(),
            reason: format!(
                "unsupported document version {} (newest supported is {})",
                document.version,
                storage::DOCUMENT_VERSION
            ),
        });
    }

    Ok(FontCollection::from_parts(
        document.favorite_fonts,
        document.custom_folders,
    ))
}

/// Serialize a collection as a pretty-printed document
pub fn to_json(collection: &FontCollection, path: &Path) -> Result<String> {
    serde_json::to_string_pretty(&CollectionDocument::from(collection)).map_err(|e| {
        CollectionError::CorruptState {
            path: path.to_path_buf(),
            reason: format!("failed to serialize collection: {e}"),
        }
    })
}

/// Location of the persisted collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFile {
    path: PathBuf,
}

impl CollectionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/font-shelf/font_viewer_data.json`, or the working directory
    /// when the platform has no data dir
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(storage::APP_DIR);
        path.push(storage::FILENAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection. A missing document is an empty collection.
    pub fn load(&self) -> Result<FontCollection> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No collection document yet, starting empty");
                return Ok(FontCollection::new());
            }
            Err(e) => {
                return Err(CollectionError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let collection = from_json(&contents, &self.path)?;
        info!(
            path = %self.path.display(),
            favorites = collection.favorites().len(),
            folders = collection.folders().len(),
            "Loaded font collection"
        );
        Ok(collection)
    }

    /// Overwrite the document with `collection`
    pub fn save(&self, collection: &FontCollection) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CollectionError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let contents = to_json(collection, &self.path)?;
        fs::write(&self.path, contents).map_err(|e| CollectionError::Io {
            operation: "write",
            path: self.path.clone(),
            source: e,
        })?;

        info!(
            path = %self.path.display(),
            favorites = collection.favorites().len(),
            folders = collection.folders().len(),
            "Saved font collection"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn sample_collection() -> FontCollection {
        let mut collection = FontCollection::new();
        collection.add_favorite("Arial");
        collection.add_favorite("Zapf");
        collection.create_folder("Serif").unwrap();
        collection.create_folder("Display").unwrap();
        collection.add_font_to_folder("Serif", "Times").unwrap();
        collection.add_font_to_folder("Serif", "Garamond").unwrap();
        collection.add_font_to_folder("Display", "Arial").unwrap();
        collection
    }

    #[test]
    fn test_load_missing_document_is_empty() {
        let dir = tempdir().unwrap();
        let file = CollectionFile::new(dir.path().join("absent.json"));
        let collection = file.load().unwrap();
        assert_eq!(collection, FontCollection::new());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let file = CollectionFile::new(dir.path().join("nested/dir/data.json"));
        let original = sample_collection();

        file.save(&original).unwrap();
        let loaded = file.load().unwrap();

        let favs = |c: &FontCollection| c.favorites().iter().cloned().collect::<BTreeSet<_>>();
        assert_eq!(favs(&loaded), favs(&original));
        for folder in original.folders() {
            let reloaded = loaded.folder(folder.name()).unwrap();
            let a: BTreeSet<_> = folder.fonts().iter().collect();
            let b: BTreeSet<_> = reloaded.fonts().iter().collect();
            assert_eq!(a, b);
        }
        // Stored order is preserved too
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_writes_stored_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        CollectionFile::new(&path).save(&sample_collection()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["favorite_fonts"], serde_json::json!(["Zapf", "Arial"]));
        assert_eq!(value["custom_folders"]["Serif"], serde_json::json!(["Times", "Garamond"]));
    }

    #[test]
    fn test_folder_order_survives_round_trip() {
        let contents = r#"{"custom_folders": {"zeta": [], "alpha": ["A"], "mid": []}}"#;
        let collection = from_json(contents, Path::new("test.json")).unwrap();
        let order: Vec<&str> = collection.folders().iter().map(|f| f.name()).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);

        let written = to_json(&collection, Path::new("test.json")).unwrap();
        let reread = from_json(&written, Path::new("test.json")).unwrap();
        assert_eq!(reread, collection);
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let collection = from_json("{}", Path::new("test.json")).unwrap();
        assert!(collection.favorites().is_empty());
        assert!(collection.folders().is_empty());

        let contents = r#"{"favorite_fonts": ["Arial"]}"#;
        let collection = from_json(contents, Path::new("test.json")).unwrap();
        assert_eq!(collection.favorites(), ["Arial"]);
        assert!(collection.folders().is_empty());
    }

    #[test]
    fn test_accepts_unversioned_document() {
        let contents = r#"{"favorite_fonts": ["Zapf"], "custom_folders": {"Display": ["Arial"]}}"#;
        let collection = from_json(contents, Path::new("legacy.json")).unwrap();
        assert_eq!(collection.favorites(), ["Zapf"]);
        assert_eq!(collection.folder("Display").unwrap().fonts(), ["Arial"]);
    }

    #[test]
    fn test_rejects_newer_version() {
        let contents = r#"{"version": 99}"#;
        let err = from_json(contents, Path::new("future.json")).unwrap_err();
        assert!(matches!(err, CollectionError::CorruptState { .. }));
    }

    #[test]
    fn test_corrupt_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = CollectionFile::new(&path).load().unwrap_err();
        assert!(matches!(err, CollectionError::CorruptState { .. }));
        // The broken file is left alone
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        for contents in [
            r#""text""#,
            r#"{"favorite_fonts": "Arial"}"#,
            r#"{"custom_folders": ["Display"]}"#,
            r#"{"custom_folders": {"Display": [1, 2]}}"#,
        ] {
            let err = from_json(contents, Path::new("bad.json")).unwrap_err();
            assert!(matches!(err, CollectionError::CorruptState { .. }), "{contents}");
        }
    }

    #[test]
    fn test_save_overwrites_in_full() {
        let dir = tempdir().unwrap();
        let file = CollectionFile::new(dir.path().join("data.json"));
        file.save(&sample_collection()).unwrap();
        file.save(&FontCollection::new()).unwrap();
        assert_eq!(file.load().unwrap(), FontCollection::new());
    }

    #[test]
    fn test_save_into_unwritable_parent() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "plain file").unwrap();

        let file = CollectionFile::new(blocker.join("data.json"));
        let err = file.save(&sample_collection()).unwrap_err();
        assert!(matches!(
            err,
            CollectionError::Io { operation: "create directory", .. }
        ));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let err = CollectionFile::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, CollectionError::Io { operation: "read", .. }));
    }

    #[test]
    fn test_default_path_ends_with_app_file() {
        let path = CollectionFile::default_path();
        assert!(path.ends_with(Path::new(storage::APP_DIR).join(storage::FILENAME)));
    }
}
