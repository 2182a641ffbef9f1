use crate::config::Config;
use crate::core::data::{Catalog, IconMap, ToolCatalog};
use crate::core::traits::{CatalogLoad, CatalogStorage, SaveReport};
use crate::utils::error::{AppError, AppResult, IoAction};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Outcome of reading one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    Found(T),
    Missing,
}

impl<T: Default> Loaded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Loaded::Found(doc) => doc,
            Loaded::Missing => T::default(),
        }
    }
}

/// Read and parse the document at `path`.
///
/// A missing file is not an error. Every other failure is, including an
/// empty file, since saving over it would replace whatever was meant to be there.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> AppResult<Loaded<T>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Loaded::Missing),
        Err(e) => return Err(AppError::from_io(path, IoAction::Read, &e)),
    };

    let doc = serde_json::from_str(&content).map_err(|e| AppError::from_json(path, &e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded document");
    Ok(Loaded::Found(doc))
}

/// Render a document with 4-space indentation and a trailing newline.
pub fn render_document<T: Serialize>(doc: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Overwrite `path` with the rendered document.
pub fn save_document<T: Serialize>(path: &Path, doc: &T) -> AppResult<()> {
    let content = render_document(doc).map_err(|e| AppError::Io {
        path: path.to_path_buf(),
        action: IoAction::Write,
        message: e.to_string(),
    })?;

    std::fs::write(path, &content).map_err(|e| AppError::from_io(path, IoAction::Write, &e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "saved document");
    Ok(())
}

/// The two catalog documents inside the data directory
pub struct JsonStore {
    data_dir: PathBuf,
    tools_path: PathBuf,
    icons_path: PathBuf,
}

impl JsonStore {
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data.dir.clone(),
            tools_path: config.tools_path(),
            icons_path: config.icons_path(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tools_path(&self) -> &Path {
        &self.tools_path
    }

    pub fn icons_path(&self) -> &Path {
        &self.icons_path
    }
}

impl CatalogStorage for JsonStore {
    fn ensure_storage_exists(&self) -> AppResult<()> {
        if self.data_dir.is_dir() {
            Ok(())
        } else {
            Err(AppError::DataDirMissing(self.data_dir.clone()))
        }
    }

    fn load_catalog(&self) -> AppResult<CatalogLoad> {
        let mut missing = Vec::new();

        let tools = load_document::<ToolCatalog>(&self.tools_path)?;
        if matches!(tools, Loaded::Missing) {
            missing.push(self.tools_path.clone());
        }

        let icons = load_document::<IconMap>(&self.icons_path)?;
        if matches!(icons, Loaded::Missing) {
            missing.push(self.icons_path.clone());
        }

        Ok(CatalogLoad {
            catalog: Catalog::new(tools.into_inner(), icons.into_inner()),
            missing,
        })
    }

    fn save_catalog(&self, catalog: &Catalog) -> SaveReport {
        let results = vec![
            (self.tools_path.clone(), save_document(&self.tools_path, catalog.tools())),
            (self.icons_path.clone(), save_document(&self.icons_path, catalog.icons())),
        ];

        for (path, result) in &results {
            if let Err(e) = result {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
            }
        }

        SaveReport { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Tool;
    use tempfile::{TempDir, tempdir};

    const TOOLS_JSON: &str = r#"{
    "Converters": [
        {
            "name": "JSON Formatter",
            "description": "Pretty-prints JSON",
            "url": "tools/converters/json_formatter.html",
            "banner": "images/converters/json_formatter.png"
        }
    ],
    "Text": []
}
"#;

    const ICONS_JSON: &str = r#"{
    "Converters": "bi-arrow-repeat",
    "Text": "bi-fonts"
}
"#;

    fn store_in(dir: &TempDir) -> JsonStore {
        let mut config = Config::default();
        config.data.dir = dir.path().join("data");
        JsonStore::new(&config)
    }

    fn seeded_store() -> (TempDir, JsonStore) {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let store = store_in(&dir);
        std::fs::write(store.tools_path(), TOOLS_JSON).unwrap();
        std::fs::write(store.icons_path(), ICONS_JSON).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_data_dir_is_reported() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.data_dir(), dir.path().join("data"));
        assert_eq!(
            store.ensure_storage_exists(),
            Err(AppError::DataDirMissing(store.data_dir().to_path_buf()))
        );

        std::fs::create_dir(store.data_dir()).unwrap();
        assert_eq!(store.ensure_storage_exists(), Ok(()));
    }

    #[test]
    fn test_missing_files_load_as_empty() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let store = store_in(&dir);

        store.ensure_storage_exists().unwrap();
        let load = store.load_catalog().unwrap();

        assert_eq!(load.catalog, Catalog::default());
        assert_eq!(
            load.missing,
            vec![store.tools_path().to_path_buf(), store.icons_path().to_path_buf()]
        );
    }

    #[test]
    fn test_load_then_save_reproduces_documents() {
        let (_dir, store) = seeded_store();

        let load = store.load_catalog().unwrap();
        assert!(load.missing.is_empty());
        let report = store.save_catalog(&load.catalog);

        assert!(report.is_complete());
        assert_eq!(std::fs::read_to_string(store.tools_path()).unwrap(), TOOLS_JSON);
        assert_eq!(std::fs::read_to_string(store.icons_path()).unwrap(), ICONS_JSON);
    }

    #[test]
    fn test_invalid_json_is_fatal_and_untouched() {
        let (_dir, store) = seeded_store();
        let broken = "{\n    \"Converters\": [\n";
        std::fs::write(store.tools_path(), broken).unwrap();

        let err = store.load_catalog().unwrap_err();

        match err {
            AppError::InvalidJson { path, line, .. } => {
                assert_eq!(path, store.tools_path());
                assert!(line >= 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(std::fs::read_to_string(store.tools_path()).unwrap(), broken);
    }

    #[test]
    fn test_empty_file_is_not_treated_as_empty_document() {
        let (_dir, store) = seeded_store();
        std::fs::write(store.icons_path(), "").unwrap();

        assert!(matches!(
            store.load_catalog(),
            Err(AppError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_is_fatal() {
        let (_dir, store) = seeded_store();
        std::fs::write(store.icons_path(), "{\"Converters\": 3}\n").unwrap();

        assert!(matches!(
            store.load_catalog(),
            Err(AppError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_data_file_that_is_a_directory_is_fatal() {
        let (_dir, store) = seeded_store();
        std::fs::remove_file(store.icons_path()).unwrap();
        std::fs::create_dir(store.icons_path()).unwrap();

        assert!(matches!(
            store.load_catalog(),
            Err(AppError::Io { action: IoAction::Read, .. })
        ));
    }

    #[test]
    fn test_render_uses_four_space_indent_and_newline() {
        let mut catalog = Catalog::default();
        catalog.add_category("C", "bi-gear").unwrap();
        catalog
            .add_tool("C", Tool::new("n", "d", "u", "b").unwrap())
            .unwrap();

        let icons = String::from_utf8(render_document(catalog.icons()).unwrap()).unwrap();
        assert_eq!(icons, "{\n    \"C\": \"bi-gear\"\n}\n");

        let empty = String::from_utf8(render_document(&IconMap::new()).unwrap()).unwrap();
        assert_eq!(empty, "{}\n");
    }

    #[test]
    fn test_save_failure_is_reported_per_document() {
        let (_dir, store) = seeded_store();
        let catalog = store.load_catalog().unwrap().catalog;
        std::fs::remove_file(store.tools_path()).unwrap();
        std::fs::create_dir(store.tools_path()).unwrap();

        let report = store.save_catalog(&catalog);

        assert!(!report.is_complete());
        assert_eq!(report.failures().count(), 1);
        assert!(report.results[1].1.is_ok());
        assert_eq!(std::fs::read_to_string(store.icons_path()).unwrap(), ICONS_JSON);
    }
}
