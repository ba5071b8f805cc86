// crates/document_store/src/lib.rs

//! Named documents in, named documents out.
//!
//! The splitter only ever reads one document and writes a handful, so the
//! store interface is two calls.  No listing, no locking, no atomic replace.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters a document name may never contain: either path separator and
/// control characters. Anything else, non-ASCII included, is allowed.
static FORBIDDEN_NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/\\\x00-\x1f]").unwrap());

/// Read and write whole documents by name.
pub trait DocumentStore {
    fn read(&self, name: &str) -> Result<String>;
    fn write(&self, name: &str, content: &str) -> Result<()>;
}

/// Rejects names that would escape the store's directory. A valid name is
/// exactly one plain path component.
pub fn validate_document_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || FORBIDDEN_NAME_CHARS.is_match(name) {
        return Err(anyhow!("Invalid document name '{}'", name));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(anyhow!("Invalid document name '{}'", name)),
    }
}

/// Documents are UTF-8 files directly inside `root`.
#[derive(Clone, Debug)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a document after checking its name.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_document_name(name)?;
        Ok(self.root.join(name))
    }
}

impl DocumentStore for FsDocumentStore {
    fn read(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Error reading {}", path.display()))?;
        log::debug!("Read {} ({} bytes)", path.display(), content.len());
        Ok(content)
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::write(&path, content).with_context(|| format!("Error writing {}", path.display()))?;
        log::debug!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}

/// In-memory store, handy for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RefCell<BTreeMap<String, String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with one document.
    pub fn with_document(name: &str, content: &str) -> Self {
        let store = Self::new();
        store.documents.borrow_mut().insert(name.to_string(), content.to_string());
        store
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.documents.borrow().get(name).cloned()
    }

    /// Names of every stored document, sorted.
    pub fn names(&self) -> Vec<String> {
        self.documents.borrow().keys().cloned().collect()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read(&self, name: &str) -> Result<String> {
        self.get(name)
            .ok_or_else(|| anyhow!("Document {} does not exist", name))
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        validate_document_name(name)?;
        self.documents
            .borrow_mut()
            .insert(name.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_document_name() {
        for ok in [
            "index.html",
            "formula-builder.html",
            "index_new.html",
            "a",
            "指南.html",
            "guía.html",
            "x y.html",
            "..hidden.html",
        ] {
            assert!(validate_document_name(ok).is_ok(), "{}", ok);
        }
        for bad in [
            "",
            ".",
            "..",
            "../x.html",
            "dir/x.html",
            "/x.html",
            "x.html/",
            "C:\\x.html",
            "dir\\x.html",
            "x\0.html",
            "x\n.html",
        ] {
            assert!(validate_document_name(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_fs_store_round_trip() {
        let dir = tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        store.write("page.html", "<p>精油</p>").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("page.html")).unwrap(), "<p>精油</p>");
        assert_eq!(store.read("page.html").unwrap(), "<p>精油</p>");
    }

    #[test]
    fn test_fs_store_non_ascii_name_round_trip() {
        let dir = tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        assert_eq!(store.root(), dir.path());
        assert_eq!(store.path_for("指南.html").unwrap(), dir.path().join("指南.html"));
        store.write("指南.html", "<h1>芳疗指南</h1>").unwrap();
        assert!(dir.path().join("指南.html").exists());
        assert_eq!(store.read("指南.html").unwrap(), "<h1>芳疗指南</h1>");
    }

    #[test]
    fn test_fs_store_overwrites() {
        let dir = tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        store.write("page.html", "old").unwrap();
        store.write("page.html", "new").unwrap();
        assert_eq!(store.read("page.html").unwrap(), "new");
    }

    #[test]
    fn test_fs_store_missing_document() {
        let dir = tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        let err = store.read("missing.html").unwrap_err();
        assert!(err.to_string().contains("Error reading"));
    }

    #[test]
    fn test_fs_store_rejects_escaping_names() {
        let dir = tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path().join("inner"));
        assert!(store.write("../outside.html", "x").is_err());
        assert!(!dir.path().join("outside.html").exists());
    }

    #[test]
    fn test_fs_store_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path().join("does-not-exist"));
        let err = store.write("page.html", "x").unwrap_err();
        assert!(err.to_string().contains("Error writing"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryDocumentStore::with_document("index.html", "source");
        assert_eq!(store.read("index.html").unwrap(), "source");
        assert!(store.read("other.html").is_err());
        store.write("b.html", "B").unwrap();
        store.write("a.html", "A").unwrap();
        assert_eq!(store.names(), vec!["a.html", "b.html", "index.html"]);
        assert_eq!(store.get("a.html").as_deref(), Some("A"));
        assert!(store.write("../a.html", "x").is_err());
    }
}
