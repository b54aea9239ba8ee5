//! Tab/document store
//!
//! Holds the ordered documents behind the tab strip, the active selection and an
//! optional in-progress rename. Nothing here touches I/O, so every operation is
//! testable in isolation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    error::{PadError, PadResult},
    templates::{boilerplate_for, DocumentKind},
    utils::text::{insert_indent, line_numbers, rewrite_java_class},
};

/// Opaque identifier assigned to a document at creation
pub type DocumentId = u64;

/// Name of the document present at startup
pub const SEED_NAME: &str = "Main.java";

/// One named block of editable text behind a tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub content: String,
}

/// Transient state of a tab rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameSession {
    /// Document being renamed
    pub id: DocumentId,
    /// Working copy of the new name
    pub name: String,
}

/// Ordered document collection with an active index
///
/// Always holds at least one document and keeps `active_index` in range.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
    active_index: usize,
    next_id: DocumentId,
    rename: Option<RenameSession>,
}

impl DocumentStore {
    /// Create a store seeded with `Main.java`
    pub fn new() -> Self {
        Self::with_seed(SEED_NAME)
    }

    /// Create a store seeded with one document named `name`
    pub fn with_seed(name: impl Into<String>) -> Self {
        let name = name.into();
        let content = boilerplate_for(&name);
        Self {
            documents: vec![Document { id: 1, name, content }],
            active_index: 0,
            next_id: 2,
            rename: None,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Never true; the last document cannot be closed
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &Document {
        &self.documents[self.active_index]
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Current position of the document with `id`
    pub fn index_of(&self, id: DocumentId) -> PadResult<usize> {
        self.documents
            .iter()
            .position(|doc| doc.id == id)
            .ok_or(PadError::NoSuchDocument(id))
    }

    fn check_index(&self, index: usize) -> PadResult<()> {
        if index < self.documents.len() {
            Ok(())
        } else {
            Err(PadError::NoSuchIndex(index))
        }
    }

    /// Append a `File<N>.<ext>` document with starter content and activate it
    pub fn create_document(&mut self, kind: DocumentKind) -> &Document {
        let name = format!("File{}.{}", self.documents.len() + 1, kind.extension());
        let content = boilerplate_for(&name);
        let id = self.next_id;
        self.next_id += 1;

        info!("Creating document {} ({:?})", name, kind);
        self.documents.push(Document { id, name, content });
        self.active_index = self.documents.len() - 1;
        self.active()
    }

    /// Remove the document at `index`; the last remaining document is kept
    pub fn close_document(&mut self, index: usize) -> PadResult<Document> {
        if self.documents.len() == 1 {
            warn!("Refusing to close the last document");
            return Err(PadError::LastDocument);
        }
        self.check_index(index)?;

        let removed = self.documents.remove(index);
        if index <= self.active_index && self.active_index > 0 {
            self.active_index -= 1;
        }
        if self
            .rename
            .as_ref()
            .is_some_and(|session| session.id == removed.id)
        {
            self.rename = None;
        }

        info!("Closed document {} (active index now {})", removed.name, self.active_index);
        Ok(removed)
    }

    /// Activate the document at `index`
    pub fn switch_to(&mut self, index: usize) -> PadResult<()> {
        self.check_index(index)?;
        self.active_index = index;
        debug!("Switched to document {}", self.documents[index].name);
        Ok(())
    }

    /// Rename the document at `index`, rewriting Java class declarations when
    /// both names are `.java` files
    pub fn rename_document(&mut self, index: usize, new_name: &str) -> PadResult<&Document> {
        self.check_index(index)?;
        if new_name.trim().is_empty() {
            return Err(PadError::EmptyName);
        }

        let doc = &mut self.documents[index];
        let old_name = std::mem::replace(&mut doc.name, new_name.to_string());
        doc.content = rewrite_java_class(&doc.content, &old_name, new_name);

        info!("Renamed {} to {}", old_name, new_name);
        Ok(&self.documents[index])
    }

    /// Replace the active document's content verbatim
    pub fn set_active_content(&mut self, text: impl Into<String>) {
        let index = self.active_index;
        self.documents[index].content = text.into();
    }

    /// Replace the active selection with an indent; returns the new cursor position
    pub fn insert_indent_at_cursor(&mut self, cursor_start: usize, cursor_end: usize) -> usize {
        let doc = &mut self.documents[self.active_index];
        let (content, cursor) = insert_indent(&doc.content, cursor_start, cursor_end);
        doc.content = content;
        cursor
    }

    /// Line numbers for the active document
    pub fn line_numbers(&self) -> Vec<usize> {
        line_numbers(&self.active().content)
    }

    pub fn rename_session(&self) -> Option<&RenameSession> {
        self.rename.as_ref()
    }

    /// Open a rename session for the document at `index`
    pub fn begin_rename(&mut self, index: usize) -> PadResult<&RenameSession> {
        self.check_index(index)?;
        let doc = &self.documents[index];
        debug!("Begin rename of {}", doc.name);
        let session = RenameSession {
            id: doc.id,
            name: doc.name.clone(),
        };
        Ok(&*self.rename.insert(session))
    }

    /// Replace the working name of the open rename session
    pub fn update_rename(&mut self, name: impl Into<String>) -> PadResult<()> {
        let session = self.rename.as_mut().ok_or(PadError::NoRenameSession)?;
        session.name = name.into();
        Ok(())
    }

    /// Apply the open rename (Enter). An empty name keeps the session open.
    pub fn submit_rename(&mut self) -> PadResult<&Document> {
        let session = self.rename.clone().ok_or(PadError::NoRenameSession)?;
        let index = match self.index_of(session.id) {
            Ok(index) => index,
            Err(e) => {
                self.rename = None;
                return Err(e);
            }
        };

        self.rename_document(index, &session.name)?;
        self.rename = None;
        Ok(&self.documents[index])
    }

    /// Apply the open rename on focus loss. An empty name discards the session.
    pub fn blur_rename(&mut self) -> PadResult<&Document> {
        let session = self.rename.as_ref().ok_or(PadError::NoRenameSession)?;
        if session.name.trim().is_empty() {
            self.rename = None;
            return Err(PadError::EmptyName);
        }
        self.submit_rename()
    }

    /// Discard the open rename session (Escape)
    pub fn cancel_rename(&mut self) {
        if let Some(session) = self.rename.take() {
            debug!("Cancelled rename of document {}", session.id);
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(count: usize) -> DocumentStore {
        let mut store = DocumentStore::new();
        for _ in 1..count {
            store.create_document(DocumentKind::Generic);
        }
        store
    }

    #[test]
    fn test_new_is_seeded() {
        let store = DocumentStore::new();
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_index(), 0);
        assert_eq!(store.active().name, "Main.java");
        assert!(store.active().content.contains("public class Main {"));
        assert!(store.rename_session().is_none());
    }

    #[test]
    fn test_create_document_appends_and_activates() {
        let mut store = DocumentStore::new();
        for expected_len in 2..6 {
            store.create_document(DocumentKind::Generic);
            assert_eq!(store.len(), expected_len);
            assert_eq!(store.active_index(), expected_len - 1);
        }
    }

    #[test]
    fn test_create_document_names_and_content() {
        let mut store = DocumentStore::new();

        let doc = store.create_document(DocumentKind::Python).clone();
        assert_eq!(doc.name, "File2.py");
        assert!(doc.content.starts_with("# Python DSA Practice Template"));

        let doc = store.create_document(DocumentKind::Java).clone();
        assert_eq!(doc.name, "File3.java");
        assert!(doc.content.contains("public class File3 {"));

        let doc = store.create_document(DocumentKind::Generic).clone();
        assert_eq!(doc.name, "File4.txt");
        assert_eq!(doc.content, "// New file: File4.txt\n// Add your code here");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = store_with(3);
        let closed = store.close_document(1).unwrap();
        let created = store.create_document(DocumentKind::C).id;
        assert_ne!(closed.id, created);
        assert_eq!(store.index_of(created).unwrap(), 2);
    }

    #[test]
    fn test_close_last_document_is_rejected() {
        let mut store = DocumentStore::new();
        let before = store.documents().to_vec();
        assert_eq!(store.close_document(0), Err(PadError::LastDocument));
        assert_eq!(store.close_document(0), Err(PadError::LastDocument));
        assert_eq!(store.documents(), before.as_slice());
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_close_out_of_range() {
        let mut store = store_with(2);
        assert_eq!(store.close_document(5), Err(PadError::NoSuchIndex(5)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_close_before_active_shifts_active() {
        let mut store = store_with(3);
        store.switch_to(2).unwrap();
        store.close_document(0).unwrap();
        assert_eq!(store.active_index(), 1);
        assert_eq!(store.active().name, "File3.txt");
    }

    #[test]
    fn test_close_after_active_keeps_active() {
        let mut store = store_with(3);
        store.switch_to(0).unwrap();
        store.close_document(2).unwrap();
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_close_active_moves_to_previous() {
        let mut store = store_with(3);
        store.switch_to(1).unwrap();
        store.close_document(1).unwrap();
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_active_stays_in_range_for_every_close() {
        for len in 2..5 {
            for active in 0..len {
                for closed in 0..len {
                    let mut store = store_with(len);
                    store.switch_to(active).unwrap();
                    store.close_document(closed).unwrap();
                    assert!(store.active_index() < len - 1);
                }
            }
        }
    }

    #[test]
    fn test_switch_to_out_of_range() {
        let mut store = store_with(2);
        assert_eq!(store.switch_to(2), Err(PadError::NoSuchIndex(2)));
        assert_eq!(store.active_index(), 1);
    }

    #[test]
    fn test_rename_java_rewrites_class() {
        let mut store = DocumentStore::new();
        let before = store.active().content.clone();

        store.rename_document(0, "Solver.java").unwrap();

        let doc = store.active();
        assert_eq!(doc.name, "Solver.java");
        assert!(doc.content.contains("class Solver {"));
        assert!(!doc.content.contains("class Main {"));
        assert_eq!(doc.content, before.replace("class Main {", "class Solver {"));
    }

    #[test]
    fn test_rename_to_non_java_keeps_content() {
        let mut store = DocumentStore::new();
        let before = store.active().content.clone();
        store.rename_document(0, "Main.txt").unwrap();
        assert_eq!(store.active().content, before);
        assert_eq!(store.active().name, "Main.txt");
    }

    #[test]
    fn test_rename_from_non_java_keeps_content() {
        let mut store = DocumentStore::new();
        store.create_document(DocumentKind::Generic);
        store.set_active_content("class File2 {}");
        store.rename_document(1, "Solver.java").unwrap();
        assert_eq!(store.active().content, "class File2 {}");
    }

    #[test]
    fn test_rename_rejects_blank_names() {
        let mut store = DocumentStore::new();
        assert_eq!(
            store.rename_document(0, "   ").map(|d| d.name.clone()),
            Err(PadError::EmptyName)
        );
        assert_eq!(store.active().name, "Main.java");
    }

    #[test]
    fn test_set_active_content() {
        let mut store = store_with(2);
        store.set_active_content("hello");
        assert_eq!(store.active().content, "hello");
        assert_ne!(store.get(0).unwrap().content, "hello");
    }

    #[test]
    fn test_insert_indent_at_cursor() {
        let mut store = DocumentStore::new();
        store.set_active_content("abc");
        assert_eq!(store.insert_indent_at_cursor(3, 3), 7);
        assert_eq!(store.active().content, "abc    ");
    }

    #[test]
    fn test_line_numbers() {
        let mut store = DocumentStore::new();
        store.set_active_content("a\nb\nc");
        assert_eq!(store.line_numbers(), vec![1, 2, 3]);
        store.set_active_content("");
        assert_eq!(store.line_numbers(), vec![1]);
    }

    #[test]
    fn test_rename_session_submit() {
        let mut store = DocumentStore::new();
        assert_eq!(store.begin_rename(0).unwrap().name, "Main.java");
        store.update_rename("Solver.java").unwrap();

        let doc = store.submit_rename().unwrap();
        assert_eq!(doc.name, "Solver.java");
        assert!(store.rename_session().is_none());
    }

    #[test]
    fn test_rename_session_submit_empty_stays_open() {
        let mut store = DocumentStore::new();
        store.begin_rename(0).unwrap();
        store.update_rename("  ").unwrap();

        assert!(matches!(store.submit_rename(), Err(PadError::EmptyName)));
        assert_eq!(store.rename_session().map(|s| s.name.as_str()), Some("  "));
        assert_eq!(store.active().name, "Main.java");
    }

    #[test]
    fn test_rename_session_blur_empty_discards() {
        let mut store = DocumentStore::new();
        store.begin_rename(0).unwrap();
        store.update_rename("").unwrap();

        assert!(matches!(store.blur_rename(), Err(PadError::EmptyName)));
        assert!(store.rename_session().is_none());
        assert_eq!(store.active().name, "Main.java");
    }

    #[test]
    fn test_rename_session_cancel() {
        let mut store = DocumentStore::new();
        store.begin_rename(0).unwrap();
        store.update_rename("Other.java").unwrap();
        store.cancel_rename();

        assert!(store.rename_session().is_none());
        assert_eq!(store.active().name, "Main.java");
    }

    #[test]
    fn test_rename_session_follows_document_after_close() {
        let mut store = store_with(3);
        store.begin_rename(2).unwrap();
        store.close_document(0).unwrap();
        store.update_rename("Renamed.txt").unwrap();

        store.submit_rename().unwrap();
        assert_eq!(store.get(1).unwrap().name, "Renamed.txt");
    }

    #[test]
    fn test_closing_renamed_document_ends_session() {
        let mut store = store_with(2);
        store.begin_rename(1).unwrap();
        store.close_document(1).unwrap();
        assert!(store.rename_session().is_none());
        assert_eq!(store.update_rename("x"), Err(PadError::NoRenameSession));
    }
}
