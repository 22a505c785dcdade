use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use dashmap::DashSet;
use parking_lot::RwLock;

use super::types::{Document, Posting};
use super::{Storage, StorageError};

/// Documents and their derived posting lists, guarded together so an upsert
/// replaces both under one write lock.
#[derive(Default)]
struct IndexTable {
    documents: HashMap<String, Document>,
    postings: HashMap<String, Vec<Posting>>,
}

/// In-memory [`Storage`] implementation.
///
/// The noise-word and vocabulary sets only ever grow, so they live in
/// lock-free concurrent sets with idempotent insertion. The document and
/// posting tables share a single read-write lock: a document upsert removes
/// the stale postings of any previous content and installs the replacement
/// in the same critical section, so readers see either the old document or
/// the new one, never a mixture.
pub struct MemoryStorage {
    noise: DashSet<String>,
    vocabulary: DashSet<String>,
    table: RwLock<IndexTable>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            noise: DashSet::new(),
            vocabulary: DashSet::new(),
            table: RwLock::new(IndexTable::default()),
        }
    }

    /// Drops all stored state: documents, postings, noise words, and
    /// vocabulary.
    pub fn clear(&self) {
        self.noise.clear();
        self.vocabulary.clear();
        let mut table = self.table.write();
        table.documents.clear();
        table.postings.clear();
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn noise_words(&self) -> Result<HashSet<String>, StorageError> {
        Ok(self.noise.iter().map(|w| w.key().clone()).collect())
    }

    async fn union_noise_words(&self, words: &[String]) -> Result<(), StorageError> {
        for word in words {
            self.noise.insert(word.clone());
        }
        Ok(())
    }

    async fn document(&self, id: &str) -> Result<Option<Document>, StorageError> {
        Ok(self.table.read().documents.get(id).cloned())
    }

    async fn upsert_document(&self, doc: Document) -> Result<(), StorageError> {
        let mut table = self.table.write();

        // Purge postings left over from a previous version of this document.
        let stale: HashSet<String> = table
            .documents
            .get(&doc.id)
            .map(|old| old.normalized_lines.iter().flatten().cloned().collect())
            .unwrap_or_default();
        for word in stale {
            let emptied = table
                .postings
                .get_mut(&word)
                .map(|list| {
                    list.retain(|p| p.doc_id != doc.id);
                    list.is_empty()
                })
                .unwrap_or(false);
            if emptied {
                table.postings.remove(&word);
            }
        }

        for (line, tokens) in doc.normalized_lines.iter().enumerate() {
            for token in tokens {
                table.postings.entry(token.clone()).or_default().push(Posting {
                    doc_id: doc.id.clone(),
                    line,
                });
            }
        }

        table.documents.insert(doc.id.clone(), doc);
        Ok(())
    }

    async fn documents(&self) -> Result<Vec<Document>, StorageError> {
        Ok(self.table.read().documents.values().cloned().collect())
    }

    async fn union_vocabulary(&self, words: &[String]) -> Result<(), StorageError> {
        for word in words {
            self.vocabulary.insert(word.clone());
        }
        Ok(())
    }

    async fn vocabulary(&self) -> Result<HashSet<String>, StorageError> {
        Ok(self.vocabulary.iter().map(|w| w.key().clone()).collect())
    }

    async fn postings(&self, word: &str) -> Result<Vec<Posting>, StorageError> {
        Ok(self
            .table
            .read()
            .postings
            .get(word)
            .cloned()
            .unwrap_or_default())
    }
}
