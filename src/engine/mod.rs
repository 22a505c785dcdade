//! Engine Facade
//!
//! [`SearchEngine`] owns the injected storage handle and exposes the five
//! public operations: noise-word registration, document ingestion, content
//! retrieval, ranked search, and prefix completion. All shared state lives
//! behind the [`Storage`] contract; the engine itself holds no collections,
//! so independent operations run concurrently and reads never block
//! unrelated writes.


use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::index;
use crate::query;
use crate::query::types::SearchResult;
use crate::storage::memory::MemoryStorage;
use crate::storage::{Storage, StorageError};
use crate::text::noise::noise_tokens;
use crate::text::normalize::Normalizer;

/// Which grow-only set a batched union targets.
#[derive(Clone, Copy)]
enum UnionKind {
    NoiseWords,
    Vocabulary,
}

impl UnionKind {
    fn label(self) -> &'static str {
        match self {
            UnionKind::NoiseWords => "noise word",
            UnionKind::Vocabulary => "vocabulary",
        }
    }
}

/// The document search engine.
///
/// Constructed with a [`Storage`] implementation; every operation reads and
/// writes through it. Ingestion and noise-word registration are idempotent,
/// so callers may safely re-invoke them after a storage failure.
pub struct SearchEngine {
    storage: Arc<dyn Storage>,
    normalizer: Normalizer,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_config(storage, SearchConfig::default())
    }

    pub fn with_config(storage: Arc<dyn Storage>, config: SearchConfig) -> Self {
        Self {
            storage,
            normalizer: Normalizer::new(config.stem),
            config,
        }
    }

    /// Engine backed by a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Registers the whitespace-separated words of `text` as noise words.
    ///
    /// Safe to call repeatedly or incrementally; the underlying union is
    /// idempotent.
    pub async fn add_noise_words(&self, text: &str) -> Result<()> {
        let words: Vec<String> = noise_tokens(text).into_iter().collect();
        self.union_batched(&words, UnionKind::NoiseWords).await
    }

    /// Indexes `content` under the document name `name`.
    ///
    /// A second call with the same name fully replaces the earlier content;
    /// the vocabulary only ever grows.
    pub async fn add_content(&self, name: &str, content: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SearchError::InvalidInput(
                "document name must not be empty".to_string(),
            ));
        }

        let noise = match self.storage.noise_words().await {
            Ok(noise) => noise,
            Err(err) => {
                tracing::error!("failed to read noise words for {}: {}", name, err);
                return Err(err.into());
            }
        };

        let doc = index::build_document(name, content, &self.normalizer, &noise);
        let vocabulary = index::vocabulary_of(&doc);
        tracing::debug!(
            "indexing document {}: {} lines, {} distinct terms",
            name,
            doc.raw_lines.len(),
            vocabulary.len()
        );

        if let Err(err) = self.storage.upsert_document(doc).await {
            tracing::error!("failed to upsert document {}: {}", name, err);
            return Err(err.into());
        }

        self.union_batched(&vocabulary, UnionKind::Vocabulary).await
    }

    /// Returns the exact original content of document `name`.
    pub async fn doc_content(&self, name: &str) -> Result<String> {
        match self.storage.document(name).await {
            Ok(Some(doc)) => Ok(doc.content()),
            Ok(None) => Err(SearchError::NotFound(name.to_string())),
            Err(err) => {
                tracing::error!("failed to load document {}: {}", name, err);
                Err(err.into())
            }
        }
    }

    /// Ranked multi-term search; see [`query::search::find`].
    pub async fn find(&self, terms: &[String]) -> Result<Vec<SearchResult>> {
        match query::search::find(self.storage.as_ref(), terms).await {
            Ok(results) => Ok(results),
            Err(err) => {
                tracing::error!("search failed: {}", err);
                Err(err.into())
            }
        }
    }

    /// Prefix completion over the vocabulary; see [`query::complete::complete`].
    pub async fn complete(&self, prefix: &str) -> Result<Vec<String>> {
        match query::complete::complete(self.storage.as_ref(), prefix).await {
            Ok(completions) => Ok(completions),
            Err(err) => {
                tracing::error!("completion failed: {}", err);
                Err(err.into())
            }
        }
    }

    /// Submits a set union in batches of at most `batch_size` entries.
    ///
    /// Every batch is attempted. A failed batch is logged and does not roll
    /// back batches already committed; the last failure, if any, surfaces
    /// after the loop. Re-invocation is safe because the unions are
    /// idempotent.
    async fn union_batched(&self, words: &[String], kind: UnionKind) -> Result<()> {
        let mut last_failure: Option<StorageError> = None;

        // chunks() requires a non-zero size
        for batch in words.chunks(self.config.batch_size.max(1)) {
            let outcome = match kind {
                UnionKind::NoiseWords => self.storage.union_noise_words(batch).await,
                UnionKind::Vocabulary => self.storage.union_vocabulary(batch).await,
            };
            if let Err(err) = outcome {
                tracing::error!(
                    "{} union batch of {} entries failed: {}",
                    kind.label(),
                    batch.len(),
                    err
                );
                last_failure = Some(err);
            }
        }

        match last_failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}
