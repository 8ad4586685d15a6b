//! Owner of the current catalog across reloads.
//!
//! Loads can overlap (the user switches category while a document is still
//! being read). Each load takes a ticket from a monotonically increasing
//! generation counter, and only the newest ticket may install its catalog.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use super::CatalogBuilder;
use crate::error::Result;
use crate::models::{Catalog, Category};
use crate::pdf::DocumentSource;

/// Handle for one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    category: Category,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// What happened to a finished load.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The catalog is now the current one.
    Applied(Arc<Catalog>),
    /// A newer load started meanwhile; the result was dropped.
    Superseded,
}

/// Current catalog plus the load-generation counter.
#[derive(Debug, Default)]
pub struct CatalogSession {
    generation: AtomicU64,
    current: Mutex<Option<Arc<Catalog>>>,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding every load started before it.
    pub fn begin(&self, category: Category) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Load {} started for {}", generation, category);
        LoadTicket {
            generation,
            category,
        }
    }

    /// Whether no newer load has started since `ticket` was issued.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Install a finished catalog if its load is still the newest.
    pub fn commit(&self, ticket: &LoadTicket, catalog: Catalog) -> LoadOutcome {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());

        if !self.is_current(ticket) {
            debug!("Load {} superseded, dropping its catalog", ticket.generation);
            return LoadOutcome::Superseded;
        }

        let catalog = Arc::new(catalog);
        *current = Some(Arc::clone(&catalog));
        LoadOutcome::Applied(catalog)
    }

    /// The catalog of the newest successful load.
    pub fn current(&self) -> Option<Arc<Catalog>> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Open the category's document, build its catalog and install it.
    ///
    /// On error the previous catalog stays current. A superseded load
    /// reports `Superseded` even when it failed, since its result would be
    /// discarded anyway.
    pub async fn load<S: DocumentSource>(
        &self,
        source: &S,
        category: Category,
        builder: &CatalogBuilder,
    ) -> Result<LoadOutcome> {
        self.load_with_progress(source, category, builder, |_, _| {}).await
    }

    /// Like [`load`](Self::load), reporting `(pages_done, page_count)`.
    pub async fn load_with_progress<S, F>(
        &self,
        source: &S,
        category: Category,
        builder: &CatalogBuilder,
        progress: F,
    ) -> Result<LoadOutcome>
    where
        S: DocumentSource,
        F: FnMut(u32, u32),
    {
        let ticket = self.begin(category);

        let result = async {
            let document = source.open(category).await?;
            builder.build_with_progress(&document, category, progress).await
        }
        .await;

        if !self.is_current(&ticket) {
            debug!("Load {} superseded", ticket.generation);
            return Ok(LoadOutcome::Superseded);
        }

        let catalog = result?;
        info!("Loaded {} catalog with {} entries", category, catalog.len());
        Ok(self.commit(&ticket, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fakes::{FakePage, FakeSource};
    use crate::error::{HorariosError, PdfError};
    use crate::label::LabelExtractor;
    use crate::models::{ExtractionConfig, LabelEntry};
    use pretty_assertions::assert_eq;

    fn builder() -> CatalogBuilder {
        CatalogBuilder::new(LabelExtractor::new(ExtractionConfig::default()).unwrap())
    }

    #[test]
    fn test_only_newest_ticket_commits() {
        let session = CatalogSession::new();
        let first = session.begin(Category::Professor);
        let second = session.begin(Category::Class);
        assert!(second.generation() > first.generation());

        let stale = session.commit(&first, Catalog::new(Category::Professor, vec![]));
        assert!(matches!(stale, LoadOutcome::Superseded));
        assert!(session.current().is_none());

        let fresh = session.commit(
            &second,
            Catalog::new(Category::Class, vec![LabelEntry::new(1, "INF 11")]),
        );
        assert!(matches!(fresh, LoadOutcome::Applied(_)));
        assert_eq!(session.current().unwrap().category(), Category::Class);
    }

    #[tokio::test]
    async fn test_load_installs_catalog() {
        let session = CatalogSession::new();
        let source = FakeSource::new(vec![FakePage::text("Professor Adelino Jacó Seibt")]);

        let outcome = session.load(&source, Category::Professor, &builder()).await.unwrap();

        let LoadOutcome::Applied(catalog) = outcome else {
            panic!("expected the load to apply");
        };
        assert_eq!(catalog.entries()[0].label, "Professor Adelino Jacó Seibt");
        assert_eq!(session.current().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stale_load_never_overwrites_newer() {
        let session = CatalogSession::new();
        let builder = builder();
        let (slow, started, release) =
            FakeSource::gated(vec![FakePage::text("Professor Ana Paula Souza")]);
        let fast = FakeSource::new(vec![FakePage::text("INF 11 - Redes")]);

        let first = session.load(&slow, Category::Professor, &builder);
        let second = async {
            started.notified().await;
            let outcome = session.load(&fast, Category::Class, &builder).await;
            release.notify_one();
            outcome
        };

        let (first, second) = tokio::join!(first, second);

        assert!(matches!(second.unwrap(), LoadOutcome::Applied(_)));
        assert!(matches!(first.unwrap(), LoadOutcome::Superseded));

        let current = session.current().unwrap();
        assert_eq!(current.category(), Category::Class);
        assert_eq!(current.entries()[0].label, "INF 11 - Redes");
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_catalog() {
        let session = CatalogSession::new();
        let builder = builder();
        let good = FakeSource::new(vec![FakePage::text("INF 11 - Redes")]);
        let broken = FakeSource::unreadable();

        session.load(&good, Category::Class, &builder).await.unwrap();
        let err = session.load(&broken, Category::Class, &builder).await.unwrap_err();

        assert!(matches!(err, HorariosError::Pdf(PdfError::Open(_))));
        assert_eq!(session.current().unwrap().entries()[0].label, "INF 11 - Redes");
    }

    #[tokio::test]
    async fn test_superseded_failure_is_not_reported() {
        let session = CatalogSession::new();
        let builder = builder();
        let (slow, started, release) = FakeSource::gated(vec![FakePage::Missing]);
        let fast = FakeSource::new(vec![FakePage::text("INF 12 - Redes")]);

        let first = session.load(&slow, Category::Class, &builder);
        let second = async {
            started.notified().await;
            let outcome = session.load(&fast, Category::Class, &builder).await;
            release.notify_one();
            outcome
        };

        let (first, second) = tokio::join!(first, second);
        assert!(matches!(first.unwrap(), LoadOutcome::Superseded));
        assert!(matches!(second.unwrap(), LoadOutcome::Applied(_)));
    }
}
