//! Revision-stamped diagnostic publishing.
//!
//! Checks for the same document may finish out of order. Every publish
//! carries the revision of the text it was computed from, and a publish is
//! discarded when the store already holds a newer revision for that
//! document. Equal revisions replace, so a configuration change can
//! republish the current text.
//!
//! Callers without their own revision numbers take one from
//! [`DiagnosticStore::next_revision`] before checking, so two overlapping
//! checks of the same document never share a revision.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::dialect::Dialect;
use crate::engine::{self, RunConfiguration};

/// Opaque document key, usually a URI or a path.
pub type DocumentId = String;

/// The diagnostics currently published for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Published {
    /// Revision of the text the diagnostics were computed from.
    pub revision: u64,
    /// The full diagnostic list.
    pub diagnostics: Vec<Diagnostic>,
}

/// What happened to a publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PublishOutcome {
    /// The list replaced whatever was stored.
    Applied,
    /// A newer revision was already stored; nothing changed.
    Stale {
        /// The revision that is kept.
        current: u64,
    },
}

impl PublishOutcome {
    /// Returns `true` if the publish took effect.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Concurrent map from document to its latest diagnostics.
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    documents: DashMap<DocumentId, Published>,
    /// Highest revision handed out or published per document. Survives
    /// `remove` and `clear` so issued numbers are never reused.
    issued: DashMap<DocumentId, u64>,
}

impl DiagnosticStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next revision for `id`.
    ///
    /// The counter is bumped under the entry's lock, so concurrent callers
    /// get distinct, increasing revisions. Allocate before checking the text
    /// the revision stands for.
    pub fn next_revision(&self, id: &str) -> u64 {
        let mut issued = self.issued.entry(id.to_string()).or_insert(0);
        *issued = issued.saturating_add(1);
        *issued
    }

    fn note_revision(&self, id: &str, revision: u64) {
        let mut issued = self.issued.entry(id.to_string()).or_insert(0);
        *issued = (*issued).max(revision);
    }

    /// Replace the diagnostics for `id` unless a newer revision is stored.
    ///
    /// The comparison and replacement happen under the entry's lock.
    pub fn publish(
        &self,
        id: impl Into<DocumentId>,
        revision: u64,
        diagnostics: Vec<Diagnostic>,
    ) -> PublishOutcome {
        let id = id.into();
        self.note_revision(&id, revision);
        let published = Published {
            revision,
            diagnostics,
        };
        match self.documents.entry(id) {
            Entry::Occupied(entry) if entry.get().revision > revision => {
                let current = entry.get().revision;
                tracing::info!(
                    document = %entry.key(),
                    revision,
                    current,
                    "discarding stale diagnostics"
                );
                PublishOutcome::Stale { current }
            }
            Entry::Occupied(mut entry) => {
                entry.insert(published);
                PublishOutcome::Applied
            }
            Entry::Vacant(entry) => {
                entry.insert(published);
                PublishOutcome::Applied
            }
        }
    }

    /// Snapshot of the published diagnostics for `id`.
    pub fn get(&self, id: &str) -> Option<Published> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    /// Revision currently published for `id`.
    pub fn revision(&self, id: &str) -> Option<u64> {
        self.documents.get(id).map(|entry| entry.revision)
    }

    /// Forget one document, returning what was published.
    pub fn remove(&self, id: &str) -> Option<Published> {
        self.documents.remove(id).map(|(_, published)| published)
    }

    /// Forget every document.
    pub fn clear(&self) {
        self.documents.clear();
    }

    /// Number of documents with published diagnostics.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if nothing is published.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Check `text` and publish the result under `revision`.
pub fn check_and_publish(
    store: &DiagnosticStore,
    id: impl Into<DocumentId>,
    revision: u64,
    text: &str,
    dialect: Dialect,
    config: &RunConfiguration,
) -> PublishOutcome {
    let diagnostics = engine::update_diagnostics(text, dialect, config);
    store.publish(id, revision, diagnostics)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::diagnostic::{DiagnosticCode, Range};

    fn one(message: &str) -> Vec<Diagnostic> {
        vec![Diagnostic::new(
            DiagnosticCode::MagicNumber,
            Range::point(0, 0),
            message,
        )]
    }

    #[test]
    fn newer_revision_replaces() {
        let store = DiagnosticStore::new();
        assert!(store.publish("a.mq5", 1, one("old")).is_applied());
        assert!(store.publish("a.mq5", 2, one("new")).is_applied());
        let published = store.get("a.mq5").unwrap();
        assert_eq!(published.revision, 2);
        assert_eq!(published.diagnostics[0].message, "new");
    }

    #[test]
    fn older_revision_is_discarded() {
        let store = DiagnosticStore::new();
        store.publish("a.mq5", 5, one("fresh"));
        let outcome = store.publish("a.mq5", 4, one("stale"));
        assert_eq!(outcome, PublishOutcome::Stale { current: 5 });
        assert_eq!(store.get("a.mq5").unwrap().diagnostics[0].message, "fresh");
    }

    #[test]
    fn equal_revision_republishes() {
        let store = DiagnosticStore::new();
        store.publish("a.mq5", 3, one("before"));
        assert!(store.publish("a.mq5", 3, Vec::new()).is_applied());
        assert!(store.get("a.mq5").unwrap().diagnostics.is_empty());
    }

    #[test]
    fn allocated_revisions_order_overlapping_checks() {
        let store = DiagnosticStore::new();
        store.publish("a.mq5", 3, one("current"));

        // Two checks start before either finishes; the newer text finishes first.
        let older = store.next_revision("a.mq5");
        let newer = store.next_revision("a.mq5");
        assert_eq!((older, newer), (4, 5));
        assert!(store.publish("a.mq5", newer, one("newer")).is_applied());
        assert_eq!(
            store.publish("a.mq5", older, one("older")),
            PublishOutcome::Stale { current: 5 }
        );
        assert_eq!(store.get("a.mq5").unwrap().diagnostics[0].message, "newer");
    }

    #[test]
    fn allocated_revisions_survive_removal() {
        let store = DiagnosticStore::new();
        assert_eq!(store.next_revision("a.mq5"), 1);
        store.publish("a.mq5", 1, Vec::new());
        store.clear();
        assert_eq!(store.next_revision("a.mq5"), 2);
        assert_eq!(store.next_revision("b.mq4"), 1);
    }

    #[test]
    fn concurrent_allocation_is_unique() {
        let store = Arc::new(DiagnosticStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || (0..50).map(|_| store.next_revision("a.mq5")).collect::<Vec<_>>())
            })
            .collect();
        let mut all: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 400);
        assert_eq!(all.last(), Some(&400));
    }

    #[test]
    fn documents_are_independent() {
        let store = DiagnosticStore::new();
        store.publish("a.mq5", 9, one("a"));
        assert!(store.publish("b.mq4", 1, one("b")).is_applied());
        assert_eq!(store.len(), 2);
        assert_eq!(store.revision("b.mq4"), Some(1));

        assert!(store.remove("a.mq5").is_some());
        assert!(store.get("a.mq5").is_none());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn check_and_publish_runs_the_engine() {
        let store = DiagnosticStore::new();
        let config = RunConfiguration::default();
        let outcome = check_and_publish(&store, "x.mq5", 1, "int z = 42", Dialect::Mql5, &config);
        assert!(outcome.is_applied());
        let published = store.get("x.mq5").unwrap();
        assert_eq!(published.diagnostics[0].code, DiagnosticCode::MissingSemicolon);
    }

    #[test]
    fn concurrent_publishes_keep_the_highest_revision() {
        let store = Arc::new(DiagnosticStore::new());
        let handles: Vec<_> = (1..=16u64)
            .map(|revision| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.publish("doc", revision, one(&revision.to_string()));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let published = store.get("doc").unwrap();
        assert_eq!(published.revision, 16);
        assert_eq!(published.diagnostics[0].message, "16");
    }
}
