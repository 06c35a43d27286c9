use futures::stream::{self, StreamExt};
use serde::Serialize;
use url::Url;

use crate::archive::ArchiveTree;
use crate::fetch::SourceFetcher;
use crate::map::SourceMapDocument;
use crate::resolve::{self, ResolvedSource};

/// Fan-out width for per-source fetches.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub concurrency: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { concurrency: 8 }
    }
}

/// One source whose content could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedSource {
    pub identifier: String,
    pub reason: String,
}

/// Reporting payload produced alongside the archive. The caller renders it;
/// the core never prints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionSummary {
    pub total_sources: usize,
    pub manifest_files: Vec<String>,
    pub failed_sources: Vec<FailedSource>,
}

/// Invoked once per completed entry with the archive path it was filed
/// under. Purely informational; extraction runs the same without it.
pub type ProgressHook<'a> = dyn Fn(&ResolvedSource, &str) + Send + Sync + 'a;

/// Drive the full pipeline over one map: resolve every entry, file each one
/// into the archive, and aggregate the summary.
///
/// Per-entry fetch failures degrade that entry to a placeholder; the only
/// way to not get an archive out of this is to not have a parsed map.
pub async fn extract(
    doc: &SourceMapDocument,
    base: Option<&Url>,
    fetcher: &dyn SourceFetcher,
    options: &ExtractOptions,
    progress: Option<&ProgressHook<'_>>,
) -> (ArchiveTree, ExtractionSummary) {
    let mut summary = ExtractionSummary {
        total_sources: doc.sources.len(),
        ..Default::default()
    };

    for raw in &doc.sources {
        if raw.contains("package.json") {
            summary.manifest_files.push(raw.clone());
        }
    }

    let source_root = doc.source_root.as_deref();
    // `buffered` yields completions in `sources` order even when fetches
    // finish out of order, which keeps collision suffixes reproducible.
    let resolved: Vec<ResolvedSource> = stream::iter(doc.entries())
        .map(|(raw, embedded)| resolve::resolve_entry(fetcher, raw, embedded, base, source_root))
        .buffered(options.concurrency.max(1))
        .collect()
        .await;

    let mut tree = ArchiveTree::new();
    for source in &resolved {
        let path = tree.insert(source);
        if let Some(reason) = &source.failure {
            summary.failed_sources.push(FailedSource {
                identifier: source.raw_identifier.clone(),
                reason: reason.clone(),
            });
        }
        if let Some(hook) = progress {
            hook(source, &path);
        }
    }

    (tree, summary)
}
