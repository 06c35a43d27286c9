use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("invalid JSON or sourcemap: {0}")]
    Parse(String),
}

/// The subset of a source map this tool consumes. Mapping segments are never
/// decoded; only the source list and its embedded content matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceMapDocument {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default, rename = "sourceRoot")]
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    #[serde(default, rename = "sourcesContent")]
    pub sources_content: Option<Vec<Option<String>>>,
}

/// Parse source map JSON into a `SourceMapDocument`. A document without a
/// `sources` array is rejected.
pub fn parse_source_map(json: &str) -> Result<SourceMapDocument, MapError> {
    serde_json::from_str(json).map_err(|e| MapError::Parse(e.to_string()))
}

impl SourceMapDocument {
    /// Embedded content for source index `i`. A missing `sourcesContent`
    /// array, a short array, and an explicit `null` all read as absent.
    pub fn content_at(&self, i: usize) -> Option<&str> {
        self.sources_content
            .as_ref()
            .and_then(|contents| contents.get(i))
            .and_then(|c| c.as_deref())
    }

    /// Iterate `(raw identifier, embedded content)` pairs in `sources` order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.sources
            .iter()
            .enumerate()
            .map(move |(i, raw)| (raw.as_str(), self.content_at(i)))
    }
}
