use url::Url;

use crate::fetch::SourceFetcher;

/// How a source's content ended up in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    Embedded,
    Fetched,
    ErrorPlaceholder,
}

/// One source entry after resolution. Content is final at this point; the
/// archive path is assigned at insertion time so collisions can be
/// disambiguated against already-filed entries.
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub raw_identifier: String,
    pub content: String,
    pub origin: SourceOrigin,
    /// Failure reason when `origin` is `ErrorPlaceholder`.
    pub failure: Option<String>,
}

/// Resolve one `(identifier, embedded content)` pair. Never fails: a fetch
/// problem degrades this entry to a placeholder without touching siblings.
pub async fn resolve_entry(
    fetcher: &dyn SourceFetcher,
    raw: &str,
    embedded: Option<&str>,
    base: Option<&Url>,
    source_root: Option<&str>,
) -> ResolvedSource {
    // An embedded empty string is valid content, not absence.
    if let Some(content) = embedded {
        return ResolvedSource {
            raw_identifier: raw.to_string(),
            content: content.to_string(),
            origin: SourceOrigin::Embedded,
            failure: None,
        };
    }

    let reason = match fetch_target(base, source_root, raw) {
        Ok(target) => match fetcher.fetch(target.as_str()).await {
            Ok(body) => {
                return ResolvedSource {
                    raw_identifier: raw.to_string(),
                    content: body,
                    origin: SourceOrigin::Fetched,
                    failure: None,
                };
            }
            Err(e) => e.to_string(),
        },
        Err(reason) => reason,
    };

    ResolvedSource {
        raw_identifier: raw.to_string(),
        content: placeholder_content(raw, &reason),
        origin: SourceOrigin::ErrorPlaceholder,
        failure: Some(reason),
    }
}

/// Absolute retrieval target for a non-embedded source. Relative identifiers
/// are resolved against the map's base URL, behind its `sourceRoot` when one
/// is declared.
pub fn fetch_target(
    base: Option<&Url>,
    source_root: Option<&str>,
    raw: &str,
) -> Result<Url, String> {
    if let Ok(abs) = Url::parse(raw) {
        if matches!(abs.scheme(), "http" | "https") {
            return Ok(abs);
        }
    }

    let base = base.ok_or_else(|| "no base url to resolve relative source against".to_string())?;
    let relative = match source_root {
        Some(root) if !root.is_empty() => {
            if root.ends_with('/') {
                format!("{root}{raw}")
            } else {
                format!("{root}/{raw}")
            }
        }
        _ => raw.to_string(),
    };
    base.join(&relative)
        .map_err(|e| format!("invalid fetch target: {e}"))
}

fn placeholder_content(raw: &str, reason: &str) -> String {
    format!("// source could not be resolved\n// identifier: {raw}\n// reason: {reason}\n")
}
