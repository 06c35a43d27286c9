use thiserror::Error;
use tokio::fs;
use url::Url;

use crate::discovery;
use crate::fetch::{FetchError, SourceFetcher};

#[derive(Error, Debug)]
pub enum AcquireError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot build a file:// url for {0}")]
    FileUrl(String),
    #[error("input looks like a bundle but carries no sourceMappingURL comment")]
    NoMapUrl,
}

/// A map ready for parsing: raw JSON text plus the base URL later used to
/// resolve relative sources.
#[derive(Debug, Clone)]
pub struct AcquiredMap {
    pub text: String,
    pub base: Url,
}

/// Turn CLI input into map text. `http(s)` input is fetched; anything else
/// is read from disk and given a `file://` base. When the retrieved text is
/// a bundle rather than a map, its sourceMappingURL comment is followed one
/// hop.
pub async fn acquire_map(
    input: &str,
    fetcher: &dyn SourceFetcher,
) -> Result<AcquiredMap, AcquireError> {
    let (text, base) = match Url::parse(input) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            (fetcher.fetch(url.as_str()).await?, url)
        }
        _ => read_local(input).await?,
    };

    if looks_like_map(&text) {
        return Ok(AcquiredMap { text, base });
    }

    let map_url = discovery::resolve_map_url(&base, &text).ok_or(AcquireError::NoMapUrl)?;
    let text = if map_url.scheme() == "file" {
        let path = map_url
            .to_file_path()
            .map_err(|_| AcquireError::FileUrl(map_url.to_string()))?;
        fs::read_to_string(&path).await.map_err(|e| AcquireError::Io {
            path: path.display().to_string(),
            source: e,
        })?
    } else {
        fetcher.fetch(map_url.as_str()).await?
    };
    Ok(AcquiredMap {
        text,
        base: map_url,
    })
}

async fn read_local(input: &str) -> Result<(String, Url), AcquireError> {
    let canonical = fs::canonicalize(input).await.map_err(|e| AcquireError::Io {
        path: input.to_string(),
        source: e,
    })?;
    let text = fs::read_to_string(&canonical)
        .await
        .map_err(|e| AcquireError::Io {
            path: canonical.display().to_string(),
            source: e,
        })?;
    let base = Url::from_file_path(&canonical)
        .map_err(|_| AcquireError::FileUrl(input.to_string()))?;
    Ok((text, base))
}

fn looks_like_map(text: &str) -> bool {
    text.trim_start().starts_with('{')
}
