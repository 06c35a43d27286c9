pub mod acquire;
pub mod archive;
pub mod discovery;
pub mod extract;
pub mod fetch;
pub mod map;
pub mod output;
pub mod paths;
pub mod resolve;

pub use acquire::{acquire_map, AcquireError, AcquiredMap};
pub use archive::{ArchiveError, ArchiveTree};
pub use discovery::{find_map_url, resolve_map_url};
pub use extract::{extract, ExtractOptions, ExtractionSummary, FailedSource, ProgressHook};
pub use fetch::{FetchError, HttpFetcher, SourceFetcher};
pub use map::{parse_source_map, MapError, SourceMapDocument};
pub use output::write_archive;
pub use paths::normalize;
pub use resolve::{ResolvedSource, SourceOrigin};
