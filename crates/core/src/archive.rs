use std::collections::BTreeMap;
use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::paths;
use crate::resolve::ResolvedSource;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("zip write error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory archive: normalized path to content bytes, with deterministic
/// iteration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArchiveTree {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ArchiveTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// File one resolved source, returning the path it ended up under.
    ///
    /// A taken path gets a numeric suffix before the file extension
    /// (`a.js`, `a_1.js`, `a_2.js`, ...). Suffixes are assigned in insertion
    /// order, so the same map always produces the same assignment.
    pub fn insert(&mut self, source: &ResolvedSource) -> String {
        let path = self.vacant_path(paths::normalize(&source.raw_identifier));
        self.entries
            .insert(path.clone(), source.content.as_bytes().to_vec());
        path
    }

    fn vacant_path(&self, wanted: String) -> String {
        if !self.entries.contains_key(&wanted) {
            return wanted;
        }
        let (stem, ext) = split_extension(&wanted);
        let mut n = 1u32;
        loop {
            let candidate = match ext {
                Some(ext) => format!("{stem}_{n}.{ext}"),
                None => format!("{stem}_{n}"),
            };
            if !self.entries.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> + '_ {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_slice()))
    }

    /// Serialize the tree into a zip payload. Entry timestamps are pinned so
    /// identical trees serialize to identical bytes.
    pub fn to_zip_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        for (path, content) in &self.entries {
            writer.start_file(path.as_str(), options)?;
            writer.write_all(content)?;
        }
        Ok(writer.finish()?.into_inner())
    }
}

/// Split `dir/name.ext` into (`dir/name`, `ext`). A leading dot on the file
/// name is a hidden-file marker, not an extension.
fn split_extension(path: &str) -> (&str, Option<&str>) {
    let file_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[file_start..].rfind('.') {
        Some(0) | None => (path, None),
        Some(i) => (&path[..file_start + i], Some(&path[file_start + i + 1..])),
    }
}
