use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

// Bundler-relative prefix, e.g. `webpack://./src/a.js`.
static VIRTUAL_SCHEME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\./").unwrap()
});

/// Map a raw source identifier to a safe, archive-root-relative path.
///
/// Total and deterministic: any string in, a usable path out. Parent
/// traversal is not resolved against a base; each `..` segment becomes a
/// literal `parent` segment, so the result can never escape the archive root
/// and distinct traversal depths stay distinguishable.
pub fn normalize(raw: &str) -> String {
    let mut s = if let Some(m) = VIRTUAL_SCHEME_RE.find(raw) {
        raw[m.end()..].to_string()
    } else if let Some(rest) = raw.strip_prefix("./") {
        rest.to_string()
    } else {
        raw.to_string()
    };

    s = s
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // One `parent` token per `..`, covering the bare trailing form too.
    s = s.replace("../", "parent/");
    if s == ".." {
        s = "parent".to_string();
    } else if let Some(stem) = s.strip_suffix("/..") {
        s = format!("{stem}/parent");
    }

    s = s.replace('\\', "/");
    while s.contains("//") {
        s = s.replace("//", "/");
    }
    if let Some(rest) = s.strip_prefix('/') {
        s = rest.to_string();
    }

    if s.split('/').all(|seg| seg.is_empty() || seg == ".") {
        return fallback_name(raw);
    }
    s
}

/// Hash-derived filename for identifiers that normalize to nothing usable.
fn fallback_name(raw: &str) -> String {
    let digest = Sha256::digest(raw.as_bytes());
    let mut name = String::from("source_");
    for byte in &digest[..4] {
        name.push_str(&format!("{byte:02x}"));
    }
    name
}
