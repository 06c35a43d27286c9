use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static MAP_COMMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)//[#@]\s*sourceMappingURL=(\S+)|/\*[#@]\s*sourceMappingURL=([^*\s][^*]*)\*/")
        .unwrap()
});

/// Locate the sourceMappingURL comment in bundle text. Bundlers append the
/// comment at the end of the file and consumers honour the last one, so the
/// last match wins.
pub fn find_map_url(js: &str) -> Option<String> {
    MAP_COMMENT_RE
        .captures_iter(js)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .last()
}

/// Resolve the discovered map reference against the bundle's own URL.
pub fn resolve_map_url(base: &Url, js: &str) -> Option<Url> {
    find_map_url(js).and_then(|raw| base.join(&raw).ok())
}
