use unbundle_core::{find_map_url, resolve_map_url};
use url::Url;

#[test]
fn finds_single_line_comment() {
    let js = "console.log(1);\n//# sourceMappingURL=app.js.map\n";
    assert_eq!(find_map_url(js).as_deref(), Some("app.js.map"));
}

#[test]
fn finds_legacy_at_form() {
    let js = "//@ sourceMappingURL=legacy.map\n";
    assert_eq!(find_map_url(js).as_deref(), Some("legacy.map"));
}

#[test]
fn finds_block_comment() {
    let js = "/*# sourceMappingURL=vendor.map */\nfunction x(){}";
    assert_eq!(find_map_url(js).as_deref(), Some("vendor.map"));
}

#[test]
fn last_comment_wins() {
    let js = "//# sourceMappingURL=first.map\n//# sourceMappingURL=second.map\n";
    assert_eq!(find_map_url(js).as_deref(), Some("second.map"));
}

#[test]
fn none_when_absent() {
    assert!(find_map_url("function t() {}").is_none());
}

#[test]
fn resolves_against_bundle_url() {
    let base = Url::parse("https://cdn.example/js/app.js").unwrap();
    let js = "//# sourceMappingURL=app.js.map";
    let url = resolve_map_url(&base, js).unwrap();
    assert_eq!(url.as_str(), "https://cdn.example/js/app.js.map");
}
