use unbundle_core::normalize;

#[test]
fn strips_webpack_relative_prefix() {
    assert_eq!(normalize("webpack://./src/a.js"), "src/a.js");
}

#[test]
fn strips_leading_dot_slash() {
    assert_eq!(normalize("./utils/helpers.js"), "utils/helpers.js");
}

#[test]
fn rewrites_parent_traversal() {
    assert_eq!(normalize("../shared/constants.js"), "parent/shared/constants.js");
}

#[test]
fn traversal_depth_is_preserved() {
    assert_eq!(normalize("../../shared/x.js"), "parent/parent/shared/x.js");
    assert_eq!(
        normalize("../../../deep/y.js"),
        "parent/parent/parent/deep/y.js"
    );
}

#[test]
fn interior_and_trailing_traversal_flattened() {
    assert_eq!(normalize("a/../b.js"), "a/parent/b.js");
    assert_eq!(normalize("a/.."), "a/parent");
}

#[test]
fn substitutes_illegal_characters() {
    assert_eq!(normalize(r#"a<b>c:"d|e?f*g.js"#), "a_b_c__d_e_f_g.js");
}

#[test]
fn substitutes_control_characters() {
    assert_eq!(normalize("a\tb\nc.js"), "a_b_c.js");
}

#[test]
fn clean_relative_paths_pass_through() {
    assert_eq!(normalize("package.json"), "package.json");
    assert_eq!(normalize("lib/util/fmt.js"), "lib/util/fmt.js");
}

#[test]
fn absolute_becomes_root_relative() {
    assert_eq!(normalize("/srv/app/index.js"), "srv/app/index.js");
}

#[test]
fn backslashes_become_forward_slashes() {
    assert_eq!(normalize("src\\win\\x.js"), "src/win/x.js");
}

#[test]
fn deterministic_across_calls() {
    let raw = "webpack://./pages/../shared/x.js";
    assert_eq!(normalize(raw), normalize(raw));
}

#[test]
fn degenerate_input_gets_hashed_name() {
    for raw in ["", ".", "./", "/"] {
        let name = normalize(raw);
        assert!(name.starts_with("source_"), "{raw:?} -> {name}");
        assert!(!name.contains('/'));
    }
    // Distinct degenerate inputs keep distinct fallback names.
    assert_ne!(normalize(""), normalize("."));
}
