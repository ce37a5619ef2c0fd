use tfbackend_core::{
    detect_format, normalize, normalize_strict, yaml_to_hcl, SourceFormat, TfBackendError,
    BACKEND_EXTENSION,
};

// ============================================================================
// Passthrough
// ============================================================================

#[test]
fn hcl_passes_through_unchanged() {
    let hcl = "\nbucket = \"my-bucket\"\nkey    = \"path/to/state\"\nregion = \"us-east-1\"\n";
    let (content, ext) = normalize(hcl).into_parts();
    assert_eq!(content, hcl);
    assert_eq!(ext, BACKEND_EXTENSION);
}

#[test]
fn single_hcl_line_passes_through() {
    let out = normalize(r#"bucket = "my-bucket""#);
    assert_eq!(out.content, r#"bucket = "my-bucket""#);
    assert_eq!(out.format, SourceFormat::Hcl);
}

#[test]
fn malformed_yaml_passes_through() {
    let text = "bucket: [unterminated\n";
    assert_eq!(normalize(text).content, text);
    assert_eq!(normalize_strict(text).unwrap().content, text);
}

#[test]
fn hcl_with_nested_block_passes_through() {
    let hcl = "workspaces = {\n  name = \"dev\"\n}\n";
    assert_eq!(normalize(hcl).content, hcl);
}

// ============================================================================
// Empty documents
// ============================================================================

#[test]
fn empty_input_yields_empty_output() {
    let (content, ext) = normalize("").into_parts();
    assert_eq!(content, "");
    assert_eq!(ext, ".tfbackend");
}

#[test]
fn null_document_yields_empty_output() {
    for text in ["null", "~", "# nothing here\n", "   \n"] {
        let out = normalize(text);
        assert_eq!(out.content, "", "input {text:?}");
        assert_eq!(out.format, SourceFormat::Empty, "input {text:?}");
    }
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn yaml_mapping_is_converted() {
    let out = normalize("bucket: my-bucket\nkey: path/to/state\nregion: us-east-1\n");
    assert_eq!(out.format, SourceFormat::Yaml);
    assert_eq!(
        out.content,
        "bucket = \"my-bucket\"\nkey = \"path/to/state\"\nregion = \"us-east-1\""
    );
}

#[test]
fn yaml_booleans_and_numbers() {
    let out = normalize("encrypt: true\nversioning: false\nport: 8080\nversion: 1.5\n");
    assert_eq!(
        out.content,
        "encrypt = true\nversioning = false\nport = 8080\nversion = 1.5"
    );
}

#[test]
fn yaml_nested_null_renders_null_literal() {
    let out = normalize("bucket: b\nprofile:\n");
    assert_eq!(out.content, "bucket = \"b\"\nprofile = null");
}

// ============================================================================
// Top-level shape
// ============================================================================

#[test]
fn top_level_list_passes_through_permissively() {
    let text = "[1, 2, 3]";
    let out = normalize(text);
    assert_eq!(out.content, text);
    assert_eq!(out.format, SourceFormat::Hcl);
}

#[test]
fn top_level_list_is_rejected_strictly() {
    let err = normalize_strict("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, TfBackendError::TopLevelShape { found: "sequence" }));
    assert!(err.to_string().contains("mapping"), "message: {err}");
}

#[test]
fn top_level_scalar_is_rejected_strictly() {
    let err = normalize_strict("just-a-word").unwrap_err();
    assert!(matches!(err, TfBackendError::TopLevelShape { found: "string" }));
}

#[test]
fn strict_and_permissive_agree_when_strict_succeeds() {
    for text in [
        "",
        "a: 1",
        "a = 1\nb = 2",
        "{broken",
        "workspaces:\n  name: dev",
    ] {
        if let Ok(strict) = normalize_strict(text) {
            assert_eq!(strict, normalize(text), "input {text:?}");
        }
    }
}

// ============================================================================
// Detection
// ============================================================================

#[test]
fn detect_formats() {
    assert_eq!(detect_format("bucket: x"), SourceFormat::Yaml);
    assert_eq!(detect_format("bucket = \"x\""), SourceFormat::Hcl);
    assert_eq!(detect_format(""), SourceFormat::Empty);
    assert_eq!(detect_format("[1, 2]"), SourceFormat::Hcl);
}

// ============================================================================
// yaml_to_hcl
// ============================================================================

#[test]
fn yaml_to_hcl_converts_mapping() {
    assert_eq!(yaml_to_hcl("bucket: b").unwrap(), "bucket = \"b\"");
}

#[test]
fn yaml_to_hcl_empty_is_empty() {
    assert_eq!(yaml_to_hcl("").unwrap(), "");
}

#[test]
fn yaml_to_hcl_rejects_non_mapping() {
    let err = yaml_to_hcl("- a\n- b\n").unwrap_err();
    assert!(matches!(err, TfBackendError::TopLevelShape { .. }));
}

#[test]
fn yaml_to_hcl_rejects_malformed_yaml() {
    assert!(matches!(
        yaml_to_hcl("a: {b: 1"),
        Err(TfBackendError::YamlParse(_))
    ));
}

// ============================================================================
// YAML features
// ============================================================================

#[test]
fn merge_keys_do_not_leak_into_output() {
    let out = normalize("base: &b\n  region: us-east-1\nworkspaces:\n  <<: *b\n  name: dev\n");
    assert_eq!(out.format, SourceFormat::Yaml);
    assert!(!out.content.contains("<<"), "merge key leaked:\n{}", out.content);
    assert!(out.content.contains("  region = \"us-east-1\""), "got:\n{}", out.content);
    assert!(out.content.contains("  name = \"dev\""), "got:\n{}", out.content);
}

#[test]
fn yaml_1_2_scalars_stay_strings() {
    assert_eq!(
        normalize("encrypt: yes\nmode: 0755\n").content,
        "encrypt = \"yes\"\nmode = \"0755\""
    );
}

#[test]
fn duplicate_keys_pass_through_unconverted() {
    let text = "bucket: a\nbucket: b\n";
    let out = normalize(text);
    assert_eq!(out.content, text);
    assert_eq!(out.format, SourceFormat::Hcl);
}
