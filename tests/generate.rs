//! End-to-end generation test: registry file in, Rust fragment out.
//!
//! Runs the full pipeline through the CLI layer with a local input file,
//! so no network is touched.

use mimegen::cli::Cli;
use mimegen::fetch::DEFAULT_REGISTRY_URL;
use std::fs;

const SAMPLE_REGISTRY: &str = "\
# This file maps Internet media types to unique file extension(s).
#
# MIME type (lowercased)\t\t\tExtensions
application/json\t\t\t\tjson
application/x-typeless
text/html\t\t\t\t\thtml htm
text/markdown\t\t\t\t\tmd markdown
text/x-markdown\t\t\t\t\tmd
";

#[test]
fn generate_from_local_registry_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mime.types");
    let output = dir.path().join("mime_table.rs");
    fs::write(&input, SAMPLE_REGISTRY).unwrap();

    let cli = Cli {
        url: DEFAULT_REGISTRY_URL.to_string(),
        input: Some(input),
        output: Some(output.clone()),
    };
    cli.run().unwrap();

    let fragment = fs::read_to_string(&output).unwrap();
    assert!(fragment.contains("pub static MIME_TYPES: &[(&str, &str)] = &["));
    assert!(fragment.trim_end().ends_with("];"));

    // One entry per listed extension, keyed to the line's MIME type.
    assert!(fragment.contains(r#"("json", "application/json"),"#));
    assert!(fragment.contains(r#"("html", "text/html"),"#));
    assert!(fragment.contains(r#"("htm", "text/html"),"#));
    assert!(fragment.contains(r#"("markdown", "text/markdown"),"#));

    // The later line for "md" wins; the earlier value never appears for it.
    assert!(fragment.contains(r#"("md", "text/x-markdown"),"#));
    assert!(!fragment.contains(r#"("md", "text/markdown"),"#));

    // Comment lines and the extension-less line contribute nothing.
    assert!(!fragment.contains("typeless"));
    assert!(!fragment.contains("media types"));

    // Entries appear in parse order.
    let json_pos = fragment.find(r#"("json""#).unwrap();
    let html_pos = fragment.find(r#"("html""#).unwrap();
    let md_pos = fragment.find(r#"("md""#).unwrap();
    assert!(json_pos < html_pos);
    assert!(html_pos < md_pos);
}

#[test]
fn missing_input_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli {
        url: DEFAULT_REGISTRY_URL.to_string(),
        input: Some(dir.path().join("does-not-exist.types")),
        output: None,
    };
    let err = cli.run().unwrap_err();
    assert!(format!("{:#}", err).contains("does-not-exist.types"));
}
