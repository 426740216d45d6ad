//! Tests for logging initialization and the events translators emit

mod common;

use std::str::FromStr;

use common::CapturedLogs;
use umlbridge::core::logging::{init_logging, LogFormat};
use umlbridge::prelude::*;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("xml").is_err());
}

#[test]
fn test_log_format_variants() {
    for name in LogFormat::variants() {
        let format = LogFormat::from_str(name).unwrap();
        assert_eq!(format.as_str(), *name);
    }
}

#[test]
fn test_init_logging_invalid_format() {
    assert!(init_logging(Some("info"), Some("invalid_format")).is_err());
}

#[test]
fn test_init_logging_repeated() {
    // Only the first global install can succeed; later ones must not panic
    let _ = init_logging(Some("warn"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("json"));
    let _ = init_logging(None, None);
}

#[test]
fn test_skipped_java_file_is_reported() {
    let (logs, _guard) = CapturedLogs::install();

    let structure = umlbridge::java_to_structure(&[("Broken.java", "class Broken {")]);

    assert!(structure.is_empty());
    assert_eq!(logs.count("Skipping Java file"), 1);
    assert!(logs.contents().contains("Broken.java"));
}

#[test]
fn test_debug_events_below_threshold_are_filtered() {
    let (logs, _guard) = CapturedLogs::install();

    let mut structure = Structure::new();
    structure.add_association(Association::new("Ghost", "Book").with_name("lost"));
    ProtobufTranslator::new().process_associations(&mut structure);

    assert!(!logs.contents().contains("Association owner not found"));
}

#[test]
fn test_clean_translation_is_silent() {
    let (logs, _guard) = CapturedLogs::install();

    umlbridge::uml_to_proto("interface ShopServices {\n  + checkout(Cart cart) : Receipt\n}").unwrap();
    umlbridge::uml_to_uml("class Cart {\n  - items : int\n}").unwrap();

    assert_eq!(logs.contents(), "");
}
