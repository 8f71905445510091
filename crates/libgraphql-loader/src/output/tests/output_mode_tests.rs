use crate::output::OutputMode;
use crate::output::UnknownOutputModeError;

#[test]
fn defaults_to_string() {
    assert_eq!(OutputMode::default(), OutputMode::String);
}

#[test]
fn parses_from_lowercase_names() {
    assert_eq!("string".parse::<OutputMode>(), Ok(OutputMode::String));
    assert_eq!("document".parse::<OutputMode>(), Ok(OutputMode::Document));
    assert_eq!(
        "Document".parse::<OutputMode>(),
        Err(UnknownOutputModeError("Document".to_string())),
    );
}

#[test]
fn deserializes_from_json_strings() {
    let mode: OutputMode = serde_json::from_str("\"document\"").unwrap();
    assert_eq!(mode, OutputMode::Document);
    assert!(serde_json::from_str::<OutputMode>("\"ast\"").is_err());
}

#[test]
fn displays_as_its_config_name() {
    assert_eq!(OutputMode::Document.to_string(), "document");
    assert_eq!(OutputMode::String.to_string(), "string");
}
