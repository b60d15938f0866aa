use autowire_fs::{Error, Properties};
use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_load_optional_missing_file_is_empty() {
    let temp = assert_fs::TempDir::new().unwrap();

    let props = Properties::load_optional(&temp.path().join("absent.properties")).unwrap();

    assert!(props.is_empty());
}

#[test]
fn test_load_reads_mapping_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("mappings.properties");
    file.write_str(
        "# project mappings\n\
         com.example.Engine=#class:com.example.V8Engine;com.example.V6Engine\n\
         com.example.Pool : #skip#\n",
    )
    .unwrap();

    let props = Properties::load(file.path()).unwrap();

    let entries: Vec<_> = props.iter().collect();
    assert_eq!(
        entries,
        vec![
            (
                "com.example.Engine",
                "#class:com.example.V8Engine;com.example.V6Engine"
            ),
            ("com.example.Pool", "#skip#"),
        ]
    );
}

#[test]
fn test_load_malformed_file_reports_path_and_line() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("bad.properties");
    file.write_str("a=1\nb=2\nc=\\uZZZZ\n").unwrap();

    let err = Properties::load(file.path()).unwrap_err();

    match err {
        Error::ConfigParse { path, message, .. } => {
            assert_eq!(path, file.path());
            assert!(message.starts_with("line 3"), "got: {message}");
        }
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_load_latin1_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("latin1.properties");
    file.write_binary(b"# r\xe9sum\xe9\ncom.example.Caf\xe9=com.example.Impl\n")
        .unwrap();

    let props = Properties::load(file.path()).unwrap();

    assert_eq!(props.get("com.example.Caf\u{e9}"), Some("com.example.Impl"));
}

#[test]
fn test_signed_unicode_escape_is_rejected() {
    let err = Properties::parse("key=\\u+0e9\n").unwrap_err();

    assert!(matches!(err, Error::InvalidProperties { line: 1, .. }));
}

#[test]
fn test_escaped_separators_stay_in_key() {
    let props = Properties::parse("a\\=b=c\nx\\:y:z\n").unwrap();

    assert_eq!(props.get("a=b"), Some("c"));
    assert_eq!(props.get("x:y"), Some("z"));
}

#[test]
fn test_key_without_value() {
    let props = Properties::parse("lonely\n").unwrap();

    assert_eq!(props.get("lonely"), Some(""));
}

#[test]
fn test_unicode_escape_is_decoded() {
    let props = Properties::parse("name=caf\\u00e9\n").unwrap();

    assert_eq!(props.get("name"), Some("café"));
}

proptest! {
    #[test]
    fn test_simple_entries_parse_back(
        key in "[a-zA-Z][a-zA-Z0-9.]{0,20}",
        value in "[a-zA-Z0-9.#;]{0,30}",
    ) {
        let props = Properties::parse(&format!("{key}={value}\n")).unwrap();
        prop_assert_eq!(props.len(), 1);
        prop_assert_eq!(props.get(&key), Some(value.as_str()));
    }
}
