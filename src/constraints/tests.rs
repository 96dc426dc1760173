//! Tests for constraint configuration.

use crate::constraints::Constraints;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_constraints_are_all_absent() {
    let constraints = Constraints::none();

    assert_eq!(constraints.max_files, None);
    assert_eq!(constraints.max_size, None);
    assert_eq!(constraints.min_size, None);
    assert_eq!(constraints.accepted_formats, None);
}

#[test]
fn test_builders_set_each_field() {
    let constraints = Constraints::none()
        .with_max_files(3)
        .with_max_size(2048)
        .with_min_size(16)
        .with_accepted_formats(["image/", ".pdf"]);

    assert_eq!(constraints.max_files, Some(3));
    assert_eq!(constraints.max_size, Some(2048));
    assert_eq!(constraints.min_size, Some(16));
    assert_eq!(
        constraints.accepted_formats,
        Some(vec!["image/".to_string(), ".pdf".to_string()])
    );
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
max_size: 5000000
"#;
    let constraints = Constraints::from_yaml(yaml).unwrap();

    // Specified value should be used
    assert_eq!(constraints.max_size, Some(5_000_000));

    // Unspecified fields stay absent, not zeroed
    assert_eq!(constraints.max_files, None);
    assert_eq!(constraints.min_size, None);
    assert_eq!(constraints.accepted_formats, None);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
max_files: 3
max_size: 2000
min_size: 100
accepted_formats:
  - "image/"
  - ".pdf"
"#;
    let constraints = Constraints::from_yaml(yaml).unwrap();

    assert_eq!(constraints.max_files, Some(3));
    assert_eq!(constraints.max_size, Some(2000));
    assert_eq!(constraints.min_size, Some(100));
    assert_eq!(
        constraints.accepted_formats,
        Some(vec!["image/".to_string(), ".pdf".to_string()])
    );
}

/// An empty pattern list must parse as configured-but-empty, never collapse
/// to absent. The two arms drive opposite engine behavior.
#[test]
fn test_empty_format_list_is_distinct_from_missing_key() {
    let with_empty = Constraints::from_yaml("accepted_formats: []").unwrap();
    assert_eq!(with_empty.accepted_formats, Some(vec![]));

    let without_key = Constraints::from_yaml("max_files: 1").unwrap();
    assert_eq!(without_key.accepted_formats, None);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
max_files: 2
some_future_field: true
"#;
    let constraints = Constraints::from_yaml(yaml).unwrap();

    assert_eq!(constraints.max_files, Some(2));
}

#[test]
fn test_invalid_yaml_is_a_user_error() {
    let result = Constraints::from_yaml("max_size: [");

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("constraints YAML")
    );
}

#[test]
fn test_to_yaml_omits_absent_fields() {
    let yaml = Constraints::none().with_max_files(2).to_yaml().unwrap();

    assert!(yaml.contains("max_files: 2"));
    assert!(!yaml.contains("max_size"));
    assert!(!yaml.contains("accepted_formats"));
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("constraints.yaml");
    fs::write(&path, "max_size: 1024\n").unwrap();

    let constraints = Constraints::load(&path).unwrap();

    assert_eq!(constraints.max_size, Some(1024));
}

#[test]
fn test_load_missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let result = Constraints::load(dir.path().join("absent.yaml"));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("absent.yaml"));
}
