use super::*;

fn values(items: &[&str]) -> Value {
    Value::Values(items.iter().map(ToString::to_string).collect())
}

#[test]
fn is_empty_on_document_and_values() {
    let empty = ConfigDocument::new();
    assert!(Matcher::IsEmpty.evaluate(&Value::Document(empty)).unwrap());

    let mut doc = ConfigDocument::new();
    doc.push("nameserver", "10.0.0.1");
    assert!(!Matcher::IsEmpty.evaluate(&Value::Document(doc)).unwrap());

    assert!(Matcher::IsEmpty.evaluate(&values(&[])).unwrap());
    assert!(!Matcher::IsEmpty.evaluate(&values(&["a"])).unwrap());
}

#[test]
fn is_empty_treats_absent_as_empty() {
    assert!(Matcher::IsEmpty.evaluate(&Value::Absent).unwrap());
}

#[test]
fn is_nil_only_matches_absent() {
    assert!(Matcher::IsNil.evaluate(&Value::Absent).unwrap());
    assert!(!Matcher::IsNil.evaluate(&values(&[])).unwrap());
    assert!(!Matcher::IsNil.evaluate(&Value::Bool(false)).unwrap());
}

#[test]
fn is_false_on_booleans() {
    assert!(Matcher::IsFalse.evaluate(&Value::Bool(false)).unwrap());
    assert!(!Matcher::IsFalse.evaluate(&Value::Bool(true)).unwrap());
    assert!(Matcher::IsFalse.evaluate(&Value::Absent).unwrap());
}

#[test]
fn includes_requires_whole_element() {
    let matcher = Matcher::Includes("dns".to_string());

    assert!(matcher.evaluate(&values(&["files", "dns"])).unwrap());
    assert!(!matcher.evaluate(&values(&["files", "rdnssd"])).unwrap());
    assert!(!matcher.evaluate(&values(&["files dns"])).unwrap());
}

#[test]
fn at_least_coerces_counts_and_sequences() {
    let matcher = Matcher::AtLeast(2);

    assert!(matcher.evaluate(&Value::Count(2)).unwrap());
    assert!(!matcher.evaluate(&Value::Count(1)).unwrap());
    assert!(matcher.evaluate(&values(&["a", "b", "c"])).unwrap());
    assert!(matcher.evaluate(&Value::Text("4".to_string())).unwrap());
    assert!(!matcher.evaluate(&Value::Text("1".to_string())).unwrap());
}

#[test]
fn at_least_on_non_numeric_text_is_type_mismatch() {
    let err = Matcher::AtLeast(2)
        .evaluate(&Value::Text("many".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfGuardError::TypeMismatch { .. }));
}

#[test]
fn matches_pattern_searches_anywhere() {
    let matcher = Matcher::MatchesPattern("i".to_string());
    assert!(matcher
        .evaluate(&Value::Text("----i----------- /etc/resolv.conf".to_string()))
        .unwrap());
    assert!(!matcher.evaluate(&Value::Text("-----".to_string())).unwrap());
}

#[test]
fn matches_pattern_anchored_to_flags_field() {
    let matcher = Matcher::MatchesPattern(r"^\S*i".to_string());

    assert!(matcher
        .evaluate(&Value::Text("----i----------- /etc/resolv.conf".to_string()))
        .unwrap());
    // The `i` in the file path must not satisfy the flags check.
    assert!(!matcher
        .evaluate(&Value::Text(
            "---------------- /etc/main-ip/resolv.conf".to_string()
        ))
        .unwrap());
}

#[test]
fn matches_pattern_invalid_regex_is_error() {
    let err = Matcher::MatchesPattern("[".to_string())
        .evaluate(&Value::Text("x".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfGuardError::InvalidPattern { .. }));
}

#[test]
fn type_mismatch_names_matcher_and_subject() {
    let err = Matcher::Includes("dns".to_string())
        .evaluate(&Value::Count(1))
        .unwrap_err();

    match err {
        ConfGuardError::TypeMismatch { matcher, subject } => {
            assert_eq!(matcher, "includes");
            assert_eq!(subject, "count");
        }
        other => panic!("expected TypeMismatch, got {other}"),
    }
}

#[test]
fn describe_renders_expectations() {
    assert_eq!(Matcher::IsEmpty.describe(), "is empty");
    assert_eq!(Matcher::AtLeast(2).describe(), ">= 2");
    assert_eq!(
        Matcher::Includes("dns".to_string()).describe(),
        "includes \"dns\""
    );
}
