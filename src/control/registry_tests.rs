use std::path::PathBuf;

use crate::check::{Check, ConfigSource, Subject};
use crate::control::{Applicability, ControlTags, Severity};
use crate::matcher::Matcher;
use crate::parser::ParseOptions;

use super::*;

fn control(id: &str) -> Control {
    let subject = Subject::Document(ConfigSource::new(
        PathBuf::from("/etc/resolv.conf"),
        ParseOptions::new().with_comment_char('#'),
    ));
    Control {
        id: id.to_string(),
        title: format!("control {id}"),
        description: String::new(),
        check_text: String::new(),
        fix_text: String::new(),
        impact: 0.3,
        severity: Severity::Low,
        tags: ControlTags::default(),
        applicability: vec![Applicability::Host],
        gate: None,
        checks: vec![Check::new("resolver empty", subject, Matcher::IsEmpty)],
    }
}

#[test]
fn register_and_lookup() {
    let mut registry = ControlRegistry::new();
    registry.register(control("C-1")).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.get("C-1").is_some());
    assert!(registry.require("C-1").is_ok());
}

#[test]
fn register_rejects_duplicate_id() {
    let mut registry = ControlRegistry::new();
    registry.register(control("C-1")).unwrap();

    let err = registry.register(control("C-1")).unwrap_err();
    assert!(matches!(err, ConfGuardError::DuplicateControl(_)));
}

#[test]
fn register_validates_control() {
    let mut registry = ControlRegistry::new();
    let mut bad = control("C-1");
    bad.impact = 2.0;

    assert!(registry.register(bad).is_err());
    assert!(registry.is_empty());
}

#[test]
fn require_unknown_id_is_error() {
    let registry = ControlRegistry::new();
    let err = registry.require("C-404").unwrap_err();
    assert!(matches!(err, ConfGuardError::UnknownControl(_)));
}

#[test]
fn iteration_follows_registration_order() {
    let mut registry = ControlRegistry::new();
    registry.register(control("C-2")).unwrap();
    registry.register(control("C-1")).unwrap();
    registry.register(control("C-3")).unwrap();

    let ids: Vec<_> = registry.ids().collect();
    assert_eq!(ids, vec!["C-2", "C-1", "C-3"]);
}

#[test]
fn discard_removes_control() {
    let mut registry = ControlRegistry::new();
    registry.register(control("C-1")).unwrap();

    assert!(registry.discard("C-1").is_some());
    assert!(registry.discard("C-1").is_none());
    assert!(registry.is_empty());
}
