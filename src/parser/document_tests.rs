use super::*;

#[test]
fn push_preserves_first_seen_key_order() {
    let mut doc = ConfigDocument::new();
    doc.push("nameserver", "192.168.1.2");
    doc.push("search", "example.com");
    doc.push("nameserver", "192.168.1.3");

    let keys: Vec<_> = doc.keys().collect();
    assert_eq!(keys, vec!["nameserver", "search"]);
    assert_eq!(doc.values("nameserver"), ["192.168.1.2", "192.168.1.3"]);
}

#[test]
fn values_for_absent_key_are_empty() {
    let doc = ConfigDocument::new();
    assert!(doc.values("nameserver").is_empty());
    assert!(!doc.contains_key("nameserver"));
}

#[test]
fn tokens_split_values_on_whitespace() {
    let mut doc = ConfigDocument::new();
    doc.push("hosts", "files dns");

    assert_eq!(doc.tokens("hosts"), vec!["files", "dns"]);
}

#[test]
fn value_count_distinct_deduplicates() {
    let mut doc = ConfigDocument::new();
    doc.push("nameserver", "192.168.1.2");
    doc.push("nameserver", "192.168.1.2");
    doc.push("nameserver", "192.168.1.3");

    assert_eq!(doc.value_count("nameserver", false), 3);
    assert_eq!(doc.value_count("nameserver", true), 2);
}

#[test]
fn empty_document_reports_empty() {
    let doc = ConfigDocument::new();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}
