//! Decoding project lists in the shape the cards receive them.

use project_cards_types::{check_unique_ids, parse_projects, PaymentStatus, ProjectError};

const SAMPLE: &str = r#"[
  {
    "id": "web-redesign",
    "title": "Website Redesign",
    "pricePerHour": "$45/hr",
    "status": "Paid",
    "categories": ["Design", "Frontend"],
    "description": "Redesign landing page",
    "location": "Remote",
    "timeAgo": "2h ago",
    "logoColor": "logo--indigo",
    "logoIcon": "W"
  },
  {
    "id": "api-audit",
    "title": "API Audit",
    "pricePerHour": "$60/hr",
    "status": "Not Paid",
    "categories": [],
    "description": "",
    "location": "Berlin",
    "timeAgo": "1d ago",
    "logoColor": "logo--amber",
    "logoIcon": "A"
  }
]"#;

#[test]
fn decodes_records_in_order() {
    let projects = parse_projects(SAMPLE).unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Website Redesign");
    assert_eq!(projects[0].status, PaymentStatus::Paid);
    assert_eq!(projects[0].categories, vec!["Design", "Frontend"]);
    assert_eq!(projects[1].id, "api-audit");
    assert_eq!(projects[1].status, PaymentStatus::NotPaid);
    assert!(projects[1].categories.is_empty());
    assert!(projects[1].description.is_empty());
}

#[test]
fn sample_ids_are_unique() {
    let projects = parse_projects(SAMPLE).unwrap();
    assert_eq!(check_unique_ids(&projects), Ok(()));
}

#[test]
fn empty_array_is_an_empty_list() {
    assert_eq!(parse_projects("[]").unwrap(), Vec::new());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_projects("{not json").unwrap_err();
    assert!(matches!(err, ProjectError::Parse { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn round_trips_through_serde() {
    let projects = parse_projects(SAMPLE).unwrap();
    let encoded = serde_json::to_string(&projects).unwrap();
    assert_eq!(parse_projects(&encoded).unwrap(), projects);
}
