use clientcensus_engine::{Error, lookup};
use clientcensus_testing::InMemoryUsers;
use clientcensus_testing::fixtures::{desktop_row, device_row, malformed_row, mobile_row, web_row};
use clientcensus_types::ClientVersion;

fn threshold() -> ClientVersion {
    "5.5.3".parse().expect("valid threshold")
}

fn users() -> InMemoryUsers {
    InMemoryUsers::new()
        .with_user("u-old", "olduser")
        .with_user("u-equal", "equaluser")
        .with_user("u-new", "newuser")
        .with_user("u-odd", "odduser")
        .with_user("u-mobile", "mobileuser")
}

#[test]
fn test_versions_at_or_below_threshold_are_reported() {
    let rows = vec![
        desktop_row("5.4.0", "Windows").with_user("u-old"),
        desktop_row("5.5.3", "Mac OS").with_user("u-equal"),
        desktop_row("5.6.0", "Linux").with_user("u-new"),
    ];
    let mut users = users();

    let outcome = lookup(rows, &threshold(), &mut users).unwrap();

    let usernames: Vec<&str> = outcome
        .records
        .iter()
        .map(|record| record.user.username.as_str())
        .collect();
    assert_eq!(usernames, vec!["olduser", "equaluser"]);
    assert_eq!(outcome.matched_sessions, 2);
    assert_eq!(users.requested, vec!["u-old", "u-equal"]);

    let first = &outcome.records[0];
    assert_eq!(first.version.as_str(), "5.4.0");
    assert_eq!(first.os, "Windows");
    assert_eq!(
        first.fields(),
        [
            "5.4.0",
            "Windows",
            "olduser",
            "olduser@example.com",
            "olduser-first",
            "olduser-last"
        ]
    );
}

#[test]
fn test_unparseable_version_fails_open() {
    let rows = vec![desktop_row("nightly", "Windows").with_user("u-odd")];
    let mut users = users();

    let outcome = lookup(rows, &threshold(), &mut users).unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].version.as_str(), "nightly");
}

#[test]
fn test_mobile_and_placeholder_sessions_are_never_reported() {
    let rows = vec![
        mobile_row("1.0.0", "1", "iOS").with_user("u-mobile"),
        device_row("1.0.0", "Linux", "device-1").with_user("u-mobile"),
        desktop_row("0.0", "Windows").with_user("u-old"),
        web_row("Linux").with_user("u-old"),
    ];
    let mut users = users();

    let outcome = lookup(rows, &threshold(), &mut users).unwrap();

    assert!(outcome.records.is_empty());
    assert!(users.requested.is_empty());
}

#[test]
fn test_malformed_rows_are_skipped() {
    let rows = vec![malformed_row(), desktop_row("5.0.0", "Windows").with_user("u-old")];
    let mut users = users();

    let outcome = lookup(rows, &threshold(), &mut users).unwrap();

    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.records.len(), 1);
}

#[test]
fn test_session_without_known_user_yields_no_record() {
    let rows = vec![
        desktop_row("5.0.0", "Windows").with_user("u-missing"),
        desktop_row("5.0.0", "Windows"),
    ];
    let mut users = users();

    let outcome = lookup(rows, &threshold(), &mut users).unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.matched_sessions, 1);
    assert_eq!(users.requested, vec!["u-missing"]);
}

#[test]
fn test_user_lookup_failure_aborts() {
    let rows = vec![desktop_row("5.0.0", "Windows").with_user("u-old")];
    let mut users = users().failing_on("u-old");

    let err = lookup(rows, &threshold(), &mut users).unwrap_err();

    assert!(matches!(err, Error::Users(_)));
    assert!(err.to_string().contains("u-old"));
}
