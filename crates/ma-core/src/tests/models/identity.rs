use crate::Identity;

use uuid::Uuid;

fn identity(email: Option<&str>, name: Option<&str>) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        email: email.map(String::from),
        name: name.map(String::from),
    }
}

#[test]
fn given_metadata_name_when_display_name_then_metadata_wins() {
    let identity = identity(Some("alice@example.com"), Some("Alice Liddell"));

    assert_eq!(identity.display_name(), "Alice Liddell");
}

#[test]
fn given_email_only_when_display_name_then_local_part() {
    let identity = identity(Some("a@b.com"), None);

    assert_eq!(identity.display_name(), "a");
}

#[test]
fn given_no_email_when_display_name_then_user_fallback() {
    let identity = identity(None, None);

    assert_eq!(identity.display_name(), "User");
}

#[test]
fn given_empty_metadata_name_when_display_name_then_falls_back_to_email() {
    let identity = identity(Some("bob@example.com"), Some(""));

    assert_eq!(identity.display_name(), "bob");
}

#[test]
fn given_email_with_empty_local_part_when_display_name_then_user_fallback() {
    let identity = identity(Some("@example.com"), None);

    assert_eq!(identity.display_name(), "User");
}
