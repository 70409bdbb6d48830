pub mod source;
pub mod types;

pub use self::source::{FetchError, HttpMemberSource, MemberSource, StaticMemberSource};
pub use self::types::{Member, MemberEditForm, MemberId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_and_numeric_ids() {
        let json = r#"[
            {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
            {"id": 2, "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin"}
        ]"#;
        let members: Vec<Member> = serde_json::from_str(json).unwrap();
        assert_eq!(members[0].id, MemberId::from("1"));
        assert_eq!(members[1].id, MemberId::from("2"));
        assert_eq!(members[1].role, "admin");
    }

    #[test]
    fn extra_fields_are_carried() {
        let json = r#"{"id": "7", "name": "Anna", "email": "a@x.io", "role": "member", "team": "ops"}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.extra.get("team").and_then(|v| v.as_str()), Some("ops"));

        let back = serde_json::to_value(&member).unwrap();
        assert_eq!(back["team"], "ops");
        assert_eq!(back["id"], "7");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"[{"id": "1", "name": "No Email", "role": "member"}]"#;
        assert!(serde_json::from_str::<Vec<Member>>(json).is_err());
    }

    #[test]
    fn name_match_ignores_case_and_email() {
        let anna = Member::new("1", "Anna", "x@y.z", "member");
        let juanna = Member::new("2", "Juanna", "j@y.z", "member");
        let bob = Member::new("3", "Bob", "joanne.ann@y.z", "member");
        assert!(anna.name_matches("ann"));
        assert!(juanna.name_matches("ann"));
        assert!(!bob.name_matches("ann"));
    }
}
