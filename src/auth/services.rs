use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Opaque login session identifier. Nothing records it server-side.
pub(crate) fn new_session_id() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("Ada.Lovelace+blog@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada @example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn rejects_empty_domain_labels() {
        assert!(!is_valid_email("a@.b.c"));
        assert!(!is_valid_email("a@b.."));
        assert!(!is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@b.c."));
        assert!(is_valid_email("a@b.c.d"));
    }

    #[test]
    fn session_ids_are_fresh() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
