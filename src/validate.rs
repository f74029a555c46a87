/// Returns the label of the first field whose trimmed value is empty.
pub fn first_missing<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
}

/// Permissive email shape check: `local@domain` where the domain contains a
/// dot with something on both sides, and no whitespace or second `@` anywhere.
/// Deliberately not RFC-grade.
pub fn is_valid_email(email: &str) -> bool {
    let bad = |part: &str| {
        part.is_empty() || part.chars().any(|c| c.is_whitespace() || c == '@')
    };
    match email.split_once('@') {
        Some((local, domain)) if !bad(local) => match domain.rsplit_once('.') {
            Some((host, tld)) => !bad(host) && !bad(tld),
            None => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_finds_empty_and_whitespace_fields() {
        assert_eq!(first_missing(&[("name", "Ada"), ("email", "a@b.c")]), None);
        assert_eq!(
            first_missing(&[("name", "Ada"), ("phone", "")]),
            Some("phone")
        );
        assert_eq!(first_missing(&[("notes", "   ")]), Some("notes"));
    }

    #[test]
    fn first_missing_reports_first_of_several() {
        assert_eq!(
            first_missing(&[("name", ""), ("email", "")]),
            Some("name")
        );
    }

    #[test]
    fn email_requires_dot_in_domain() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn email_rejects_degenerate_shapes() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
    }

    #[test]
    fn email_allows_dotted_hosts() {
        assert!(is_valid_email("pet.owner@mail.example.com"));
    }
}
