/// Trims the address and lower-cases the domain. The local part is kept as
/// given since mail servers may treat it case sensitively.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_email;

    #[test]
    fn lowercases_only_the_domain() {
        assert_eq!(normalize_email("Foo.Bar@EXAMPLE.Com"), "Foo.Bar@example.com");
    }

    #[test]
    fn splits_on_the_last_at() {
        assert_eq!(normalize_email("\"a@b\"@Example.COM"), "\"a@b\"@example.com");
    }

    #[test]
    fn trims_and_leaves_non_addresses_alone() {
        assert_eq!(normalize_email("  f@Example.com "), "f@example.com");
        assert_eq!(normalize_email("NoAtSign"), "NoAtSign");
        assert_eq!(normalize_email("   "), "");
    }
}
