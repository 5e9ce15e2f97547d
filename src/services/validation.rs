use crate::db::types::UserRole;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Emails are normalized once, at the store boundary. Every lookup and
/// duplicate check goes through the normalized form, so differently-cased
/// duplicates resolve to the same identity.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Accepts `<something>@gmail.com`, case-insensitively, after trimming.
pub(crate) fn is_valid_login_email(email: &str) -> bool {
    let normalized = normalize_email(email);
    normalized.strip_suffix("@gmail.com").is_some_and(|local| !local.is_empty())
}

pub(crate) fn is_valid_password(password: &str) -> bool {
    password.trim().chars().count() >= MIN_PASSWORD_LEN
}

#[derive(Debug)]
pub(crate) struct SignupForm<'a> {
    pub(crate) role: Option<UserRole>,
    pub(crate) full_name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) confirm_password: &'a str,
}

pub(crate) fn can_signup(form: &SignupForm<'_>) -> bool {
    form.role.is_some()
        && !form.email.trim().is_empty()
        && is_valid_password(form.password)
        && form.password == form.confirm_password
        && !form.full_name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_email_accepts_gmail_any_case() {
        assert!(is_valid_login_email("Foo@GMAIL.com"));
        assert!(is_valid_login_email("  alice@gmail.com  "));
    }

    #[test]
    fn login_email_rejects_other_domains_and_bare_domain() {
        assert!(!is_valid_login_email("foo@yahoo.com"));
        assert!(!is_valid_login_email("@gmail.com"));
        assert!(!is_valid_login_email(""));
    }

    #[test]
    fn password_requires_six_chars_after_trim() {
        assert!(is_valid_password("secret"));
        assert!(!is_valid_password("five5"));
        assert!(!is_valid_password("   abc   "));
    }

    #[test]
    fn signup_rejected_when_passwords_differ() {
        let form = SignupForm {
            role: Some(UserRole::Student),
            full_name: "Alice",
            email: "alice@gmail.com",
            password: "secret1",
            confirm_password: "secret2",
        };
        assert!(!can_signup(&form));
    }

    #[test]
    fn signup_requires_role_name_and_email() {
        let valid = SignupForm {
            role: Some(UserRole::Teacher),
            full_name: "Bob",
            email: "bob@gmail.com",
            password: "secret1",
            confirm_password: "secret1",
        };
        assert!(can_signup(&valid));

        assert!(!can_signup(&SignupForm { role: None, ..valid_form() }));
        assert!(!can_signup(&SignupForm { full_name: "  ", ..valid_form() }));
        assert!(!can_signup(&SignupForm { email: "", ..valid_form() }));
    }

    #[test]
    fn normalize_email_lowercases_and_trims() {
        assert_eq!(normalize_email(" Alice@Gmail.COM "), "alice@gmail.com");
    }

    // Duplicate checks run against the normalized form, so a differently-cased
    // email collides with an existing account instead of creating a second one.
    #[test]
    fn differently_cased_emails_resolve_to_same_identity() {
        assert_eq!(normalize_email("Alice@GMAIL.com"), normalize_email("alice@gmail.com"));
    }

    fn valid_form() -> SignupForm<'static> {
        SignupForm {
            role: Some(UserRole::Student),
            full_name: "Alice",
            email: "alice@gmail.com",
            password: "secret1",
            confirm_password: "secret1",
        }
    }
}
