//! Notification recipient normalization.

use validator::ValidateEmail;

use planner_core::{AppError, AppResult};

/// Trim, drop blanks, de-duplicate (first occurrence wins) and validate a
/// list of recipient addresses.
pub fn normalize_emails<I, S>(emails: I) -> AppResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for raw in emails {
        let email = raw.as_ref().trim();
        if email.is_empty() || out.iter().any(|e| e == email) {
            continue;
        }
        if !email.validate_email() {
            return Err(AppError::validation(format!(
                "Invalid email address: {email}"
            )));
        }
        out.push(email.to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_order() {
        let emails = normalize_emails(["b@x.com", " a@x.com ", "", "b@x.com"]).unwrap();
        assert_eq!(emails, vec!["b@x.com", "a@x.com"]);
    }

    #[test]
    fn test_rejects_malformed_address() {
        assert!(normalize_emails(["not-an-email"]).is_err());
    }

    #[test]
    fn test_empty_input() {
        let emails = normalize_emails(Vec::<String>::new()).unwrap();
        assert!(emails.is_empty());
    }
}
