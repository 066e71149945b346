//! Contact form submission entity and its validation rules.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::ports::FormSurface;
use crate::error::ValidationError;

/// `local-part@domain.tld`: no whitespace, exactly one `@`, a `.` after it.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Form field names read on submit, in the order they are checked.
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";
pub const CONTACT_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_EMAIL, FIELD_MESSAGE];

/// One submission of the contact form.
///
/// Lives only for the duration of a submit event. Absent fields are read as
/// empty strings so that "absent" and "empty" fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    #[validate(regex(path = "*EMAIL_REGEX"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Reads the three contact fields from a form.
    pub fn from_form(form: &dyn FormSurface) -> Self {
        let read = |field: &str| form.field(field).unwrap_or_default();

        Self {
            name: read(FIELD_NAME),
            email: read(FIELD_EMAIL),
            message: read(FIELD_MESSAGE),
        }
    }

    /// Validates the submission.
    ///
    /// Presence is checked before the email shape, so an empty email is a
    /// missing field rather than an invalid address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first empty field,
    /// or [`ValidationError::InvalidEmail`] if the address is malformed.
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let fields = errors.field_errors();
        let missing = CONTACT_FIELDS.into_iter().find(|field| {
            fields
                .get(*field)
                .is_some_and(|errs| errs.iter().any(|e| e.code == "length"))
        });

        match missing {
            Some(field) => Err(ValidationError::missing_field(field)),
            None => Err(ValidationError::invalid_email(self.email.clone())),
        }
    }
}

/// Returns whether `email` has the `local@domain.tld` shape accepted by the form.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello there");
        assert!(submission.check().is_ok());
    }

    #[test]
    fn test_missing_name() {
        let submission = ContactSubmission::new("", "ada@example.com", "hi");
        assert_eq!(
            submission.check(),
            Err(ValidationError::missing_field("name"))
        );
    }

    #[test]
    fn test_missing_message() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "");
        assert_eq!(
            submission.check(),
            Err(ValidationError::missing_field("message"))
        );
    }

    #[test]
    fn test_empty_email_is_missing_not_invalid() {
        let submission = ContactSubmission::new("Ada", "", "hi");
        assert_eq!(
            submission.check(),
            Err(ValidationError::missing_field("email"))
        );
    }

    #[test]
    fn test_first_missing_field_reported() {
        let submission = ContactSubmission::new("", "", "");
        assert_eq!(
            submission.check(),
            Err(ValidationError::missing_field("name"))
        );
    }

    #[test]
    fn test_invalid_email() {
        let submission = ContactSubmission::new("A", "not-an-email", "hi");
        assert_eq!(
            submission.check(),
            Err(ValidationError::invalid_email("not-an-email"))
        );
    }

    #[test]
    fn test_whitespace_email_is_invalid() {
        let submission = ContactSubmission::new("A", "   ", "hi");
        assert!(matches!(
            submission.check(),
            Err(ValidationError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@b.c.d"));

        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.io"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
    }
}
