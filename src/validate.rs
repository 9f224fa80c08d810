//! Contact-form field validation.
//!
//! Kept free of DOM types so the accept/reject behavior can be pinned down by
//! plain unit tests; the form controller only translates these results into
//! error-container updates.

/// Minimum trimmed length accepted for the message field.
pub const MIN_MESSAGE_LEN: usize = 10;

/// A contact-form field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Email,
    Message,
}

impl FieldError {
    /// The message shown inline under the offending field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name.",
            Self::Email => "Please enter a valid email address.",
            Self::Message => "Message should be at least 10 characters.",
        }
    }

    /// Id of the container the message is rendered into.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Message => "messageError",
        }
    }
}

/// Checks all three fields independently and returns every failure.
///
/// Fields are trimmed before checking; a failure in one field never masks
/// another field's result.
pub fn check_contact(name: &str, email: &str, message: &str) -> Vec<FieldError> {
    let mut failures = Vec::new();
    if name.trim().is_empty() {
        failures.push(FieldError::Name);
    }
    let email = email.trim();
    if email.is_empty() || !is_valid_email(email) {
        failures.push(FieldError::Email);
    }
    if message.trim().chars().count() < MIN_MESSAGE_LEN {
        failures.push(FieldError::Message);
    }
    failures
}

/// Deliberately permissive email shape: one `@` splitting a non-empty local
/// part and domain, neither containing whitespace or a further `@`, and the
/// domain carrying at least one `.` with non-empty text on both sides of the
/// last one. Not RFC 5322, and intentionally left that way.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if !is_plain_chunk(local) || !is_plain_chunk(domain) {
        return false;
    }
    let Some((host, suffix)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !suffix.is_empty()
}

fn is_plain_chunk(chunk: &str) -> bool {
    !chunk.is_empty()
        && !chunk
            .chars()
            .any(|character| character.is_whitespace() || character == '@')
}
