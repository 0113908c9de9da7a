//! Newsletter signup handling.
//!
//! The signup form submits an email address and shows a transient message
//! inside the form. There is no mailing-list backend; a submission is
//! validated, normalized, and answered with the message the form should
//! display.

use tracing::{debug, info};

use verge_vr_core::Email;

/// Kind of form message, controlling its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The submission was accepted.
    Success,
    /// The submission was rejected.
    Error,
}

impl MessageKind {
    /// Stable string form, used as a styling hook.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Message the form displays after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    /// Message text.
    pub text: String,
    /// Visual kind.
    pub kind: MessageKind,
}

/// Handle a newsletter signup submission.
///
/// The input is trimmed and lowercased before validation, so
/// `" User@Example.COM "` subscribes as `user@example.com`.
#[must_use]
pub fn subscribe(input: &str) -> FormMessage {
    let email = input.trim().to_lowercase();

    match Email::parse(&email) {
        Ok(email) => {
            info!(email = %email, "Newsletter subscription successful");
            FormMessage {
                text: "Successfully subscribed! Welcome to our newsletter.".to_owned(),
                kind: MessageKind::Success,
            }
        }
        Err(e) => {
            debug!(error = %e, "Newsletter subscription rejected");
            FormMessage {
                text: "Please enter a valid email address".to_owned(),
                kind: MessageKind::Error,
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_valid_email() {
        let message = subscribe("user@example.com");
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(
            message.text,
            "Successfully subscribed! Welcome to our newsletter."
        );
    }

    #[test]
    fn test_subscribe_normalizes_input() {
        let message = subscribe("  User@Example.COM ");
        assert_eq!(message.kind, MessageKind::Success);
    }

    #[test]
    fn test_subscribe_invalid_email() {
        for input in ["", "not-an-email", "user@", "@example.com", "user@domain"] {
            let message = subscribe(input);
            assert_eq!(message.kind, MessageKind::Error, "accepted {input:?}");
            assert_eq!(message.text, "Please enter a valid email address");
        }
    }

    #[test]
    fn test_message_kind_as_str() {
        assert_eq!(MessageKind::Success.as_str(), "success");
        assert_eq!(MessageKind::Error.as_str(), "error");
    }
}
