use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Masks credential material in free-form text before it is printed.
#[derive(Clone)]
pub struct SecretScrubber {
    access_key_pattern: Regex,
    secret_field_pattern: Regex,
    bearer_pattern: Regex,
    password_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Self {
        Self {
            // AWS access key ids: AKIA... / ASIA...
            access_key_pattern: Regex::new(r"\b(?:AKIA|ASIA)[0-9A-Z]{16}\b").unwrap(),
            // aws_secret_access_key = ..., secret: ...
            secret_field_pattern: Regex::new(
                r#"(?i)["']?(aws_secret_access_key|secret_access_key|secret|token)["']?\s*([:=])\s*["']?[^"'\s,}]+["']?"#,
            )
            .unwrap(),
            // Bearer tokens in Authorization headers
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.=]+").unwrap(),
            // password fields
            password_pattern: Regex::new(r#"(?i)["']?password["']?\s*[:=]\s*["']?[^"'\s,}]+["']?"#)
                .unwrap(),
        }
    }

    /// Shared instance
    pub fn global() -> &'static Self {
        static SCRUBBER: OnceLock<SecretScrubber> = OnceLock::new();
        SCRUBBER.get_or_init(Self::new)
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .access_key_pattern
            .replace_all(message, "[ACCESS_KEY_REDACTED]")
            .to_string();
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .secret_field_pattern
            .replace_all(&scrubbed, "$1$2[REDACTED]")
            .to_string();
        scrubbed = self
            .password_pattern
            .replace_all(&scrubbed, "password=[REDACTED]")
            .to_string();
        scrubbed
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
