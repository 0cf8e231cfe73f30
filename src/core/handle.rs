//! # Handle Cleaning
//!
//! Users paste handles in whatever shape they copied them: `@jdoe`, ` jdoe `,
//! `jdoe@`. Before the handle goes into the request path we drop the first
//! `@` (wherever it sits) and trim surrounding whitespace. Nothing else is
//! validated or escaped.

/// Removes the first `@` occurrence and trims surrounding whitespace.
pub fn clean_handle(raw: &str) -> String {
    raw.replacen('@', "", 1).trim().to_string()
}
