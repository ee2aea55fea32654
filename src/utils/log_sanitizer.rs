//! Display wrappers that mask personal data before it reaches the log.
//!
//! Wrap the value at the call site, e.g. `info!("user {}", MaskedUsername(&name))`;
//! nothing is allocated unless the log line is actually emitted.

use std::fmt;

const VISIBLE_CHARS: usize = 3;

fn write_masked(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let visible: String = value.chars().take(VISIBLE_CHARS).collect();
    write!(f, "{}***", visible)
}

/// Shows the first three characters of a username.
pub struct MaskedUsername<'a>(pub &'a str);

impl fmt::Display for MaskedUsername<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_masked(f, self.0)
    }
}

/// Shows the first three characters of the local part and the whole domain.
pub struct MaskedEmail<'a>(pub &'a str);

impl fmt::Display for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once('@') {
            Some((local, domain)) => {
                write_masked(f, local)?;
                write!(f, "@{}", domain)
            }
            None => write_masked(f, self.0),
        }
    }
}
