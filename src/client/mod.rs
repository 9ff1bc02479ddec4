//! Interactive game clients.
//!
//! Both clients drive a strict prompt-send-reply-print loop on the
//! operator's terminal: one line in, one message out, one reply back.

pub mod guess;
pub mod rps;

use std::io::{self, Write};

/// Print a prompt without a trailing newline and flush it out.
fn prompt(text: &str) -> io::Result<()> {
    let mut out = io::stdout();
    out.write_all(text.as_bytes())?;
    out.flush()
}
