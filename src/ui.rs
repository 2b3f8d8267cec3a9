// UI layer: everything the tool prints. Output goes through a `Write` so
// the dispatcher can be pointed at stdout or at a buffer.

use std::io::{self, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::action::Action;
use crate::api::{Endpoint, Reply};

/// Usage text shown when the argument count is wrong.
pub fn usage() -> String {
    let mut text = String::from("\nusage: cvtest action url\n\naction:\n");
    for action in Action::ALL {
        text.push_str("        ");
        text.push_str(action.name());
        text.push('\n');
    }
    text.push_str("\nurl:\n        url to image\n");
    text
}

pub fn print_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", usage())
}

/// The line printed right before the request goes out.
pub fn announce(out: &mut impl Write, endpoint: &Endpoint, action: Action) -> io::Result<()> {
    writeln!(out, "calling POST {}", endpoint.url(&action.path()))
}

/// Status line, then the body bytes untouched.
pub fn print_reply(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    writeln!(out, "Status: {}", reply.status)?;
    out.write_all(&reply.body)?;
    writeln!(out)?;
    out.flush()
}

/// Spinner on stderr while the request is in flight. Hidden when stderr
/// is not a terminal.
pub fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
