//! Terminal output helpers.
//!
//! Standard output carries nothing but shell source, so everything meant for
//! a human goes to the error sink. Color is used only when that sink is a
//! terminal and `NO_COLOR` is unset.

use console::style;
use std::io::{self, Write};

use crate::core::env::Environment;

/// Whether diagnostics should be colored.
pub fn colors_enabled(env: &Environment) -> bool {
    !env.contains("NO_COLOR") && console::colors_enabled_stderr()
}

/// Print an error message (red marker).
///
/// Example: `✗ Invalid command line arguments: unsupported shell 'pwsh'`
pub fn error(w: &mut impl Write, msg: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{} {}", style("✗").red().for_stderr(), msg)
    } else {
        writeln!(w, "✗ {}", msg)
    }
}

/// Print the cause chain and debug form of an error (dimmed).
///
/// Example:
/// ```text
///   caused by: No such file or directory (os error 2)
///   ReadFile { path: "/etc/vespa/tls.json", source: Os { .. } }
/// ```
pub fn trace(w: &mut impl Write, err: &dyn std::error::Error, color: bool) -> io::Result<()> {
    let mut lines = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {}", cause));
        source = cause.source();
    }
    lines.push(format!("{:?}", err));

    for line in lines {
        if color {
            writeln!(w, "  {}", style(line).dim().for_stderr())?;
        } else {
            writeln!(w, "  {}", line)?;
        }
    }
    Ok(())
}

/// Print text as is, e.g. the usage message.
pub fn raw(w: &mut impl Write, text: &str) -> io::Result<()> {
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(w)?;
    }
    w.flush()
}
