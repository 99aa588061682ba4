//! Export statement rendering.

use std::io::{self, Write};

use super::ShellKind;
use crate::core::variables::VariableMapping;

/// One line of shell source assigning `value` to the exported variable `name`.
///
/// The value is always single quoted and never interpreted.
pub fn export_line(shell: ShellKind, name: &str, value: &str) -> String {
    match shell {
        ShellKind::Posix => format!("export {}={}", name, quote_posix(value)),
        ShellKind::CShell => format!("setenv {} {}", name, quote_csh(value)),
        ShellKind::Fish => format!("set -x {} {}", name, quote_fish(value)),
    }
}

/// Render every entry of `mapping`, in mapping order.
pub fn render(mapping: &VariableMapping, shell: ShellKind) -> Vec<String> {
    mapping
        .iter()
        .map(|(var, value)| export_line(shell, var.name(), value))
        .collect()
}

/// Write the rendered lines to `out`, each terminated by a newline.
pub fn write(out: &mut impl Write, mapping: &VariableMapping, shell: ShellKind) -> io::Result<()> {
    for line in render(mapping, shell) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Single-quote for sh. A quote inside the value closes the string,
/// emits a double-quoted `'` and reopens it.
fn quote_posix(value: &str) -> String {
    format!("'{}'", value.replace('\'', r#"'"'"'"#))
}

/// Single-quote for csh. Quotes are handled as for sh, but history
/// expansion still sees `!` and a bare newline ends the quoted string, so
/// both are backslash-escaped inside the quotes.
fn quote_csh(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str(r#"'"'"'"#),
            '!' | '\n' => {
                quoted.push('\\');
                quoted.push(c);
            }
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Single-quote for fish, where `\\` and `\'` are the only escapes.
fn quote_fish(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
