//! Command-line interface.

pub mod output;

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

use crate::core::env::Environment;
use crate::core::shell::{self, ShellKind};
use crate::core::tls::{MixedMode, TransportSecurityOptions};
use crate::core::{constants, variables};
use crate::error::{Error, Result};

/// Prints the host's TLS certificate locations as shell environment variables
#[derive(Parser, Debug)]
#[command(
    name = "vespa-security-env",
    version,
    after_help = "Evaluate the output in your shell, e.g. eval \"$(vespa-security-env)\""
)]
pub struct Cli {
    /// Shell to generate statements for (posix, cshell, fish, or a shell binary
    /// name such as bash or tcsh). Detected from $SHELL when omitted.
    #[arg(long, value_name = "NAME")]
    pub shell: Option<String>,
}

/// Run the tool and return its exit code.
///
/// Shell statements go to `out`; usage goes to `out` as well, since it is
/// requested explicitly. Failures are reported on `err` as one line, followed
/// by the cause chain when `VESPA_DEBUG` is set.
pub fn run<I, T>(args: I, env: &Environment, out: &mut impl Write, err: &mut impl Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = match Cli::try_parse_from(args) {
        Ok(cli) => execute(&cli, env, out),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            output::raw(out, &e.to_string()).map_err(Error::from)
        }
        Err(e) => Err(Error::ArgumentParse(first_line(&e.to_string()))),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            report(err, &e, env);
            1
        }
    }
}

/// Resolve the shell, load the TLS configuration and write the selected
/// variables.
pub fn execute(cli: &Cli, env: &Environment, out: &mut impl Write) -> Result<()> {
    let kind = resolve_shell(cli.shell.as_deref(), env)?;

    let Some(options) = TransportSecurityOptions::from_env(env)? else {
        return Ok(());
    };
    let mixed_mode = MixedMode::from_env(env)?;

    let mapping = variables::select(&options, mixed_mode);
    shell::write(out, &mapping, kind)?;
    Ok(())
}

/// An explicit `--shell` wins; otherwise detect from `$SHELL`.
///
/// # Errors
///
/// Returns `Error::UnsupportedShell` if `explicit` names no known shell.
pub fn resolve_shell(explicit: Option<&str>, env: &Environment) -> Result<ShellKind> {
    let shell = match explicit {
        Some(name) => ShellKind::from_explicit_name(name)?,
        None => ShellKind::detect(env.get(constants::SHELL_VAR)),
    };
    debug!(%shell, explicit = explicit.is_some(), "resolved shell");
    Ok(shell)
}

fn report(err: &mut impl Write, e: &Error, env: &Environment) {
    let color = output::colors_enabled(env);
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = output::error(err, &format!("{}: {}", e.context(), e), color);
    if env.debug_enabled() {
        let _ = output::trace(err, e, color);
    }
}

/// First line of a clap error, without its `error: ` prefix.
fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).trim().to_string()
}
