//! vespa-security-env - Exports the host's TLS certificate locations for shells.

use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vespa_security_env::cli::{self, output};
use vespa_security_env::core::constants;
use vespa_security_env::core::env::Environment;

fn main() {
    let env = Environment::from_process();

    // Logs share stderr with diagnostics; stdout is evaluated by the shell.
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if env.debug_enabled() {
            EnvFilter::new("vespa_security_env=debug")
        } else {
            EnvFilter::new("vespa_security_env=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(output::colors_enabled(&env))
                .with_target(false)
                .without_time(),
        )
        .init();

    let code = cli::run(
        std::env::args_os(),
        &env,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    std::process::exit(code);
}
