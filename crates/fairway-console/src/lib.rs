//! Console output for fairway tools.
//!
//! Sets up a `tracing` subscriber with an environment filter and prints the
//! banner. Engine events log at INFO (lock-ins, resets), recommendations at
//! DEBUG, and per-candidate evaluations at TRACE; raise verbosity with
//! `RUST_LOG` as usual.

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Prints the
/// fairway banner and installs a tracing subscriber defaulting
/// `fairway_engine=info`, overridable through `RUST_LOG`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("fairway_engine=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().without_time())
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
  __       _
 / _| __ _(_)_ ____      ____ _ _   _
| |_ / _` | | '__\ \ /\ / / _` | | | |
|  _| (_| | | |   \ V  V / (_| | |_| |
|_|  \__,_|_|_|    \_/\_/ \__,_|\__, |
                                |___/
"#;

    let version_line = format!("            v{VERSION} - Golf Trip Draft Pairing\n");

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_green());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}
