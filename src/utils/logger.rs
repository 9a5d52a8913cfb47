use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Environment variable that overrides the default log level
pub const LOG_ENV_VAR: &str = "POLYPATH_LOG";

/// Custom logger initialization to exclude timestamps but keep colors.
/// This provides cleaner logs by removing the timestamp prefix.
///
/// Use POLYPATH_LOG=info or POLYPATH_LOG=debug to increase verbosity.
/// Example: POLYPATH_LOG=debug cargo run
pub fn init_custom_logger(debug: bool) {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let default_level = default_level(std::env::var(LOG_ENV_VAR).ok(), debug);

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true); // Keep colors

    let mut filter = tracing_subscriber::filter::EnvFilter::from_default_env();
    for directive in directives(&default_level) {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Ignoring log directive {directive:?}: {e}"),
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format).with_filter(filter))
        .init();
}

/// Level from the environment if set, otherwise warn (debug with --debug)
fn default_level(from_env: Option<String>, debug: bool) -> String {
    from_env.unwrap_or_else(|| {
        if debug { "debug" } else { "warn" }.to_string()
    })
}

fn directives(default_level: &str) -> Vec<String> {
    vec![
        default_level.to_string(),
        // Suppress very noisy render layer messages completely
        "wgpu_core=error".to_string(),
        "wgpu_hal=error".to_string(),
        "bevy_render=error".to_string(),
    ]
}
