use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const LOG_TARGETS: &[&str] = &[
    "lichviet",
    "lichviet_almanac",
    "lichviet_canchi",
    "lichviet_date",
];

/// Initialize tracing from the CLI verbosity count.
///
/// `-v` maps to info, `-vv` to debug, `-vvv` and above to trace; without a
/// flag only warnings are shown (the nạp-âm table-miss defect signal lands
/// there). A `RUST_LOG` env var takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> =
            LOG_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
