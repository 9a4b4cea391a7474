use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "skillcast",
    "skillcast_calendar",
    "skillcast_labeled",
    "skillcast_skill",
    "skillcast_stats",
];

/// Filter directive for `verbosity`: 0 → warn, 1 → info, 2 → debug,
/// 3+ → trace, applied to every workspace crate.
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` overrides `verbosity` if set. Returns `false` when a subscriber
/// was already installed, which leaves the existing one in place.
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
