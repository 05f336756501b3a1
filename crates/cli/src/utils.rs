use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes a tracing subscriber for logging to stderr, filtered by `RUST_LOG`.
pub fn subscriber() {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
}

/// Loads `.env` from `root` and from the current directory, if they exist.
///
/// Values that are already set in the environment win.
pub fn load_dotenv(root: &Path) {
    let load = |dir: &Path| {
        if let Ok(path) = dotenvy::from_path(dir.join(".env")).map(|()| dir.join(".env")) {
            trace!(?path, "loaded .env");
        }
    };
    load(root);
    if let Ok(cwd) = std::env::current_dir()
        && cwd != root
    {
        load(&cwd);
    }
}

/// Enables terminal colors when the terminal supports them.
pub fn enable_paint() {
    let enable = yansi::Condition::os_support() && yansi::Condition::tty_and_color_live();
    yansi::whenever(yansi::Condition::cached(enable));
}
