use eyre::EyreHandler;
use itertools::Itertools;
use oru_common::errors::dedup_chain;
use std::{error::Error, fmt};

/// Environment variable that switches to the verbose error report.
pub const DEBUG_ENV: &str = "ORU_DEBUG";

/// An `eyre` handler that prints the deduplicated error chain instead of a full report.
#[derive(Default)]
pub struct Handler {
    debug_handler: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delegates `Debug` formatting to `debug_handler`, if set.
    pub fn debug_handler(mut self, debug_handler: Option<Box<dyn EyreHandler>>) -> Self {
        self.debug_handler = debug_handler;
        self
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Display;
        dedup_chain(error).into_iter().format("; ").fmt(f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(debug_handler) = &self.debug_handler {
            return debug_handler.debug(error, f);
        }
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        let errors = dedup_chain(error);
        let Some((error, sources)) = errors.split_first() else {
            return Ok(());
        };
        write!(f, "{error}")?;

        match sources {
            [] => {}
            [source] => write!(f, "\n\nContext:\n- {source}")?,
            sources => {
                write!(f, "\n\nContext:")?;
                for (n, source) in sources.iter().enumerate() {
                    write!(f, "\n- Error #{n}: {source}")?;
                }
            }
        }
        Ok(())
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(debug_handler) = &mut self.debug_handler {
            debug_handler.track_caller(location);
        }
    }
}

/// Installs oru's [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// Errors print as a single deduplicated chain unless `ORU_DEBUG` is set, in which case the
/// full `color-eyre` report is printed. Panics always use the `color-eyre` hook.
pub fn install() {
    let panic_section = "This is a bug. Consider reporting it with the command you ran.";
    let (panic_hook, debug_hook) =
        color_eyre::config::HookBuilder::default().panic_section(panic_section).into_hooks();
    panic_hook.install();

    let debug_hook = debug_hook.into_eyre_hook();
    let debug = std::env::var_os(DEBUG_ENV).is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler::new().debug_handler(debug.then(|| debug_hook(e))))
    })) {
        debug!("failed to install eyre error hook: {err}");
    }
}
