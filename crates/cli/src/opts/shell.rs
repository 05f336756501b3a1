use clap::{Parser, ValueEnum};

/// When to color output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal that supports it.
    #[default]
    Auto,
    Always,
    Never,
}

/// Global shell options.
#[derive(Clone, Copy, Debug, Default, Parser)]
pub struct ShellOptions {
    /// Do not print notes or warnings.
    #[arg(long, short, global = true, alias = "silent")]
    pub quiet: bool,

    /// Output coloring.
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,
}

impl ShellOptions {
    /// Applies the options to the process wide output state.
    pub fn apply(self) {
        crate::shell::set_quiet(self.quiet);
        match self.color {
            ColorChoice::Auto => crate::utils::enable_paint(),
            ColorChoice::Always => yansi::enable(),
            ColorChoice::Never => yansi::disable(),
        }
    }
}
