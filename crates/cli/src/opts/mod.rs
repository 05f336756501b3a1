mod global;
mod shell;

pub use global::GlobalOpts;
pub use shell::{ColorChoice, ShellOptions};
