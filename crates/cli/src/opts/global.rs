use super::ShellOptions;
use clap::{Parser, ValueHint};
use eyre::Result;
use oru_config::Config;
use std::path::PathBuf;

/// Options shared by every command.
#[derive(Clone, Debug, Default, Parser)]
pub struct GlobalOpts {
    #[command(flatten)]
    pub shell: ShellOptions,

    /// The project root holding `oru.toml`.
    ///
    /// Defaults to the current directory.
    #[arg(long, global = true, value_hint = ValueHint::DirPath, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl GlobalOpts {
    /// Returns the project root.
    pub fn root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Applies the shell options and loads `.env` files.
    pub fn init(&self) -> Result<()> {
        self.shell.apply();
        crate::utils::load_dotenv(&self.root()?);
        Ok(())
    }

    /// Loads the config for the project root.
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_with_root(self.root()?)?;
        trace!(?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_config_from_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("oru.toml"), "network = \"Optimism\"\n").unwrap();
        let opts = GlobalOpts::parse_from(["oru", "--root", dir.path().to_str().unwrap()]);
        assert_eq!(opts.root().unwrap(), dir.path());
        let config = opts.load_config().unwrap();
        assert_eq!(config.network, "Optimism");
        assert_eq!(config.store_path(), dir.path().join(".oru/contracts"));
    }

    #[test]
    fn parses_shell_options() {
        let opts = GlobalOpts::parse_from(["oru", "-q", "--color", "never"]);
        assert!(opts.shell.quiet);
        assert_eq!(opts.shell.color, crate::opts::ColorChoice::Never);
        assert!(opts.root.is_none());
    }
}
