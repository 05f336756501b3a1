//! Config extraction errors.

use figment::providers::{Format, Toml};
use std::{collections::HashSet, error::Error, fmt};

/// The header printed above config extraction errors.
pub const FAILED_TO_EXTRACT_CONFIG: &str = "failed to extract oru config:";

/// A failed attempt to extract [`Config`](crate::Config) from a figment.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    pub(crate) error: figment::Error,
}

impl ExtractConfigError {
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// Returns the individual errors, labelled by the layer they came from and without
    /// duplicates.
    pub fn errors(&self) -> Vec<OruConfigError> {
        let mut seen = HashSet::with_capacity(self.error.count());
        self.error
            .clone()
            .into_iter()
            .map(|err| {
                let from_toml = err
                    .metadata
                    .as_ref()
                    .is_some_and(|meta| meta.name.contains(Toml::NAME));
                if from_toml { OruConfigError::Toml(err) } else { OruConfigError::Other(err) }
            })
            .filter(|err| seen.insert(err.to_string()))
            .collect()
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG}")?;
        for err in self.errors() {
            writeln!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}

/// A single config error.
#[derive(Clone, Debug, PartialEq)]
pub enum OruConfigError {
    /// Raised while reading `oru.toml`.
    Toml(figment::Error),
    /// Raised by any other layer, usually the environment.
    Other(figment::Error),
}

impl fmt::Display for OruConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, err) = match self {
            Self::Toml(err) => ("oru.toml error", err),
            Self::Other(err) => ("oru config error", err),
        };
        write!(f, "{label}: {err}")?;
        if !err.path.is_empty() {
            write!(f, " for setting `{}`", err.path.join("."))?;
        }
        Ok(())
    }
}

impl Error for OruConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Toml(err) | Self::Other(err) => Error::source(err),
        }
    }
}
