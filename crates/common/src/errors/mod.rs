//! Errors shared by oru's crates.

mod fs;
pub use fs::FsPathError;

mod chain {
    use eyre::Chain;
    use std::error::Error;

    /// Anything that can walk its sources.
    pub trait Sources {
        fn sources(&self) -> Chain<'_>;
    }

    impl Sources for dyn Error + 'static {
        fn sources(&self) -> Chain<'_> {
            Chain::new(self)
        }
    }

    impl Sources for eyre::Report {
        fn sources(&self) -> Chain<'_> {
            self.chain()
        }
    }
}

/// Joins the deduplicated causes of `error` into a single line.
pub fn display_chain<E: chain::Sources + ?Sized>(error: &E) -> String {
    dedup_chain(error).join("; ")
}

/// Collects the causes of `error`, dropping any cause already contained in the message before
/// it.
///
/// Wrapping errors commonly repeat their source (`reading foo: not found; not found`); only the
/// outermost message is kept in that case.
pub fn dedup_chain<E: chain::Sources + ?Sized>(error: &E) -> Vec<String> {
    let mut causes: Vec<String> =
        error.sources().map(|cause| cause.to_string().trim().to_string()).collect();
    causes.dedup_by(|next, prev| prev.contains(next.as_str()));
    causes
}
