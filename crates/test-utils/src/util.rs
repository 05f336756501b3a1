use oru_config::Config;
use snapbox::cmd::OutputAssert;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// Environment variables cleared before every run so the host cannot leak into tests.
const CLEARED_ENV: &[&str] = &[
    "RUST_LOG",
    "ORU_DEBUG",
    "ORU_LIBRARY",
    "ORU_STORE_DIR",
    "ORU_NETWORK",
    "ORU_NAME",
    "ORU_LINE_NUMBERS",
];

/// Creates a new project named `name` and a command running the binary at `bin` inside it.
pub fn setup_oru(name: &str, bin: impl Into<PathBuf>) -> (TestProject, TestCommand) {
    crate::init_tracing();
    let project = TestProject::new(name);
    let cmd = project.command(bin);
    (project, cmd)
}

/// A temporary project directory.
#[derive(Debug)]
pub struct TestProject {
    root: TempDir,
}

impl TestProject {
    /// Creates an empty project in a new temporary directory.
    ///
    /// # Panics
    ///
    /// If the directory cannot be created.
    pub fn new(name: &str) -> Self {
        let root = tempfile::Builder::new()
            .prefix(&format!("oru-{name}-"))
            .tempdir()
            .expect("failed to create project dir");
        trace!(root = ?root.path(), "created test project");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Writes `contents` to `path`, relative to the root, creating parent directories.
    pub fn create_file(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Writes `oru.toml`.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        self.create_file(Config::FILE_NAME, toml)
    }

    /// Returns the config the binary will load for this project.
    pub fn config(&self) -> Config {
        Config::load_with_root(self.root()).expect("failed to load config")
    }

    /// Returns the record files in the store, sorted by name.
    pub fn stored_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.config().store_path()) else { return Vec::new() };
        let mut files: Vec<_> = entries.map(|entry| entry.unwrap().path()).collect();
        files.sort();
        files
    }

    /// Returns a command running the binary at `bin` in this project.
    pub fn command(&self, bin: impl Into<PathBuf>) -> TestCommand {
        TestCommand {
            bin: bin.into(),
            root: self.root().to_path_buf(),
            args: Vec::new(),
            stdin: None,
            env: Vec::new(),
        }
    }
}

/// A reusable invocation of the `oru` binary.
#[derive(Clone, Debug)]
pub struct TestCommand {
    bin: PathBuf,
    root: PathBuf,
    args: Vec<OsString>,
    stdin: Option<Vec<u8>>,
    env: Vec<(OsString, OsString)>,
}

impl TestCommand {
    /// Clears the arguments, stdin and environment set so far.
    pub fn fuse(&mut self) -> &mut Self {
        self.args.clear();
        self.stdin = None;
        self.env.clear();
        self
    }

    pub fn arg(&mut self, arg: impl Into<OsString>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Feeds `input` to the command's stdin.
    pub fn stdin(&mut self, input: impl Into<Vec<u8>>) -> &mut Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn env(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Runs the command and returns the output for assertions.
    #[track_caller]
    pub fn assert(&mut self) -> OutputAssert {
        let mut cmd = snapbox::cmd::Command::new(&self.bin)
            .current_dir(&self.root)
            .args(&self.args)
            .env("NO_COLOR", "1")
            .with_assert(test_assert());
        for key in CLEARED_ENV {
            cmd = cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd = cmd.env(key, value);
        }
        if let Some(stdin) = &self.stdin {
            cmd = cmd.stdin(stdin.clone());
        }
        debug!(args = ?self.args, "running oru");
        cmd.assert()
    }

    /// Runs the command and asserts it succeeded.
    #[track_caller]
    pub fn assert_success(&mut self) -> OutputAssert {
        self.assert().success()
    }

    /// Runs the command and asserts it failed.
    #[track_caller]
    pub fn assert_failure(&mut self) -> OutputAssert {
        self.assert().failure()
    }

    /// Runs the command, asserts it succeeded and returns its stdout.
    #[track_caller]
    pub fn stdout_lossy(&mut self) -> String {
        let assert = self.assert_success();
        String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
    }
}

fn test_assert() -> snapbox::Assert {
    snapbox::Assert::new().action_env(snapbox::assert::DEFAULT_ACTION_ENV)
}
