/// A macro to generate a new integration test case.
///
/// The first argument is the name of the test, the second a closure receiving a fresh
/// [`TestProject`](crate::TestProject) and a [`TestCommand`](crate::TestCommand) that runs the
/// `oru` binary inside the project's root.
///
/// Must be invoked from an integration test of the crate that builds the `oru` binary.
///
/// # Example
///
/// ```no_run
/// use oru_test_utils::*;
/// orutest!(prints_networks, |_prj, cmd| {
///     cmd.arg("networks").assert_success();
/// });
/// ```
#[macro_export]
macro_rules! orutest {
    ($(#[$attr:meta])* $test:ident, |$prj:ident, $cmd:ident| $e:expr) => {
        #[test]
        $(#[$attr])*
        fn $test() {
            let (mut $prj, mut $cmd) =
                $crate::util::setup_oru(stringify!($test), env!("CARGO_BIN_EXE_oru"));
            $e
        }
    };
}
