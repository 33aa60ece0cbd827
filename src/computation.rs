use std::fmt::Arguments;
use std::io::Write;

///
/// Trait for objects that observe a potentially long-running computation.
///
/// Algorithms like [`crate::algorithms::buchberger::find_basis()`] report their
/// progress through the controller, usually as a stream of single-character
/// symbols that are documented with the corresponding algorithm. The controller
/// decides whether and where to show them.
///
pub trait ComputationController: Clone {

    fn log(&self, args: Arguments);

    ///
    /// Runs the given computation, with a description that is logged before it starts.
    ///
    fn run_computation<F, T>(self, description: Arguments, computation: F) -> T
        where F: FnOnce(Self) -> T
    {
        self.log(format_args!("{}: ", description));
        let result = computation(self.clone());
        self.log(format_args!(" done\n"));
        return result;
    }
}

///
/// Forwards the formatted arguments to [`ComputationController::log()`].
///
#[macro_export]
macro_rules! log_progress {
    ($controller:expr, $($args:tt)*) => {
        ($controller).log(std::format_args!($($args)*))
    };
}

///
/// A [`ComputationController`] that prints all progress to stdout.
///
/// We use `print!` instead of writing to [`std::io::Stdout`] directly, since
/// this works with output capture in tests.
///
#[derive(Clone, Copy, Debug)]
pub struct LogProgress;

impl ComputationController for LogProgress {

    fn log(&self, args: Arguments) {
        print!("{}", args);
        _ = std::io::stdout().flush();
    }
}

///
/// A [`ComputationController`] that ignores all progress.
///
#[derive(Clone, Copy, Debug)]
pub struct DontObserve;

impl ComputationController for DontObserve {

    fn log(&self, _args: Arguments) {}

    fn run_computation<F, T>(self, _description: Arguments, computation: F) -> T
        where F: FnOnce(Self) -> T
    {
        computation(self)
    }
}

///
/// A [`ComputationController`] that emits every progress message as a
/// [`tracing`] event of level `DEBUG`, so that it ends up wherever the
/// installed subscriber sends its output.
///
#[derive(Clone, Copy, Debug)]
pub struct TraceProgress;

impl ComputationController for TraceProgress {

    fn log(&self, args: Arguments) {
        tracing::debug!(target: "polyideal::progress", "{}", args);
    }

    fn run_computation<F, T>(self, description: Arguments, computation: F) -> T
        where F: FnOnce(Self) -> T
    {
        let span = tracing::debug_span!("computation", description = %description);
        let _guard = span.enter();
        computation(self)
    }
}

#[cfg(test)]
pub const TEST_LOG_PROGRESS: LogProgress = LogProgress;

#[test]
fn test_run_computation() {
    assert_eq!(3, DontObserve.run_computation(format_args!("trivial"), |_| 3));
    assert_eq!(4, TEST_LOG_PROGRESS.run_computation(format_args!("trivial"), |controller| {
        log_progress!(controller, "{}", "-");
        4
    }));
    assert_eq!(5, TraceProgress.run_computation(format_args!("traced"), |controller| {
        log_progress!(controller, "(b={})", 2);
        5
    }));
}
