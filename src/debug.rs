use std::fmt;
use std::io::Write;

use crate::config;

/// Print a diagnostic to stderr and terminate the process.
///
/// The exit status comes from `[diagnostics] exit_code`, always within 1..=255.
/// Output bypasses the log facade so it survives without a logger.
pub fn die(args: fmt::Arguments) -> ! {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();

    // Nothing left to report to if stderr itself is gone
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    let _ = handle.flush();

    std::process::exit(config::CONFIG.exit_code)
}

#[inline]
pub fn checks_enabled() -> bool {
    config::CONFIG.checks
}

/// Precondition check routed through [`die`].
///
/// Active in debug builds by default; `[checks] enabled` in the config
/// overrides that either way. A disabled check never evaluates `expr`.
#[macro_export]
macro_rules! check {
    ($expr:expr) => {
        if $crate::debug::checks_enabled() && !($expr) {
            $crate::debug::die(format_args!(
                "Assertion {} failed at {}: {}",
                stringify!($expr),
                file!(),
                line!(),
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn passing_check() {
        let value = 2.;
        check!(value != 0.);
        check!(value * 0.5 == 1.);
    }
}
