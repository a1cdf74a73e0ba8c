//! Tournament logging gated on `TournamentConfig::verbosity`.
//!
//! Messages go to stderr. Format arguments are only evaluated when the level
//! is enabled, so logging at verbosity 0 costs a single comparison.
//!
//! | level | macro          | tournament events                                       |
//! |-------|----------------|---------------------------------------------------------|
//! | 0     |                | nothing                                                 |
//! | 1     | `log_summary!` | tournament built, fixture count after scheduling, ranking leader |
//! | 2     | `log_results!` | each `record_result` call and its mirrored single-leg entry |
//! | 3     | `log_debug!`   | each fixture emitted or skipped, home/away split per team when ranking |

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_RESULTS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_results {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_RESULTS {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
