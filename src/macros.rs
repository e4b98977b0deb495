/// Builds a `Vec<Argument>` from expressions, converting each with
/// [`Argument::from`](crate::Argument).
///
/// ```rust
/// use ctlog::{ctlog_args, Argument};
///
/// let args = ctlog_args![true, 'x', -5, 7u32, "done"];
/// assert_eq!(args[2], Argument::Int(-5));
/// assert_eq!(args[3], Argument::UInt(7));
/// assert!(ctlog_args![].is_empty());
/// ```
#[macro_export]
macro_rules! ctlog_args {
    () => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Argument::from($arg)),+]
    };
}

/// Logs at a given severity, taking the line number from the call site.
///
/// The format string documents the call and is what the offline tool puts in
/// the dictionary. It is never sent.
///
/// ```rust
/// use ctlog::{ctlog, Logger, LoggerOptions, Severity, SharedBuffer};
///
/// let sink = SharedBuffer::new();
/// let logger = Logger::tokenized(LoggerOptions::new().with_enabled(true));
/// logger.set_sink(sink.clone());
///
/// ctlog!(logger, Severity::Warn, 2, "temp=%d", 81).unwrap();
/// assert!(sink.contents().starts_with(b"$TL000,W,2,"));
/// ```
#[macro_export]
macro_rules! ctlog {
    ($logger:expr, $severity:expr, $module:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $severity,
            $module,
            ::std::line!(),
            &[$($crate::Argument::from($arg)),*],
        )
    };
}

#[macro_export]
macro_rules! ctlog_error {
    ($logger:expr, $module:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ctlog!($logger, $crate::Severity::Error, $module, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! ctlog_info {
    ($logger:expr, $module:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ctlog!($logger, $crate::Severity::Info, $module, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! ctlog_debug {
    ($logger:expr, $module:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ctlog!($logger, $crate::Severity::Debug, $module, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! ctlog_warn {
    ($logger:expr, $module:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ctlog!($logger, $crate::Severity::Warn, $module, $fmt $(, $arg)*)
    };
}
