//! Convenience macros for error handling and propagation

/// Equivalent to `anyhow::bail!` but for `ChartError`
///
/// This macro allows early returns with custom error messages.
///
/// # Examples
///
/// ```rust
/// use showtrend_common::bail;
/// use showtrend_common::Result;
///
/// fn check_rating(value: f64) -> Result<()> {
///     if !(0.0..=10.0).contains(&value) {
///         bail!("Rating out of range: {}", value);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::ChartError::new($msg))
    };
    ($err:expr $(,)?) => {
        return Err($crate::ChartError::new($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::ChartError::new(format!($fmt, $($arg)*)))
    };
}

/// Equivalent to `anyhow::ensure!` but for `ChartError`
///
/// This macro checks a condition and returns an error if it's false.
///
/// # Examples
///
/// ```rust
/// use showtrend_common::ensure;
/// use showtrend_common::Result;
///
/// fn validate_season(season: u32) -> Result<()> {
///     ensure!(season > 0, "Season numbers start at 1, got: {}", season);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::ChartError::new($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($crate::ChartError::new($err));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::ChartError::new(format!($fmt, $($arg)*)));
        }
    };
}
