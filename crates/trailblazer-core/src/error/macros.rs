//! Error macros for trailblazer

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::TrailblazerError::invalid_value(
            $context, $value,
        ))
    };
}

/// Macro for malformed world input
#[macro_export]
macro_rules! bail_world {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::TrailblazerError::invalid_world(
            $line,
            format!($($arg)*),
        ))
    };
}
