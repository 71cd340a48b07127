//! Error macros for floodfill

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::FloodError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a malformed input line
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $reason:expr) => {
        return Err($crate::error::FloodError::malformed($line, $reason))
    };
}
