//! OpcErrorCode trait for the TypeScript boundary.

/// Every error enum implements this to provide a structured error code
/// string the view layer can switch on.
pub trait OpcErrorCode {
    /// Returns the error code string (e.g., "SNAPSHOT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
