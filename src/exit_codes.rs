/// Exit codes for the lavendeux-syntax binary
///
/// Success - The requested HTML or listing was written
pub const SUCCESS: i32 = 0;

/// Tool error - Configuration error, unreadable input or invalid sample document
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
