//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap argument errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Default number of characters shown in entry previews.
pub const DEFAULT_PREVIEW_CHARS: usize = 80;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "DIARY_LOG";
