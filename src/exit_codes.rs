//! Exit code constants for the taskprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable task file)
//! - 2: Template failure (a template could not be resolved)
//! - 3: Configuration failure (invalid config file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an input file that cannot be read or parsed.
pub const USER_ERROR: i32 = 1;

/// Template failure: a template key could not be resolved in any template set.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Configuration failure: the config file is malformed or fails validation.
pub const CONFIG_FAILURE: i32 = 3;
