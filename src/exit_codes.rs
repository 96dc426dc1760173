//! Exit code constants for the filesift CLI.
//!
//! - 0: Success (every file accepted)
//! - 1: User error (bad args, unreadable or unparseable input)
//! - 2: Validation failure (one or more files rejected)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing batch, or invalid input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: at least one file in the batch was rejected.
pub const VALIDATION_FAILURE: i32 = 2;
