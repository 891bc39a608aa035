//! Launch outcome value object

use serde::{Deserialize, Serialize};

/// Exit code used when the child was terminated without one (e.g. by a signal)
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// Terminal result of running the external engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOutcome {
    pub exit_code: i32,
    pub succeeded: bool,
}

impl LaunchOutcome {
    /// Map a child exit status: zero succeeds, anything else fails
    pub fn from_exit_code(code: Option<i32>) -> Self {
        let exit_code = code.unwrap_or(UNKNOWN_EXIT_CODE);
        Self {
            exit_code,
            succeeded: exit_code == 0,
        }
    }

    pub fn success() -> Self {
        Self::from_exit_code(Some(0))
    }
}
