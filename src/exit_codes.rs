//! Exit code constants for the similardiff CLI.
//!
//! - 0: Success (including "differences found")
//! - 1: User error (bad arguments, malformed inline rules)
//! - 2: Malformed comparison output
//! - 3: Comparison program failure
//! - 4: I/O failure while writing output

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or malformed inline rules.
pub const USER_ERROR: i32 = 1;

/// The comparison output violated the hunk grammar.
pub const PARSE_FAILURE: i32 = 2;

/// The comparison program could not run or reported trouble.
pub const DIFF_TOOL_FAILURE: i32 = 3;

/// Writing the rendered output failed.
pub const IO_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            PARSE_FAILURE,
            DIFF_TOOL_FAILURE,
            IO_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
