use std::fmt;

/// Error codes for resolver diagnostics.
///
/// Format: E#### where the first digit indicates the area:
/// - E4xxx: Static resolution errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Static resolution errors (E4xxx)
    /// Map access with a key the map does not contain
    E4001,
    /// Array index out of bounds
    E4002,
    /// Property or element access on an unsupported value
    E4003,
    /// Call target is not a callable declaration
    E4004,
    /// Function body is not a single return statement
    E4005,
    /// Spread operand of the wrong container kind
    E4006,
    /// Container or reference operand in a literal operator position
    E4007,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E4001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E4004 => "E4004",
            ErrorCode::E4005 => "E4005",
            ErrorCode::E4006 => "E4006",
            ErrorCode::E4007 => "E4007",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E4001.to_string(), "E4001");
        assert_eq!(ErrorCode::E4007.as_str(), "E4007");
    }
}
