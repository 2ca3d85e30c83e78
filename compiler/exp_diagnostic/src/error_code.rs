use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0002,
    /// Integer literal out of range
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,

    // Runtime Errors (E6xxx)
    /// Variable declared twice in one scope
    E6001,
    /// Function declared twice in one scope
    E6002,
    /// Undefined variable
    E6003,
    /// Undefined function
    E6004,
    /// Argument count mismatch
    E6005,
    /// Division by zero
    E6006,
    /// Modulo by zero
    E6007,
    /// Call depth limit exceeded
    E6008,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 14] = [
        Self::E0002,
        Self::E0003,
        Self::E1001,
        Self::E1002,
        Self::E1003,
        Self::E1004,
        Self::E6001,
        Self::E6002,
        Self::E6003,
        Self::E6004,
        Self::E6005,
        Self::E6006,
        Self::E6007,
        Self::E6008,
    ];

    /// Get the string representation (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
        }
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "integer literal out of range",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E6001 => "variable declared twice in one scope",
            ErrorCode::E6002 => "function declared twice in one scope",
            ErrorCode::E6003 => "undefined variable",
            ErrorCode::E6004 => "undefined function",
            ErrorCode::E6005 => "wrong number of arguments",
            ErrorCode::E6006 => "division by zero",
            ErrorCode::E6007 => "modulo by zero",
            ErrorCode::E6008 => "call depth limit exceeded",
        }
    }

    /// Parse a code from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == s)
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
