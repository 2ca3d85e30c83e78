//! Binary operators.
//!
//! The operator set is closed: every operator takes two integers and yields
//! one. Comparison and logical operators yield `1` for true and `0` for false.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Gt,
    Lt,
    GtEq,
    LtEq,
    Eq,
    NotEq,

    // Logical (eager, non-zero is true)
    Or,
    And,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 13] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Gt,
        Self::Lt,
        Self::GtEq,
        Self::LtEq,
        Self::Eq,
        Self::NotEq,
        Self::Or,
        Self::And,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Or => "||",
            Self::And => "&&",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 1: `*` `/` `%`
    /// - 2: `+` `-`
    /// - 3: `<` `>` `<=` `>=`
    /// - 4: `==` `!=`
    /// - 5: `&&`
    /// - 6: `||`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 1,
            Self::Add | Self::Sub => 2,
            Self::Gt | Self::Lt | Self::GtEq | Self::LtEq => 3,
            Self::Eq | Self::NotEq => 4,
            Self::And => 5,
            Self::Or => 6,
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_symbol())
    }
}
