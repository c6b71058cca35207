use std::fmt;

/// Error types for polynomial evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// a monomial divisor with zero coefficient, explicit `/0` included
    DivisionByZero,
    /// divisor reduced to more than one term (polynomial long division)
    UnsupportedDivision { divisor: String },
    /// lexical or syntactic failure: stray operator, unbalanced bracket, bad coefficient...
    MalformedTerm(String),
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgebraError::DivisionByZero => write!(f, "Division by zero"),
            AlgebraError::UnsupportedDivision { divisor } => write!(
                f,
                "Division by multi-term polynomial ({}) is not implemented",
                divisor
            ),
            AlgebraError::MalformedTerm(msg) => write!(f, "Malformed term: {}", msg),
        }
    }
}

impl std::error::Error for AlgebraError {}

impl AlgebraError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AlgebraError::MalformedTerm(msg.into())
    }
}
