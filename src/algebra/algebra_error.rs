use std::fmt;

/// Error types for the algebra engine
#[derive(Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// malformed literal/exponent text, f.i. "3^2" or "x^y"
    InvalidVariableFormat(String),
    /// the same literal appears twice in one monomial
    DuplicateVariable(char),
    /// adding or subtracting monomials with different variable sets
    IncompatibleTerms { left: String, right: String },
    DivisionByZero,
    /// textual input that does not match the grammar
    MalformedExpression(String),
    /// no closed form is implemented for this grade
    UnsupportedDegree(f64),
    /// content the closed-form solver or the LCM cannot handle
    UnsupportedEquation(String),
    /// unreadable settings file, bad TOML or a bad settings value
    InvalidSettings(String),
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgebraError::InvalidVariableFormat(input) => write!(
                f,
                "Variable bad initialized: '{}'. It should be var^exponent, f.i.: x^5",
                input
            ),
            AlgebraError::DuplicateVariable(literal) => write!(
                f,
                "A monomial should not contain repeated variables ('{}'), gather all of it with the certain exponent",
                literal
            ),
            AlgebraError::IncompatibleTerms { left, right } => {
                write!(f, "{} and {} have different base variables", left, right)
            }
            AlgebraError::DivisionByZero => write!(f, "Cannot divide by zero"),
            AlgebraError::MalformedExpression(input) => {
                write!(f, "Malformed expression: '{}'", input)
            }
            AlgebraError::UnsupportedDegree(grade) => write!(
                f,
                "No closed-form solution is implemented for grade {}",
                grade
            ),
            AlgebraError::UnsupportedEquation(msg) => write!(f, "Unsupported equation: {}", msg),
            AlgebraError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for AlgebraError {}

pub type Result<T> = std::result::Result<T, AlgebraError>;
