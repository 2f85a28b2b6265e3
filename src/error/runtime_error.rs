#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant aborts the running program; there is no recovery construct in
/// the language itself.
pub enum RuntimeError {
    /// An assignment, compound assignment, increment or decrement was applied
    /// to something that is not a variable.
    ExpectedVariable {
        /// The operator that needed an assignable operand.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to read a variable that no active scope defines.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted integer division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A node or operator reached a dispatch point that cannot handle it.
    MalformedNode {
        /// What was found where.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Popping would have removed the program-global scope.
    ScopeUnderflow,
    /// Writing a printed value to the output sink failed.
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line of the `print` statement.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedVariable { operator, line } => write!(f,
                                                                "Error on line {line}: Expected a variable as the target of '{operator}'."),
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::MalformedNode { details, line } => {
                write!(f, "Error on line {line}: Malformed node: {details}.")
            },
            Self::ScopeUnderflow => {
                write!(f, "Internal error: attempted to pop the global scope.")
            },
            Self::Output { source, line } => {
                write!(f, "Error on line {line}: Failed to write output: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}
