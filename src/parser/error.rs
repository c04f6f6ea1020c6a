use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("cannot read zone file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record at line {line}: {kind}")]
    Syntax { line: usize, kind: SyntaxErrorKind },
}

impl ParserError {
    pub(crate) fn syntax(line: usize, kind: SyntaxErrorKind) -> Self {
        ParserError::Syntax { line, kind }
    }

    /// Line the offending logical record started on, if this is a syntax error.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParserError::Syntax { line, .. } => Some(*line),
            ParserError::Io(_) => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("expected at least an owner name and a type")]
    TooFewFields,

    #[error("missing record type")]
    MissingType,

    #[error("unterminated multi-line record")]
    UnterminatedRecord,

    #[error("malformed directive: {0}")]
    MalformedDirective(String),

    #[error("unknown directive: {0}")]
    UnknownDirective(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TtlError {
    #[error("empty TTL")]
    Empty,

    #[error("invalid TTL: {0}")]
    Invalid(String),

    #[error("TTL does not fit in 32 bits: {0}")]
    Overflow(String),
}
