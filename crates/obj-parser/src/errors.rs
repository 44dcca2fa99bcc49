/// Errors while reading OBJ text.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to read OBJ source: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A recognized directive that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind} (`{content}`)")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// The raw line, without its line terminator.
    pub content: String,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("`{directive}` needs {expected} values, found {found}")]
    MissingValues {
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("`{directive}` value {field} is not a number: `{token}`")]
    InvalidNumber {
        directive: &'static str,
        field: usize,
        token: String,
    },

    #[error("corner {corner} has an invalid {field} index: `{token}`")]
    InvalidIndex {
        corner: usize,
        field: &'static str,
        token: String,
    },

    #[error("corner {corner} has more than three index fields: `{token}`")]
    TooManyIndexFields { corner: usize, token: String },

    #[error("face has no corners")]
    EmptyFace,
}
