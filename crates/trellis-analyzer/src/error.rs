use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzeError>;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Malformed source. Callers must treat this as "no graph change".
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },

    #[error("parser produced no tree")]
    ParseFailed,

    #[error("failed to load python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}
