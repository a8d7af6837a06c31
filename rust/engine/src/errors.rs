use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Card not found: {id}")]
    CardNotFound { id: String },
    #[error("Invalid expression: {text:?}")]
    InvalidExpression { text: String },
    #[error("Expression {text:?} evaluates to {value}, expected 10")]
    ExpressionNotTen { text: String, value: i64 },
    #[error("Card set is empty")]
    EmptyCardSet,
}
