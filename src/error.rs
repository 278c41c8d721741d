use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum EolError {
    #[error("{0} parameter is required")]
    MissingArgument(String),

    #[error("endoflife.date request failed: {0}")]
    EndoflifeHttp(String),

    #[error("endoflife.date returned status {status}: {message}")]
    EndoflifeStatus { status: u16, message: String },

    #[error("failed to parse endoflife.date response: {0}")]
    Decode(String),

    #[error("unknown tool: {0}")]
    UnsupportedTool(String),
}
