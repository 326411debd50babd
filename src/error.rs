use thiserror::Error;

/// Errors that can occur while loading flow definitions or selection snapshots.
#[derive(Error, Debug, Clone)]
pub enum FlowLoadError {
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to parse selections JSON: {0}")]
    SelectionsParseError(String),
}

/// Authoring mistakes in a flow definition, reported by `FlowDefinition::validate`.
///
/// Compilation never raises these; a malformed flow simply contributes less.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowValidationError {
    #[error("Step id '{0}' is defined more than once")]
    DuplicateStepId(String),

    #[error(
        "Option '{option_id}' in step '{step_id}' repeats the value of option '{first_option_id}'"
    )]
    DuplicateOptionValue {
        step_id: String,
        option_id: String,
        first_option_id: String,
    },

    #[error("Step '{step_id}' has an invalid maxSelections: {message}")]
    InvalidMaxSelections { step_id: String, message: String },
}

/// Errors that can occur when converting a custom wizard format into an annai `FlowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid custom flow data: {0}")]
    ValidationError(String),
}
