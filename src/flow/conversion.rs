use super::definition::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for custom wizard models that can be converted into an annai `FlowDefinition`.
///
/// Front-ends rarely store steps in exactly the shape the compiler reads. Implementing
/// this trait on your own configuration structs keeps that translation in one place.
///
/// # Example
///
/// ```rust,no_run
/// use annai::prelude::*;
/// use annai::error::FlowConversionError;
///
/// // 1. Your own question format.
/// struct Question { key: String, answers: Vec<(String, String)> }
/// struct Questionnaire { questions: Vec<Question> }
///
/// // 2. Translate it into annai steps.
/// impl IntoFlow for Questionnaire {
///     fn into_flow(self) -> std::result::Result<FlowDefinition, FlowConversionError> {
///         let mut steps = Vec::new();
///         for question in self.questions {
///             if question.answers.is_empty() {
///                 return Err(FlowConversionError::ValidationError(format!(
///                     "question '{}' has no answers",
///                     question.key
///                 )));
///             }
///             let options = question
///                 .answers
///                 .into_iter()
///                 .map(|(value, label)| FlowOption::new(value.clone(), label, value.as_str()))
///                 .collect();
///             steps.push(FlowStep::new(question.key, StepType::SingleSelect, options));
///         }
///         Ok(FlowDefinition::new(steps))
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a compilable guided flow.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
