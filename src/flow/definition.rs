use super::value::OptionValue;
use crate::error::{FlowLoadError, FlowValidationError};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fs;

/// The complete, canonical definition of a guided flow, ready for compilation.
/// This is the target structure for any custom wizard format conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub steps: Vec<FlowStep>,
}

/// One page of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStep {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub step_type: StepType,
    #[serde(default)]
    pub options: Vec<FlowOption>,
    /// Upper bound on simultaneous answers; enforced by the collecting UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,
    #[serde(default)]
    pub required: bool,
    /// Explicit formatting role. When absent the role is inferred from `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<StepRole>,
}

/// One selectable answer within a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub value: OptionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepType {
    SingleSelect,
    MultiSelect,
    Slider,
    PriceSelector,
}

impl StepType {
    /// Whether answers to this step are recorded as a list.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, StepType::MultiSelect)
    }
}

/// Which phrasing and normalization rule a step's answers go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepRole {
    Category,
    Subcategory,
    Effects,
    Potency,
    Dosage,
    Price,
    Generic,
}

impl StepRole {
    /// Infers the role from a conventional step id. Unknown ids are `Generic`.
    pub fn from_step_id(id: &str) -> Self {
        match id {
            "category" | "product-type" => StepRole::Category,
            "subcategory" => StepRole::Subcategory,
            "effects" | "feelings" => StepRole::Effects,
            "thc-percentage" | "potency" => StepRole::Potency,
            "dosage-per-piece" => StepRole::Dosage,
            "price" | "price-range" => StepRole::Price,
            _ => StepRole::Generic,
        }
    }
}

impl FlowStep {
    pub fn new(id: impl Into<String>, step_type: StepType, options: Vec<FlowOption>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            subtitle: None,
            step_type,
            options,
            max_selections: None,
            required: false,
            role: None,
        }
    }

    pub fn with_role(mut self, role: StepRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_max_selections(mut self, max: u32) -> Self {
        self.max_selections = Some(max);
        self
    }

    /// The configured role, falling back to inference from the step id.
    pub fn role(&self) -> StepRole {
        self.role.unwrap_or_else(|| StepRole::from_step_id(&self.id))
    }
}

impl FlowOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl FlowDefinition {
    pub fn new(steps: Vec<FlowStep>) -> Self {
        Self { steps }
    }

    /// Parses a flow from JSON. Accepts either `{"steps": [...]}` or a bare array of steps.
    pub fn from_json(json: &str) -> Result<Self, FlowLoadError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawFlow {
            Wrapped { steps: Vec<FlowStep> },
            Bare(Vec<FlowStep>),
        }

        let raw: RawFlow =
            serde_json::from_str(json).map_err(|e| FlowLoadError::JsonParseError(e.to_string()))?;
        let steps = match raw {
            RawFlow::Wrapped { steps } | RawFlow::Bare(steps) => steps,
        };
        Ok(Self { steps })
    }

    /// Load a flow definition from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FlowLoadError> {
        let content = fs::read_to_string(path).map_err(|e| FlowLoadError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn step(&self, id: &str) -> Option<&FlowStep> {
        self.steps.iter().rev().find(|s| s.id == id)
    }

    /// Checks the authoring invariants a flow should satisfy.
    ///
    /// Reports the first problem found. Compilation does not depend on this passing.
    pub fn validate(&self) -> Result<(), FlowValidationError> {
        let mut seen_ids = AHashSet::new();
        for step in &self.steps {
            if !seen_ids.insert(step.id.as_str()) {
                return Err(FlowValidationError::DuplicateStepId(step.id.clone()));
            }

            match step.max_selections {
                Some(0) => {
                    return Err(FlowValidationError::InvalidMaxSelections {
                        step_id: step.id.clone(),
                        message: "must be at least 1".to_string(),
                    });
                }
                Some(_) if !step.step_type.is_multi_valued() => {
                    return Err(FlowValidationError::InvalidMaxSelections {
                        step_id: step.id.clone(),
                        message: "only multi-select steps accept several answers".to_string(),
                    });
                }
                _ => {}
            }

            // Values must stay distinct under the equality used for matching.
            for (i, option) in step.options.iter().enumerate() {
                if let Some(first) = step.options[..i].iter().find(|o| o.value == option.value) {
                    return Err(FlowValidationError::DuplicateOptionValue {
                        step_id: step.id.clone(),
                        option_id: option.id.clone(),
                        first_option_id: first.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
