use crate::flow::{FlowDefinition, FlowStep, Selections, StepRole};
use crate::narrative::QueryFormatter;
use crate::output::TransformedMetadata;
use ahash::{AHashMap, AHashSet};
use tracing::{debug, trace};

mod matching;
pub mod ranges;
mod rules;

use matching::match_selection;
use ranges::{DEFAULT_CONCENTRATED_CATEGORIES, PotencyScale, expand_tiers};
use rules::Draft;

/// Knobs that change how steps are interpreted, shared by every compilation.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    role_mapping: AHashMap<String, StepRole>,
    concentrated_categories: AHashSet<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            role_mapping: AHashMap::new(),
            concentrated_categories: DEFAULT_CONCENTRATED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl CompileOptions {
    /// Role for a step: explicit mapping, then the step's own `role`, then its id.
    pub fn role_of(&self, step: &FlowStep) -> StepRole {
        self.role_mapping
            .get(&step.id)
            .copied()
            .unwrap_or_else(|| step.role())
    }

    pub fn is_concentrated(&self, category: &str) -> bool {
        self.concentrated_categories.contains(category)
    }

    /// THC scale for a category filter value; no category means the standard scale.
    pub fn potency_scale(&self, category: Option<&str>) -> PotencyScale {
        match category {
            Some(c) if self.is_concentrated(c) => PotencyScale::Concentrated,
            _ => PotencyScale::Standard,
        }
    }
}

/// Compiles wizard selections against a fixed flow.
///
/// A compiler only reads its configuration, so one instance can serve any number of
/// concurrent compilations.
#[derive(Debug, Clone)]
pub struct SelectionCompiler {
    flow: FlowDefinition,
    options: CompileOptions,
}

pub struct SelectionCompilerBuilder {
    flow: FlowDefinition,
    options: CompileOptions,
}

impl SelectionCompilerBuilder {
    pub fn new(flow: FlowDefinition) -> Self {
        Self {
            flow,
            options: CompileOptions::default(),
        }
    }

    /// Forces a role for a step id, e.g. to treat a `product-kind` step as the category.
    pub fn with_role_mapping(mut self, step_id: &str, role: StepRole) -> Self {
        self.options.role_mapping.insert(step_id.to_string(), role);
        self
    }

    /// Adds a category whose potency answers use the concentrated THC scale.
    pub fn with_concentrated_category(mut self, category: &str) -> Self {
        self.options
            .concentrated_categories
            .insert(category.to_string());
        self
    }

    pub fn build(self) -> SelectionCompiler {
        SelectionCompiler {
            flow: self.flow,
            options: self.options,
        }
    }
}

impl SelectionCompiler {
    pub fn new(flow: FlowDefinition) -> Self {
        Self::builder(flow).build()
    }

    pub fn builder(flow: FlowDefinition) -> SelectionCompilerBuilder {
        SelectionCompilerBuilder::new(flow)
    }

    pub fn flow(&self) -> &FlowDefinition {
        &self.flow
    }

    /// Compiles a selection snapshot into metadata, filters and a query.
    pub fn compile(&self, selections: &Selections) -> TransformedMetadata {
        compile_with(selections, &self.flow.steps, &self.options)
    }

    /// Compiles only the answers for the first `step_index + 1` steps, as a wizard
    /// would show while the user is still on that step.
    pub fn preview(&self, selections: &Selections, step_index: usize) -> TransformedMetadata {
        let visible: AHashSet<&str> = self
            .flow
            .steps
            .iter()
            .take(step_index.saturating_add(1))
            .map(|s| s.id.as_str())
            .collect();
        let partial: Selections = selections
            .iter()
            .filter(|(id, _)| visible.contains(id.as_str()))
            .map(|(id, selection)| (id.clone(), selection.clone()))
            .collect();
        self.compile(&partial)
    }
}

/// Compiles a selection snapshot against step definitions with the default options.
pub fn compile(selections: &Selections, steps: &[FlowStep]) -> TransformedMetadata {
    compile_with(selections, steps, &CompileOptions::default())
}

/// Compiles a selection snapshot against step definitions.
///
/// Never fails: answers for unknown steps, answers matching no option and unusable tier
/// values are left out, and the rest of the snapshot still compiles.
pub fn compile_with(
    selections: &Selections,
    steps: &[FlowStep],
    options: &CompileOptions,
) -> TransformedMetadata {
    // Later definitions of the same id win.
    let step_map: AHashMap<&str, &FlowStep> = steps.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut draft = Draft::default();
    for (step_id, selection) in selections.iter() {
        let Some(step) = step_map.get(step_id.as_str()) else {
            debug!(step = %step_id, "selection for unknown step; skipped");
            continue;
        };
        let Some(matched) = match_selection(step, selection) else {
            debug!(step = %step_id, "selection matches no option; skipped");
            continue;
        };
        draft.apply(step, options.role_of(step), matched);
    }

    let Draft {
        metadata,
        filters,
        tiers,
        narrative,
    } = draft;
    let filters = expand_tiers(filters, &tiers, options);
    let query = QueryFormatter::format(&narrative);

    trace!(
        steps = metadata.len(),
        filters = filters.len(),
        "compiled selections"
    );

    TransformedMetadata {
        metadata,
        query,
        filters,
    }
}
