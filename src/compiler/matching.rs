use crate::flow::{FlowOption, FlowStep, Selection, StepType};

/// The result of matching one step's selection against its options.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Matched<'a> {
    /// Options whose values were selected, in the step's option order.
    Options(Vec<&'a FlowOption>),
    /// The raw selection of a price-selector step, which has no options to match.
    Raw(&'a Selection),
}

/// Matches a selection against a step's options.
///
/// Returns `None` when nothing matched, in which case the step contributes nothing.
/// Equality is structural: two price bands with equal bounds match even when they come
/// from different sources, and `null` only ever matches `null`.
pub(crate) fn match_selection<'a>(
    step: &'a FlowStep,
    selection: &'a Selection,
) -> Option<Matched<'a>> {
    if step.step_type == StepType::PriceSelector {
        return Some(Matched::Raw(selection));
    }

    let selected = selection.values();
    let matched: Vec<&FlowOption> = step
        .options
        .iter()
        .filter(|option| selected.contains(&option.value))
        .collect();

    if matched.is_empty() {
        None
    } else {
        Some(Matched::Options(matched))
    }
}
