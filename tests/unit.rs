//! Unit tests for the flow model, validation and error display.
mod common;
use annai::prelude::*;
use common::*;

#[test]
fn test_role_inference() {
    assert_eq!(StepRole::from_step_id("category"), StepRole::Category);
    assert_eq!(StepRole::from_step_id("product-type"), StepRole::Category);
    assert_eq!(StepRole::from_step_id("effects"), StepRole::Effects);
    assert_eq!(StepRole::from_step_id("thc-percentage"), StepRole::Potency);
    assert_eq!(StepRole::from_step_id("dosage-per-piece"), StepRole::Dosage);
    assert_eq!(StepRole::from_step_id("price-range"), StepRole::Price);
    assert_eq!(StepRole::from_step_id("strain"), StepRole::Generic);
}

#[test]
fn test_option_value_display() {
    assert_eq!(format!("{}", OptionValue::text("mild")), "mild");
    assert_eq!(format!("{}", OptionValue::Number(42.0)), "42");
    assert_eq!(format!("{}", OptionValue::Null), "null");
    assert_eq!(
        format!("{}", OptionValue::Range(PriceBand::new(Some(50.0), Some(75.0)))),
        "$50-75"
    );
}

#[test]
fn test_valid_flows_pass_validation() {
    assert_eq!(create_main_flow().validate(), Ok(()));
    assert_eq!(create_edible_flow().validate(), Ok(()));
}

#[test]
fn test_validation_rejects_duplicate_step_ids() {
    let flow = FlowDefinition::new(vec![category_step(), category_step()]);
    assert_eq!(
        flow.validate(),
        Err(FlowValidationError::DuplicateStepId("category".to_string()))
    );
}

#[test]
fn test_validation_rejects_duplicate_option_values() {
    let mut price = legacy_price_step();
    price.options.push(FlowOption::new(
        "also-medium",
        "Mid",
        PriceBand::new(Some(25.0), Some(50.0)),
    ));
    let flow = FlowDefinition::new(vec![price]);

    match flow.validate() {
        Err(FlowValidationError::DuplicateOptionValue {
            step_id,
            option_id,
            first_option_id,
        }) => {
            assert_eq!(step_id, "price");
            assert_eq!(option_id, "also-medium");
            assert_eq!(first_option_id, "medium");
        }
        other => panic!("Expected DuplicateOptionValue, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_misplaced_max_selections() {
    let flow = FlowDefinition::new(vec![category_step().with_max_selections(2)]);
    assert!(matches!(
        flow.validate(),
        Err(FlowValidationError::InvalidMaxSelections { .. })
    ));

    let zero = FlowDefinition::new(vec![effects_step().with_max_selections(0)]);
    assert!(matches!(
        zero.validate(),
        Err(FlowValidationError::InvalidMaxSelections { .. })
    ));
}

#[test]
fn test_later_step_definition_wins() {
    let mut replacement = category_step();
    replacement.options[0].label = "Bud".to_string();
    let flow = FlowDefinition::new(vec![category_step(), replacement]);

    assert_eq!(flow.step("category").unwrap().options[0].label, "Bud");
    let result = SelectionCompiler::new(flow).compile(&Selections::new().with("category", "flower"));
    assert_eq!(result.query, "Looking for Bud products");
}

#[test]
fn test_error_display() {
    let err = FlowValidationError::DuplicateOptionValue {
        step_id: "price".to_string(),
        option_id: "b".to_string(),
        first_option_id: "a".to_string(),
    };
    assert!(err.to_string().contains("price"));
    assert!(err.to_string().contains("'a'"));

    let load_err = FlowLoadError::Io {
        path: "flow.json".to_string(),
        message: "No such file".to_string(),
    };
    assert!(load_err.to_string().contains("flow.json"));

    let conversion_err = FlowConversionError::ValidationError("no steps".to_string());
    assert!(conversion_err.to_string().contains("no steps"));
}

#[test]
fn test_into_flow_conversion() {
    struct Question {
        key: &'static str,
        answers: Vec<&'static str>,
    }

    struct Questionnaire(Vec<Question>);

    impl IntoFlow for Questionnaire {
        fn into_flow(self) -> std::result::Result<FlowDefinition, FlowConversionError> {
            let steps = self
                .0
                .into_iter()
                .map(|q| {
                    if q.answers.is_empty() {
                        return Err(FlowConversionError::ValidationError(format!(
                            "question '{}' has no answers",
                            q.key
                        )));
                    }
                    let options = q
                        .answers
                        .iter()
                        .map(|a| FlowOption::new(*a, *a, *a))
                        .collect();
                    Ok(FlowStep::new(q.key, StepType::SingleSelect, options))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(FlowDefinition::new(steps))
        }
    }

    let flow = Questionnaire(vec![Question {
        key: "category",
        answers: vec!["flower"],
    }])
    .into_flow()
    .expect("Conversion should succeed");
    let result = SelectionCompiler::new(flow).compile(&Selections::new().with("category", "flower"));
    assert_eq!(result.query, "Looking for flower products");

    let empty = Questionnaire(vec![Question {
        key: "effects",
        answers: vec![],
    }])
    .into_flow();
    assert!(empty.is_err());
}
