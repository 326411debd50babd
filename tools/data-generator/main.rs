use annai::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate random selection snapshots for a guided flow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    flow_path: String,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_selections.json")]
    output: String,

    /// How many selection snapshots to generate
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Probability that an optional step is left unanswered
    #[arg(long, default_value_t = 0.2)]
    skip_rate: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.skip_rate) {
        eprintln!(
            "Error: --skip-rate ({}) must be between 0 and 1",
            cli.skip_rate
        );
        std::process::exit(1);
    }

    let flow = FlowDefinition::from_file(&cli.flow_path)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating {} selection snapshot(s) for {} step(s)...",
        cli.count,
        flow.steps.len()
    );

    let snapshots: Vec<Selections> = (0..cli.count)
        .map(|_| generate_selections(&mut rng, &flow, cli.skip_rate))
        .collect();

    let json_output = serde_json::to_string_pretty(&snapshots)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved selections to '{}'",
        cli.output
    );

    Ok(())
}

/// Answers every step of the flow, leaving optional steps out at the given rate.
fn generate_selections(rng: &mut StdRng, flow: &FlowDefinition, skip_rate: f64) -> Selections {
    let mut selections = Selections::new();
    for step in &flow.steps {
        if !step.required && rng.random_bool(skip_rate) {
            continue;
        }
        if let Some(selection) = generate_answer(rng, step) {
            selections.insert(step.id.clone(), selection);
        }
    }
    selections
}

fn generate_answer(rng: &mut StdRng, step: &FlowStep) -> Option<Selection> {
    match step.step_type {
        StepType::PriceSelector => {
            let budget = if rng.random_bool(0.3) {
                PriceBudget::NoMax
            } else {
                PriceBudget::SetMax {
                    max: Some(rng.random_range(1..=20) as f64 * 5.0),
                }
            };
            Some(Selection::Budget(budget))
        }
        StepType::MultiSelect => {
            let limit = step
                .max_selections
                .map_or(step.options.len(), |max| max as usize)
                .min(step.options.len());
            if limit == 0 {
                return None;
            }
            let amount = rng.random_range(1..=limit);
            let values = step
                .options
                .choose_multiple(rng, amount)
                .map(|option| option.value.clone())
                .collect();
            Some(Selection::Many(values))
        }
        StepType::SingleSelect | StepType::Slider => step
            .options
            .choose(rng)
            .map(|option| Selection::One(option.value.clone())),
    }
}
