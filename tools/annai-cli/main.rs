use annai::output::MetadataEntry;
use annai::prelude::*;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// How the compiled result is printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Compiles guided-flow selections into search filters and a natural-language query
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    flow_path: Option<String>,
    /// Path to the selections JSON file
    selections_path: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Treat an additional category as concentrated (high-potency THC scale)
    #[arg(long = "concentrated", value_name = "CATEGORY")]
    concentrated: Vec<String>,

    /// Log skipped answers and unrecognized tiers
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode and answer the flow's questions at the prompt
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.human {
        run_interactive(&cli);
    } else {
        run_non_interactive(&cli);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "annai=debug" } else { "annai=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_compiler(flow_path: &str, cli: &Cli) -> SelectionCompiler {
    let flow = FlowDefinition::from_file(flow_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow: {}", e)));

    if let Err(e) = flow.validate() {
        eprintln!("Warning: {}", e);
    }

    cli.concentrated
        .iter()
        .fold(SelectionCompiler::builder(flow), |builder, category| {
            builder.with_concentrated_category(category)
        })
        .build()
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: &Cli) {
    let flow_path = cli.flow_path.as_deref().unwrap_or_else(|| {
        exit_with_error("Flow path is required in non-interactive mode.");
    });
    let selections_path = cli.selections_path.as_deref().unwrap_or_else(|| {
        exit_with_error("Selections path is required in non-interactive mode.");
    });

    let compiler = load_compiler(flow_path, cli);
    let selections = Selections::from_file(selections_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load selections: {}", e)));

    let start = Instant::now();
    let result = compiler.compile(&selections);
    tracing::debug!(elapsed = ?start.elapsed(), "compilation finished");

    print_result(&result, cli.format);
}

/// Walks the flow step by step, printing the live query after every answer.
fn run_interactive(cli: &Cli) {
    println!("--- Annai Interactive Mode ---");

    let flow_path = match cli.flow_path.clone() {
        Some(path) => path,
        None => prompt_for_input("Enter flow path", Some("data/flow.json")),
    };
    let compiler = load_compiler(&flow_path, cli);
    let mut selections = Selections::new();

    for (index, step) in compiler.flow().steps.iter().enumerate() {
        println!();
        let title = if step.title.is_empty() {
            &step.id
        } else {
            &step.title
        };
        match &step.subtitle {
            Some(subtitle) => println!("{} {}", title, subtitle),
            None => println!("{}", title),
        }

        if let Some(selection) = ask_step(step) {
            selections.insert(step.id.clone(), selection);
        }

        let preview = compiler.preview(&selections, index);
        println!("  -> {}", preview.query);
    }

    println!("\nFlow completed!");
    print_result(&compiler.compile(&selections), cli.format);
}

/// Prompts for one step's answer. An empty answer skips the step.
fn ask_step(step: &FlowStep) -> Option<Selection> {
    if step.step_type == StepType::PriceSelector {
        let input = prompt_for_input("Maximum budget (empty for no max)", None);
        if input.is_empty() {
            return Some(PriceBudget::NoMax.into());
        }
        return match input.parse::<f64>() {
            Ok(max) => Some(PriceBudget::SetMax { max: Some(max) }.into()),
            Err(_) => {
                println!("Not a number; skipping.");
                None
            }
        };
    }

    for (i, option) in step.options.iter().enumerate() {
        match &option.description {
            Some(description) => println!("  {}: {} ({})", i + 1, option.label, description),
            None => println!("  {}: {}", i + 1, option.label),
        }
    }

    let prompt = if step.step_type.is_multi_valued() {
        match step.max_selections {
            Some(max) => format!("Choose up to {} (comma separated)", max),
            None => "Choose any (comma separated)".to_string(),
        }
    } else {
        "Choose one".to_string()
    };
    let input = prompt_for_input(&prompt, None);

    let mut chosen: Vec<OptionValue> = input
        .split(',')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .filter_map(|n| n.checked_sub(1).and_then(|i| step.options.get(i)))
        .map(|option| option.value.clone())
        .collect();

    if chosen.is_empty() {
        return None;
    }
    if step.step_type.is_multi_valued() {
        if let Some(max) = step.max_selections {
            chosen.truncate(max as usize);
        }
        Some(Selection::Many(chosen))
    } else {
        Some(Selection::One(chosen.swap_remove(0)))
    }
}

fn print_result(result: &TransformedMetadata, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize result: {}", e)),
        },
        OutputFormat::Text => {
            println!("Query: {}", result.query);
            println!("\nMetadata:");
            for (step_id, entry) in &result.metadata {
                match entry {
                    MetadataEntry::Label(label) => println!("  {}: {}", step_id, label),
                    MetadataEntry::Labels(labels) => {
                        println!("  {}: {}", step_id, labels.join(", "))
                    }
                }
            }
            println!("\nFilters:");
            for (key, value) in &result.filters {
                let rendered = serde_json::to_string(value).unwrap_or_default();
                println!("  {} = {}", key, rendered);
            }
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }
    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
