//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the annai crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use annai::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow = FlowDefinition::from_file("path/to/flow.json")?;
//! let selections = Selections::from_file("path/to/selections.json")?;
//!
//! let compiler = SelectionCompiler::new(flow);
//! let result = compiler.compile(&selections);
//!
//! println!("Query: {}", result.query);
//! println!("Filters: {}", serde_json::to_string(&result.filters)?);
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::ranges::{PotencyScale, TierRange, dosage_options, dosage_range};
pub use crate::compiler::{
    CompileOptions, SelectionCompiler, SelectionCompilerBuilder, compile, compile_with,
};

// Flow model
pub use crate::flow::{
    FlowDefinition, FlowOption, FlowStep, IntoFlow, OptionValue, PriceBand, PriceBudget,
    Selection, Selections, StepRole, StepType,
};

// Output
pub use crate::narrative::{Narrative, QueryFormatter};
pub use crate::output::{FilterValue, Filters, Metadata, MetadataEntry, TransformedMetadata};

// Error types
pub use crate::error::{FlowConversionError, FlowLoadError, FlowValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
