//! # Annai - Guided Flow Selection Compiler
//!
//! **Annai** turns the answers a shopper gives in a step-by-step question wizard
//! (category, desired effects, potency, dosage, price) into three things a product
//! search needs:
//!
//! * **filters**: exact-match and range constraints for the search backend, with
//!   qualitative tiers such as "strong" expanded into numeric THC bounds;
//! * **query**: one natural-language sentence summarizing the answers;
//! * **metadata**: per-step display strings for summary chips and debugging.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the Flow**: Load your steps from JSON with `FlowDefinition::from_json`, or
//!     implement `IntoFlow` for your own wizard format.
//! 2.  **Build a Compiler**: `SelectionCompiler::builder` lets you map step ids to roles and
//!     extend the categories that use the concentrated potency scale.
//! 3.  **Compile**: Feed it `Selections` as often as you like, once per answered step for a
//!     live preview and once on completion. Compilation never fails; answers that do not fit
//!     the flow are left out.
//!
//! ## Quick Start
//!
//! ```rust
//! use annai::prelude::*;
//!
//! let flow = FlowDefinition::new(vec![
//!     FlowStep::new(
//!         "category",
//!         StepType::SingleSelect,
//!         vec![
//!             FlowOption::new("flower", "Flower", "flower"),
//!             FlowOption::new("vape-cart", "Vape Cart", "vaporizers"),
//!         ],
//!     ),
//!     FlowStep::new(
//!         "thc-percentage",
//!         StepType::SingleSelect,
//!         PotencyScale::Concentrated.options(),
//!     ),
//! ]);
//!
//! let compiler = SelectionCompiler::new(flow);
//! let selections = Selections::new()
//!     .with("category", "vaporizers")
//!     .with("thc-percentage", "strong");
//!
//! let result = compiler.compile(&selections);
//! assert_eq!(
//!     result.query,
//!     "Looking for Vape Cart products, with Strong (85-90%) THC percentage"
//! );
//! assert_eq!(result.filter_number("thc_percentage_min"), Some(85.0));
//! assert_eq!(result.filter_number("thc_percentage_max"), Some(90.0));
//! ```

pub mod compiler;
pub mod error;
pub mod flow;
pub mod format;
pub mod narrative;
pub mod output;
pub mod prelude;
pub mod product;

pub use compiler::{SelectionCompiler, compile};
pub use flow::{FlowDefinition, FlowOption, FlowStep, Selections};
pub use output::TransformedMetadata;
