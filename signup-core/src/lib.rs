//! Signup wizard core library.
//!
//! `signup-core` holds the form model, step controller, pricing engine and the
//! render contract used by the terminal UI and the `signup` binary.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod form;
pub mod logging;
pub mod pricing;
pub mod render;
pub mod validation;

pub use catalog::{AddOn, Catalog, Plan, Step, StepKind};
pub use config::{Variant, WizardConfig};
pub use controller::{advance, retreat, Wizard};
pub use form::{Draft, Field, FormData, UserInfo};
pub use pricing::{price_of, total, Cadence, Priced, Summary};
pub use render::{PrimaryAction, Render, Transcript};
