//! Wizard configuration: which catalog, and how many of its steps.

use crate::catalog::{parse_catalog_toml, Catalog, Step, StepKind};
use crate::errors::SignupError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Personal info and plan selection only
    Minimal,
    /// Personal info, plan, add-ons and summary
    #[default]
    Full,
}

impl Variant {
    fn step_limit(&self) -> Option<usize> {
        match self {
            Variant::Minimal => Some(2),
            Variant::Full => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Minimal => write!(f, "minimal"),
            Variant::Full => write!(f, "full"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    pub variant: Variant,
    pub catalog: Catalog,
}

impl WizardConfig {
    pub fn new(variant: Variant, catalog: Catalog) -> Result<Self> {
        let config = Self { variant, catalog };
        config.validate()?;
        Ok(config)
    }

    pub fn full() -> Self {
        Self {
            variant: Variant::Full,
            catalog: Catalog::builtin(),
        }
    }

    pub fn minimal() -> Self {
        Self {
            variant: Variant::Minimal,
            catalog: Catalog::builtin(),
        }
    }

    pub fn from_catalog_file(path: &Path, variant: Variant) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let catalog = parse_catalog_toml(&content)
            .with_context(|| format!("failed to load catalog {}", path.display()))?;
        log::info!(
            "📦 Loaded catalog {} ({} plans, {} add-ons)",
            path.display(),
            catalog.plans.len(),
            catalog.add_ons.len()
        );
        let config = Self { variant, catalog };
        config.validate()?;
        Ok(config)
    }

    /// Catalog checks, plus: the variant must still contain a plan step once
    /// its steps are trimmed.
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        let has_plan_step = self
            .steps()
            .iter()
            .any(|step| step.kind == StepKind::PlanSelection);
        if !has_plan_step {
            return Err(SignupError::InvalidCatalog(format!(
                "the {} variant has no plan_selection step",
                self.variant
            ))
            .into());
        }
        Ok(())
    }

    /// Ordered steps for this variant, indexed from 1.
    pub fn steps(&self) -> Vec<Step> {
        let limit = self
            .variant
            .step_limit()
            .unwrap_or(self.catalog.steps.len());
        self.catalog
            .steps
            .iter()
            .take(limit)
            .enumerate()
            .map(|(pos, spec)| Step {
                index: pos + 1,
                kind: spec.kind,
                title: spec.title.clone(),
                description: spec.description.clone(),
            })
            .collect()
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self::full()
    }
}
