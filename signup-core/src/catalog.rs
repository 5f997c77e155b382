//! Static catalog of plans, add-ons and wizard steps.
//!
//! The built-in catalog mirrors the product's published price list. A TOML
//! document with the same shape can replace it (see [`parse_catalog_toml`]).

use crate::errors::SignupError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
}

/// What a step collects, and therefore which validator runs on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    PersonalInfo,
    PlanSelection,
    AddOns,
    Summary,
}

/// A step as written in the catalog (position is implied by order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub kind: StepKind,
    pub title: String,
    pub description: String,
}

/// A step placed in a wizard; `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub index: usize,
    pub kind: StepKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub schema_version: u32,

    pub plans: Vec<Plan>,

    #[serde(default)]
    pub add_ons: Vec<AddOn>,

    #[serde(default = "default_steps")]
    pub steps: Vec<StepSpec>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            schema_version: 1,
            plans: vec![
                plan("arcade", "Arcade", 9, 90),
                plan("advance", "Advance", 12, 120),
                plan("pro", "Pro", 15, 150),
            ],
            add_ons: vec![
                add_on(
                    "online-services",
                    "Online Services",
                    "Access to multiplayer games",
                    1,
                    10,
                ),
                add_on(
                    "larger-storage",
                    "Larger Storage",
                    "Extra 1TB of cloud save",
                    2,
                    20,
                ),
                add_on(
                    "customizable-storage",
                    "Customizable Storage",
                    "Custom theme on your profile",
                    2,
                    20,
                ),
            ],
            steps: default_steps(),
        }
    }

    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|add_on| add_on.id == id)
    }

    /// First plan in the catalog. `validate` guarantees there is one.
    pub fn default_plan(&self) -> Option<&Plan> {
        self.plans.first()
    }

    pub fn validate(&self) -> Result<()> {
        if self.schema_version == 0 {
            return Err(invalid("schema_version must be >= 1"));
        }
        if self.plans.is_empty() {
            return Err(invalid("at least one plan is required"));
        }

        let mut plan_ids = HashSet::new();
        for plan in &self.plans {
            if plan.id.trim().is_empty() {
                return Err(invalid(format!("plan {:?} has an empty id", plan.name)));
            }
            if !plan_ids.insert(plan.id.as_str()) {
                return Err(invalid(format!("duplicate plan id: {}", plan.id)));
            }
        }

        let mut add_on_ids = HashSet::new();
        for add_on in &self.add_ons {
            if add_on.id.trim().is_empty() {
                return Err(invalid(format!(
                    "add-on {:?} has an empty id",
                    add_on.name
                )));
            }
            if !add_on_ids.insert(add_on.id.as_str()) {
                return Err(invalid(format!("duplicate add-on id: {}", add_on.id)));
            }
        }

        self.validate_price_range()?;
        self.validate_steps()
    }

    /// The dearest plan plus every add-on must still fit in a `u32` total.
    fn validate_price_range(&self) -> Result<()> {
        let cadences: [(&str, fn(&Plan) -> u32, fn(&AddOn) -> u32); 2] = [
            ("monthly", |plan| plan.monthly_price, |add_on| add_on.monthly_price),
            ("yearly", |plan| plan.yearly_price, |add_on| add_on.yearly_price),
        ];
        for (cadence, plan_price, add_on_price) in cadences {
            let dearest = self.plans.iter().map(plan_price).max().unwrap_or(0);
            let ceiling = self
                .add_ons
                .iter()
                .map(add_on_price)
                .try_fold(dearest, |acc, price| acc.checked_add(price));
            if ceiling.is_none() {
                return Err(invalid(format!(
                    "{} prices are too large: plan plus all add-ons overflows the total",
                    cadence
                )));
            }
        }
        Ok(())
    }

    fn validate_steps(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(invalid("at least one step is required"));
        }

        let mut kinds = HashSet::new();
        for (pos, step) in self.steps.iter().enumerate() {
            if !kinds.insert(step.kind) {
                return Err(invalid(format!("step kind {:?} appears twice", step.kind)));
            }
            if step.kind == StepKind::Summary && pos + 1 != self.steps.len() {
                return Err(invalid("the summary step must be the last step"));
            }
        }

        if self.steps[0].kind != StepKind::PersonalInfo {
            return Err(invalid("the first step must be personal_info"));
        }
        if !kinds.contains(&StepKind::PlanSelection) {
            return Err(invalid("a plan_selection step is required"));
        }
        if kinds.contains(&StepKind::AddOns) && self.add_ons.is_empty() {
            return Err(invalid("an add_ons step needs at least one add-on"));
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn parse_catalog_toml(toml_str: &str) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(toml_str).context("failed to parse catalog")?;
    catalog.validate()?;
    Ok(catalog)
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    SignupError::InvalidCatalog(message.into()).into()
}

fn plan(id: &str, name: &str, monthly_price: u32, yearly_price: u32) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        monthly_price,
        yearly_price,
    }
}

fn add_on(id: &str, name: &str, description: &str, monthly_price: u32, yearly_price: u32) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        monthly_price,
        yearly_price,
    }
}

fn default_steps() -> Vec<StepSpec> {
    vec![
        StepSpec {
            kind: StepKind::PersonalInfo,
            title: "Personal Info".to_string(),
            description: "Please provide your name, email address and phone number.".to_string(),
        },
        StepSpec {
            kind: StepKind::PlanSelection,
            title: "Select Your Plan".to_string(),
            description: "You have the option of monthly or yearly billing.".to_string(),
        },
        StepSpec {
            kind: StepKind::AddOns,
            title: "Pick add-ons".to_string(),
            description: "Add-ons help enhance your gaming experience.".to_string(),
        },
        StepSpec {
            kind: StepKind::Summary,
            title: "Finishing Up".to_string(),
            description: "Double-check everything looks OK before confirming.".to_string(),
        },
    ]
}
