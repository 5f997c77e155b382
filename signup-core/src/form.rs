//! Form model: submitted data plus the in-progress draft.
//!
//! `FormData` only changes when a step is submitted successfully. Everything
//! the user has typed or toggled but not yet submitted lives in `Draft`.

use crate::catalog::{AddOn, Catalog, Plan};
use crate::errors::SignupError;
use crate::pricing::Cadence;
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Personal-info inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn field_id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "e.g. Stephen King",
            Field::Email => "e.g. stephenking@lorem.com",
            Field::Phone => "e.g. +1 234 567 890",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserInfo {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
        }
    }
}

/// Submitted wizard data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub user_info: UserInfo,
    pub cadence: Cadence,
    pub plan_choice: Plan,
    /// Catalog order, no duplicates.
    pub add_ons: Vec<AddOn>,
}

impl FormData {
    pub fn new(catalog: &Catalog) -> Result<Self> {
        let plan_choice = catalog
            .default_plan()
            .cloned()
            .ok_or_else(|| SignupError::InvalidCatalog("catalog has no plans".to_string()))?;
        Ok(Self {
            user_info: UserInfo::default(),
            cadence: Cadence::default(),
            plan_choice,
            add_ons: Vec::new(),
        })
    }
}

/// Unsubmitted input, as currently shown on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: Option<String>,
    pub cadence: Cadence,
    pub add_ons: BTreeSet<String>,
}

impl Draft {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    pub fn is_add_on_selected(&self, id: &str) -> bool {
        self.add_ons.contains(id)
    }
}
