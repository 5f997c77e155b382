//! Per-step validation of draft input.
//!
//! Emptiness is checked on the raw value only; email and phone formats are
//! never inspected.

use crate::catalog::{AddOn, Catalog, Plan};
use crate::form::{Draft, Field, UserInfo};
use crate::pricing::Cadence;
use thiserror::Error;

/// Inline message shown under an empty field.
pub const FIELD_REQUIRED: &str = "This Field is Required";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required fields are empty: {}", field_list(.0))]
    MissingFields(Vec<Field>),

    #[error("Please select a plan.")]
    NoPlanSelected,

    #[error("Please pick at least one add-on.")]
    NoAddOnSelected,
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.field_id())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn empty_fields(draft: &Draft) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| draft.value(*field).is_empty())
        .collect()
}

pub fn validate_personal_info(draft: &Draft) -> Result<UserInfo, ValidationError> {
    let missing = empty_fields(draft);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    Ok(UserInfo {
        name: Some(draft.name.clone()),
        email: Some(draft.email.clone()),
        phone: Some(draft.phone.clone()),
    })
}

/// A missing selection blocks the step; there is no fallback plan.
pub fn validate_plan(draft: &Draft, catalog: &Catalog) -> Result<(Cadence, Plan), ValidationError> {
    draft
        .plan
        .as_deref()
        .and_then(|id| catalog.plan(id))
        .map(|plan| (draft.cadence, plan.clone()))
        .ok_or(ValidationError::NoPlanSelected)
}

/// Selected add-ons in catalog order.
pub fn validate_add_ons(draft: &Draft, catalog: &Catalog) -> Result<Vec<AddOn>, ValidationError> {
    let selected: Vec<AddOn> = catalog
        .add_ons
        .iter()
        .filter(|add_on| draft.is_add_on_selected(&add_on.id))
        .cloned()
        .collect();
    if selected.is_empty() {
        return Err(ValidationError::NoAddOnSelected);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> Draft {
        Draft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 1234".to_string(),
            ..Draft::default()
        }
    }

    #[test]
    fn lists_every_empty_field() {
        let draft = Draft {
            email: "x".to_string(),
            ..Draft::default()
        };
        assert_eq!(empty_fields(&draft), vec![Field::Name, Field::Phone]);
        let err = validate_personal_info(&draft).unwrap_err();
        assert_eq!(err.to_string(), "Required fields are empty: name, phone");
    }

    #[test]
    fn format_is_not_checked() {
        let mut draft = filled_draft();
        draft.email = "not an email".to_string();
        draft.phone = " ".to_string();
        let info = validate_personal_info(&draft).unwrap();
        assert_eq!(info.email.as_deref(), Some("not an email"));
        assert_eq!(info.phone.as_deref(), Some(" "));
    }

    #[test]
    fn plan_requires_a_selection() {
        let catalog = Catalog::builtin();
        let mut draft = filled_draft();
        assert_eq!(
            validate_plan(&draft, &catalog),
            Err(ValidationError::NoPlanSelected)
        );
        draft.plan = Some("ghost".to_string());
        assert_eq!(
            validate_plan(&draft, &catalog),
            Err(ValidationError::NoPlanSelected)
        );
        draft.plan = Some("pro".to_string());
        draft.cadence = Cadence::Yearly;
        let (cadence, plan) = validate_plan(&draft, &catalog).unwrap();
        assert_eq!(cadence, Cadence::Yearly);
        assert_eq!(plan.name, "Pro");
    }

    #[test]
    fn add_ons_come_back_in_catalog_order() {
        let catalog = Catalog::builtin();
        let mut draft = filled_draft();
        assert_eq!(
            validate_add_ons(&draft, &catalog),
            Err(ValidationError::NoAddOnSelected)
        );
        draft.add_ons.insert("larger-storage".to_string());
        draft.add_ons.insert("customizable-storage".to_string());
        draft.add_ons.insert("online-services".to_string());
        let names: Vec<_> = validate_add_ons(&draft, &catalog)
            .unwrap()
            .into_iter()
            .map(|add_on| add_on.name)
            .collect();
        assert_eq!(
            names,
            vec!["Online Services", "Larger Storage", "Customizable Storage"]
        );
    }
}
