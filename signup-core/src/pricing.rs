//! Pricing engine: price lookup, totals and the labels shown next to them.
//!
//! Prices are whole currency units. Nothing here rounds, converts or taxes.

use crate::catalog::{AddOn, Plan};
use crate::form::FormData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Billing cadence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Monthly,
    Yearly,
}

impl Cadence {
    pub fn name(&self) -> &'static str {
        match self {
            Cadence::Monthly => "monthly",
            Cadence::Yearly => "yearly",
        }
    }

    /// Short unit used after prices: `$9/mo`.
    pub fn unit_label(&self) -> &'static str {
        match self {
            Cadence::Monthly => "mo",
            Cadence::Yearly => "yr",
        }
    }

    /// Bill period: the cadence name without its trailing "ly".
    pub fn period_label(&self) -> &'static str {
        let name = self.name();
        name.strip_suffix("ly").unwrap_or(name)
    }

    /// "Monthly" / "Yearly".
    pub fn display_name(&self) -> String {
        let mut chars = self.name().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Promotion line shown under each plan for this cadence.
    pub fn promotion(&self) -> Option<&'static str> {
        match self {
            Cadence::Monthly => None,
            Cadence::Yearly => Some("2 months free"),
        }
    }

    pub fn toggled(&self) -> Cadence {
        match self {
            Cadence::Monthly => Cadence::Yearly,
            Cadence::Yearly => Cadence::Monthly,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Anything with a monthly and a yearly price.
pub trait Priced {
    fn monthly_price(&self) -> u32;
    fn yearly_price(&self) -> u32;
}

impl Priced for Plan {
    fn monthly_price(&self) -> u32 {
        self.monthly_price
    }

    fn yearly_price(&self) -> u32 {
        self.yearly_price
    }
}

impl Priced for AddOn {
    fn monthly_price(&self) -> u32 {
        self.monthly_price
    }

    fn yearly_price(&self) -> u32 {
        self.yearly_price
    }
}

pub fn price_of<P: Priced + ?Sized>(item: &P, cadence: Cadence) -> u32 {
    match cadence {
        Cadence::Monthly => item.monthly_price(),
        Cadence::Yearly => item.yearly_price(),
    }
}

/// Plan price plus every selected add-on, at the submitted cadence.
///
/// `Catalog::validate` keeps catalog totals inside `u32`; a hand-built form
/// beyond that saturates instead of wrapping.
pub fn total(form: &FormData) -> u32 {
    let cadence = form.cadence;
    form.add_ons
        .iter()
        .map(|add_on| price_of(add_on, cadence))
        .fold(price_of(&form.plan_choice, cadence), |acc, price| {
            acc.saturating_add(price)
        })
}

pub fn format_price(amount: u32, cadence: Cadence) -> String {
    format!("${}/{}", amount, cadence.unit_label())
}

pub fn format_add_on_price(amount: u32, cadence: Cadence) -> String {
    format!("+{}", format_price(amount, cadence))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub amount: u32,
    pub price: String,
}

/// Everything the finishing-up screen shows, derived from submitted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub cadence: Cadence,
    pub plan: SummaryLine,
    pub add_ons: Vec<SummaryLine>,
    pub total: u32,
    pub total_label: String,
    pub total_price: String,
}

impl Summary {
    pub fn from_form(form: &FormData) -> Self {
        let cadence = form.cadence;
        let plan_amount = price_of(&form.plan_choice, cadence);
        let add_ons = form
            .add_ons
            .iter()
            .map(|add_on| {
                let amount = price_of(add_on, cadence);
                SummaryLine {
                    name: add_on.name.clone(),
                    amount,
                    price: format_add_on_price(amount, cadence),
                }
            })
            .collect();
        let total = total(form);

        Self {
            cadence,
            plan: SummaryLine {
                name: format!("{} ({})", form.plan_choice.name, cadence.display_name()),
                amount: plan_amount,
                price: format_price(plan_amount, cadence),
            },
            add_ons,
            total,
            total_label: format!("Total (per {})", cadence.period_label()),
            total_price: format_price(total, cadence),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}  {}", self.plan.name, self.plan.price)];
        for add_on in &self.add_ons {
            lines.push(format!("  {}  {}", add_on.name, add_on.price));
        }
        lines.push(format!("{}  {}", self.total_label, self.total_price));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn labels_follow_cadence() {
        assert_eq!(Cadence::Monthly.unit_label(), "mo");
        assert_eq!(Cadence::Yearly.unit_label(), "yr");
        assert_eq!(Cadence::Monthly.period_label(), "month");
        assert_eq!(Cadence::Yearly.period_label(), "year");
        assert_eq!(Cadence::Yearly.display_name(), "Yearly");
        assert_eq!(Cadence::Monthly.promotion(), None);
        assert_eq!(Cadence::Yearly.promotion(), Some("2 months free"));
    }

    #[test]
    fn price_of_is_a_table_lookup() {
        let catalog = Catalog::builtin();
        let pro = catalog.plan("pro").unwrap();
        assert_eq!(price_of(pro, Cadence::Monthly), 15);
        assert_eq!(price_of(pro, Cadence::Yearly), 150);
        let storage = catalog.add_on("larger-storage").unwrap();
        assert_eq!(price_of(storage, Cadence::Yearly), 20);
    }

    #[test]
    fn summary_formats_every_line() {
        let catalog = Catalog::builtin();
        let mut form = FormData::new(&catalog).unwrap();
        form.cadence = Cadence::Yearly;
        form.plan_choice = catalog.plan("advance").unwrap().clone();
        form.add_ons = vec![catalog.add_on("online-services").unwrap().clone()];

        let summary = Summary::from_form(&form);
        assert_eq!(summary.plan.name, "Advance (Yearly)");
        assert_eq!(summary.plan.price, "$120/yr");
        assert_eq!(summary.add_ons[0].price, "+$10/yr");
        assert_eq!(summary.total, 130);
        assert_eq!(summary.total_label, "Total (per year)");
        assert_eq!(summary.total_price, "$130/yr");
        assert_eq!(summary.lines().len(), 3);
    }

    #[test]
    fn total_saturates_on_oversized_prices() {
        let catalog = Catalog::builtin();
        let mut form = FormData::new(&catalog).unwrap();
        form.plan_choice.monthly_price = 4_000_000_000;
        let mut add_on = catalog.add_on("online-services").unwrap().clone();
        add_on.monthly_price = 400_000_000;
        form.add_ons = vec![add_on];

        assert_eq!(total(&form), u32::MAX);
        assert_eq!(Summary::from_form(&form).total, u32::MAX);
    }
}
