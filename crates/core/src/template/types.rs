//! Funder template data types.

use grantpilot_shared::{CategoryId, TemplateId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetCategory, BudgetRules};

/// A category declared by a funder template.
///
/// Seeds carry structure only; item lists always start empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeed {
    /// Stable category slug (e.g. "personnel").
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Optional description shown in the budget editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the funder requires a nonzero total in this category.
    #[serde(default)]
    pub required: bool,
    /// Optional cap on this category's share of direct costs, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_percentage: Option<Decimal>,
}

/// A funder's budget template: category structure plus compliance rules.
///
/// Templates are configuration supplied by the hosting application, usually
/// deserialized from JSON alongside the funder's guideline data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunderTemplate {
    /// Template ID.
    pub id: TemplateId,
    /// Template display name.
    pub name: String,
    /// Funder name (e.g. "NSF").
    pub funder: String,
    /// Project duration in years.
    #[serde(default = "default_project_years")]
    pub project_years: u8,
    /// Category structure in declared order.
    pub categories: Vec<CategorySeed>,
    /// Funder compliance rules.
    #[serde(default)]
    pub rules: BudgetRules,
}

fn default_project_years() -> u8 {
    1
}

impl FunderTemplate {
    /// Instantiates the initial budget state for a new editing session:
    /// categories in declared order with empty item lists, plus the funder's
    /// rule set.
    #[must_use]
    pub fn instantiate(&self) -> (Vec<BudgetCategory>, BudgetRules) {
        let categories = self
            .categories
            .iter()
            .map(|seed| BudgetCategory {
                id: seed.id.clone(),
                name: seed.name.clone(),
                description: seed.description.clone(),
                required: seed.required,
                max_percentage: seed.max_percentage,
                items: Vec::new(),
            })
            .collect();
        (categories, self.rules.clone())
    }
}
