//! Budget data types.

use std::collections::{BTreeMap, HashMap};

use grantpilot_shared::{CategoryId, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single budget line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    /// Item ID, unique within its category.
    pub id: ItemId,
    /// Free-text description of the cost.
    pub description: String,
    /// Number of units (non-negative integer).
    pub quantity: u32,
    /// Cost per unit.
    pub unit_cost: Decimal,
    /// Optional per-year cost breakdown for multi-year projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_breakdown: Option<Vec<Decimal>>,
    /// Optional budget justification narrative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl BudgetItem {
    /// Creates an empty item with the given ID.
    ///
    /// New items start with `quantity = 1` and `unit_cost = 0`, matching the
    /// blank row the budget editor presents.
    #[must_use]
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            description: String::new(),
            quantity: 1,
            unit_cost: Decimal::ZERO,
            yearly_breakdown: None,
            justification: None,
        }
    }

    /// Line total: `quantity * unit_cost`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_cost
    }
}

/// A budget category holding an ordered list of items.
///
/// Category order is significant: compliance checks traverse categories in
/// declared order so that violation output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    /// Category ID, unique within the budget.
    pub id: CategoryId,
    /// Display name (e.g. "Personnel").
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the funder requires this category to carry a nonzero total.
    #[serde(default)]
    pub required: bool,
    /// Optional cap on this category's share of direct costs, in percent.
    /// Declared by some funder templates; informational for the host UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_percentage: Option<Decimal>,
    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

/// Funder-supplied budget rules.
///
/// Immutable per evaluation. Absent optional fields mean "no such rule":
/// in particular `max_indirect_cost = Some(0)` is a real cap forcing indirect
/// costs to zero, while `None` means uncapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRules {
    /// Indirect cost rate as a percentage of direct costs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indirect_cost_rate: Option<Decimal>,
    /// Absolute cap on indirect costs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_indirect_cost: Option<Decimal>,
    /// Cap on the total budget (direct + indirect).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_budget_limit: Option<Decimal>,
    /// Per-category spending limits.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub category_limits: HashMap<CategoryId, Decimal>,
    /// Whether the funder requires institutional cost share.
    #[serde(default)]
    pub cost_share_required: bool,
    /// Cost share as a percentage of total budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_share_percentage: Option<Decimal>,
}

/// Derived budget totals.
///
/// Recomputed in full from the category tree and rules on every mutation,
/// never incrementally patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotals {
    /// Sum of all line-item totals across all categories.
    pub direct_costs: Decimal,
    /// Overhead: capped percentage of direct costs.
    pub indirect_costs: Decimal,
    /// Institutional cost share commitment.
    pub cost_share: Decimal,
    /// Total request: direct + indirect.
    pub total_budget: Decimal,
    /// Per-category totals.
    pub category_totals: BTreeMap<CategoryId, Decimal>,
}

impl BudgetTotals {
    /// Returns the total for a category, or zero if it has none recorded.
    #[must_use]
    pub fn category_total(&self, id: &CategoryId) -> Decimal {
        self.category_totals.get(id).copied().unwrap_or_default()
    }
}

/// Severity of a compliance violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks submission.
    Error,
    /// Advisory only.
    Warning,
}

/// Kind of compliance violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Total budget exceeds the funder's overall limit.
    TotalBudgetLimitExceeded,
    /// A category total exceeds its funder-imposed limit.
    CategoryLimitExceeded,
    /// A required category has no budget allocated.
    RequiredCategoryEmpty,
}

/// A compliance-rule failure.
///
/// Violations are ordinary data, not errors: a non-compliant budget is still
/// a valid budget that authors can keep editing and saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// What rule was broken.
    pub kind: ViolationKind,
    /// Severity; every current rule reports `Error`.
    pub severity: Severity,
    /// Human-readable message for display.
    pub message: String,
    /// The offending category, when the rule is category-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl Violation {
    /// Total budget exceeds the funder's overall limit.
    #[must_use]
    pub fn total_budget_limit_exceeded(limit: Decimal) -> Self {
        Self {
            kind: ViolationKind::TotalBudgetLimitExceeded,
            severity: Severity::Error,
            message: format!("Total budget exceeds limit of ${limit}"),
            category_id: None,
        }
    }

    /// A category total exceeds its funder-imposed limit.
    #[must_use]
    pub fn category_limit_exceeded(category: &BudgetCategory, limit: Decimal) -> Self {
        Self {
            kind: ViolationKind::CategoryLimitExceeded,
            severity: Severity::Error,
            message: format!("{} exceeds limit of ${limit}", category.name),
            category_id: Some(category.id.clone()),
        }
    }

    /// A required category has no budget allocated.
    #[must_use]
    pub fn required_category_empty(category: &BudgetCategory) -> Self {
        Self {
            kind: ViolationKind::RequiredCategoryEmpty,
            severity: Severity::Error,
            message: format!("{} is required but has no budget allocated", category.name),
            category_id: Some(category.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total() {
        let mut item = BudgetItem::empty(ItemId::new("item-1"));
        item.quantity = 3;
        item.unit_cost = dec!(1250.50);
        assert_eq!(item.line_total(), dec!(3751.50));
    }

    #[test]
    fn test_empty_item_defaults() {
        let item = BudgetItem::empty(ItemId::new("item-1"));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_cost, Decimal::ZERO);
        assert_eq!(item.line_total(), Decimal::ZERO);
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = BudgetItem {
            id: ItemId::new("item-1"),
            description: "Laptop".to_string(),
            quantity: 2,
            unit_cost: dec!(1500),
            yearly_breakdown: None,
            justification: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unitCost"], serde_json::json!("1500"));
        assert!(json.get("yearlyBreakdown").is_none());
    }

    #[test]
    fn test_rules_deserialize_with_defaults() {
        let rules: BudgetRules = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, BudgetRules::default());
        assert!(rules.indirect_cost_rate.is_none());
        assert!(!rules.cost_share_required);
        assert!(rules.category_limits.is_empty());
    }

    #[test]
    fn test_rules_zero_cap_is_not_unset() {
        let rules: BudgetRules =
            serde_json::from_str(r#"{"maxIndirectCost": "0"}"#).unwrap();
        assert_eq!(rules.max_indirect_cost, Some(Decimal::ZERO));
    }
}
