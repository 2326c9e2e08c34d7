//! Budget totals computation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{BudgetCategory, BudgetItem, BudgetRules, BudgetTotals};

/// Computes budget totals from the category tree and funder rules.
///
/// Pure function: totals are always derived in full from the current tree,
/// never patched incrementally, so repeated calls on unchanged input return
/// identical output.
///
/// - `direct_costs` is the sum of `quantity * unit_cost` over every item.
/// - `indirect_costs` is `direct_costs * rate / 100`, capped at
///   `max_indirect_cost` when a cap is set. A cap of zero is honored; only an
///   absent cap means uncapped.
/// - `total_budget = direct_costs + indirect_costs`.
/// - `cost_share` is a percentage of the total budget when the funder
///   requires cost share, else zero.
#[must_use]
pub fn compute_totals(categories: &[BudgetCategory], rules: &BudgetRules) -> BudgetTotals {
    let mut category_totals = BTreeMap::new();
    let mut direct_costs = Decimal::ZERO;

    for category in categories {
        let category_total: Decimal = category.items.iter().map(BudgetItem::line_total).sum();
        direct_costs += category_total;
        category_totals.insert(category.id.clone(), category_total);
    }

    let indirect_costs = match rules.indirect_cost_rate {
        Some(rate) => {
            let uncapped = direct_costs * rate / Decimal::ONE_HUNDRED;
            let capped = match rules.max_indirect_cost {
                Some(cap) => uncapped.min(cap),
                None => uncapped,
            };
            // Never negative, whatever the rule inputs.
            capped.max(Decimal::ZERO)
        }
        None => Decimal::ZERO,
    };

    let total_budget = direct_costs + indirect_costs;

    let cost_share = if rules.cost_share_required {
        let percentage = rules.cost_share_percentage.unwrap_or(Decimal::ZERO);
        total_budget * percentage / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    BudgetTotals {
        direct_costs,
        indirect_costs,
        cost_share,
        total_budget,
        category_totals,
    }
}
