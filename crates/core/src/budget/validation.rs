//! Compliance validation for budgets.

use rust_decimal::Decimal;

use super::types::{BudgetCategory, BudgetRules, BudgetTotals, Violation};

/// Evaluates the funder's compliance rules against the current totals.
///
/// Violations are returned in a fixed three-pass order:
///
/// 1. total-budget-limit check,
/// 2. per-category limit checks, in the category list's declared order,
/// 3. required-category checks, in declared order.
///
/// Every pass runs to completion; an earlier violation never short-circuits
/// a later pass. Category-scoped passes traverse the category list rather
/// than the limit map, so output order never depends on map iteration order.
#[must_use]
pub fn validate(
    categories: &[BudgetCategory],
    rules: &BudgetRules,
    totals: &BudgetTotals,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some(limit) = rules.total_budget_limit {
        if totals.total_budget > limit {
            violations.push(Violation::total_budget_limit_exceeded(limit));
        }
    }

    for category in categories {
        if let Some(&limit) = rules.category_limits.get(&category.id) {
            if totals.category_total(&category.id) > limit {
                violations.push(Violation::category_limit_exceeded(category, limit));
            }
        }
    }

    for category in categories {
        if category.required && totals.category_total(&category.id) == Decimal::ZERO {
            violations.push(Violation::required_category_empty(category));
        }
    }

    violations
}
