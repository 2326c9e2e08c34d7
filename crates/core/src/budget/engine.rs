//! Budget engine: mutation, recomputation, and compliance evaluation.

use grantpilot_shared::{CategoryId, ItemId};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::error::BudgetError;
use super::totals::compute_totals;
use super::types::{BudgetCategory, BudgetItem, BudgetRules, BudgetTotals, Violation};
use super::validation::validate;

/// The derived state handed to the caller after every operation.
///
/// The engine holds no subscriber list: the hosting application receives this
/// triple synchronously and owns rendering and persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSnapshot {
    /// Current category tree.
    pub categories: Vec<BudgetCategory>,
    /// Totals derived from the tree and rules.
    pub totals: BudgetTotals,
    /// Ordered compliance violations.
    pub violations: Vec<Violation>,
}

/// A field update for [`BudgetEngine::update_item`].
///
/// Numeric updates follow the lenient UI contract: negative input clamps to
/// zero, and the `*_from_input` constructors degrade malformed text entries
/// to zero instead of blocking editing.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    /// Replace the item description.
    Description(String),
    /// Replace the quantity; negative values clamp to zero.
    Quantity(i64),
    /// Replace the unit cost; negative values clamp to zero.
    UnitCost(Decimal),
}

impl ItemUpdate {
    /// Builds a quantity update from raw form input. Malformed or negative
    /// text degrades to zero.
    #[must_use]
    pub fn quantity_from_input(input: &str) -> Self {
        Self::Quantity(input.trim().parse::<i64>().map_or(0, |v| v.max(0)))
    }

    /// Builds a unit-cost update from raw form input. Malformed or negative
    /// text degrades to zero.
    #[must_use]
    pub fn unit_cost_from_input(input: &str) -> Self {
        Self::UnitCost(
            input
                .trim()
                .parse::<Decimal>()
                .map_or(Decimal::ZERO, |v| v.max(Decimal::ZERO)),
        )
    }
}

/// Owns the authoritative category tree and funder rules for one editing
/// session.
///
/// Every mutation runs mutate -> recompute -> validate synchronously and
/// returns a fresh [`BudgetSnapshot`]. Totals are always recomputed in full
/// from the current tree; nothing is cached across mutations. The engine is
/// single-threaded: one instance per active editing session, never shared
/// across concurrent editors.
#[derive(Debug, Clone)]
pub struct BudgetEngine {
    categories: Vec<BudgetCategory>,
    rules: BudgetRules,
}

impl BudgetEngine {
    /// Creates an engine over an existing category tree (from a funder
    /// template or a previously saved proposal) and rule set.
    #[must_use]
    pub fn new(categories: Vec<BudgetCategory>, rules: BudgetRules) -> Self {
        Self { categories, rules }
    }

    /// Returns the current funder rules.
    #[must_use]
    pub fn rules(&self) -> &BudgetRules {
        &self.rules
    }

    /// Appends a blank item to the named category and re-evaluates.
    ///
    /// The new item gets a freshly generated unique id, `quantity = 1`, and
    /// `unit_cost = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::CategoryNotFound`] if the category does not
    /// exist; the tree is left unchanged.
    pub fn add_item(&mut self, category_id: &CategoryId) -> Result<BudgetSnapshot, BudgetError> {
        let category = self.category_mut(category_id)?;
        let item = BudgetItem::empty(ItemId::generate());
        info!(category_id = %category_id, item_id = %item.id, "Budget item added");
        category.items.push(item);
        Ok(self.evaluate())
    }

    /// Removes an item from the named category and re-evaluates.
    ///
    /// Removing an item that is already absent is a no-op, not an error, so
    /// duplicate removal requests from a racing UI are tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::CategoryNotFound`] if the category does not
    /// exist; the tree is left unchanged.
    pub fn remove_item(
        &mut self,
        category_id: &CategoryId,
        item_id: &ItemId,
    ) -> Result<BudgetSnapshot, BudgetError> {
        let category = self.category_mut(category_id)?;
        let before = category.items.len();
        category.items.retain(|item| item.id != *item_id);
        if category.items.len() < before {
            info!(category_id = %category_id, item_id = %item_id, "Budget item removed");
        } else {
            debug!(category_id = %category_id, item_id = %item_id, "Item already absent");
        }
        Ok(self.evaluate())
    }

    /// Applies a field update to the named item and re-evaluates.
    ///
    /// Negative quantity or unit-cost input clamps to zero rather than being
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::CategoryNotFound`] or
    /// [`BudgetError::ItemNotFound`] for dangling ids; the tree is left
    /// unchanged.
    pub fn update_item(
        &mut self,
        category_id: &CategoryId,
        item_id: &ItemId,
        update: ItemUpdate,
    ) -> Result<BudgetSnapshot, BudgetError> {
        let category = self.category_mut(category_id)?;
        let item = category
            .items
            .iter_mut()
            .find(|item| item.id == *item_id)
            .ok_or_else(|| BudgetError::ItemNotFound {
                category: category_id.clone(),
                item: item_id.clone(),
            })?;

        match update {
            ItemUpdate::Description(description) => item.description = description,
            ItemUpdate::Quantity(quantity) => {
                item.quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
            }
            ItemUpdate::UnitCost(unit_cost) => {
                item.unit_cost = unit_cost.max(Decimal::ZERO);
            }
        }
        debug!(category_id = %category_id, item_id = %item_id, "Budget item updated");
        Ok(self.evaluate())
    }

    /// Replaces the funder rule set and re-evaluates the unchanged tree.
    pub fn replace_rules(&mut self, rules: BudgetRules) -> BudgetSnapshot {
        info!("Budget rules replaced");
        self.rules = rules;
        self.evaluate()
    }

    /// Returns the current derived state without mutating anything.
    #[must_use]
    pub fn snapshot(&self) -> BudgetSnapshot {
        self.evaluate()
    }

    fn category_mut(&mut self, id: &CategoryId) -> Result<&mut BudgetCategory, BudgetError> {
        self.categories
            .iter_mut()
            .find(|category| category.id == *id)
            .ok_or_else(|| BudgetError::CategoryNotFound(id.clone()))
    }

    fn evaluate(&self) -> BudgetSnapshot {
        let totals = compute_totals(&self.categories, &self.rules);
        let violations = validate(&self.categories, &self.rules, &totals);
        debug!(
            direct_costs = %totals.direct_costs,
            total_budget = %totals.total_budget,
            "Budget totals recomputed"
        );
        if !violations.is_empty() {
            warn!(count = violations.len(), "Budget has compliance violations");
        }
        BudgetSnapshot {
            categories: self.categories.clone(),
            totals,
            violations,
        }
    }
}
