//! Transaction service
//!
//! Records, edits and removes income and expense entries. Each transaction
//! carries a copy of its category's name and icon, refreshed on every save, so
//! listings still make sense after the category is gone.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{CategoryId, Money, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Input for creating or replacing a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    pub category_id: CategoryId,
    pub date: NaiveDate,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// The category must exist; its name and icon are copied onto the record.
    pub fn add(&self, input: NewTransaction) -> PlannerResult<Transaction> {
        validate_amount(input.amount)?;

        let category = self
            .storage
            .with_state(|state| {
                state
                    .categories
                    .iter()
                    .find(|c| c.id == input.category_id)
                    .cloned()
            })?
            .ok_or_else(|| {
                warn!(category = %input.category_id, "rejected transaction for unknown category");
                PlannerError::category_not_found(input.category_id.to_string())
            })?;

        let txn = Transaction::new(
            input.kind,
            input.amount,
            input.description.trim(),
            &category,
            input.date,
        );

        self.storage
            .update(|state| state.transactions.push(txn.clone()))?;
        self.storage.save()?;

        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");
        Ok(txn)
    }

    /// Replace every field of an existing transaction, keeping its id
    ///
    /// The category snapshot is refreshed only when the new category exists;
    /// otherwise the previous name and icon stay on the record.
    pub fn edit(&self, id: TransactionId, input: NewTransaction) -> PlannerResult<Transaction> {
        validate_amount(input.amount)?;

        let updated = self.storage.update(|state| {
            let category = state
                .categories
                .iter()
                .find(|c| c.id == input.category_id)
                .cloned();

            let txn = state.transactions.iter_mut().find(|t| t.id == id)?;
            txn.kind = input.kind;
            txn.amount = input.amount;
            txn.description = input.description.trim().to_string();
            txn.category_id = input.category_id;
            txn.date = input.date;

            match category {
                Some(category) => txn.refresh_category(&category),
                None => warn!(
                    id = %id,
                    category = %input.category_id,
                    "edited transaction points at a missing category; keeping old snapshot"
                ),
            }

            Some(txn.clone())
        })?;

        let txn = updated.ok_or_else(|| PlannerError::transaction_not_found(id.to_string()))?;
        self.storage.save()?;

        info!(id = %txn.id, "edited transaction");
        Ok(txn)
    }

    /// Remove a transaction
    pub fn delete(&self, id: TransactionId) -> PlannerResult<Transaction> {
        let removed = self.storage.update(|state| {
            let index = state.transactions.iter().position(|t| t.id == id)?;
            Some(state.transactions.remove(index))
        })?;

        let txn = removed.ok_or_else(|| PlannerError::transaction_not_found(id.to_string()))?;
        self.storage.save()?;

        info!(id = %txn.id, "deleted transaction");
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> PlannerResult<Option<Transaction>> {
        self.storage
            .with_state(|state| state.transactions.iter().find(|t| t.id == id).cloned())
    }

    /// Resolve a user-typed reference: full UUID, `txn-xxxxxxxx` or a hex prefix
    pub fn find(&self, reference: &str) -> PlannerResult<Transaction> {
        let mut matches = self.storage.with_state(|state| {
            state
                .transactions
                .iter()
                .filter(|t| t.id.matches_ref(reference))
                .cloned()
                .collect::<Vec<_>>()
        })?;

        match matches.len() {
            0 => Err(PlannerError::transaction_not_found(reference)),
            1 => Ok(matches.remove(0)),
            n => Err(PlannerError::Validation(format!(
                "Transaction reference '{}' is ambiguous ({} matches)",
                reference, n
            ))),
        }
    }

    /// All transactions in stored order
    pub fn list(&self) -> PlannerResult<Vec<Transaction>> {
        self.storage.transactions()
    }
}

fn validate_amount(amount: Money) -> PlannerResult<()> {
    if amount.is_negative() {
        warn!(amount = %amount, "rejected negative transaction amount");
        return Err(PlannerError::Validation(format!(
            "Transaction amount cannot be negative: {}",
            amount
        )));
    }
    Ok(())
}
