use rust_decimal::{Decimal, prelude::Zero};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount must be positive for {kind:?}, got {amount}")]
    NonPositiveAmount { kind: TransactionKind, amount: Decimal },
}

/// A request to record a new transaction against an account.
///
/// Holding one of these means the amount has already been checked; the
/// account only needs to decide whether it can afford it.
#[derive(Debug, Clone)]
pub struct CreateTransactionCommand {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub notes: String,
}

impl CreateTransactionCommand {
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        notes: impl Into<String>,
    ) -> Result<Self, AccountCommandError> {
        if amount > Decimal::zero() {
            Ok(Self {
                kind,
                amount,
                notes: notes.into(),
            })
        } else {
            Err(AccountCommandError::NonPositiveAmount { kind, amount })
        }
    }

    pub fn deposit(amount: Decimal, notes: impl Into<String>) -> Result<Self, AccountCommandError> {
        Self::new(TransactionKind::Deposit, amount, notes)
    }

    pub fn withdrawal(
        amount: Decimal,
        notes: impl Into<String>,
    ) -> Result<Self, AccountCommandError> {
        Self::new(TransactionKind::Withdrawal, amount, notes)
    }
}
