use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{command::TransactionKind, ids::AccountId};

/// Immutable record of one balance change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    account_id: AccountId,
    timestamp: DateTime<Utc>,
    kind: TransactionKind,
    amount: Decimal,
    notes: String,
}

impl Transaction {
    pub(crate) fn new(
        account_id: AccountId,
        kind: TransactionKind,
        amount: Decimal,
        notes: String,
    ) -> Self {
        Self {
            account_id,
            timestamp: Utc::now(),
            kind,
            amount,
            notes,
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Balance change this transaction causes: deposits positive, withdrawals negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }
}
