use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountError, command::AccountCommandError, ids::AccountId,
    transaction::Transaction,
};

pub mod user;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
    #[error("Account {0} is already part of this ledger")]
    DuplicateAccount(AccountId),
    #[error("Cannot transfer from account {0} to itself")]
    SameAccountTransfer(AccountId),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

impl From<AccountCommandError> for LedgerError {
    fn from(err: AccountCommandError) -> Self {
        Self::AccountErr(err.into())
    }
}

/// Both legs of a completed transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub withdrawal: Transaction,
    pub deposit: Transaction,
}

/// Use-case operations over a customer's accounts.
///
/// [`user::User`] is the in-memory implementation; the trait is the seam a
/// persistent store would plug into.
pub trait Ledger {
    fn account_balance(&self, account_id: &AccountId) -> Result<Decimal, LedgerError>;

    fn deposit_to_account(
        &mut self,
        account_id: &AccountId,
        amount: Decimal,
        notes: &str,
    ) -> Result<Transaction, LedgerError>;

    fn withdraw_from_account(
        &mut self,
        account_id: &AccountId,
        amount: Decimal,
        notes: &str,
    ) -> Result<Transaction, LedgerError>;

    /// Moves `amount` between two accounts of the same ledger.
    ///
    /// Either both legs are recorded or neither is.
    fn transfer_funds(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
        notes: &str,
    ) -> Result<Transfer, LedgerError>;

    /// Every recorded transaction, most recent first.
    fn transaction_history(&self) -> Vec<&Transaction>;
}
