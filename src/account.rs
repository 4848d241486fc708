use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::{
    command::{AccountCommandError, CreateTransactionCommand, TransactionKind},
    ids::AccountId,
    transaction::Transaction,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error(transparent)]
    InvalidCommand(#[from] AccountCommandError),
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Opening balance must not be negative, got {0}")]
    NegativeOpeningBalance(Decimal),
    #[error("Depositing {amount} would overflow balance {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    account_type: String,
    opening_balance: Decimal,
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        id: AccountId,
        account_type: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<Self, AccountError> {
        if opening_balance < Decimal::zero() {
            return Err(AccountError::NegativeOpeningBalance(opening_balance));
        }
        Ok(Self {
            id,
            account_type: account_type.into(),
            opening_balance,
            balance: opening_balance,
            transactions: Vec::new(),
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    /// Recorded transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn deposit(
        &mut self,
        amount: Decimal,
        notes: impl Into<String>,
    ) -> Result<Transaction, AccountError> {
        self.execute(CreateTransactionCommand::deposit(amount, notes)?)
    }

    /// Fails without touching the account when `amount` exceeds the balance.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        notes: impl Into<String>,
    ) -> Result<Transaction, AccountError> {
        self.execute(CreateTransactionCommand::withdrawal(amount, notes)?)
    }

    fn execute(&mut self, command: CreateTransactionCommand) -> Result<Transaction, AccountError> {
        let tx = self.handle_new_transaction(command)?;
        self.apply(&tx);
        Ok(tx)
    }

    /// Decides whether `command` can be recorded, without changing the account.
    pub(crate) fn handle_new_transaction(
        &self,
        command: CreateTransactionCommand,
    ) -> Result<Transaction, AccountError> {
        match command.kind {
            TransactionKind::Deposit => {
                if self.balance.checked_add(command.amount).is_none() {
                    return Err(AccountError::BalanceOverflow {
                        balance: self.balance,
                        amount: command.amount,
                    });
                }
            }
            TransactionKind::Withdrawal => {
                if command.amount > self.balance {
                    return Err(AccountError::InsufficientFunds {
                        requested: command.amount,
                        available: self.balance,
                    });
                }
            }
        }
        Ok(Transaction::new(
            self.id.clone(),
            command.kind,
            command.amount,
            command.notes,
        ))
    }

    /// Records a transaction produced by [`Self::handle_new_transaction`] on this
    /// account while its balance is unchanged.
    pub(crate) fn apply(&mut self, tx: &Transaction) {
        debug_assert_eq!(tx.account_id(), &self.id);
        self.balance += tx.signed_amount();
        self.transactions.push(tx.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checking(balance: i64) -> Account {
        Account::new(AccountId::from("account-1"), "Checking", Decimal::from(balance)).unwrap()
    }

    #[test]
    fn deposit_increases_balance_and_records_transaction() {
        let mut acc = checking(500);
        let tx = acc.deposit(Decimal::from(150), "payday").unwrap();

        assert_eq!(acc.balance(), Decimal::from(650));
        assert_eq!(acc.transactions().len(), 1);
        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(tx.amount(), Decimal::from(150));
        assert_eq!(tx.notes(), "payday");
        assert_eq!(tx.account_id(), acc.id());
        assert_eq!(&acc.transactions()[0], &tx);
    }

    #[test]
    fn withdrawal_over_balance_changes_nothing() {
        let mut acc = checking(500);
        let err = acc.withdraw(Decimal::from(700), "").unwrap_err();

        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: Decimal::from(700),
                available: Decimal::from(500),
            }
        );
        assert_eq!(acc.balance(), Decimal::from(500));
        assert!(acc.transactions().is_empty());
    }

    #[test]
    fn withdrawal_of_full_balance_leaves_zero() {
        let mut acc = checking(500);
        let tx = acc.withdraw(Decimal::from(500), "close out").unwrap();
        assert_eq!(tx.kind(), TransactionKind::Withdrawal);
        assert_eq!(acc.balance(), Decimal::zero());

        // nothing left to take
        let err = acc.withdraw(Decimal::new(1, 2), "").unwrap_err();
        assert!(matches!(err, AccountError::InsufficientFunds { .. }));
        assert_eq!(acc.transactions().len(), 1);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut acc = checking(100);
        let err = acc.deposit(Decimal::zero(), "").unwrap_err();
        assert!(matches!(
            err,
            AccountError::InvalidCommand(AccountCommandError::NonPositiveAmount {
                kind: TransactionKind::Deposit,
                ..
            })
        ));
        let err = acc.withdraw(Decimal::from(-20), "").unwrap_err();
        assert!(matches!(err, AccountError::InvalidCommand(_)));
        assert_eq!(acc.balance(), Decimal::from(100));
        assert!(acc.transactions().is_empty());
    }

    #[test]
    fn negative_opening_balance_is_rejected() {
        let err = Account::new(AccountId::from("account-9"), "Savings", Decimal::from(-1))
            .unwrap_err();
        assert_eq!(err, AccountError::NegativeOpeningBalance(Decimal::from(-1)));

        let acc = Account::new(AccountId::from("account-9"), "Savings", Decimal::zero()).unwrap();
        assert_eq!(acc.balance(), Decimal::zero());
        assert_eq!(acc.account_type(), "Savings");
    }

    #[test]
    fn balance_matches_opening_plus_recorded_transactions() {
        let mut acc = checking(40);
        let amounts = [
            (TransactionKind::Deposit, Decimal::new(1999, 2)),
            (TransactionKind::Withdrawal, Decimal::from(60)),
            (TransactionKind::Withdrawal, Decimal::from(5)),
            (TransactionKind::Deposit, Decimal::new(1, 1)),
            (TransactionKind::Withdrawal, Decimal::from(1000)),
            (TransactionKind::Withdrawal, Decimal::new(5509, 2)),
        ];
        for (kind, amount) in amounts {
            let _ = match kind {
                TransactionKind::Deposit => acc.deposit(amount, ""),
                TransactionKind::Withdrawal => acc.withdraw(amount, ""),
            };
            assert!(acc.balance() >= Decimal::zero());
        }

        let recorded: Decimal = acc.transactions().iter().map(Transaction::signed_amount).sum();
        assert_eq!(acc.balance(), acc.opening_balance() + recorded);
        // the 60 and 1000 withdrawals were rejected
        assert_eq!(acc.transactions().len(), 4);
        assert_eq!(acc.balance(), Decimal::zero());
    }

    #[test]
    fn deposit_that_would_overflow_is_rejected() {
        let mut acc = checking(500);
        let err = acc.deposit(Decimal::MAX, "jackpot").unwrap_err();
        assert_eq!(
            err,
            AccountError::BalanceOverflow {
                balance: Decimal::from(500),
                amount: Decimal::MAX,
            }
        );
        assert_eq!(acc.balance(), Decimal::from(500));
        assert!(acc.transactions().is_empty());

        // the full range is still usable from an empty account
        let mut empty = checking(0);
        empty.deposit(Decimal::MAX, "").unwrap();
        assert_eq!(empty.balance(), Decimal::MAX);
    }

    #[test]
    fn handle_new_transaction_leaves_account_untouched() {
        let acc = checking(10);
        let tx = acc
            .handle_new_transaction(CreateTransactionCommand::deposit(Decimal::from(5), "gift").unwrap())
            .unwrap();
        assert_eq!(tx.amount(), Decimal::from(5));
        assert_eq!(acc.balance(), Decimal::from(10));
        assert!(acc.transactions().is_empty());
    }
}
