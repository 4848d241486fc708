use std::collections::{HashMap, hash_map::Entry};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    account::Account,
    command::CreateTransactionCommand,
    ids::{AccountId, AccountIdGenerator},
    transaction::Transaction,
};

use super::{Ledger, LedgerError, Transfer};

/// A customer and the accounts they own.
pub struct User {
    name: String,
    email: String,
    password: String,
    ids: AccountIdGenerator,
    accounts: HashMap<AccountId, Account>,
    // insertion order of `accounts`
    order: Vec<AccountId>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            ids: AccountIdGenerator::default(),
            accounts: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn add_account(&mut self, account: Account) -> Result<(), LedgerError> {
        match self.accounts.entry(account.id().clone()) {
            Entry::Occupied(entry) => Err(LedgerError::DuplicateAccount(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(account = %entry.key(), kind = account.account_type(), "account added");
                self.order.push(entry.key().clone());
                entry.insert(account);
                Ok(())
            }
        }
    }

    /// Creates an account with the next free id and adds it.
    pub fn open_account(
        &mut self,
        account_type: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<AccountId, LedgerError> {
        let mut id = self.ids.next_id();
        // skip ids taken by accounts added from elsewhere
        while self.accounts.contains_key(&id) {
            id = self.ids.next_id();
        }
        let account = Account::new(id.clone(), account_type, opening_balance)?;
        self.add_account(account)?;
        Ok(id)
    }

    pub fn account(&self, account_id: &AccountId) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    /// Accounts in the order they were added.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.order.iter().filter_map(|id| self.accounts.get(id))
    }

    fn find(&self, account_id: &AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.clone()))
    }

    fn find_mut(&mut self, account_id: &AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.clone()))
    }

    fn record(
        &mut self,
        account_id: &AccountId,
        command: Result<CreateTransactionCommand, LedgerError>,
    ) -> Result<Transaction, LedgerError> {
        let account = self.find_mut(account_id)?;
        let tx = account.handle_new_transaction(command?)?;
        account.apply(&tx);
        Ok(tx)
    }

    fn try_transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
        notes: &str,
    ) -> Result<Transfer, LedgerError> {
        let source = self.find(from)?;
        let destination = self.find(to)?;
        if from == to {
            return Err(LedgerError::SameAccountTransfer(from.clone()));
        }

        // validate both legs before touching either account
        let withdrawal =
            source.handle_new_transaction(CreateTransactionCommand::withdrawal(amount, notes)?)?;
        let deposit =
            destination.handle_new_transaction(CreateTransactionCommand::deposit(amount, notes)?)?;

        self.find_mut(from)?.apply(&withdrawal);
        self.find_mut(to)?.apply(&deposit);
        Ok(Transfer {
            withdrawal,
            deposit,
        })
    }
}

impl Ledger for User {
    fn account_balance(&self, account_id: &AccountId) -> Result<Decimal, LedgerError> {
        self.find(account_id).map(Account::balance)
    }

    fn deposit_to_account(
        &mut self,
        account_id: &AccountId,
        amount: Decimal,
        notes: &str,
    ) -> Result<Transaction, LedgerError> {
        let command = CreateTransactionCommand::deposit(amount, notes).map_err(LedgerError::from);
        let result = self.record(account_id, command);
        match &result {
            Ok(_) => debug!(account = %account_id, %amount, "deposit recorded"),
            Err(err) => warn!(account = %account_id, %amount, %err, "deposit rejected"),
        }
        result
    }

    fn withdraw_from_account(
        &mut self,
        account_id: &AccountId,
        amount: Decimal,
        notes: &str,
    ) -> Result<Transaction, LedgerError> {
        let command =
            CreateTransactionCommand::withdrawal(amount, notes).map_err(LedgerError::from);
        let result = self.record(account_id, command);
        match &result {
            Ok(_) => debug!(account = %account_id, %amount, "withdrawal recorded"),
            Err(err) => warn!(account = %account_id, %amount, %err, "withdrawal rejected"),
        }
        result
    }

    fn transfer_funds(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
        notes: &str,
    ) -> Result<Transfer, LedgerError> {
        let result = self.try_transfer(from, to, amount, notes);
        match &result {
            Ok(_) => debug!(%from, %to, %amount, "transfer recorded"),
            Err(err) => warn!(%from, %to, %amount, %err, "transfer rejected"),
        }
        result
    }

    fn transaction_history(&self) -> Vec<&Transaction> {
        let mut history: Vec<&Transaction> = self
            .accounts()
            .flat_map(|account| account.transactions())
            .collect();
        history.sort_unstable_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        history
    }
}
