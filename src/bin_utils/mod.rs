//! This module could be a separate crate on its own, to bootstrap [`crate::ledger`] within binary
//! but for simplicity it is part of the library.

use std::io::{Read, Write};

use crate::{
    ids::AccountId,
    ledger::{Ledger, LedgerError, user::User},
};
use anyhow::{Context, Result};
use csv_parser::{CsvOperationParser, Operation, OperationKind};
use csv_printer::{AccountRow, HistoryRow, print_rows};
pub mod csv_parser;
pub mod csv_printer;

/// What the service prints once every operation has been processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Report {
    #[default]
    Balances,
    History,
}

impl std::str::FromStr for Report {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "balances" => Ok(Self::Balances),
            "history" => Ok(Self::History),
            other => anyhow::bail!("Unknown report `{other}`, expected `balances` or `history`"),
        }
    }
}

pub struct Service<'w, R, W: 'w> {
    pub user: User,
    pub input: R,
    pub output: &'w mut W,
    pub report: Report,
    pub error_printer: Box<dyn FnMut(u64, LedgerError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input)?;

        for (line, row) in parser {
            let op = row?;
            if let Err(err) = execute(&mut self.user, op) {
                (self.error_printer)(line, err);
            }
        }

        let printed = match self.report {
            Report::Balances => print_rows(
                self.output,
                self.user.accounts().map(|acc| AccountRow {
                    account: acc.id(),
                    kind: acc.account_type(),
                    balance: acc.balance(),
                    transactions: acc.transactions().len(),
                }),
            ),
            Report::History => print_rows(
                self.output,
                self.user
                    .transaction_history()
                    .into_iter()
                    .map(|tx| HistoryRow {
                        date: tx.timestamp(),
                        account: tx.account_id(),
                        kind: tx.kind(),
                        amount: tx.amount(),
                        notes: tx.notes(),
                    }),
            ),
        };
        printed.context("Failed to print report")
    }
}

fn execute(user: &mut impl Ledger, op: Operation) -> Result<(), LedgerError> {
    let account = AccountId::from(op.account);
    let notes = op.notes.unwrap_or_default();
    match op.kind {
        OperationKind::Deposit => user
            .deposit_to_account(&account, op.amount, &notes)
            .map(drop),
        OperationKind::Withdrawal => user
            .withdraw_from_account(&account, op.amount, &notes)
            .map(drop),
        OperationKind::Transfer => {
            // a transfer without a destination can never match an account
            let to = AccountId::from(op.to.unwrap_or_default());
            user.transfer_funds(&account, &to, op.amount, &notes)
                .map(drop)
        }
    }
}
