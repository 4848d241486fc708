use std::io::Write;

use anyhow::Context;
use chrono::{DateTime, Utc};
use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{command::TransactionKind, ids::AccountId};

#[derive(Debug, Serialize)]
pub struct AccountRow<'a> {
    pub account: &'a AccountId,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub balance: Decimal,
    pub transactions: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryRow<'a> {
    pub date: DateTime<Utc>,
    pub account: &'a AccountId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub notes: &'a str,
}

pub fn print_rows<W, T>(output: &mut W, rows: impl Iterator<Item = T>) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        writer.serialize(row).context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV writer")
}
