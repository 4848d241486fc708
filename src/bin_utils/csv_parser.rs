use std::io::Read;

use anyhow::Context;
use csv::{StringRecord, StringRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    Transfer,
}

/// One row of an operations script: `type,account,to,amount,notes`.
#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub account: String,
    pub to: Option<String>,
    pub amount: Decimal,
    pub notes: Option<String>,
}

/// Parses an operations script in CSV format, yielding each row with its line number.
pub struct CsvOperationParser<R> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers = reader
            .headers()
            .context("Failed to read CSV header")?
            .clone();

        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, anyhow::Result<Operation>);

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map_or(0, |pos| pos.line());
                return Some((line, Err(err.into())));
            }
        };
        let line = record.position().map_or(0, |pos| pos.line());
        let op = record
            .deserialize::<Operation>(Some(&self.headers))
            .with_context(|| format!("Malformed operation at line {line}"));
        Some((line, op))
    }
}
