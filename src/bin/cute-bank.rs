use std::fs::File;

use anyhow::{Context, Result};
use cute_bank::{
    bin_utils::{Report, Service},
    ledger::user::User,
};
use rust_decimal::Decimal;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a file name as the first argument")?;
    let report: Report = match args.next() {
        Some(report) => report.parse()?,
        None => Report::default(),
    };
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let mut user = User::new("John Doe", "johndoe@example.com", "password");
    user.open_account("Checking", Decimal::from(500))?;
    user.open_account("Savings", Decimal::from(1000))?;

    let service = Service {
        user,
        input: file,
        output: &mut std::io::stdout(),
        report,
        error_printer: Box::new(|line, err| eprintln!("Error at line {line}: {err}")),
    };
    service.run()
}
