/// Account identifiers and the generator that issues them.
pub mod ids;

/// A single account: balance plus its append-only transaction log.
/// Changes go through [`command`]s that are turned into transactions and then applied.
pub mod account;

/// Validated requests to record a deposit or a withdrawal against an [`account`].
pub mod command;

/// Immutable records of a single balance change.
pub mod transaction;

/// The [`ledger::Ledger`] interface over a customer's accounts, plus the
/// in-memory [`ledger::user::User`] implementation. Transfers and the merged
/// transaction history live here.
pub mod ledger;

/// Bootstraps the ledger from a CSV script of operations. Kept in the library
/// so integration tests can drive it the same way the binary does.
pub mod bin_utils;
