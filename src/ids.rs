use std::fmt;

use serde::Serialize;

/// Identifier of an account, unique within the ledger that issued it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Hands out `account-1`, `account-2`, ... in order.
///
/// Each aggregate that opens accounts owns its own generator, so two ledgers
/// never share counter state.
#[derive(Debug, Default)]
pub struct AccountIdGenerator {
    issued: u64,
}

impl AccountIdGenerator {
    pub fn next_id(&mut self) -> AccountId {
        self.issued += 1;
        AccountId(format!("account-{}", self.issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ids = AccountIdGenerator::default();
        assert_eq!(ids.next_id(), AccountId::from("account-1"));
        assert_eq!(ids.next_id(), AccountId::from("account-2"));
        assert_eq!(ids.next_id().to_string(), "account-3");
    }

    #[test]
    fn generators_are_independent() {
        let mut a = AccountIdGenerator::default();
        let mut b = AccountIdGenerator::default();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id().as_str(), "account-1");
    }
}
