//! Buyer accounts: a balance and a most-recent-first purchase history.

use super::error::ValueError;
use super::money::{Cents, positive_cents};
use super::snack::Snack;

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    #[n(0)]
    name: String,
    #[n(1)]
    balance: Cents,
    #[n(2)]
    purchases: Vec<Snack>,
}

impl Account {
    /// Validated constructor: the opening balance must be strictly positive.
    /// The name carries no constraint; the storage layer is where uniqueness
    /// lives.
    pub fn new(name: impl Into<String>, balance: Cents) -> Result<Self, ValueError> {
        let balance = positive_cents(balance)?;

        Ok(Self {
            name: name.into(),
            balance,
            purchases: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Purchased snacks, most recent first.
    pub fn history(&self) -> &[Snack] {
        &self.purchases
    }

    /// The account after paying for `snack`. `new_balance` is the already
    /// checked remainder, so this cannot underflow; the snack goes to the
    /// front of the history.
    pub(crate) fn with_purchase(&self, snack: Snack, new_balance: Cents) -> Account {
        let mut purchases = Vec::with_capacity(self.purchases.len() + 1);
        purchases.push(snack);
        purchases.extend_from_slice(&self.purchases);

        Account {
            name: self.name.clone(),
            balance: new_balance,
            purchases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_encoding() {
        let original = Account::new("Alice", Cents::from_dollars(20, 0)).unwrap();

        let encoding = minicbor::to_vec(&original).unwrap();
        let decode: Account = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }

    #[test]
    fn new_account_starts_with_empty_history() {
        let account = Account::new("Alice", Cents::new(500)).unwrap();

        assert_eq!(account.name(), "Alice");
        assert_eq!(account.balance(), Cents::new(500));
        assert!(account.history().is_empty());
    }

    #[test]
    fn empty_name_is_accepted() {
        // deliberately unconstrained
        assert!(Account::new("", Cents::new(1)).is_ok());
    }
}
