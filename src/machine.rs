//! Stocks and the machine that holds them.
//!
//! Both are plain values. A purchase never mutates a machine; it derives a new
//! one with a single stock entry swapped out.

use super::error::ValueError;
use super::money::{Cents, positive_cents, positive_count};
use super::snack::Snack;

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    #[n(0)]
    snack: Snack,
    #[n(1)]
    price: Cents,
    #[n(2)]
    amount: u32,
}

impl Stock {
    /// Validated constructor. Price is checked before amount, so a stock with
    /// both fields invalid reports the price failure.
    pub fn new(snack: Snack, price: Cents, amount: u32) -> Result<Self, ValueError> {
        let price = positive_cents(price)?;
        let amount = positive_count(amount)?;

        Ok(Self {
            snack,
            price,
            amount,
        })
    }

    pub fn snack(&self) -> Snack {
        self.snack
    }

    pub fn price(&self) -> Cents {
        self.price
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// The stock after one unit has been vended. Only called once the amount
    /// has been checked to be non-zero.
    pub(crate) fn one_vended(&self) -> Stock {
        Stock {
            snack: self.snack,
            price: self.price,
            amount: self.amount - 1,
        }
    }
}

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    #[n(0)]
    stocks: Vec<Stock>,
}

impl Machine {
    /// Wraps the stock list as given. No de-duplication is performed; a list
    /// with two entries for the same snack keeps both (see `find_stock` and
    /// `replace_stock` for how duplicates behave).
    pub fn new(stocks: Vec<Stock>) -> Self {
        Self { stocks }
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// First stock entry for `snack`, if any. Linear scan, first match wins.
    pub fn find_stock(&self, snack: Snack) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.snack == snack)
    }

    /// A new machine with every entry for `snack` replaced by `new_stock`.
    /// With duplicate entries all of them end up holding the same value.
    pub fn replace_stock(&self, snack: Snack, new_stock: Stock) -> Machine {
        let stocks = self
            .stocks
            .iter()
            .map(|s| {
                if s.snack == snack {
                    new_stock.clone()
                } else {
                    s.clone()
                }
            })
            .collect();

        Machine { stocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_encoding() {
        let original = Stock::new(Snack::Cheetos, Cents::from_dollars(1, 25), 8).unwrap();

        let encoding = minicbor::to_vec(&original).unwrap();
        let decode: Stock = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }

    #[test]
    fn duplicate_entries_are_all_replaced() {
        let first = Stock::new(Snack::Fritos, Cents::new(100), 3).unwrap();
        let second = Stock::new(Snack::Fritos, Cents::new(200), 5).unwrap();
        let machine = Machine::new(vec![first.clone(), second]);

        // lookup sees the first entry
        assert_eq!(machine.find_stock(Snack::Fritos), Some(&first));

        let replacement = Stock::new(Snack::Fritos, Cents::new(150), 9).unwrap();
        let machine = machine.replace_stock(Snack::Fritos, replacement.clone());

        assert_eq!(machine.stocks(), &[replacement.clone(), replacement]);
    }
}
