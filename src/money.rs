//! Money as whole cents. Prices and balances never touch binary floats, so
//! `balance == price` at the boundary behaves exactly.

use super::error::{ParseCentsError, ValueError};
use std::fmt;
use std::str::FromStr;

// newtype over integer cents; u64 keeps balances non-negative by construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole dollars and cents, e.g. `Cents::from_dollars(1, 50)` is $1.50.
    pub const fn from_dollars(dollars: u64, cents: u64) -> Self {
        Self(dollars * 100 + cents)
    }

    pub const fn as_cents(self) -> u64 {
        self.0
    }

    /// Exact subtraction; `None` when the result would drop below zero.
    pub fn checked_sub(self, rhs: Cents) -> Option<Cents> {
        self.0.checked_sub(rhs.0).map(Cents)
    }

    pub fn checked_add(self, rhs: Cents) -> Option<Cents> {
        self.0.checked_add(rhs.0).map(Cents)
    }
}

/// Passes the amount through unchanged when it is strictly positive.
pub fn positive_cents(value: Cents) -> Result<Cents, ValueError> {
    if value > Cents::ZERO {
        Ok(value)
    } else {
        Err(ValueError::NotPositive)
    }
}

/// Same contract for counts (initial stock amounts).
pub fn positive_count(value: u32) -> Result<u32, ValueError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ValueError::NotPositive)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Cents {
    type Err = ParseCentsError;

    // accepts "2", "2.5" and "2.50"; anything else is malformed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseCentsError(s.to_string());

        let (dollars, frac) = match s.split_once('.') {
            Some((d, f)) => (d, f),
            None => (s, ""),
        };

        let dollars: u64 = dollars.parse().map_err(|_| malformed())?;
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| malformed())? * 10,
            2 => frac.parse().map_err(|_| malformed())?,
            _ => return Err(malformed()),
        };

        Ok(Cents(dollars * 100 + cents))
    }
}

impl<C> minicbor::Encode<C> for Cents {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        e.u64(self.0)?.ok()
    }
}

impl<'b, C> minicbor::Decode<'b, C> for Cents {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        Ok(Cents(d.u64()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_encoding() {
        let original = Cents::from_dollars(1, 50);

        let encoding = minicbor::to_vec(original).unwrap();
        let decode: Cents = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }

    #[test]
    fn parses_dollar_strings() {
        assert_eq!("2".parse::<Cents>().unwrap(), Cents::new(200));
        assert_eq!("2.5".parse::<Cents>().unwrap(), Cents::new(250));
        assert_eq!("2.50".parse::<Cents>().unwrap(), Cents::new(250));
        assert_eq!("0.05".parse::<Cents>().unwrap(), Cents::new(5));

        assert!("".parse::<Cents>().is_err());
        assert!("-1".parse::<Cents>().is_err());
        assert!("1.505".parse::<Cents>().is_err());
        assert!("one".parse::<Cents>().is_err());
    }

    #[test]
    fn displays_as_dollars() {
        assert_eq!(Cents::new(150).to_string(), "1.50");
        assert_eq!(Cents::new(5).to_string(), "0.05");
        assert_eq!(Cents::new(2000).to_string(), "20.00");
    }
}
