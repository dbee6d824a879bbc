//! Timestamped purchase receipts, content-addressed by the hash of their
//! CBOR encoding.

use super::money::Cents;
use super::snack::Snack;
use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }

    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for TimeStamp<Utc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeZone> From<DateTime<T>> for TimeStamp<T> {
    fn from(value: DateTime<T>) -> Self {
        TimeStamp(value)
    }
}

impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        if let Some(nsec) = self.0.timestamp_nanos_opt() {
            return e.i64(nsec)?.ok();
        }

        Err(minicbor::encode::Error::message(
            "failed to encode timestamp. timestamp_nanos_opt returned None",
        ))
    }
}

impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let nsecs = d.i64()?;

        Ok(TimeStamp(DateTime::from_timestamp_nanos(nsecs)))
    }
}

/// One successful purchase, as recorded in the ledger.
#[derive(minicbor::Encode, minicbor::Decode, Debug, PartialEq, Eq, Clone)]
pub struct Receipt {
    #[n(0)]
    pub account: String,
    #[n(1)]
    pub snack: Snack,
    #[n(2)]
    pub price: Cents,
    #[n(3)]
    pub issued_at: TimeStamp<Utc>,
}

impl Receipt {
    pub fn new(account: impl Into<String>, snack: Snack, price: Cents) -> Self {
        Self {
            account: account.into(),
            snack,
            price,
            issued_at: TimeStamp::new(),
        }
    }

    /// Encode to CBOR and derive the content hash used as the storage key.
    pub fn sealed(&self) -> anyhow::Result<(String, Vec<u8>)> {
        let cbor = minicbor::to_vec(self)?;
        let hash = sha256::digest(&cbor);

        Ok((hash, cbor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_encoding() {
        let original = TimeStamp::new();

        let encoding = minicbor::to_vec(original.clone()).unwrap();
        let decode: TimeStamp<Utc> = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }

    #[test]
    fn receipt_encoding_roundtrips_through_seal() {
        let original = Receipt::new("Alice", Snack::Doritos, Cents::new(150));

        let (hash, cbor) = original.sealed().unwrap();
        let decode: Receipt = minicbor::decode(&cbor).unwrap();

        assert_eq!(original, decode);
        // same contents, same address
        assert_eq!(hash, original.sealed().unwrap().0);
    }
}
