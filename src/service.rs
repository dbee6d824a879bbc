//! Storage-backed service API over the pure vending core.
//!
//! The core only ever sees fully formed values; this layer owns the sled
//! keyspace, the CBOR encoding, and the atomicity of a purchase. A purchase
//! writes the new account, the new machine and the receipt in a single batch,
//! so the stored state can never show one side of the transaction without the
//! other.

use super::account::Account;
use super::error::PurchaseError;
use super::machine::{Machine, Stock};
use super::money::Cents;
use super::purchase::buy;
use super::receipt::Receipt;
use super::snack::Snack;
use bech32::Bech32m;
use sled::Batch;
use std::sync::Arc;
use uuid7::uuid7;

pub struct VendingService {
    instance: Arc<sled::Db>,
}

fn account_key(name: &str) -> String {
    format!("account/{name}")
}

fn receipt_key(name: &str, hash: &str) -> String {
    format!("receipt/{name}/{hash}")
}

// machine ids are uuid7s encoded with a human-readable prefix
fn new_machine_id() -> anyhow::Result<String> {
    let hrp = bech32::Hrp::parse("machine_")?;
    let encode = bech32::encode::<Bech32m>(hrp, uuid7().as_bytes())?;
    Ok(encode)
}

impl VendingService {
    pub fn new(instance: Arc<sled::Db>) -> Self {
        Self { instance }
    }

    /// Create and persist a new account. Names are the lookup key, so an
    /// already registered name is refused.
    pub fn register_account(
        &self,
        name: &str,
        opening_balance: Cents,
    ) -> anyhow::Result<Account> {
        if self.instance.contains_key(account_key(name))? {
            return Err(anyhow::anyhow!("Account '{name}' is already registered"));
        }

        let account = Account::new(name, opening_balance)?;
        self.instance
            .insert(account_key(name), minicbor::to_vec(&account)?)?;

        Ok(account)
    }

    pub fn load_account(&self, name: &str) -> anyhow::Result<Option<Account>> {
        match self.instance.get(account_key(name))? {
            Some(bytes) => Ok(Some(minicbor::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Persist a new machine with its initial stock list and hand back the
    /// generated id.
    pub fn register_machine(&self, stocks: Vec<Stock>) -> anyhow::Result<(String, Machine)> {
        let machine_id = new_machine_id()?;
        let machine = Machine::new(stocks);

        self.instance
            .insert(machine_id.as_bytes(), minicbor::to_vec(&machine)?)?;

        Ok((machine_id, machine))
    }

    pub fn load_machine(&self, machine_id: &str) -> anyhow::Result<Machine> {
        let bytes = self
            .instance
            .get(machine_id.as_bytes())?
            .ok_or_else(|| anyhow::anyhow!("No machine with id {machine_id}"))?;

        Ok(minicbor::decode(&bytes)?)
    }

    /// Put a snack's stock entry in place: replaces the existing entry for
    /// that snack, or appends one if the machine does not carry it yet.
    /// Machines maintained through here never hold duplicate entries.
    pub fn restock(&self, machine_id: &str, stock: Stock) -> anyhow::Result<Machine> {
        let machine = self.load_machine(machine_id)?;

        let machine = if machine.find_stock(stock.snack()).is_some() {
            machine.replace_stock(stock.snack(), stock)
        } else {
            let mut stocks = machine.stocks().to_vec();
            stocks.push(stock);
            Machine::new(stocks)
        };

        self.instance
            .insert(machine_id.as_bytes(), minicbor::to_vec(&machine)?)?;

        Ok(machine)
    }

    /// Run the purchase transition and persist its outcome atomically.
    ///
    /// Domain failures (`PurchaseError`) pass through inside the returned
    /// error and stay downcastable; nothing is written in that case.
    pub fn purchase(
        &self,
        account_name: &str,
        snack: Snack,
        machine_id: &str,
    ) -> anyhow::Result<(Account, Machine)> {
        let account = self
            .load_account(account_name)?
            .ok_or_else(|| anyhow::anyhow!("No account named '{account_name}'"))?;
        let machine = self.load_machine(machine_id)?;

        // price is read before the transition so the receipt can carry it;
        // an absent entry reports the same kind `buy` would
        let price = machine
            .find_stock(snack)
            .map(Stock::price)
            .ok_or(PurchaseError::InsufficientStock)?;

        let (new_account, new_machine) = buy(&account, snack, &machine)?;

        let receipt = Receipt::new(account_name, snack, price);
        let (hash, receipt_cbor) = receipt.sealed()?;

        let mut batch = Batch::default();
        batch.insert(
            account_key(account_name).into_bytes(),
            minicbor::to_vec(&new_account)?,
        );
        batch.insert(machine_id.as_bytes(), minicbor::to_vec(&new_machine)?);
        batch.insert(receipt_key(account_name, &hash).into_bytes(), receipt_cbor);
        self.instance.apply_batch(batch)?;

        Ok((new_account, new_machine))
    }

    /// All receipts recorded for an account. Keys are content hashes, so the
    /// order is key order, not purchase order; timestamps carry the latter.
    pub fn receipts_for(&self, account_name: &str) -> anyhow::Result<Vec<Receipt>> {
        let prefix = format!("receipt/{account_name}/");
        let mut receipts = Vec::new();

        for entry in self.instance.scan_prefix(prefix.as_bytes()) {
            let (_, bytes) = entry?;
            receipts.push(minicbor::decode(&bytes)?);
        }

        Ok(receipts)
    }
}
