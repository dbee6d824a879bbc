//! The purchase transition: the one place accounts and machines meet.

use super::account::Account;
use super::error::PurchaseError;
use super::machine::Machine;
use super::snack::Snack;

/// Validates a purchase against the current balance and stock, then derives
/// the new `(Account, Machine)` pair. The inputs are left untouched; either
/// both new values are returned or neither is.
///
/// Failure causes are checked in a fixed order so the reported kind is
/// deterministic: stock presence, then funds, then remaining amount. An
/// absent snack and one that has run out both read as `InsufficientStock`.
pub fn buy(
    account: &Account,
    snack: Snack,
    machine: &Machine,
) -> Result<(Account, Machine), PurchaseError> {
    let stock = machine
        .find_stock(snack)
        .ok_or(PurchaseError::InsufficientStock)?;

    // balance check comes before the amount check; exact integer subtraction,
    // so a balance equal to the price drains to exactly zero
    let remainder = account
        .balance()
        .checked_sub(stock.price())
        .ok_or(PurchaseError::InsufficientFunds)?;

    if stock.amount() == 0 {
        return Err(PurchaseError::InsufficientStock);
    }

    let new_account = account.with_purchase(snack, remainder);
    let new_machine = machine.replace_stock(snack, stock.one_vended());

    Ok((new_account, new_machine))
}
