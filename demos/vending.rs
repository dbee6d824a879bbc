//! Scripted walk through the vending workflow: register an account, stock a
//! machine, buy until the money or the snacks run out, then read the ledger.
//!
//! Run with `cargo run --example vending`.

use snack_machine::{Cents, Snack, Stock, VendingService};
use std::sync::Arc;

fn print_machine(service: &VendingService, machine_id: &str) -> anyhow::Result<()> {
    println!("  {:<28} {:>8} {:>7}", "Snack", "Price", "Amount");
    for stock in service.load_machine(machine_id)?.stocks() {
        println!(
            "  {:<28} {:>8} {:>7}",
            stock.snack().as_str(),
            format!("${}", stock.price()),
            stock.amount()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let db = sled::open("vending.db")?;
    db.clear()?;
    let service = VendingService::new(Arc::new(db));

    let account = service.register_account("Alice", Cents::from_dollars(20, 0))?;
    println!("Registered {} with ${}", account.name(), account.balance());

    let (machine_id, _) = service.register_machine(vec![
        Stock::new(Snack::Doritos, Cents::from_dollars(1, 50), 10)?,
        Stock::new(Snack::Oreos, Cents::from_dollars(2, 0), 5)?,
    ])?;
    service.restock(&machine_id, Stock::new(Snack::Pringles, Cents::from_dollars(3, 0), 2)?)?;

    println!("\nMachine {machine_id} stocked:");
    print_machine(&service, &machine_id)?;

    for snack in [Snack::Doritos, Snack::Oreos, Snack::Oreos] {
        let (account, _) = service.purchase("Alice", snack, &machine_id)?;
        println!(
            "\nBought {snack}; balance is now ${}",
            account.balance()
        );
    }

    // a snack the machine does not carry fails without touching any state
    if let Err(err) = service.purchase("Alice", Snack::Fritos, &machine_id) {
        println!("\nBuying Fritos failed as expected: {err}");
    }

    println!("\nMachine after purchases:");
    print_machine(&service, &machine_id)?;

    println!("\nReceipts for Alice:");
    for receipt in service.receipts_for("Alice")? {
        println!(
            "  {} ${} at {}",
            receipt.snack,
            receipt.price,
            receipt.issued_at.to_datetime_utc()
        );
    }

    Ok(())
}
