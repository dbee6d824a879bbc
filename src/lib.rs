pub mod account;
pub mod error;
pub mod machine;
pub mod money;
pub mod purchase;
pub mod receipt;
pub mod service;
pub mod snack;

pub use account::Account;
pub use error::{PurchaseError, ValueError};
pub use machine::{Machine, Stock};
pub use money::Cents;
pub use purchase::buy;
pub use service::VendingService;
pub use snack::Snack;
