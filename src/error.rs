#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValueError {
    #[error("Value must be strictly positive")]
    NotPositive,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Snack is not stocked or has run out")]
    InsufficientStock,
    #[error("Account balance is below the snack's price")]
    InsufficientFunds,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Malformed amount '{0}': expected dollars like 2, 2.5 or 2.50")]
pub struct ParseCentsError(pub String);
