use rust_decimal::Decimal;

/// Integer magnitude underlying a canonical value (pip count, tick count, line count)
pub type Measure = u32;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Monetary amount in some currency
pub type Amount = Decimal;
