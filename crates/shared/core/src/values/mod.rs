/// Price in ticks
/// Signed so that negative input can be represented and rejected
pub type Price = i64;

/// Order quantity
/// Signed for the same reason as `Price`
pub type Quantity = i64;

/// Arrival sequence assigned by the engine, starting at 1
pub type Sequence = u64;
