pub mod channels;
pub mod error;

pub use channels::PlatformSettlementStandard;
pub use error::{AppError, Result};
