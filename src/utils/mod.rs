pub mod dates;
pub mod errors;
pub mod format;

pub use dates::{iso_to_unix, millis_to_datetime, unix_to_date};
pub use errors::AppError;
pub use format::format_amount;
