//! Date and calendar value types.
//!
//! - [`Date`]: a whole calendar day
//! - [`ZonedDate`]: a calendar day attached to an IANA timezone
//! - [`WeekendType`]: the weekend days of a provider

mod date;
mod weekend;
mod zoned;

pub(crate) use date::days_in_month;
pub use date::Date;
pub use weekend::WeekendType;
pub use zoned::ZonedDate;
