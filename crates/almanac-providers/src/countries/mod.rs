//! Country and region providers.
//!
//! Region providers (`Scotland`, `Bavaria`) delegate to their country and
//! edit the result.

mod argentina;
mod bavaria;
mod germany;
mod greece;
mod japan;
mod scotland;
mod united_kingdom;
mod usa;

pub use argentina::Argentina;
pub use bavaria::Bavaria;
pub use germany::Germany;
pub use greece::Greece;
pub use japan::Japan;
pub use scotland::Scotland;
pub use united_kingdom::UnitedKingdom;
pub use usa::Usa;
