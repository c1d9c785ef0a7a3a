//! Content models fetched from the CMS

pub mod collection;
pub mod dates;
pub mod property;

pub use collection::{Collection, PropertyRef, ShareEvent};
pub use property::{DateRange, Money, PropertyPricingProfile, SeasonalRate};
