//! Conversion module - Unit conversions and their bidirectional lookup.
//!
//! A conversion re-expresses a quantity of one unit in another unit for a
//! specific material. Conversions are stored per unordered unit pair and
//! inverted on demand.

mod conversion;
mod conversion_set;
mod conversion_type;
mod converter;
mod errors;

pub use conversion::Conversion;
pub use conversion_set::ConversionSet;
pub use conversion_type::ConversionType;
pub use converter::Converter;
pub use errors::ConversionError;
