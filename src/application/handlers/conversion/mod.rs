//! Conversion query handlers.

mod get_process_conversions;

pub use get_process_conversions::{
    ConversionFilter, GetProcessConversionsHandler, GetProcessConversionsQuery,
    GetProcessConversionsResult,
};
