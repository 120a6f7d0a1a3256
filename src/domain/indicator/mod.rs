//! Indicator module - Environmental indicator idents and values.

mod ident;
mod value;

pub use ident::{
    IndicatorIdent, ADP, GWP, ODP, PE, PENRE, PENRM, PENRT, PERE, PERM, PERT, PET, PE_EM, PE_N_EM,
};
pub use value::{BenchmarkScores, IndicatorValue, IndicatorValues};
