//! IndicatorIdent - short code of an environmental indicator.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Total primary energy.
pub const PET: &str = "pet";
/// Renewable primary energy used as energy carrier (EN 15804).
pub const PERE: &str = "pere";
/// Renewable primary energy used as material (EN 15804).
pub const PERM: &str = "perm";
/// Total renewable primary energy (EN 15804).
pub const PERT: &str = "pert";
/// Non-renewable primary energy used as energy carrier (EN 15804).
pub const PENRE: &str = "penre";
/// Non-renewable primary energy used as material (EN 15804).
pub const PENRM: &str = "penrm";
/// Total non-renewable primary energy (EN 15804).
pub const PENRT: &str = "penrt";
/// Renewable primary energy (legacy).
pub const PE_EM: &str = "peEm";
/// Non-renewable primary energy (legacy).
pub const PE_N_EM: &str = "peNEm";
/// Global warming potential.
pub const GWP: &str = "gwp";
/// Ozone depletion potential.
pub const ODP: &str = "odp";
/// Abiotic depletion potential.
pub const ADP: &str = "adp";
/// Derived primary energy score emitted by the fixed-values benchmark.
pub const PE: &str = "pe";

/// Ident of an environmental indicator, e.g. `gwp` or `penrt`.
///
/// Idents are case-sensitive (`peEm` and `peem` differ).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IndicatorIdent(String);

impl IndicatorIdent {
    /// Creates an ident, rejecting blank input.
    pub fn new(ident: impl Into<String>) -> Result<Self, ValidationError> {
        let ident = ident.into();
        let trimmed = ident.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("indicator"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// peEm, pere, perm and pert.
    pub fn is_renewable_primary_energy(&self) -> bool {
        matches!(self.as_str(), PE_EM | PERE | PERM | PERT)
    }

    /// peNEm, penre, penrm and penrt.
    pub fn is_non_renewable_primary_energy(&self) -> bool {
        matches!(self.as_str(), PE_N_EM | PENRE | PENRM | PENRT)
    }

    pub fn is_primary_energy(&self) -> bool {
        matches!(self.as_str(), PET | PE)
            || self.is_renewable_primary_energy()
            || self.is_non_renewable_primary_energy()
    }
}

impl From<&'static str> for IndicatorIdent {
    /// Wraps a known ident constant such as [`PET`].
    fn from(ident: &'static str) -> Self {
        Self(ident.to_string())
    }
}

impl Borrow<str> for IndicatorIdent {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndicatorIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IndicatorIdent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorIdent::new(s)
    }
}

impl TryFrom<String> for IndicatorIdent {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        IndicatorIdent::new(value)
    }
}

impl From<IndicatorIdent> for String {
    fn from(ident: IndicatorIdent) -> Self {
        ident.0
    }
}
