//! ComplianceMode - EN 15804 versus legacy primary energy idents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::indicator::{IndicatorIdent, PENRT, PERE, PERM, PERT, PE_EM, PE_N_EM};

/// Indicator naming scheme of a benchmark version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceMode {
    /// pere / perm / pert and penrt.
    En15804,
    /// peEm and peNEm.
    Legacy,
}

impl ComplianceMode {
    pub fn from_flag(en15804_compliant: bool) -> Self {
        if en15804_compliant {
            ComplianceMode::En15804
        } else {
            ComplianceMode::Legacy
        }
    }

    /// Picks En15804 as soon as a threshold table for one of its primary
    /// energy idents is configured.
    pub fn detect<V>(thresholds: &BTreeMap<IndicatorIdent, V>) -> Self {
        let en15804 = [PERE, PERM, PERT, PENRT]
            .iter()
            .any(|ident| thresholds.contains_key(*ident));
        Self::from_flag(en15804)
    }

    /// Renewable idents scored by their share of total primary energy.
    pub fn renewable_idents(&self) -> &'static [&'static str] {
        match self {
            ComplianceMode::En15804 => &[PERE, PERM, PERT],
            ComplianceMode::Legacy => &[PE_EM],
        }
    }

    pub fn renewable_total(&self) -> &'static str {
        match self {
            ComplianceMode::En15804 => PERT,
            ComplianceMode::Legacy => PE_EM,
        }
    }

    pub fn non_renewable_total(&self) -> &'static str {
        match self {
            ComplianceMode::En15804 => PENRT,
            ComplianceMode::Legacy => PE_N_EM,
        }
    }
}
