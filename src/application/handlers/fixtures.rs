//! Records shared by the handler tests.

use std::collections::BTreeMap;

use crate::domain::foundation::{ProcessConfigId, ProcessDbId, ProcessLifeCycleId};
use crate::ports::{
    ConversionRecord, ProcessLifeCycleRecord, ProcessRecord, QuantityRecord,
};

pub fn life_cycle_id() -> ProcessLifeCycleId {
    ProcessLifeCycleId::new(ProcessDbId::new(1), ProcessConfigId::new(5))
}

fn values(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn process(id: i64, module: &str, value: f64, unit: &str, ratio: f64, indicators: &[(&str, f64)]) -> ProcessRecord {
    ProcessRecord {
        process_id: id,
        module: module.to_string(),
        quantity: QuantityRecord {
            value,
            unit: unit.to_string(),
        },
        name: format!("Process {}", id),
        ratio,
        indicator_values: values(indicators),
    }
}

fn conversion(from: &str, to: &str, factor: f64) -> ConversionRecord {
    ConversionRecord {
        from_unit: from.to_string(),
        to_unit: to.to_string(),
        factor,
        conversion_type: None,
    }
}

/// Concrete: A1-3 per m3, C3 per kg at half ratio.
///
/// m3 → kg is required, m2 → kg touches a required unit, m → m2 is unrelated.
pub fn concrete_life_cycle() -> ProcessLifeCycleRecord {
    ProcessLifeCycleRecord {
        process_config_id: 5,
        process_db_id: 1,
        processes: vec![
            process(51, "A1-3", 1.0, "m3", 1.0, &[("gwp", 240.0), ("pert", 100.0), ("penrt", 1000.0)]),
            process(52, "C3", 1.0, "kg", 0.5, &[("gwp", 0.01)]),
        ],
        conversions: vec![
            conversion("m3", "kg", 2400.0),
            conversion("m2", "kg", 480.0),
            conversion("m", "m2", 1.0),
        ],
    }
}
