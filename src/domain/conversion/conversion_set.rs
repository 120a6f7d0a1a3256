//! ConversionSet - undirected index of known conversions.

use std::collections::HashMap;

use super::Conversion;
use crate::domain::foundation::Unit;

/// Order-independent key of a unit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct UnitPair(Unit, Unit);

impl UnitPair {
    fn of(a: Unit, b: Unit) -> Self {
        if a <= b {
            UnitPair(a, b)
        } else {
            UnitPair(b, a)
        }
    }
}

/// Collection of known conversions with bidirectional lookup.
///
/// At most one conversion is stored per unordered unit pair. The direction
/// inserted first is authoritative; adding the same pair again, in either
/// direction, is a no-op. Lookups in the opposite direction return the
/// inverted conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSet {
    entries: Vec<Conversion>,
    index: HashMap<UnitPair, usize>,
}

impl ConversionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a conversion unless its unit pair is already present.
    pub fn add(&mut self, conversion: Conversion) {
        let key = UnitPair::of(conversion.from_unit(), conversion.to_unit());
        if self.index.contains_key(&key) {
            return;
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(conversion);
    }

    pub fn add_set(&mut self, other: &ConversionSet) {
        for conversion in other.iter() {
            self.add(*conversion);
        }
    }

    /// Returns a new set with the entries of `self` followed by those of `other`.
    pub fn union(&self, other: &ConversionSet) -> ConversionSet {
        let mut union = self.clone();
        union.add_set(other);
        union
    }

    /// Returns true if a conversion exists for the pair in either direction.
    pub fn has(&self, from: Unit, to: Unit) -> bool {
        self.index.contains_key(&UnitPair::of(from, to))
    }

    /// Returns true if a conversion was declared exactly in this direction.
    pub fn has_exact(&self, from: Unit, to: Unit) -> bool {
        self.stored(from, to)
            .map(|c| c.from_unit() == from && c.to_unit() == to)
            .unwrap_or(false)
    }

    /// Finds the conversion `from >> to`, inverting the stored one if it was
    /// declared in the opposite direction.
    pub fn find(&self, from: Unit, to: Unit) -> Option<Conversion> {
        let stored = self.stored(from, to)?;

        if stored.from_unit() == from {
            Some(*stored)
        } else {
            Some(stored.invert())
        }
    }

    /// Iterates conversions grouped by declared `from_unit` (first-seen order),
    /// each group in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Conversion> + '_ {
        let mut from_units: Vec<Unit> = Vec::new();
        for conversion in &self.entries {
            if !from_units.contains(&conversion.from_unit()) {
                from_units.push(conversion.from_unit());
            }
        }

        from_units.into_iter().flat_map(move |unit| {
            self.entries
                .iter()
                .filter(move |conversion| conversion.from_unit() == unit)
        })
    }

    pub fn to_vec(&self) -> Vec<Conversion> {
        self.iter().copied().collect()
    }

    /// Returns every unit referenced by a stored conversion, deduplicated in
    /// first-seen order.
    pub fn extract_units(&self) -> Vec<Unit> {
        let mut units = Vec::new();
        for conversion in self.iter() {
            for unit in [conversion.from_unit(), conversion.to_unit()] {
                if !units.contains(&unit) {
                    units.push(unit);
                }
            }
        }
        units
    }

    /// Returns conversions that have `unit` on either side.
    pub fn filter_by_unit(&self, unit: Unit) -> Vec<Conversion> {
        self.iter()
            .filter(|c| c.from_unit() == unit || c.to_unit() == unit)
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn stored(&self, from: Unit, to: Unit) -> Option<&Conversion> {
        self.index
            .get(&UnitPair::of(from, to))
            .map(|idx| &self.entries[*idx])
    }
}

impl FromIterator<Conversion> for ConversionSet {
    fn from_iter<I: IntoIterator<Item = Conversion>>(iter: I) -> Self {
        let mut set = ConversionSet::new();
        for conversion in iter {
            set.add(conversion);
        }
        set
    }
}

impl Extend<Conversion> for ConversionSet {
    fn extend<I: IntoIterator<Item = Conversion>>(&mut self, iter: I) {
        for conversion in iter {
            self.add(conversion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversion::ConversionType;
    use proptest::prelude::*;

    fn density() -> Conversion {
        Conversion::linear(Unit::CubicMeter, Unit::Kilogram, 500.0)
    }

    #[test]
    fn find_returns_exact_match() {
        let set: ConversionSet = vec![density()].into_iter().collect();
        assert_eq!(set.find(Unit::CubicMeter, Unit::Kilogram), Some(density()));
    }

    #[test]
    fn find_inverts_reverse_declared_conversion() {
        let set: ConversionSet = vec![density()].into_iter().collect();
        assert_eq!(
            set.find(Unit::Kilogram, Unit::CubicMeter),
            Some(Conversion::linear(Unit::Kilogram, Unit::CubicMeter, 1.0 / 500.0))
        );
    }

    #[test]
    fn same_unit_lookup_returns_stored_conversion() {
        let stored = Conversion::linear(Unit::Kilogram, Unit::Kilogram, 0.001);
        let set: ConversionSet = vec![stored].into_iter().collect();
        assert_eq!(set.find(Unit::Kilogram, Unit::Kilogram), Some(stored));
    }

    #[test]
    fn find_returns_none_for_unknown_pair() {
        let set: ConversionSet = vec![density()].into_iter().collect();
        assert_eq!(set.find(Unit::Piece, Unit::Kilogram), None);
        assert!(!set.has(Unit::Piece, Unit::Kilogram));
    }

    #[test]
    fn has_and_has_exact_follow_declared_direction() {
        let set: ConversionSet = vec![density()].into_iter().collect();
        assert!(set.has(Unit::CubicMeter, Unit::Kilogram));
        assert!(set.has(Unit::Kilogram, Unit::CubicMeter));
        assert!(set.has_exact(Unit::CubicMeter, Unit::Kilogram));
        assert!(!set.has_exact(Unit::Kilogram, Unit::CubicMeter));
    }

    #[test]
    fn first_inserted_direction_wins() {
        let mut set = ConversionSet::new();
        set.add(density());
        set.add(Conversion::linear(Unit::CubicMeter, Unit::Kilogram, 800.0));
        set.add(Conversion::linear(Unit::Kilogram, Unit::CubicMeter, 0.1));

        assert_eq!(set.len(), 1);
        assert_eq!(set.find(Unit::CubicMeter, Unit::Kilogram), Some(density()));
    }

    #[test]
    fn iteration_groups_by_declared_from_unit() {
        let set: ConversionSet = vec![
            Conversion::linear(Unit::CubicMeter, Unit::Kilogram, 500.0),
            Conversion::linear(Unit::Piece, Unit::Kilogram, 2.0),
            Conversion::linear(Unit::CubicMeter, Unit::SquareMeter, 10.0),
        ]
        .into_iter()
        .collect();

        let pairs: Vec<(Unit, Unit)> = set.iter().map(|c| (c.from_unit(), c.to_unit())).collect();
        assert_eq!(
            pairs,
            vec![
                (Unit::CubicMeter, Unit::Kilogram),
                (Unit::CubicMeter, Unit::SquareMeter),
                (Unit::Piece, Unit::Kilogram),
            ]
        );
    }

    #[test]
    fn extract_units_deduplicates_in_first_seen_order() {
        let set: ConversionSet = vec![
            Conversion::linear(Unit::CubicMeter, Unit::Kilogram, 500.0),
            Conversion::linear(Unit::Kilogram, Unit::Piece, 0.5),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            set.extract_units(),
            vec![Unit::CubicMeter, Unit::Kilogram, Unit::Piece]
        );
    }

    #[test]
    fn filter_by_unit_matches_both_sides() {
        let set: ConversionSet = vec![
            Conversion::linear(Unit::CubicMeter, Unit::Kilogram, 500.0),
            Conversion::linear(Unit::Piece, Unit::SquareMeter, 0.5),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.filter_by_unit(Unit::Kilogram).len(), 1);
        assert_eq!(set.filter_by_unit(Unit::SquareMeter).len(), 1);
        assert!(set.filter_by_unit(Unit::Megajoule).is_empty());
    }

    #[test]
    fn union_keeps_entries_of_left_side() {
        let left: ConversionSet = vec![density()].into_iter().collect();
        let right: ConversionSet = vec![
            Conversion::linear(Unit::Kilogram, Unit::CubicMeter, 0.1),
            Conversion::imported(Unit::KilowattHour, Unit::Megajoule, 3.6, ConversionType::EnergyEquivalent),
        ]
        .into_iter()
        .collect();

        let union = left.union(&right);
        assert_eq!(union.len(), 2);
        assert_eq!(union.find(Unit::CubicMeter, Unit::Kilogram), Some(density()));
        assert!(union.has(Unit::Megajoule, Unit::KilowattHour));
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn empty_set_reports_empty() {
        let set = ConversionSet::new();
        assert!(set.is_empty());
        assert!(set.extract_units().is_empty());
    }

    fn any_unit() -> impl Strategy<Value = Unit> {
        prop::sample::select(Unit::all())
    }

    proptest! {
        #[test]
        fn find_is_inverse_of_reverse_find(
            from in any_unit(),
            to in any_unit(),
            factor in 0.001f64..10_000.0,
        ) {
            prop_assume!(from != to);

            let set: ConversionSet = vec![Conversion::linear(from, to, factor)].into_iter().collect();
            let forward = set.find(from, to).unwrap();
            let reinverted = set.find(to, from).unwrap().invert();

            prop_assert_eq!(forward.from_unit(), reinverted.from_unit());
            prop_assert_eq!(forward.to_unit(), reinverted.to_unit());
            let (a, b) = (forward.factor().unwrap(), reinverted.factor().unwrap());
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
        }
    }
}
