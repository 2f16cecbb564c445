//! Unit and table representation

use std::collections::HashMap;
use calcpro_core::QuantityKind;
use crate::Transform;

/// A unit within a quantity kind
#[derive(Debug, Clone)]
pub struct UnitDef {
    /// Identifier used by callers and storage (e.g. "meters")
    pub id: &'static str,
    /// Human-readable label (e.g. "Meters")
    pub label: &'static str,
    /// Short display symbol, where one exists (e.g. "m")
    pub symbol: Option<&'static str>,
    /// Mapping from this unit into the kind's base unit
    pub to_base: Transform,
}

/// Conversion table for one quantity kind.
///
/// Every unit carries a transform into the kind's canonical base unit, so
/// any pair is reachable via a two-hop path. The direct table holds the
/// pairs whose tabulated constant is exact by definition (feet↔inches is
/// exactly 12, km↔miles exactly 1.609344) and would pick up rounding noise
/// if routed through the base.
#[derive(Debug)]
pub struct KindTable {
    kind: QuantityKind,
    base: &'static str,
    units: Vec<UnitDef>,
    direct: HashMap<(&'static str, &'static str), Transform>,
}

impl KindTable {
    pub fn new(kind: QuantityKind, base: &'static str) -> Self {
        KindTable {
            kind,
            base,
            units: Vec::new(),
            direct: HashMap::new(),
        }
    }

    pub fn kind(&self) -> QuantityKind {
        self.kind
    }

    /// Identifier of the canonical base unit
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// All units of this kind, in registration order
    pub fn units(&self) -> &[UnitDef] {
        &self.units
    }

    /// Look up a unit by identifier
    pub fn unit(&self, id: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Direct table entry for a pair, if one is tabulated
    pub fn direct(&self, from: &str, to: &str) -> Option<Transform> {
        self.direct.get(&(from, to)).copied().or_else(|| {
            // Direct entries are registered forward; derive the reverse
            // so both directions stay mutual inverses of one constant.
            self.direct.get(&(to, from)).map(|t| t.invert())
        })
    }

    pub(crate) fn register(&mut self, unit: UnitDef) {
        debug_assert!(self.unit(unit.id).is_none(), "duplicate unit {}", unit.id);
        self.units.push(unit);
    }

    pub(crate) fn register_direct(&mut self, from: &'static str, to: &'static str, t: Transform) {
        self.direct.insert((from, to), t);
    }
}
