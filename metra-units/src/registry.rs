//! Unit registry
//!
//! Runtime index of unit proxies and derived-unit relations. Lookup is by
//! name (case-insensitive) or by any of a unit's symbols (exact).

use std::collections::{HashMap, HashSet};

use tracing::{debug, error, warn};
use metra_core::{Family, FormatTemplate, UnitError};

use crate::compose::{Operator, Relation};
use crate::{units, AnyQuantity, ConversionContext, Unit, UnitProxy};

/// Registered units and relations
pub struct UnitRegistry {
    units: Vec<&'static dyn UnitProxy>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<&'static str, usize>,
    relations: Vec<Relation>,
    duplicates: Vec<String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            by_name: HashMap::new(),
            by_symbol: HashMap::new(),
            relations: Vec::new(),
            duplicates: Vec::new(),
        }
    }

    /// The whole built-in catalogue, validated.
    pub fn standard() -> Result<Self, UnitError> {
        let registry = Self::new()
            .with_units(units::all())
            .with_relations(units::relations());
        registry.validate()?;
        debug!(units = registry.len(), relations = registry.relations.len(), "standard registry ready");
        Ok(registry)
    }

    pub fn with_unit<U: Unit>(self) -> Self {
        self.with_proxy(U::proxy())
    }

    pub fn with_proxy(mut self, unit: &'static dyn UnitProxy) -> Self {
        let key = unit.name().to_lowercase();
        if self.by_name.contains_key(&key) {
            warn!(unit = unit.name(), "unit registered twice");
            self.duplicates.push(unit.name().to_string());
            return self;
        }

        let index = self.units.len();
        for symbol in unit.symbols().iter().filter(|s| !s.is_empty()) {
            match self.by_symbol.get(symbol) {
                Some(&other) => warn!(
                    symbol,
                    unit = unit.name(),
                    owner = self.units[other].name(),
                    "symbol already taken"
                ),
                None => {
                    self.by_symbol.insert(symbol, index);
                }
            }
        }
        self.by_name.insert(key, index);
        self.units.push(unit);
        debug!(unit = unit.name(), family = %unit.family(), "registered unit");
        self
    }

    pub fn with_units(self, units: impl IntoIterator<Item = &'static dyn UnitProxy>) -> Self {
        units.into_iter().fold(self, Self::with_proxy)
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn with_relations(mut self, relations: impl IntoIterator<Item = Relation>) -> Self {
        self.relations.extend(relations);
        self
    }

    // ── Lookup ──────────────────────────────────────────────────────────────

    pub fn get(&self, name: &str) -> Option<&'static dyn UnitProxy> {
        self.by_name.get(&name.to_lowercase()).map(|&i| self.units[i])
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&'static dyn UnitProxy> {
        self.by_symbol.get(symbol).map(|&i| self.units[i])
    }

    /// Name or symbol
    pub fn lookup(&self, name: &str) -> Result<&'static dyn UnitProxy, UnitError> {
        self.get(name)
            .or_else(|| self.by_symbol(name))
            .ok_or_else(|| self.unknown(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Units of one family, in registration order
    pub fn family(&self, family: Family) -> Vec<&'static dyn UnitProxy> {
        self.units.iter().copied().filter(|u| u.family() == family).collect()
    }

    pub fn units(&self) -> &[&'static dyn UnitProxy] {
        &self.units
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// `UnknownUnit` carrying the closest registered names
    pub fn unknown(&self, name: &str) -> UnitError {
        UnitError::UnknownUnit {
            name: name.to_string(),
            suggestions: self.find_similar(name).into_iter().take(5).collect(),
        }
    }

    fn find_similar(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .units
            .iter()
            .filter_map(|unit| {
                let score = Self::similarity_score(&query, &unit.name().to_lowercase());
                (score > 0).then(|| (unit.name().to_string(), score))
            })
            .collect();

        // higher is closer; ties keep registration order
        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;
        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();

        // mostly shared letters, or nothing
        if score == 0 && common * 4 < query_chars.len() * 3 {
            return 0;
        }
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 {
            score += 5 - len_diff;
        }
        score
    }

    // ── Checks ──────────────────────────────────────────────────────────────

    /// Every family has one dimension; every factor is finite and positive;
    /// names are unique; format templates parse.
    pub fn check_families(&self) -> Result<(), UnitError> {
        if let Some(name) = self.duplicates.first() {
            error!(unit = name.as_str(), "duplicate unit");
            return Err(UnitError::DuplicateUnit(name.clone()));
        }

        let mut first_of: HashMap<Family, &'static dyn UnitProxy> = HashMap::new();
        for &unit in &self.units {
            let factor = unit.factor();
            if !(factor.is_finite() && factor > 0.0) {
                error!(unit = unit.name(), factor, "invalid factor");
                return Err(UnitError::InvalidFactor { unit: unit.name().to_string(), factor });
            }

            FormatTemplate::parse(unit.format())?;

            let first = *first_of.entry(unit.family()).or_insert(unit);
            if first.sense() != unit.sense() {
                error!(
                    family = %unit.family(),
                    first = first.name(),
                    unit = unit.name(),
                    "family mixes dimensions"
                );
                return Err(UnitError::InconsistentFamily {
                    family: unit.family(),
                    first: first.name().to_string(),
                    first_sense: first.sense(),
                    unit: unit.name().to_string(),
                    sense: unit.sense(),
                });
            }
        }
        Ok(())
    }

    /// Every relation obeys the dimension and factor laws.
    pub fn verify_relations(&self) -> Result<(), UnitError> {
        for relation in &self.relations {
            if let Err(err) = relation.check() {
                error!(%relation, %err, "relation violated");
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), UnitError> {
        self.check_families()?;
        self.verify_relations()
    }

    // ── Runtime operations ──────────────────────────────────────────────────

    /// The declared relation for `lhs op rhs`: exact operand units first,
    /// then any relation over the operands' families.
    pub fn relation(&self, lhs: &dyn UnitProxy, op: Operator, rhs: &dyn UnitProxy) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|r| r.matches(lhs, op, rhs))
            .or_else(|| self.relations.iter().find(|r| r.accepts(lhs, op, rhs)))
    }

    pub fn compose(
        &self,
        a: &AnyQuantity,
        op: Operator,
        b: &AnyQuantity,
        ctx: &ConversionContext,
    ) -> Result<AnyQuantity, UnitError> {
        let relation = self.relation(a.unit(), op, b.unit()).ok_or_else(|| UnitError::NoRelation {
            lhs: a.unit().name().to_string(),
            op: op.symbol(),
            rhs: b.unit().name().to_string(),
        })?;
        relation.apply(a, b, ctx)
    }

    pub fn multiply(&self, a: &AnyQuantity, b: &AnyQuantity, ctx: &ConversionContext) -> Result<AnyQuantity, UnitError> {
        self.compose(a, Operator::Multiply, b, ctx)
    }

    pub fn divide(&self, a: &AnyQuantity, b: &AnyQuantity, ctx: &ConversionContext) -> Result<AnyQuantity, UnitError> {
        self.compose(a, Operator::Divide, b, ctx)
    }

    /// Converts into the unit named (or symbolised) `target`.
    pub fn convert(&self, quantity: &AnyQuantity, target: &str, ctx: &ConversionContext) -> Result<AnyQuantity, UnitError> {
        quantity.convert_to(self.lookup(target)?, ctx)
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use metra_core::Dimension;

    #[test]
    fn test_standard_is_valid() {
        let registry = UnitRegistry::standard().unwrap();
        assert!(registry.len() > 50);
        assert!(!registry.relations().is_empty());
        for unit in all() {
            assert!(registry.contains(unit.name()), "{} missing", unit.name());
        }
    }

    #[test]
    fn test_lookup_by_name_and_symbol() {
        let registry = UnitRegistry::standard().unwrap();
        assert!(registry.get("meter").unwrap().is(Meter::proxy()));
        assert!(registry.get("Meter").unwrap().is(Meter::proxy()));
        assert!(registry.get("usd").unwrap().is(Usd::proxy()));
        assert!(registry.by_symbol("deg").unwrap().is(Degree::proxy()));
        assert!(registry.by_symbol("°").unwrap().is(Degree::proxy()));
        assert!(registry.lookup("kPa").unwrap().is(Kilopascal::proxy()));
        assert!(registry.by_symbol("m").unwrap().is(Meter::proxy()));
    }

    #[test]
    fn test_unknown_with_suggestions() {
        let registry = UnitRegistry::standard().unwrap();
        match registry.lookup("metr").unwrap_err() {
            UnitError::UnknownUnit { name, suggestions } => {
                assert_eq!(name, "metr");
                assert!(suggestions.iter().any(|s| s == "meter"));
                assert!(suggestions.len() <= 5);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(registry.lookup("zzzz"), Err(UnitError::UnknownUnit { .. })));
    }

    #[test]
    fn test_family() {
        let registry = UnitRegistry::standard().unwrap();
        let currencies = registry.family(Family::CURRENCY);
        assert!(currencies.iter().any(|u| u.is(Eur::proxy())));
        assert!(currencies.iter().all(|u| u.is_volatile()));
        assert!(registry.family(Family::LENGTH).iter().all(|u| u.sense() == Dimension::LENGTH));
    }

    #[test]
    fn test_duplicate_rejected() {
        let registry = UnitRegistry::new().with_unit::<Meter>().with_unit::<Meter>();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.validate(), Err(UnitError::DuplicateUnit("meter".to_string())));
    }

    mod bad {
        use crate::{define_kind, define_unit, Dimension, Family};

        define_kind!(Odd => Family::LENGTH);
        define_unit!(Skewed, Skeweds {
            kind: Odd,
            name: "broken_length",
            sense: Dimension::TIME,
            factor: 1.0,
            symbols: ["bl"],
        });
        define_unit!(Zero, Zeros {
            kind: Odd,
            name: "zero_length",
            sense: Dimension::LENGTH,
            factor: 0.0,
            symbols: ["zl"],
        });
    }

    #[test]
    fn test_inconsistent_family() {
        let registry = UnitRegistry::new().with_unit::<Meter>().with_unit::<bad::Skewed>();
        match registry.check_families().unwrap_err() {
            UnitError::InconsistentFamily { family, first, unit, .. } => {
                assert_eq!(family, Family::LENGTH);
                assert_eq!(first, "meter");
                assert_eq!(unit, "broken_length");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_invalid_factor() {
        let registry = UnitRegistry::new().with_unit::<bad::Zero>();
        assert!(matches!(registry.validate(), Err(UnitError::InvalidFactor { .. })));
    }

    #[test]
    fn test_bad_relation_rejected() {
        let registry = UnitRegistry::new()
            .with_unit::<Volt>()
            .with_relation(Relation::of::<Volt, Second, Watt>(Operator::Multiply));
        assert!(registry.check_families().is_ok());
        assert!(matches!(registry.validate(), Err(UnitError::RelationViolation { .. })));
    }

    #[test]
    fn test_multiply_and_divide() {
        let registry = UnitRegistry::standard().unwrap();
        let ctx = ConversionContext::default();

        let w = registry.multiply(&Volts::new(2.0).erase(), &Amperes::new(3.0).erase(), &ctx).unwrap();
        assert_eq!(w, Watts::new(6.0).erase());
        let w = registry.multiply(&Amperes::new(3.0).erase(), &Volts::new(2.0).erase(), &ctx).unwrap();
        assert_eq!(w, Watts::new(6.0).erase());

        let a = registry.divide(&Coulombs::new(9.0).erase(), &Seconds::new(3.0).erase(), &ctx).unwrap();
        assert_eq!(a, Amperes::new(3.0).erase());

        let err = registry.multiply(&Seconds::new(1.0).erase(), &Eur::proxy().create(1.0), &ctx).unwrap_err();
        assert_eq!(
            err,
            UnitError::NoRelation { lhs: "second".to_string(), op: '*', rhs: "EUR".to_string() }
        );
    }

    #[test]
    fn test_multiply_prefers_exact_units() {
        let registry = UnitRegistry::standard().unwrap();
        let ctx = ConversionContext::default();
        let e = registry.multiply(&Kilowatts::new(2.0).erase(), &Hours::new(3.0).erase(), &ctx).unwrap();
        assert_eq!(e, KilowattHours::new(6.0).erase());
    }

    #[test]
    fn test_convert_by_name() {
        let registry = UnitRegistry::standard().unwrap();
        let ctx = ConversionContext::default();
        let mm = registry.convert(&Meters::new(1.0).erase(), "mm", &ctx).unwrap();
        assert_eq!(mm, Millimeters::new(1000.0).erase());
        assert!(registry.convert(&Feet::new(1.0).erase(), "second", &ctx).unwrap_err().is_incompatible());
        assert!(matches!(
            registry.convert(&Feet::new(1.0).erase(), "furlongs", &ctx),
            Err(UnitError::UnknownUnit { .. })
        ));
    }
}
