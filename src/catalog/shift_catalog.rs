//! Storage and lookup of shift definitions.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::elapsed_minutes;
use crate::error::{EngineError, EngineResult};
use crate::models::{AllotmentDay, ShiftDefinition};

/// Expected hours on a working weekday when nothing more specific is recorded.
pub const DEFAULT_EXPECTED_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Shift definitions keyed by code.
///
/// # Example
///
/// ```
/// use hakedis_engine::catalog::ShiftCatalog;
/// use hakedis_engine::error::EngineError;
/// use hakedis_engine::models::ShiftDefinition;
/// use chrono::NaiveTime;
///
/// let mut catalog = ShiftCatalog::new();
/// catalog.insert(ShiftDefinition::new(
///     "N",
///     "Nöbet",
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
/// ))?;
///
/// assert_eq!(catalog.by_code("N")?.display_name, "Nöbet");
/// assert!(matches!(catalog.by_code("X"), Err(EngineError::ShiftNotFound { .. })));
/// # Ok::<(), EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftCatalog {
    definitions: BTreeMap<String, ShiftDefinition>,
    ordinary_code: Option<String>,
}

impl ShiftCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of definitions, validating each one.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ShiftDefinition>) -> EngineResult<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition)?;
        }
        Ok(catalog)
    }

    /// Designates the definition whose weekday table applies to ordinary
    /// working days without a shift.
    pub fn with_ordinary_code(mut self, code: impl Into<String>) -> Self {
        self.ordinary_code = Some(code.into());
        self
    }

    /// Adds or replaces a definition. Returns the replaced definition.
    ///
    /// Fails with `InvalidShiftDefinition` if the code is blank or any hour
    /// figure is negative.
    pub fn insert(&mut self, definition: ShiftDefinition) -> EngineResult<Option<ShiftDefinition>> {
        validate(&definition)?;
        debug!(code = %definition.code, kind = ?definition.kind, "Storing shift definition");
        Ok(self.definitions.insert(definition.code.clone(), definition))
    }

    /// Removes a definition by code.
    pub fn remove(&mut self, code: &str) -> EngineResult<ShiftDefinition> {
        self.definitions
            .remove(code)
            .ok_or_else(|| EngineError::ShiftNotFound {
                code: code.to_string(),
            })
    }

    /// Looks up a definition, failing with `ShiftNotFound`.
    pub fn by_code(&self, code: &str) -> EngineResult<&ShiftDefinition> {
        self.get(code).ok_or_else(|| EngineError::ShiftNotFound {
            code: code.to_string(),
        })
    }

    /// Looks up a definition without failing.
    pub fn get(&self, code: &str) -> Option<&ShiftDefinition> {
        self.definitions.get(code)
    }

    /// Returns true when the code resolves to a post-on-call marker definition.
    pub fn is_post_on_call(&self, code: &str) -> bool {
        self.get(code).is_some_and(ShiftDefinition::is_post_on_call)
    }

    /// The definition designated for ordinary working days, if any.
    pub fn ordinary_definition(&self) -> Option<&ShiftDefinition> {
        self.ordinary_code.as_deref().and_then(|code| self.get(code))
    }

    /// All definitions, ordered by code.
    pub fn definitions(&self) -> impl Iterator<Item = &ShiftDefinition> {
        self.definitions.values()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// See [`expected_hours_for`].
    pub fn expected_hours_for(&self, definition: &ShiftDefinition, day: AllotmentDay) -> Option<Decimal> {
        expected_hours_for(definition, day)
    }

    /// See [`duration_label`].
    pub fn duration_label(&self, definition: &ShiftDefinition) -> String {
        duration_label(definition)
    }
}

fn validate(definition: &ShiftDefinition) -> EngineResult<()> {
    let invalid = |message: String| EngineError::InvalidShiftDefinition {
        code: definition.code.clone(),
        message,
    };

    if definition.code.trim().is_empty() {
        return Err(invalid("code must not be blank".to_string()));
    }

    let tables = definition
        .per_weekday
        .iter()
        .map(|(weekday, allotment)| (weekday.to_string(), allotment))
        .chain([
            ("holiday".to_string(), &definition.holiday),
            ("eve_of_holiday".to_string(), &definition.eve_of_holiday),
        ]);
    for (table, allotment) in tables {
        if let Some(field) = allotment.negative_field() {
            return Err(invalid(format!("{} {} must not be negative", table, field)));
        }
    }
    Ok(())
}

/// Returns the expected hours recorded for a kind of day.
///
/// No derivation takes place: the stored figure is returned as-is, and
/// `None` means the weekday has no entry in the definition's table.
pub fn expected_hours_for(definition: &ShiftDefinition, day: AllotmentDay) -> Option<Decimal> {
    definition.allotment(day).map(|a| a.expected_hours)
}

/// Formats the length of a shift as "H hours" or "H hours M minutes".
///
/// An end at or before the start wraps past midnight.
///
/// # Example
///
/// ```
/// use hakedis_engine::catalog::duration_label;
/// use hakedis_engine::models::ShiftDefinition;
/// use chrono::NaiveTime;
///
/// let night = ShiftDefinition::new(
///     "G",
///     "Gece",
///     NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
/// );
/// assert_eq!(duration_label(&night), "15 hours 30 minutes");
/// ```
pub fn duration_label(definition: &ShiftDefinition) -> String {
    let minutes = elapsed_minutes(definition.start_time, definition.end_time);
    let (hours, rest) = (minutes / 60, minutes % 60);
    if rest == 0 {
        format!("{} hours", hours)
    } else {
        format!("{} hours {} minutes", hours, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HourAllotment, ShiftKind};
    use chrono::{NaiveTime, Weekday};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn on_call() -> ShiftDefinition {
        let mut def = ShiftDefinition::new("N", "Nöbet", time(8, 0), time(8, 0))
            .with_weekday(Weekday::Mon, HourAllotment::new(dec("4"), dec("12"), dec("10")))
            .with_weekday(Weekday::Sat, HourAllotment::new(dec("4"), dec("12"), dec("0")));
        def.eve_of_holiday = HourAllotment::new(dec("4"), dec("12"), dec("6"));
        def
    }

    // ==========================================================================
    // SC-001: lookup by code
    // ==========================================================================
    #[test]
    fn test_sc_001_by_code_finds_definition() {
        let catalog = ShiftCatalog::from_definitions(vec![on_call()]).unwrap();
        assert_eq!(catalog.by_code("N").unwrap().code, "N");
    }

    // ==========================================================================
    // SC-002: unknown code is NotFound
    // ==========================================================================
    #[test]
    fn test_sc_002_unknown_code_is_not_found() {
        let catalog = ShiftCatalog::new();
        match catalog.by_code("Z") {
            Err(EngineError::ShiftNotFound { code }) => assert_eq!(code, "Z"),
            other => panic!("Expected ShiftNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_replaces_and_returns_previous() {
        let mut catalog = ShiftCatalog::new();
        assert!(catalog.insert(on_call()).unwrap().is_none());
        let mut renamed = on_call();
        renamed.display_name = "24 Saat Nöbet".to_string();
        let previous = catalog.insert(renamed).unwrap().unwrap();
        assert_eq!(previous.display_name, "Nöbet");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let mut def = on_call();
        def.holiday = HourAllotment::new(dec("0"), dec("0"), dec("-2"));
        let err = ShiftCatalog::new().insert(def).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid shift definition 'N': holiday expected_hours must not be negative"
        );
    }

    #[test]
    fn test_blank_code_is_rejected() {
        let def = ShiftDefinition::new(" ", "Boş", time(8, 0), time(17, 0));
        assert!(matches!(
            ShiftCatalog::new().insert(def),
            Err(EngineError::InvalidShiftDefinition { .. })
        ));
    }

    #[test]
    fn test_remove_unknown_is_not_found() {
        let mut catalog = ShiftCatalog::from_definitions(vec![on_call()]).unwrap();
        assert!(catalog.remove("N").is_ok());
        assert!(matches!(
            catalog.remove("N"),
            Err(EngineError::ShiftNotFound { .. })
        ));
    }

    #[test]
    fn test_post_on_call_detection_uses_kind() {
        let marker = ShiftDefinition::new("NE", "Nöbet Ertesi", time(0, 0), time(8, 0)).post_on_call();
        // The name alone does not make a marker.
        let lookalike = ShiftDefinition::new("X", "Ertesi Gün", time(8, 0), time(17, 0));
        let catalog = ShiftCatalog::from_definitions(vec![marker, lookalike]).unwrap();
        assert!(catalog.is_post_on_call("NE"));
        assert!(!catalog.is_post_on_call("X"));
        assert!(!catalog.is_post_on_call("missing"));
        assert_eq!(catalog.by_code("NE").unwrap().kind, ShiftKind::PostOnCall);
    }

    #[test]
    fn test_expected_hours_for_each_kind_of_day() {
        let def = on_call();
        assert_eq!(
            expected_hours_for(&def, AllotmentDay::Weekday(Weekday::Mon)),
            Some(dec("10"))
        );
        assert_eq!(
            expected_hours_for(&def, AllotmentDay::Weekday(Weekday::Sat)),
            Some(dec("0"))
        );
        assert_eq!(expected_hours_for(&def, AllotmentDay::Weekday(Weekday::Wed)), None);
        assert_eq!(expected_hours_for(&def, AllotmentDay::Holiday), Some(dec("0")));
        assert_eq!(expected_hours_for(&def, AllotmentDay::EveOfHoliday), Some(dec("6")));
    }

    #[test]
    fn test_duration_label_whole_hours() {
        let day = ShiftDefinition::new("M", "Mesai", time(8, 0), time(18, 0));
        assert_eq!(duration_label(&day), "10 hours");
    }

    #[test]
    fn test_duration_label_full_day_wrap() {
        assert_eq!(duration_label(&on_call()), "24 hours");
    }

    #[test]
    fn test_ordinary_definition_resolves_designated_code() {
        let mesai = ShiftDefinition::new("M", "Mesai", time(8, 0), time(18, 0));
        let catalog = ShiftCatalog::from_definitions(vec![mesai])
            .unwrap()
            .with_ordinary_code("M");
        assert_eq!(catalog.ordinary_definition().unwrap().code, "M");
        assert!(ShiftCatalog::new().ordinary_definition().is_none());
    }
}
