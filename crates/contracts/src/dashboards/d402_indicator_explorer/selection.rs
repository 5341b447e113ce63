use super::dto::Country;
use super::presets::PresetGroup;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("No {preset} country has data for the selected indicator.")]
    NothingToSelect { preset: PresetGroup },
}

/// Result of a successful preset apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Codes newly added to the selection
    pub added: Vec<String>,
    /// Preset codes missing from the availability set
    pub skipped: Vec<String>,
}

/// Country selection scoped to the current indicator and year range.
///
/// Holds the availability set reported by the server, the selected codes
/// (insertion order, no duplicates) and one "applied" flag per preset.
/// A preset flag only changes through that preset's own apply/retract;
/// it is never derived from the selection contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    available: Vec<Country>,
    selected: Vec<String>,
    applied: [bool; 4],
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self) -> &[Country] {
        &self.available
    }

    pub fn is_available(&self, code: &str) -> bool {
        self.available.iter().any(|c| c.code == code)
    }

    /// Replace the availability set wholesale. The selection is kept as is,
    /// so codes missing from the new set stay selected.
    pub fn replace_available(&mut self, countries: Vec<Country>) {
        self.available = countries;
    }

    pub fn clear_available(&mut self) {
        self.available.clear();
    }

    /// Display name for a code, falling back to the code itself
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.available
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.name.as_str())
            .unwrap_or(code)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.iter().any(|c| c == code)
    }

    /// Add a single code picked from the selector. Returns false when it was
    /// already selected.
    pub fn pick(&mut self, code: &str) -> bool {
        if self.is_selected(code) {
            return false;
        }
        self.selected.push(code.to_string());
        true
    }

    /// Remove a single code. Preset flags are left untouched.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|c| c != code);
        self.selected.len() != before
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_applied(&self, preset: PresetGroup) -> bool {
        self.applied[preset.index()]
    }

    /// Union the available part of `preset` into the selection and flag the
    /// preset as applied. Rejected when no preset code is available.
    pub fn apply_preset(&mut self, preset: PresetGroup) -> Result<ApplyOutcome, PresetError> {
        let (valid, skipped): (Vec<String>, Vec<String>) = preset
            .codes(&self.available)
            .into_iter()
            .partition(|code| self.is_available(code));

        if valid.is_empty() {
            return Err(PresetError::NothingToSelect { preset });
        }

        let added = valid
            .into_iter()
            .filter(|code| self.pick(code))
            .collect();
        self.applied[preset.index()] = true;

        Ok(ApplyOutcome { added, skipped })
    }

    /// Subtract the full code list of `preset` from the selection and clear
    /// its flag. Returns the removed codes.
    pub fn retract_preset(&mut self, preset: PresetGroup) -> Vec<String> {
        let codes: HashSet<String> = preset.codes(&self.available).into_iter().collect();
        let mut removed = Vec::new();
        self.selected.retain(|c| {
            if codes.contains(c) {
                removed.push(c.clone());
                false
            } else {
                true
            }
        });
        self.applied[preset.index()] = false;
        removed
    }

    /// Chip list entries: `(code, display name)` in selection order
    pub fn chips(&self) -> Vec<(String, String)> {
        self.selected
            .iter()
            .map(|code| (code.clone(), self.display_name(code).to_string()))
            .collect()
    }

    /// Value of the hidden selection field: codes joined by ", ", empty when
    /// nothing is selected
    pub fn summary(&self) -> String {
        self.selected.join(", ")
    }
}

/// Selector search: case-insensitive match against the start of the label.
/// An empty or blank term matches everything.
pub fn matches_prefix(label: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    label.to_lowercase().starts_with(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries(codes: &[&str]) -> Vec<Country> {
        codes
            .iter()
            .map(|c| Country {
                code: c.to_string(),
                name: format!("{} name", c),
            })
            .collect()
    }

    fn store_with(codes: &[&str]) -> SelectionStore {
        let mut store = SelectionStore::new();
        store.replace_available(countries(codes));
        store
    }

    #[test]
    fn test_apply_g7_intersects_with_availability() {
        let mut store = store_with(&["USA", "CAN", "GBR"]);

        let outcome = store.apply_preset(PresetGroup::G7).unwrap();

        let mut selected = store.selected().to_vec();
        selected.sort();
        assert_eq!(selected, vec!["CAN", "GBR", "USA"]);
        assert!(store.is_applied(PresetGroup::G7));
        assert_eq!(outcome.skipped, vec!["FRA", "DEU", "ITA", "JPN"]);
    }

    #[test]
    fn test_apply_with_empty_intersection_is_rejected() {
        let mut store = store_with(&["NOR", "CHE"]);
        store.pick("NOR");
        let before = store.clone();

        for preset in [PresetGroup::G20, PresetGroup::G7, PresetGroup::Brics] {
            let err = store.apply_preset(preset).unwrap_err();
            assert_eq!(err, PresetError::NothingToSelect { preset });
            assert_eq!(store, before);
            assert!(!store.is_applied(preset));
        }
    }

    #[test]
    fn test_apply_all_without_availability_is_rejected() {
        let mut store = SelectionStore::new();
        assert!(store.apply_preset(PresetGroup::All).is_err());
        assert!(!store.is_applied(PresetGroup::All));
    }

    #[test]
    fn test_apply_does_not_duplicate() {
        let mut store = store_with(&["USA", "CAN", "CHN"]);
        store.pick("USA");

        let outcome = store.apply_preset(PresetGroup::G7).unwrap();

        assert_eq!(outcome.added, vec!["CAN"]);
        assert_eq!(store.selected(), &["USA".to_string(), "CAN".to_string()]);
    }

    #[test]
    fn test_retract_uses_full_preset_list() {
        let mut store = store_with(&["USA", "CHN"]);
        store.pick("USA");
        store.pick("CHN");
        // stale code from a previous availability set
        store.pick("FRA");

        let removed = store.retract_preset(PresetGroup::G7);

        assert_eq!(removed, vec!["USA", "FRA"]);
        assert_eq!(store.selected(), &["CHN".to_string()]);
    }

    #[test]
    fn test_retract_clears_flag_even_when_nothing_removed() {
        let mut store = store_with(&["USA"]);
        store.apply_preset(PresetGroup::G7).unwrap();
        store.remove("USA");

        assert!(store.is_applied(PresetGroup::G7));
        let removed = store.retract_preset(PresetGroup::G7);
        assert!(removed.is_empty());
        assert!(!store.is_applied(PresetGroup::G7));
    }

    #[test]
    fn test_overlapping_presets_keep_independent_flags() {
        let mut store = store_with(&["USA", "CAN", "CHN", "BRA"]);
        store.apply_preset(PresetGroup::G20).unwrap();
        store.apply_preset(PresetGroup::G7).unwrap();

        store.retract_preset(PresetGroup::G7);

        assert!(store.is_applied(PresetGroup::G20));
        assert!(!store.is_applied(PresetGroup::G7));
        assert_eq!(store.selected(), &["BRA".to_string(), "CHN".to_string()]);
    }

    #[test]
    fn test_retract_then_apply_restores_preset_members() {
        let mut store = store_with(&["USA", "CAN", "KOR", "NOR"]);
        store.pick("NOR");
        store.pick("USA");
        let original: Vec<String> = store.selected().to_vec();

        store.retract_preset(PresetGroup::G7);
        store.apply_preset(PresetGroup::G7).unwrap();

        for code in original.iter().chain(["USA".to_string(), "CAN".to_string()].iter()) {
            assert!(store.is_selected(code), "{} missing", code);
        }
        assert!(store.is_applied(PresetGroup::G7));
    }

    #[test]
    fn test_removing_every_member_empties_chips_and_summary() {
        let mut store = store_with(&["USA", "CAN", "GBR"]);
        store.apply_preset(PresetGroup::All).unwrap();
        assert_eq!(store.summary(), "USA, CAN, GBR");

        for code in store.selected().to_vec() {
            assert!(store.remove(&code));
        }

        assert!(store.chips().is_empty());
        assert_eq!(store.summary(), "");
    }

    #[test]
    fn test_replacing_availability_keeps_selection() {
        let mut store = store_with(&["USA", "CAN"]);
        store.pick("USA");
        store.replace_available(countries(&["CAN"]));

        assert_eq!(store.selected(), &["USA".to_string()]);
        assert_eq!(store.chips(), vec![("USA".to_string(), "USA".to_string())]);
    }

    #[test]
    fn test_chip_names_come_from_availability() {
        let mut store = store_with(&["KOR"]);
        store.pick("KOR");
        assert_eq!(
            store.chips(),
            vec![("KOR".to_string(), "KOR name".to_string())]
        );
    }

    #[test]
    fn test_matches_prefix() {
        assert!(matches_prefix("Korea", ""));
        assert!(matches_prefix("Korea", "  "));
        assert!(matches_prefix("Korea", "ko"));
        assert!(matches_prefix("Korea", "KOR"));
        assert!(!matches_prefix("North Korea", "kor"));
    }
}
