//! Conservation status keys, labels, and presentation classes

/// Conservation status categories recognized by the catalog
///
/// The stored form of a status is always the canonical snake_case key;
/// labels and CSS classes are derived from it, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConservationStatus {
    LeastConcern,
    NearThreatened,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
    ExtinctInTheWild,
    Extinct,
}

impl ConservationStatus {
    /// Parse a canonical snake_case key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "least_concern" => Some(Self::LeastConcern),
            "near_threatened" => Some(Self::NearThreatened),
            "vulnerable" => Some(Self::Vulnerable),
            "endangered" => Some(Self::Endangered),
            "critically_endangered" => Some(Self::CriticallyEndangered),
            "extinct_in_the_wild" => Some(Self::ExtinctInTheWild),
            "extinct" => Some(Self::Extinct),
            _ => None,
        }
    }

    /// Match a cleaned, space-separated spelling ("near threatened")
    fn from_alias(spaced: &str) -> Option<Self> {
        match spaced {
            "least concern" => Some(Self::LeastConcern),
            "near threatened" => Some(Self::NearThreatened),
            "vulnerable" => Some(Self::Vulnerable),
            "endangered" => Some(Self::Endangered),
            "critically endangered" => Some(Self::CriticallyEndangered),
            "extinct in the wild" => Some(Self::ExtinctInTheWild),
            "extinct" => Some(Self::Extinct),
            _ => None,
        }
    }

    /// The canonical snake_case key
    pub fn key(&self) -> &'static str {
        match self {
            Self::LeastConcern => "least_concern",
            Self::NearThreatened => "near_threatened",
            Self::Vulnerable => "vulnerable",
            Self::Endangered => "endangered",
            Self::CriticallyEndangered => "critically_endangered",
            Self::ExtinctInTheWild => "extinct_in_the_wild",
            Self::Extinct => "extinct",
        }
    }

    /// Human-readable display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::LeastConcern => "Least Concern",
            Self::NearThreatened => "Near Threatened",
            Self::Vulnerable => "Vulnerable",
            Self::Endangered => "Endangered",
            Self::CriticallyEndangered => "Critically Endangered",
            Self::ExtinctInTheWild => "Extinct in the Wild",
            Self::Extinct => "Extinct",
        }
    }

    /// CSS class the views attach to status badges
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::LeastConcern => "status-least-concern",
            Self::NearThreatened => "status-near-threatened",
            Self::Vulnerable => "status-vulnerable",
            Self::Endangered => "status-endangered",
            Self::CriticallyEndangered => "status-critically-endangered",
            Self::ExtinctInTheWild => "status-extinct-in-the-wild",
            Self::Extinct => "status-extinct",
        }
    }
}

/// Normalize a free-form status spelling to its canonical snake_case key.
///
/// Lower-cases, reduces runs of non-letter characters to single spaces,
/// then resolves the known spellings; anything unrecognized keeps its words
/// joined with underscores. Empty input yields an empty key.
pub fn normalize_status_key(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|ch| if ch.is_ascii_lowercase() { ch } else { ' ' })
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let spaced = words.join(" ");
    if let Some(status) = ConservationStatus::from_alias(&spaced) {
        return status.key().to_string();
    }

    spaced.replace(' ', "_")
}

/// Display label for a status value in any spelling.
///
/// Unknown statuses fall back to the raw input; an empty input renders as
/// "Unknown".
pub fn status_label(raw: &str) -> String {
    let key = normalize_status_key(raw);
    match ConservationStatus::from_key(&key) {
        Some(status) => status.label().to_string(),
        None if raw.is_empty() => "Unknown".to_string(),
        None => raw.to_string(),
    }
}

/// CSS class for a status value in any spelling; unknown statuses get none
pub fn status_class(raw: &str) -> &'static str {
    ConservationStatus::from_key(&normalize_status_key(raw))
        .map(|status| status.css_class())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spellings_agree() {
        assert_eq!(normalize_status_key("Near Threatened"), "near_threatened");
        assert_eq!(normalize_status_key("near_threatened"), "near_threatened");
        assert_eq!(normalize_status_key("NEAR-THREATENED"), "near_threatened");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(
            normalize_status_key("  Extinct   in the  Wild "),
            "extinct_in_the_wild"
        );
        assert_eq!(
            normalize_status_key("critically__endangered!"),
            "critically_endangered"
        );
    }

    #[test]
    fn test_normalize_unknown_keeps_underscored_words() {
        assert_eq!(normalize_status_key("Data Deficient"), "data_deficient");
    }

    #[test]
    fn test_normalize_empty_and_symbol_only() {
        assert_eq!(normalize_status_key(""), "");
        assert_eq!(normalize_status_key("   "), "");
        assert_eq!(normalize_status_key("!!!"), "");
    }

    #[test]
    fn test_normalize_non_ascii_does_not_panic() {
        assert_eq!(normalize_status_key("péril élevé"), "p_ril_lev");
    }

    #[test]
    fn test_label_known_and_fallbacks() {
        assert_eq!(status_label("least concern"), "Least Concern");
        assert_eq!(status_label("Data Deficient"), "Data Deficient");
        assert_eq!(status_label(""), "Unknown");
    }

    #[test]
    fn test_class_known_and_unknown() {
        assert_eq!(status_class("Extinct in the Wild"), "status-extinct-in-the-wild");
        assert_eq!(status_class("Data Deficient"), "");
        assert_eq!(status_class(""), "");
    }

    #[test]
    fn test_enum_key_round_trip() {
        for status in [
            ConservationStatus::LeastConcern,
            ConservationStatus::NearThreatened,
            ConservationStatus::Vulnerable,
            ConservationStatus::Endangered,
            ConservationStatus::CriticallyEndangered,
            ConservationStatus::ExtinctInTheWild,
            ConservationStatus::Extinct,
        ] {
            assert_eq!(ConservationStatus::from_key(status.key()), Some(status));
        }
    }
}
