use lazy_static::lazy_static;
use std::collections::HashMap;

pub const HIGHLIGHTED_CLASS: &str = "event--highlighted";

/// Month keys as found in zero-padded dates, paired with their display name.
pub const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

lazy_static! {
    static ref EVENT_TYPE_CLASSES: HashMap<&'static str, &'static str> = HashMap::from([
        ("Global Day", HIGHLIGHTED_CLASS),
        ("Regional Day", HIGHLIGHTED_CLASS),
    ]);
    static ref COUNTRY_NAMES: HashMap<&'static str, &'static str> = HashMap::from([
        ("AT", "Austria"),
        ("BE", "Belgium"),
        ("BG", "Bulgaria"),
        ("BY", "Belarus"),
        ("CH", "Switzerland"),
        ("CZ", "Czech Republic"),
        ("DE", "Germany"),
        ("DK", "Denmark"),
        ("ES", "Spain"),
        ("FR", "France"),
        ("GR", "Greece"),
        ("HR", "Croatia"),
        ("HU", "Hungary"),
        ("IE", "Ireland"),
        ("IT", "Italy"),
        ("KO", "Kosova"),
        ("NL", "the Netherlands"),
        ("NO", "Norway"),
        ("PL", "Poland"),
        ("PT", "Portugal"),
        ("RO", "Romania"),
        ("RS", "Serbia"),
        ("SE", "Sweden"),
        ("SQ", "Albania"),
        ("UA", "Ukraine"),
        ("UK", "United Kingdom"),
    ]);
}

pub fn month_display(month_key: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(key, _)| *key == month_key)
        .map(|(_, name)| *name)
}

/// Empty string for any type without a dedicated style.
pub fn event_type_class(event_type: &str) -> &'static str {
    EVENT_TYPE_CLASSES.get(event_type).copied().unwrap_or("")
}

/// Unknown codes are returned as given (case is not normalized).
pub fn country_name(code: &str) -> String {
    COUNTRY_NAMES
        .get(code)
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}
