//! World Manufacturer Identifier registry
//!
//! Read-only tables mapping VIN prefixes to manufacturer names. The
//! three-character table is authoritative; the two-character table is a
//! coarser fallback for brands that share a region prefix.

use std::collections::HashMap;
use std::sync::LazyLock;

const WMI_ENTRIES: &[(&str, &str)] = &[
    // BMW Group
    ("WBA", "BMW"),
    ("WBS", "BMW M"),
    ("WBY", "BMW i"),
    ("WBX", "BMW"),
    ("WB1", "BMW Motorrad"),
    ("4US", "BMW"),
    ("5UX", "BMW"),
    ("5UM", "BMW M"),
    ("5YM", "BMW M"),
    ("WMW", "MINI"),
    ("SCA", "Rolls-Royce"),
    // Mercedes-Benz
    ("WDB", "Mercedes-Benz"),
    ("WDC", "Mercedes-Benz"),
    ("WDD", "Mercedes-Benz"),
    ("WDF", "Mercedes-Benz"),
    ("W1K", "Mercedes-Benz"),
    ("W1N", "Mercedes-Benz"),
    ("W1V", "Mercedes-Benz"),
    ("WMX", "Mercedes-AMG"),
    ("4JG", "Mercedes-Benz"),
    ("55S", "Mercedes-Benz"),
    ("WME", "smart"),
    // Volkswagen Group
    ("WVW", "Volkswagen"),
    ("WV1", "Volkswagen Commercial Vehicles"),
    ("WV2", "Volkswagen Commercial Vehicles"),
    ("WVG", "Volkswagen"),
    ("1VW", "Volkswagen"),
    ("3VW", "Volkswagen"),
    ("WAU", "Audi"),
    ("WA1", "Audi"),
    ("WUA", "Audi Sport"),
    ("TRU", "Audi"),
    ("WP0", "Porsche"),
    ("WP1", "Porsche"),
    ("TMB", "Skoda"),
    ("VSS", "SEAT"),
    ("VSE", "SEAT"),
    ("ZHW", "Lamborghini"),
    ("SCB", "Bentley"),
    // Other German-market brands
    ("W0L", "Opel"),
    ("W0V", "Opel"),
    ("WF0", "Ford"),
    ("WMA", "MAN"),
    // Frequent imports
    ("1HG", "Honda"),
    ("JHM", "Honda"),
    ("JTD", "Toyota"),
    ("JT2", "Toyota"),
    ("VF1", "Renault"),
    ("VF3", "Peugeot"),
    ("VF7", "Citroen"),
    ("ZFA", "Fiat"),
    ("YV1", "Volvo"),
    ("KMH", "Hyundai"),
    ("KNA", "Kia"),
];

const REGION_ENTRIES: &[(&str, &str)] = &[
    ("WB", "BMW"),
    ("WD", "Mercedes-Benz"),
    ("W1", "Mercedes-Benz"),
    ("WA", "Audi"),
    ("WV", "Volkswagen"),
    ("WP", "Porsche"),
    ("W0", "Opel"),
    ("JT", "Toyota"),
    ("JH", "Honda"),
];

static WMI_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| WMI_ENTRIES.iter().copied().collect());

static REGION_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REGION_ENTRIES.iter().copied().collect());

/// Exact three-character lookup.
pub fn lookup(wmi: &str) -> Option<&'static str> {
    WMI_TABLE.get(wmi).copied()
}

/// Two-character fallback lookup.
pub fn lookup_region(prefix: &str) -> Option<&'static str> {
    REGION_TABLE.get(prefix).copied()
}

/// Number of three-character entries.
pub fn len() -> usize {
    WMI_TABLE.len()
}
