//! Reference lists for the filter controls.
//!
//! The backend filters on numeric ids assigned in seeding order, so an
//! option's value is its 1-based position in these lists.

/// Disaster types with the feather icon used for their markers.
pub const DISASTER_TYPES: [(&str, &str); 4] = [
    ("Flood", "water"),
    ("Earthquake", "vibration"),
    ("Tsunami", "waves"),
    ("Forest Fire", "flame"),
];

/// Icon for disaster types not in [`DISASTER_TYPES`].
pub const FALLBACK_ICON: &str = "alert-triangle";

pub const STATES: [&str; 16] = [
    "Johor",
    "Kedah",
    "Kelantan",
    "Melaka",
    "Negeri Sembilan",
    "Pahang",
    "Perak",
    "Perlis",
    "Penang",
    "Sabah",
    "Sarawak",
    "Selangor",
    "Terengganu",
    "Kuala Lumpur",
    "Labuan",
    "Putrajaya",
];

/// A selectable filter option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: &'static str,
}

pub fn disaster_type_options() -> Vec<FilterOption> {
    DISASTER_TYPES
        .iter()
        .enumerate()
        .map(|(i, &(name, _))| FilterOption {
            value: (i + 1).to_string(),
            label: name,
        })
        .collect()
}

pub fn state_options() -> Vec<FilterOption> {
    STATES
        .iter()
        .enumerate()
        .map(|(i, &name)| FilterOption {
            value: (i + 1).to_string(),
            label: name,
        })
        .collect()
}

/// Feather icon name for a disaster type.
pub fn icon_for(disaster_type: &str) -> &'static str {
    DISASTER_TYPES
        .iter()
        .find(|(name, _)| *name == disaster_type)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_are_one_based() {
        let states = state_options();
        assert_eq!(states.len(), 16);
        assert_eq!(states[0].value, "1");
        assert_eq!(states[11].label, "Selangor");
        assert_eq!(states[11].value, "12");
        assert_eq!(disaster_type_options()[3].label, "Forest Fire");
    }

    #[test]
    fn icons() {
        assert_eq!(icon_for("Tsunami"), "waves");
        assert_eq!(icon_for("Landslide"), FALLBACK_ICON);
    }
}
