// src/domain/filters.rs

use crate::domain::property::{Property, Strategy, Structure};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A dropdown value: either "All" or one concrete option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq + Copy> Selector<T> {
    pub fn matches(&self, value: T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => *wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("All"),
            Selector::Only(v) => v.fmt(f),
        }
    }
}

// Serialized as the dropdown label, so "All" stays a string in JSON.
impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(Selector::All);
        }
        s.parse().map(Selector::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterCriteria {
    pub strategy: Selector<Strategy>,
    pub structure: Selector<Structure>,
    pub search: String,
}

impl FilterCriteria {
    pub fn matches(&self, property: &Property) -> bool {
        let needle = self.search.trim().to_lowercase();

        self.strategy.matches(property.strategy)
            && self.structure.matches(property.structure)
            && property.search_haystack().contains(&needle)
    }

    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

/// Linear scan over the catalog; keeps catalog order.
pub fn apply_filter<'a>(catalog: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    catalog.iter().filter(|p| criteria.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::SEED_PROPERTIES;

    fn ids(props: &[&Property]) -> Vec<u32> {
        props.iter().map(|p| p.id).collect()
    }

    #[test]
    fn default_criteria_keep_everything_in_order() {
        let all = apply_filter(&SEED_PROPERTIES, &FilterCriteria::default());
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn wholesale_yields_dallas_and_chicago() {
        let criteria = FilterCriteria {
            strategy: Selector::Only(Strategy::Wholesale),
            ..Default::default()
        };
        let hits = apply_filter(&SEED_PROPERTIES, &criteria);
        assert_eq!(ids(&hits), vec![1, 5]);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        for q in ["cleveland", "CLEVELAND", "  Cleveland  "] {
            let criteria = FilterCriteria {
                search: q.to_string(),
                ..Default::default()
            };
            assert_eq!(ids(&apply_filter(&SEED_PROPERTIES, &criteria)), vec![6]);
        }
    }

    #[test]
    fn search_spans_address_city_and_state() {
        let criteria = FilterCriteria {
            search: "row cleveland oh".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&SEED_PROPERTIES, &criteria)), vec![6]);
    }

    #[test]
    fn structure_and_strategy_combine() {
        let criteria = FilterCriteria {
            strategy: Selector::Only(Strategy::Section8),
            structure: Selector::Only(Structure::MultiFamily),
            search: String::new(),
        };
        assert_eq!(ids(&apply_filter(&SEED_PROPERTIES, &criteria)), vec![7]);
    }

    #[test]
    fn filtering_is_idempotent_and_a_subset() {
        let criteria = FilterCriteria {
            structure: Selector::Only(Structure::SingleFamily),
            search: "a".to_string(),
            ..Default::default()
        };
        let once = apply_filter(&SEED_PROPERTIES, &criteria);
        let twice = apply_filter(&SEED_PROPERTIES, &criteria);
        assert_eq!(once, twice);
        assert!(once.iter().all(|p| SEED_PROPERTIES.iter().any(|s| s == *p)));
    }

    #[test]
    fn selector_parses_all_and_labels() {
        assert_eq!("All".parse::<Selector<Strategy>>().unwrap(), Selector::All);
        assert_eq!(
            "Fix & Flip".parse::<Selector<Strategy>>().unwrap(),
            Selector::Only(Strategy::FixAndFlip)
        );
        assert!("Duplex".parse::<Selector<Structure>>().is_err());
        assert_eq!(Selector::Only(Structure::MultiFamily).to_string(), "Multi Family");
    }
}
