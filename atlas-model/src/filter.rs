use std::fmt;

use crate::country::Country;

/// Name of the record whose area serves as the comparison threshold.
const AREA_REFERENCE_COUNTRY: &str = "Lithuania";

/// Region matched by the region predicate.
const OCEANIA_REGION: &str = "Oceania";

/// The toggleable predicates offered by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryFilter {
    SmallerThanLithuania,
    InOceania,
}

impl CountryFilter {
    pub fn all() -> &'static [CountryFilter] {
        use CountryFilter::*;
        &[SmallerThanLithuania, InOceania]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CountryFilter::SmallerThanLithuania => {
                "Smaller than Lithuania by area"
            }
            CountryFilter::InOceania => "In Oceania region",
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Active/inactive state of every filter predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub smaller_than_lithuania: bool,
    pub in_oceania: bool,
}

impl FilterOptions {
    /// Flip one predicate, leaving the other untouched.
    pub fn toggle(&mut self, filter: CountryFilter) {
        match filter {
            CountryFilter::SmallerThanLithuania => {
                self.smaller_than_lithuania = !self.smaller_than_lithuania;
            }
            CountryFilter::InOceania => {
                self.in_oceania = !self.in_oceania;
            }
        }
    }

    pub fn is_active(&self, filter: CountryFilter) -> bool {
        match filter {
            CountryFilter::SmallerThanLithuania => self.smaller_than_lithuania,
            CountryFilter::InOceania => self.in_oceania,
        }
    }
}

/// Apply the active predicates to the full fetched list.
///
/// The result is always rebuilt from `all`, never narrowed incrementally, so
/// the displayed list cannot drift from the filter configuration. Both
/// predicates act on disjoint fields; activation order does not change the
/// resulting set.
///
/// When the reference country is absent the area threshold defaults to 0.0,
/// which matches nothing since areas are non-negative.
pub fn apply_filters(all: &[Country], options: &FilterOptions) -> Vec<Country> {
    let mut filtered: Vec<Country> = all.to_vec();
    if options.smaller_than_lithuania {
        let threshold = all
            .iter()
            .find(|country| country.name == AREA_REFERENCE_COUNTRY)
            .map(|country| country.area)
            .unwrap_or(0.0);
        filtered.retain(|country| country.area < threshold);
    }
    if options.in_oceania {
        filtered.retain(|country| country.region == OCEANIA_REGION);
    }
    filtered
}
