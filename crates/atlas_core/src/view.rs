//! The filter → sort pipeline and the table's interaction state.

use std::collections::BTreeSet;

use crate::domain::{Country, NOT_AVAILABLE};

/// Population ranges used for categorical filtering. Bounds are
/// inclusive-low / exclusive-high; the top bucket is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationBucket {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl PopulationBucket {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::VeryLarge];

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Under 1M",
            Self::Medium => "1M - 10M",
            Self::Large => "10M - 100M",
            Self::VeryLarge => "Over 100M",
        }
    }

    pub fn contains(self, population: u64) -> bool {
        match self {
            Self::Small => population < 1_000_000,
            Self::Medium => (1_000_000..10_000_000).contains(&population),
            Self::Large => (10_000_000..100_000_000).contains(&population),
            Self::VeryLarge => population >= 100_000_000,
        }
    }
}

/// Current values of the three filter controls. Rebuilt from the controls on
/// every interaction, never persisted. A clause at its neutral value is
/// skipped entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    pub search_term: String,
    pub region: Option<String>,
    pub population_bucket: Option<PopulationBucket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Code,
    Capital,
    Region,
    Population,
    Languages,
    Currencies,
}

impl SortColumn {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Code => "Code",
            Self::Capital => "Capital",
            Self::Region => "Region",
            Self::Population => "Population",
            Self::Languages => "Languages",
            Self::Currencies => "Currencies",
        }
    }

    fn text_field(self, country: &Country) -> Option<&str> {
        match self {
            Self::Name => Some(&country.name),
            Self::Code => Some(&country.code),
            Self::Capital => Some(&country.capital),
            Self::Region => Some(&country.region),
            Self::Languages => Some(&country.languages),
            Self::Currencies => Some(&country.currencies),
            Self::Population => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Per-column three-state sort cycle. Column and direction are always both
/// set or both unset; the type makes the half-set state unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    pub fn active(self) -> Option<(SortColumn, SortDirection)> {
        self.active
    }

    pub fn direction_for(self, column: SortColumn) -> Option<SortDirection> {
        match self.active {
            Some((active, direction)) if active == column => Some(direction),
            _ => None,
        }
    }

    /// `unsorted → asc → desc → unsorted`. A different column always enters
    /// at ascending, discarding the previous column's state.
    pub fn cycle(&mut self, column: SortColumn) {
        self.active = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }
}

/// AND-chain of the three filter clauses over the full collection.
pub fn apply_filters(countries: &[Country], filter: &FilterConfig) -> Vec<Country> {
    let needle = filter.search_term.to_lowercase();
    countries
        .iter()
        .filter(|country| {
            (needle.is_empty() || country.name.to_lowercase().contains(&needle))
                && filter
                    .region
                    .as_deref()
                    .map_or(true, |region| country.region == region)
                && filter
                    .population_bucket
                    .map_or(true, |bucket| bucket.contains(country.population))
        })
        .cloned()
        .collect()
}

/// Stable sort into a new vector; the input order is untouched. No-op when
/// the sort state is inactive. Descending is produced by reversing the stable
/// ascending order, so `sort(desc) == reverse(sort(asc))` holds exactly,
/// ties included.
pub fn sort_countries(countries: &[Country], sort: SortState) -> Vec<Country> {
    let mut sorted = countries.to_vec();
    let Some((column, direction)) = sort.active() else {
        return sorted;
    };

    match column {
        SortColumn::Population => sorted.sort_by_key(|country| country.population),
        column => sorted.sort_by_cached_key(|country| text_sort_key(country, column)),
    }
    if direction == SortDirection::Descending {
        sorted.reverse();
    }
    sorted
}

/// Case-insensitive key. The `"N/A"` sentinel keys as the empty string so
/// missing values order alongside genuinely empty ones instead of under `N`.
fn text_sort_key(country: &Country, column: SortColumn) -> String {
    let raw = column.text_field(country).unwrap_or_default();
    if raw == NOT_AVAILABLE {
        String::new()
    } else {
        raw.to_lowercase()
    }
}

/// Distinct regions for the region select, excluding the `"N/A"` sentinel,
/// in lexicographic order.
pub fn region_options(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .map(|country| country.region.as_str())
        .filter(|region| *region != NOT_AVAILABLE)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Owns the loaded collection and the current filter/sort configuration.
/// The derived subset is transient: recomputed through [`Self::visible_rows`]
/// on every interaction, never stored authoritatively.
#[derive(Debug, Clone, Default)]
pub struct TableContext {
    countries: Vec<Country>,
    pub filter: FilterConfig,
    pub sort: SortState,
}

impl TableContext {
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn has_data(&self) -> bool {
        !self.countries.is_empty()
    }

    pub fn regions(&self) -> Vec<String> {
        region_options(&self.countries)
    }

    pub fn cycle_sort(&mut self, column: SortColumn) {
        self.sort.cycle(column);
    }

    /// The single recomputation entry point: filter, then sort.
    pub fn visible_rows(&self) -> Vec<Country> {
        sort_countries(&apply_filters(&self.countries, &self.filter), self.sort)
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
