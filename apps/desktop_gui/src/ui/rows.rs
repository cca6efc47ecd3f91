//! Pure row view-models: formatting only, no egui types, testable headless.

use atlas_core::{Coordinates, Country};

/// Marker for fields whose missing-data sentinel is `None` rather than the
/// `"N/A"` string (currently only the flag).
pub const NO_DATA: &str = "—";

/// Marker for absent coordinates. Deliberately distinct from [`NO_DATA`] so
/// the two kinds of "missing" stay tellable apart in the table.
pub const COORDS_UNAVAILABLE: &str = "N/A";

/// One table row with every cell already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub flag: Option<String>,
    pub name: String,
    pub code: String,
    pub capital: String,
    pub region: String,
    pub population: String,
    pub coordinates: Option<String>,
    pub languages: String,
    pub currencies: String,
}

impl CountryRow {
    fn from_country(country: &Country) -> Self {
        Self {
            flag: country.flag_emoji.clone(),
            name: country.name.clone(),
            code: country.code.clone(),
            capital: country.capital.clone(),
            region: country.region.clone(),
            population: format_population(country.population),
            coordinates: country.coordinates.map(format_coordinates),
            languages: country.languages.clone(),
            currencies: country.currencies.clone(),
        }
    }
}

/// One row per country, in the order the pipeline produced.
pub fn build_rows(countries: &[Country]) -> Vec<CountryRow> {
    countries.iter().map(CountryRow::from_country).collect()
}

/// Thousands grouping: `11555997` renders as `11,555,997`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_coordinates(coordinates: Coordinates) -> String {
    format!("{:.2}, {:.2}", coordinates.lat, coordinates.lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::NOT_AVAILABLE;

    #[test]
    fn groups_population_thousands() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(370_000), "370,000");
        assert_eq!(format_population(11_555_997), "11,555,997");
        assert_eq!(format_population(1_400_000_000), "1,400,000,000");
    }

    #[test]
    fn formats_coordinates_to_two_decimals() {
        let text = format_coordinates(Coordinates {
            lat: 50.8503,
            lng: 4.3517,
        });
        assert_eq!(text, "50.85, 4.35");
    }

    #[test]
    fn rows_keep_the_missing_markers_distinct() {
        let bare = Country::error_sentinel();
        let rows = build_rows(&[bare]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Error");
        assert_eq!(rows[0].flag, None);
        assert_eq!(rows[0].coordinates, None);
        assert_eq!(rows[0].population, "0");
        assert_eq!(rows[0].languages, NOT_AVAILABLE);
    }

    #[test]
    fn rows_format_present_fields() {
        let country = Country {
            name: "Belgium".to_string(),
            code: "BE".to_string(),
            capital: "Brussels".to_string(),
            region: "Europe".to_string(),
            population: 11_555_997,
            coordinates: Some(Coordinates {
                lat: 50.5039,
                lng: 4.4699,
            }),
            flag_emoji: Some("🇧🇪".to_string()),
            languages: "Dutch, French, German".to_string(),
            currencies: "Euro".to_string(),
        };
        let rows = build_rows(&[country]);
        assert_eq!(rows[0].population, "11,555,997");
        assert_eq!(rows[0].coordinates.as_deref(), Some("50.50, 4.47"));
        assert_eq!(rows[0].flag.as_deref(), Some("🇧🇪"));
    }
}
