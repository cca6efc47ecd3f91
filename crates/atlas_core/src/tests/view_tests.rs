use super::*;

fn country(name: &str, region: &str, population: u64) -> Country {
    Country {
        name: name.to_string(),
        code: "XX".to_string(),
        capital: "Capital".to_string(),
        region: region.to_string(),
        population,
        coordinates: None,
        flag_emoji: None,
        languages: "Language".to_string(),
        currencies: "Currency".to_string(),
    }
}

fn sample() -> Vec<Country> {
    vec![
        country("Belgium", "Europe", 11_500_000),
        country("France", "Europe", 67_000_000),
        country("India", "Asia", 1_400_000_000),
        country("Iceland", "Europe", 370_000),
        country("Japan", "Asia", 125_000_000),
    ]
}

fn names(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn neutral_filter_passes_everything_through() {
    let all = sample();
    assert_eq!(apply_filters(&all, &FilterConfig::default()), all);
}

#[test]
fn search_is_a_case_insensitive_substring_match() {
    let filter = FilterConfig {
        search_term: "iCeLaNd".to_string(),
        ..FilterConfig::default()
    };
    assert_eq!(names(&apply_filters(&sample(), &filter)), ["Iceland"]);

    let filter = FilterConfig {
        search_term: "an".to_string(),
        ..FilterConfig::default()
    };
    assert_eq!(
        names(&apply_filters(&sample(), &filter)),
        ["France", "Iceland", "Japan"]
    );
}

#[test]
fn search_whitespace_is_matched_literally() {
    let all = vec![
        country("South Africa", "Africa", 59_000_000),
        country("Austria", "Europe", 9_000_000),
        country("France", "Europe", 67_000_000),
    ];

    // A leading space is part of the needle, not noise to strip.
    let filter = FilterConfig {
        search_term: " a".to_string(),
        ..FilterConfig::default()
    };
    assert_eq!(names(&apply_filters(&all, &filter)), ["South Africa"]);

    // An all-whitespace term is a real (unmatchable here) substring, not a
    // neutral value.
    let filter = FilterConfig {
        search_term: "  ".to_string(),
        ..FilterConfig::default()
    };
    assert!(apply_filters(&all, &filter).is_empty());
}

#[test]
fn search_matches_the_name_field_only() {
    let filter = FilterConfig {
        search_term: "Europe".to_string(),
        ..FilterConfig::default()
    };
    assert!(apply_filters(&sample(), &filter).is_empty());
}

#[test]
fn region_and_bucket_clauses_and_together() {
    let filter = FilterConfig {
        search_term: String::new(),
        region: Some("Europe".to_string()),
        population_bucket: Some(PopulationBucket::Large),
    };
    let hits = apply_filters(&sample(), &filter);
    assert_eq!(names(&hits), ["Belgium", "France"]);
    for hit in &hits {
        assert_eq!(hit.region, "Europe");
        assert!((10_000_000..100_000_000).contains(&hit.population));
    }
}

#[test]
fn bucket_bounds_are_inclusive_low_exclusive_high() {
    assert!(PopulationBucket::Small.contains(0));
    assert!(PopulationBucket::Small.contains(999_999));
    assert!(!PopulationBucket::Small.contains(1_000_000));
    assert!(PopulationBucket::Medium.contains(1_000_000));
    assert!(!PopulationBucket::Medium.contains(10_000_000));
    assert!(PopulationBucket::Large.contains(10_000_000));
    assert!(!PopulationBucket::Large.contains(100_000_000));
    assert!(PopulationBucket::VeryLarge.contains(100_000_000));
    assert!(PopulationBucket::VeryLarge.contains(u64::MAX));
}

#[test]
fn sort_is_a_no_op_when_inactive() {
    let all = sample();
    assert_eq!(sort_countries(&all, SortState::default()), all);
}

#[test]
fn name_sort_is_case_insensitive() {
    let all = vec![
        country("zebra", "Nowhere", 1),
        country("Apple", "Nowhere", 1),
    ];
    let mut sort = SortState::default();
    sort.cycle(SortColumn::Name);
    assert_eq!(names(&sort_countries(&all, sort)), ["Apple", "zebra"]);
}

#[test]
fn descending_is_the_exact_reverse_of_ascending() {
    let cases = [
        Vec::new(),
        vec![country("Solo", "Oceania", 5)],
        vec![
            country("A", "Europe", 100),
            country("B", "Europe", 50),
            country("C", "Asia", 100),
            country("D", "Asia", 100),
            country("E", "Africa", 7),
        ],
    ];

    let mut asc = SortState::default();
    asc.cycle(SortColumn::Population);
    let mut desc = asc;
    desc.cycle(SortColumn::Population);

    for case in cases {
        let mut reversed = sort_countries(&case, asc);
        reversed.reverse();
        assert_eq!(sort_countries(&case, desc), reversed);
    }
}

#[test]
fn ties_keep_input_order_under_ascending() {
    let all = vec![
        country("A", "Europe", 100),
        country("B", "Europe", 50),
        country("C", "Asia", 100),
        country("D", "Asia", 100),
        country("E", "Africa", 7),
    ];
    let mut asc = SortState::default();
    asc.cycle(SortColumn::Population);
    assert_eq!(names(&sort_countries(&all, asc)), ["E", "B", "A", "C", "D"]);
}

#[test]
fn the_not_available_sentinel_sorts_as_empty_string() {
    let all = vec![
        country("Belgium", "Europe", 1),
        country("Unknown", NOT_AVAILABLE, 1),
    ];
    let mut sort = SortState::default();
    sort.cycle(SortColumn::Region);
    assert_eq!(names(&sort_countries(&all, sort)), ["Unknown", "Belgium"]);
}

#[test]
fn header_cycle_returns_to_unsorted_after_three_clicks() {
    let mut sort = SortState::default();
    sort.cycle(SortColumn::Name);
    assert_eq!(
        sort.active(),
        Some((SortColumn::Name, SortDirection::Ascending))
    );
    sort.cycle(SortColumn::Name);
    assert_eq!(
        sort.active(),
        Some((SortColumn::Name, SortDirection::Descending))
    );
    sort.cycle(SortColumn::Name);
    assert_eq!(sort.active(), None);
}

#[test]
fn switching_columns_discards_the_previous_sort() {
    let mut sort = SortState::default();
    sort.cycle(SortColumn::Name);
    sort.cycle(SortColumn::Name);
    sort.cycle(SortColumn::Population);
    assert_eq!(
        sort.active(),
        Some((SortColumn::Population, SortDirection::Ascending))
    );
    assert_eq!(sort.direction_for(SortColumn::Name), None);
}

#[test]
fn region_options_are_distinct_sorted_and_exclude_the_sentinel() {
    let mut all = sample();
    all.push(country("Nowhere", NOT_AVAILABLE, 1));
    assert_eq!(region_options(&all), ["Asia", "Europe"]);
}

#[test]
fn visible_rows_filters_then_sorts() {
    let mut table = TableContext::default();
    table.set_countries(sample());
    table.filter.region = Some("Europe".to_string());
    table.cycle_sort(SortColumn::Population);
    assert_eq!(
        names(&table.visible_rows()),
        ["Iceland", "Belgium", "France"]
    );

    // Two more clicks complete the cycle; order reverts to filter-only order.
    table.cycle_sort(SortColumn::Population);
    table.cycle_sort(SortColumn::Population);
    assert_eq!(table.sort.active(), None);
    assert_eq!(
        names(&table.visible_rows()),
        ["Belgium", "France", "Iceland"]
    );
}
