//! Application shell: filter controls, sortable headers, the table itself,
//! and the status line.

use atlas_core::{
    DataSource, FilterConfig, PopulationBucket, SortColumn, SortDirection, TableContext,
};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::rows::{build_rows, CountryRow, COORDS_UNAVAILABLE, NO_DATA};

/// Lifecycle of the one-shot data load.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

const NO_DATA_PLACEHOLDER: &str = "No countries data available";
const NO_MATCH_PLACEHOLDER: &str = "No countries match the current filters";

/// What the table body shows. An empty collection and a filtered-to-empty
/// subset are different situations and get different placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BodyState {
    Loading,
    Failed(String),
    NoData,
    NoMatch,
    Rows,
}

fn body_state(load_state: &LoadState, has_data: bool, visible: usize) -> BodyState {
    match load_state {
        LoadState::Loading => BodyState::Loading,
        LoadState::Failed(message) => BodyState::Failed(message.clone()),
        LoadState::Ready if !has_data => BodyState::NoData,
        LoadState::Ready if visible == 0 => BodyState::NoMatch,
        LoadState::Ready => BodyState::Rows,
    }
}

pub struct CountryTableApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    source: DataSource,

    table: TableContext,
    region_choices: Vec<String>,
    rows: Vec<CountryRow>,

    search_input: String,
    region_filter: Option<String>,
    bucket_filter: Option<PopulationBucket>,

    load_state: LoadState,
    status: String,
}

impl CountryTableApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        source: DataSource,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            source,
            table: TableContext::default(),
            region_choices: Vec::new(),
            rows: Vec::new(),
            search_input: String::new(),
            region_filter: None,
            bucket_filter: None,
            load_state: LoadState::Loading,
            status: "Loading countries data...".to_string(),
        };
        app.request_load();
        app
    }

    fn request_load(&mut self) {
        self.load_state = LoadState::Loading;
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadCountries {
                source: self.source.clone(),
            },
            &mut self.status,
        );
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::CountriesLoaded(countries) => {
                    self.status = format!("Loaded {} countries", countries.len());
                    self.table.set_countries(countries);
                    self.region_choices = self.table.regions();
                    self.load_state = LoadState::Ready;
                    self.refresh_table();
                }
                UiEvent::LoadFailed(err) => {
                    self.status = err.display_line();
                    self.load_state = LoadState::Failed(err.display_line());
                }
            }
        }
    }

    /// The single recomputation entry point: re-reads the controls into the
    /// filter config, derives the subset, and rebuilds the row models.
    fn refresh_table(&mut self) {
        self.table.filter = FilterConfig {
            search_term: self.search_input.clone(),
            region: self.region_filter.clone(),
            population_bucket: self.bucket_filter,
        };
        self.rows = build_rows(&self.table.visible_rows());
    }

    fn show_filter_controls(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label("Search:");
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Search by country name")
                    .desired_width(220.0),
            );
            changed |= search.changed();

            ui.separator();
            changed |= self.show_region_select(ui);
            ui.separator();
            changed |= self.show_bucket_select(ui);

            ui.separator();
            if ui.button("Reload").clicked() {
                self.request_load();
            }
        });
        if changed {
            self.refresh_table();
        }
    }

    fn show_region_select(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        egui::ComboBox::from_id_salt("region_filter")
            .selected_text(
                self.region_filter
                    .clone()
                    .unwrap_or_else(|| "All regions".to_string()),
            )
            .show_ui(ui, |ui| {
                changed |= ui
                    .selectable_value(&mut self.region_filter, None, "All regions")
                    .changed();
                for region in &self.region_choices {
                    changed |= ui
                        .selectable_value(
                            &mut self.region_filter,
                            Some(region.clone()),
                            region.as_str(),
                        )
                        .changed();
                }
            });
        changed
    }

    fn show_bucket_select(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        egui::ComboBox::from_id_salt("population_bucket_filter")
            .selected_text(
                self.bucket_filter
                    .map_or("All populations", PopulationBucket::label),
            )
            .show_ui(ui, |ui| {
                changed |= ui
                    .selectable_value(&mut self.bucket_filter, None, "All populations")
                    .changed();
                for bucket in PopulationBucket::ALL {
                    changed |= ui
                        .selectable_value(&mut self.bucket_filter, Some(bucket), bucket.label())
                        .changed();
                }
            });
        changed
    }

    fn show_table(&mut self, ui: &mut egui::Ui) {
        // The displayed total always reflects the filtered subset, not the
        // full collection.
        ui.label(format!("Total countries: {}", self.rows.len()));
        ui.add_space(4.0);

        egui::ScrollArea::both()
            .id_salt("countries_table_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("countries_table")
                    .striped(true)
                    .min_col_width(56.0)
                    .spacing([18.0, 6.0])
                    .show(ui, |ui| {
                        self.show_header_row(ui);
                        self.show_body_rows(ui);
                    });
            });
    }

    fn show_header_row(&mut self, ui: &mut egui::Ui) {
        let sort = self.table.sort;
        let mut clicked: Option<SortColumn> = None;
        let mut header = |ui: &mut egui::Ui, column: SortColumn| {
            let text = match sort.direction_for(column) {
                Some(SortDirection::Ascending) => format!("{} ▲", column.label()),
                Some(SortDirection::Descending) => format!("{} ▼", column.label()),
                None => column.label().to_string(),
            };
            let button = egui::Button::new(egui::RichText::new(text).strong()).frame(false);
            if ui.add(button).clicked() {
                clicked = Some(column);
            }
        };

        ui.strong("Flag");
        header(ui, SortColumn::Name);
        header(ui, SortColumn::Code);
        header(ui, SortColumn::Capital);
        header(ui, SortColumn::Region);
        header(ui, SortColumn::Population);
        ui.strong("Coordinates");
        header(ui, SortColumn::Languages);
        header(ui, SortColumn::Currencies);
        ui.end_row();

        if let Some(column) = clicked {
            self.table.cycle_sort(column);
            self.refresh_table();
        }
    }

    fn show_body_rows(&mut self, ui: &mut egui::Ui) {
        match body_state(&self.load_state, self.table.has_data(), self.rows.len()) {
            BodyState::Loading => {
                ui.weak("Loading countries data...");
                ui.end_row();
            }
            BodyState::Failed(message) => {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("Error: {message}"));
                ui.end_row();
            }
            BodyState::NoData => {
                ui.weak(NO_DATA_PLACEHOLDER);
                ui.end_row();
            }
            BodyState::NoMatch => {
                ui.weak(NO_MATCH_PLACEHOLDER);
                ui.end_row();
            }
            BodyState::Rows => {
                for row in &self.rows {
                    match &row.flag {
                        Some(flag) => ui.label(flag.as_str()),
                        None => ui.weak(NO_DATA),
                    };
                    ui.label(row.name.as_str());
                    ui.label(row.code.as_str());
                    ui.label(row.capital.as_str());
                    ui.label(row.region.as_str());
                    ui.monospace(row.population.as_str());
                    match &row.coordinates {
                        Some(coordinates) => ui.monospace(coordinates.as_str()),
                        None => ui.weak(COORDS_UNAVAILABLE),
                    };
                    ui.label(row.languages.as_str());
                    ui.label(row.currencies.as_str());
                    ui.end_row();
                }
            }
        }
    }
}

impl eframe::App for CountryTableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Countries of the World");
            ui.add_space(6.0);
            self.show_filter_controls(ui);
            ui.separator();
            self.show_table(ui);
        });

        // The load resolves on the worker thread; keep polling for its event.
        if self.load_state == LoadState::Loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::Country;

    fn belgium() -> Country {
        Country {
            name: "Belgium".to_string(),
            code: "BE".to_string(),
            capital: "Brussels".to_string(),
            region: "Europe".to_string(),
            population: 11_555_997,
            coordinates: None,
            flag_emoji: None,
            languages: "Dutch".to_string(),
            currencies: "Euro".to_string(),
        }
    }

    #[test]
    fn empty_subset_and_empty_collection_get_distinct_placeholders() {
        assert_eq!(body_state(&LoadState::Ready, false, 0), BodyState::NoData);
        assert_eq!(body_state(&LoadState::Ready, true, 0), BodyState::NoMatch);
        assert_ne!(NO_DATA_PLACEHOLDER, NO_MATCH_PLACEHOLDER);
    }

    #[test]
    fn filtering_everything_out_shows_no_match_with_a_zero_total() {
        let mut table = TableContext::default();
        table.set_countries(vec![belgium()]);
        table.filter.search_term = "zzz".to_string();

        let rows = build_rows(&table.visible_rows());
        assert_eq!(rows.len(), 0);
        assert_eq!(
            body_state(&LoadState::Ready, table.has_data(), rows.len()),
            BodyState::NoMatch
        );
    }

    #[test]
    fn body_follows_the_load_lifecycle() {
        assert_eq!(body_state(&LoadState::Loading, false, 0), BodyState::Loading);
        assert_eq!(
            body_state(&LoadState::Failed("no route".to_string()), true, 3),
            BodyState::Failed("no route".to_string())
        );
        assert_eq!(body_state(&LoadState::Ready, true, 3), BodyState::Rows);
    }
}
