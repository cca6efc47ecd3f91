//! Backend commands queued from UI to backend worker.

use atlas_core::DataSource;

pub enum BackendCommand {
    LoadCountries { source: DataSource },
}
