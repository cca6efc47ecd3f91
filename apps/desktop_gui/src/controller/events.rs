//! UI/backend events and error modeling for the desktop controller.

use atlas_core::{Country, LoadError};

pub enum UiEvent {
    Info(String),
    CountriesLoaded(Vec<Country>),
    LoadFailed(UiError),
}

impl UiEvent {
    /// Short event name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Info(_) => "info",
            UiEvent::CountriesLoaded(_) => "countries loaded",
            UiEvent::LoadFailed(_) => "load failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Status,
    Decode,
    Payload,
    Io,
    Startup,
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Status => "Server",
            Self::Decode => "Data format",
            Self::Payload => "Data shape",
            Self::Io => "File",
            Self::Startup => "Startup",
        }
    }
}

/// Load failure as shown to the user. The category comes from the typed
/// error variant rather than message sniffing.
#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Startup,
            message: message.into(),
        }
    }

    pub fn from_load_error(err: &LoadError) -> Self {
        let category = match err {
            LoadError::Transport(_) => UiErrorCategory::Transport,
            LoadError::Status { .. } => UiErrorCategory::Status,
            LoadError::Decode(_) => UiErrorCategory::Decode,
            LoadError::NotAList => UiErrorCategory::Payload,
            LoadError::Io { .. } => UiErrorCategory::Io,
        };
        Self {
            category,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line form for the status bar and the in-table error row.
    pub fn display_line(&self) -> String {
        format!("{} error: {}", self.category.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::LoadError;
    use std::path::PathBuf;

    #[test]
    fn load_error_variants_map_to_matching_categories() {
        let err = UiError::from_load_error(&LoadError::NotAList);
        assert_eq!(err.category(), UiErrorCategory::Payload);
        assert!(err.display_line().contains("not a list"));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = UiError::from_load_error(&LoadError::Io {
            path: PathBuf::from("countries.json"),
            source: io,
        });
        assert_eq!(err.category(), UiErrorCategory::Io);
        assert!(err.message().contains("countries.json"));
    }

    #[test]
    fn startup_errors_carry_their_own_category() {
        let err = UiError::startup("no runtime");
        assert_eq!(err.category(), UiErrorCategory::Startup);
        assert_eq!(err.display_line(), "Startup error: no runtime");
    }
}
