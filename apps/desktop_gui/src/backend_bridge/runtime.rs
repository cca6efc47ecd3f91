//! Backend worker: a dedicated thread running a tokio runtime that services
//! UI commands and answers over the event channel.

use std::thread;

use atlas_core::load_countries;
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

/// Push one event to the UI. Delivery failures are logged instead of
/// discarded; a dropped event leaves the UI stale, and the log line is the
/// only trace of why.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(event)) => {
            tracing::warn!("ui event queue is full; dropping '{}' event", event.kind());
            false
        }
        Err(TrySendError::Disconnected(event)) => {
            tracing::warn!("ui event queue is gone; dropping '{}' event", event.kind());
            false
        }
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                deliver(
                    &ui_tx,
                    UiEvent::LoadFailed(UiError::startup(format!(
                        "backend worker startup failure: failed to build runtime: {err}"
                    ))),
                );
                return;
            }
        };

        runtime.block_on(async move {
            let http = reqwest::Client::new();
            deliver(&ui_tx, UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadCountries { source } => {
                        deliver(
                            &ui_tx,
                            UiEvent::Info(format!("Loading countries from {source}...")),
                        );
                        match load_countries(&http, &source).await {
                            Ok(countries) => {
                                deliver(&ui_tx, UiEvent::CountriesLoaded(countries));
                            }
                            Err(err) => {
                                tracing::error!("failed to load countries: {err}");
                                deliver(
                                    &ui_tx,
                                    UiEvent::LoadFailed(UiError::from_load_error(&err)),
                                );
                            }
                        }
                    }
                }
            }
        });
    });
}
