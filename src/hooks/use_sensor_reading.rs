use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{error::AppError, reading::Reading};
use crate::services::api::{ApiConfig, fetch_latest_reading};
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ReadingState {
    /// No poll has succeeded yet
    #[default]
    Waiting,
    Current(Rc<Reading>),
}

impl ReadingState {
    /// Returns the reading if one has been received
    pub const fn reading(&self) -> Option<&Rc<Reading>> {
        match self {
            Self::Current(reading) => Some(reading),
            Self::Waiting => None,
        }
    }

    /// Reading to render: the current one, or the zero placeholder.
    pub fn display_reading(&self) -> Rc<Reading> {
        self.reading()
            .cloned()
            .unwrap_or_else(|| Rc::new(Reading::placeholder()))
    }

    /// State to publish once poll `ticket` completes, or `None` to keep the current one.
    ///
    /// Failed polls and responses older than one already applied never change the state.
    pub fn apply(
        &self,
        outcome: Result<Reading, AppError>,
        ticket: u64,
        sequence: &RequestSequence,
    ) -> Option<Self> {
        match outcome {
            Ok(reading) if sequence.accept(ticket) => Some(Self::Current(Rc::new(reading))),
            Ok(_) | Err(_) => None,
        }
    }
}

/// Issues increasing tickets to polls so that a slow response cannot
/// overwrite one from a later poll.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RequestSequence {
    /// Takes the next ticket.
    pub fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// Records `ticket` as applied if it is newer than anything applied so far.
    pub fn accept(&self, ticket: u64) -> bool {
        if ticket > self.applied.get() {
            self.applied.set(ticket);
            true
        } else {
            false
        }
    }
}

#[hook]
pub fn use_sensor_reading(config: ApiConfig) -> UseStateHandle<ReadingState> {
    let state = use_state(ReadingState::default);

    {
        let state = state.clone();

        use_effect_with(config, move |config| {
            let sequence = Rc::new(RequestSequence::default());
            let aborted = Rc::new(Cell::new(false));

            let poll: Rc<dyn Fn()> = {
                let config = config.clone();
                let aborted = aborted.clone();
                Rc::new(move || {
                    let ticket = sequence.issue();
                    let config = config.clone();
                    let state = state.clone();
                    let sequence = sequence.clone();
                    let aborted = aborted.clone();

                    spawn_local(async move {
                        let outcome = fetch_latest_reading(&config).await;
                        if aborted.get() {
                            return; // Unmounted while in flight
                        }

                        if let Err(e) = &outcome {
                            gloo::console::error!(&format!("Error fetching sensor data: {e}"));
                        }
                        let fetched = outcome.is_ok();

                        match state.apply(outcome, ticket, &sequence) {
                            Some(next) => state.set(next),
                            None if fetched => {
                                gloo::console::debug!(&format!(
                                    "Discarding stale sensor reading from poll #{ticket}"
                                ));
                            }
                            None => {}
                        }
                    });
                })
            };

            // Fetch once at mount, then on every tick
            poll();
            let interval = Config::ENABLE_AUTO_REFRESH
                .then(|| Interval::new(Config::POLLING_INTERVAL_MS, move || poll()));

            move || {
                aborted.set(true);
                drop(interval);
            }
        });
    }

    state
}
