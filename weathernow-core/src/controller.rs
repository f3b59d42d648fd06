//! Lookup state machine.
//!
//! All mutation goes through [`WeatherLookupController::apply`]. Network work
//! is returned as an [`Effect`] so the transition logic stays synchronous and
//! toolkit-agnostic; [`WeatherLookupController::submit`] wires it to a provider.

use chrono::{DateTime, Utc};

use crate::{
    error::{LookupError, TransportError},
    model::{CurrentPayload, Interpretation, WeatherResult},
    provider::WeatherProvider,
};

/// Everything the view needs to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub city_text: String,
    pub is_loading: bool,
    pub error: Option<LookupError>,
    pub result: Option<WeatherResult>,
    /// When `result` was stored.
    pub updated_at: Option<DateTime<Utc>>,
}

impl QueryState {
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Coarse phase, derived from the fields.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Populated
        } else {
            Phase::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Populated,
    Error,
}

/// Identifies one dispatched lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub id: u64,
    /// City text exactly as typed.
    pub city: String,
}

#[derive(Debug)]
pub enum Event {
    CityTextChanged(String),
    Submitted,
    Resolved {
        ticket: LookupTicket,
        outcome: Result<CurrentPayload, TransportError>,
    },
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(LookupTicket),
}

#[derive(Debug, Default)]
pub struct WeatherLookupController {
    state: QueryState,
    last_ticket: u64,
    /// Only the most recently dispatched lookup may resolve.
    pending: Option<u64>,
}

impl WeatherLookupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::CityTextChanged(text) => {
                self.state.city_text = text;
                None
            }
            Event::Submitted => self.on_submitted(),
            Event::Resolved { ticket, outcome } => {
                self.on_resolved(ticket, outcome);
                None
            }
        }
    }

    /// Run one lookup for the current city text against `provider`.
    pub async fn submit<P>(&mut self, provider: &P) -> &QueryState
    where
        P: WeatherProvider + ?Sized,
    {
        if let Some(effect) = self.apply(Event::Submitted) {
            self.perform(effect, provider).await;
        }
        &self.state
    }

    /// Carry out an effect returned by [`apply`](Self::apply) and feed the
    /// outcome back in.
    pub async fn perform<P>(&mut self, effect: Effect, provider: &P)
    where
        P: WeatherProvider + ?Sized,
    {
        match effect {
            Effect::Fetch(ticket) => {
                let outcome = provider.fetch_current(&ticket.city).await;
                self.apply(Event::Resolved { ticket, outcome });
            }
        }
    }

    fn on_submitted(&mut self) -> Option<Effect> {
        if self.state.city_text.trim().is_empty() {
            if let Some(id) = self.pending.take() {
                tracing::debug!(id, "blank submit supersedes pending lookup");
            }
            self.state.is_loading = false;
            self.state.error = Some(LookupError::Validation);
            self.clear_result();
            return None;
        }

        self.last_ticket += 1;
        let ticket = LookupTicket {
            id: self.last_ticket,
            city: self.state.city_text.clone(),
        };
        self.pending = Some(ticket.id);
        self.state.is_loading = true;
        self.state.error = None;

        tracing::debug!(id = ticket.id, city = %ticket.city, "dispatching lookup");
        Some(Effect::Fetch(ticket))
    }

    fn on_resolved(&mut self, ticket: LookupTicket, outcome: Result<CurrentPayload, TransportError>) {
        if self.pending != Some(ticket.id) {
            tracing::debug!(
                id = ticket.id,
                latest = self.last_ticket,
                "discarding stale lookup response"
            );
            return;
        }
        self.pending = None;
        self.state.is_loading = false;

        match outcome.and_then(CurrentPayload::interpret) {
            Ok(Interpretation::Weather(result)) => {
                self.state.error = None;
                self.state.result = Some(result);
                self.state.updated_at = Some(Utc::now());
            }
            Ok(Interpretation::Upstream(err)) => {
                tracing::info!(city = %ticket.city, error = %err, "lookup rejected upstream");
                self.state.error = Some(err);
                self.clear_result();
            }
            Err(cause) => {
                tracing::warn!(city = %ticket.city, error = %cause, "lookup failed");
                self.state.error = Some(LookupError::Transport);
                self.clear_result();
            }
        }
    }

    fn clear_result(&mut self) {
        self.state.result = None;
        self.state.updated_at = None;
    }
}
