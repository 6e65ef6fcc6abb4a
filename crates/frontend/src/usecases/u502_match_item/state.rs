use contracts::usecases::u502_match_item::{MatchRequest, MatchResponse};
use leptos::prelude::*;

use crate::shared::api::ApiError;
use crate::shared::number_format::{format_rate, format_score};

/// What the result area shows.
///
/// `NoMatch` covers both "the matcher found nothing" and "the request
/// failed": the service answers both with an error status, so the client
/// cannot tell them apart and does not try to.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchOutcome {
    /// No query submitted yet; neither card is shown
    Unset,
    Matched(MatchResponse),
    NoMatch,
}

impl MatchOutcome {
    pub fn from_result(result: Result<MatchResponse, ApiError>) -> Self {
        match result {
            Ok(response) => MatchOutcome::Matched(response),
            Err(_) => MatchOutcome::NoMatch,
        }
    }
}

/// Display strings of the matched card, exactly as rendered
#[derive(Clone, Debug, PartialEq)]
pub struct MatchCard {
    pub heading: String,
    pub trade: String,
    pub unit_of_measure: String,
    pub rate: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchFinderState {
    pub trade: String,
    pub unit_of_measure: String,
    pub outcome: MatchOutcome,
    /// Queries sent but not yet resolved
    pub in_flight: usize,
}

impl Default for MatchFinderState {
    fn default() -> Self {
        Self {
            trade: String::new(),
            unit_of_measure: String::new(),
            outcome: MatchOutcome::Unset,
            in_flight: 0,
        }
    }
}

impl MatchFinderState {
    /// Snapshot the fields as a query and count it as in flight
    pub fn begin_query(&mut self) -> MatchRequest {
        self.in_flight += 1;
        MatchRequest {
            trade: self.trade.clone(),
            unit_of_measure: self.unit_of_measure.clone(),
        }
    }

    /// Whatever resolves last overwrites the outcome
    pub fn resolve(&mut self, result: Result<MatchResponse, ApiError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.outcome = MatchOutcome::from_result(result);
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn matched_card(&self) -> Option<MatchCard> {
        match &self.outcome {
            MatchOutcome::Matched(response) => Some(MatchCard {
                heading: format!(
                    "Best Match has a similarity score of {}",
                    format_score(response.similarity_score)
                ),
                trade: response.best_match.trade.clone(),
                unit_of_measure: response.best_match.unit_of_measure.clone(),
                rate: format_rate(response.best_match.rate),
                score: format_score(response.similarity_score),
            }),
            _ => None,
        }
    }

    pub fn shows_no_match(&self) -> bool {
        self.outcome == MatchOutcome::NoMatch
    }
}

pub fn create_state() -> RwSignal<MatchFinderState> {
    RwSignal::new(MatchFinderState::default())
}
