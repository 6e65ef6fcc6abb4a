use leptos::prelude::*;

use super::state::MatchFinderState;
use crate::shared::api::CatalogApi;
use crate::shared::notify::{NoticeKind, Notifier};

pub const NO_MATCH: &str = "No matching item found";

/// Send the current fields to `POST /match/item` and store the outcome.
pub async fn find_match(
    state: RwSignal<MatchFinderState>,
    api: &dyn CatalogApi,
    notifier: &dyn Notifier,
) {
    let Some(query) = state.try_update(|s| s.begin_query()) else {
        return;
    };

    let result = api.find_match(&query).await;
    match &result {
        Ok(response) => log::info!(
            "Best match for {:?}/{:?}: {} (score {})",
            query.trade,
            query.unit_of_measure,
            response.best_match.id,
            response.similarity_score
        ),
        Err(e) => {
            log::warn!("Match lookup failed: {}", e);
            notifier.notify(NoticeKind::Error, NO_MATCH);
        }
    }
    state.update(|s| s.resolve(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{Call, FakeApi};
    use crate::shared::api::ApiError;
    use crate::shared::notify::testing::RecordingNotifier;
    use contracts::domain::a001_catalog_item::Item;
    use contracts::usecases::u502_match_item::{MatchRequest, MatchResponse};
    use futures::executor::block_on;

    fn finder(trade: &str, unit: &str) -> RwSignal<MatchFinderState> {
        RwSignal::new(MatchFinderState {
            trade: trade.to_string(),
            unit_of_measure: unit.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_match_renders_card() {
        let api = FakeApi::default();
        api.push_match(Ok(MatchResponse {
            best_match: Item {
                id: "1".into(),
                trade: "Plumbing".into(),
                unit_of_measure: "hr".into(),
                rate: 42.5,
            },
            similarity_score: 0.91,
        }));
        let notifier = RecordingNotifier::default();
        let state = finder("plumbing", "hour");

        block_on(find_match(state, &api, &notifier));

        assert_eq!(
            api.calls(),
            vec![Call::FindMatch(MatchRequest {
                trade: "plumbing".into(),
                unit_of_measure: "hour".into(),
            })]
        );
        let card = state.get_untracked().matched_card().unwrap();
        assert_eq!(card.heading, "Best Match has a similarity score of 0.91");
        assert_eq!(card.trade, "Plumbing");
        assert_eq!(card.unit_of_measure, "hr");
        assert_eq!(card.rate, "$42.50");
        assert_eq!(card.score, "0.91");
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn test_failure_renders_no_match() {
        let api = FakeApi::default();
        api.push_match(Err(ApiError::Server {
            status: 404,
            body: "No matching item found.".into(),
        }));
        let notifier = RecordingNotifier::default();
        let state = finder("Astrophysics", "parsec");

        block_on(find_match(state, &api, &notifier));

        let after = state.get_untracked();
        assert!(after.shows_no_match());
        assert_eq!(after.matched_card(), None);
        assert_eq!(
            notifier.take(),
            vec![(NoticeKind::Error, NO_MATCH.to_string())]
        );
    }
}
