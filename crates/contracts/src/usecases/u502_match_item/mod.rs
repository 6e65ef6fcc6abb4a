pub mod request;
pub mod response;

pub use request::MatchRequest;
pub use response::MatchResponse;

use crate::usecases::common::UseCaseMetadata;

/// Best-match lookup of a catalog item by trade and unit of measure.
pub struct MatchItem;

impl UseCaseMetadata for MatchItem {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "match_item"
    }

    fn display_name() -> &'static str {
        "Find Best Match"
    }

    fn description() -> &'static str {
        "Look up the closest catalog item for a trade and unit of measure"
    }
}
