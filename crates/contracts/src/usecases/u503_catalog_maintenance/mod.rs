use crate::usecases::common::UseCaseMetadata;

/// Seeding the catalog with the server's default data (`POST /load`).
pub struct AutoPopulate;

impl UseCaseMetadata for AutoPopulate {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "auto_populate"
    }

    fn display_name() -> &'static str {
        "Auto Populate"
    }

    fn description() -> &'static str {
        "Load the default catalog shipped with the service"
    }
}

/// Wiping the catalog back to an empty state (`DELETE /clear`).
pub struct ResetCatalog;

impl UseCaseMetadata for ResetCatalog {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "reset"
    }

    fn display_name() -> &'static str {
        "Reset"
    }
}
