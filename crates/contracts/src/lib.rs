//! Wire contracts shared between the QuoteCheck client and the matching service.

pub mod domain;
pub mod usecases;
