//! Checkout pairing suggestions: given the current cart, recommend
//! opposite-category products through a cascade of fallback strategies.

pub mod gateway;
pub mod pass;
pub mod resolver;
pub mod samples;
pub mod types;

pub use gateway::{GatewayResult, PairingGateway};
pub use pass::PassTracker;
pub use resolver::{resolve_pairings, PairingUnavailable, ResolvedPairings};
pub use types::{PairingCandidate, PairingStage, PairingSuggestion, SuggestionMap};
