/*!
 * Candidate scoring, ranking and the auto-select decision rules.
 */

pub mod decision;
pub mod ranker;
pub mod similarity;

pub use decision::{decide, Decision, MatchReason};
pub use ranker::{rank, RankedCandidates, ScoredCandidate};
pub use similarity::title_similarity;
