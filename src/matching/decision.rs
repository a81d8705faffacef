/*!
 * Auto-select decision rules.
 *
 * Each resolved row runs through a fixed rule chain, first match wins.
 * Empty and single-candidate sets settle immediately; everything else is
 * ranked and judged on score, score gaps and popularity. Rows no rule
 * accepts go to manual review with the best scorer attached as a
 * suggestion.
 */

use std::fmt;

use crate::app_config::DecisionConfig;
use crate::catalog::Candidate;
use crate::normalize::CleanedQuery;
use super::ranker;

/// Score ties closer than this defer to manual review outright
const TIE_EPSILON: f64 = 0.001;
/// Score at or above which the best candidate is accepted unconditionally
const EXCELLENT_SCORE: f64 = 0.95;
/// Score at or above which the best candidate is accepted
const VERY_GOOD_SCORE: f64 = 0.90;
/// Score at or above which a small candidate set is accepted
const GOOD_SCORE: f64 = 0.85;
/// Largest candidate set the good-score rule applies to
const FEW_ALTERNATIVES_MAX: usize = 3;
/// Score lead over the runner-up that settles a row on its own
const CLEAR_WINNER_GAP: f64 = 0.15;
/// Minimum score for the high-popularity rule
const DECENT_SCORE: f64 = 0.7;

/// Why a row was accepted or deferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    NotFound,
    SingleMatch,
    PerfectTie,
    ExcellentMatch,
    VeryGoodMatch,
    GoodMatchFewAlternatives,
    ClearSimilarityWinner,
    HighPopularityDecentMatch,
    SignificantPopularityDifference,
    Ambiguous,
}

impl MatchReason {
    // @returns: Stable identifier used in logs and the review file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::SingleMatch => "SINGLE_MATCH",
            Self::PerfectTie => "PERFECT_TIE",
            Self::ExcellentMatch => "EXCELLENT_MATCH",
            Self::VeryGoodMatch => "VERY_GOOD_MATCH",
            Self::GoodMatchFewAlternatives => "GOOD_MATCH_FEW_ALTERNATIVES",
            Self::ClearSimilarityWinner => "CLEAR_SIMILARITY_WINNER",
            Self::HighPopularityDecentMatch => "HIGH_POPULARITY_DECENT_MATCH",
            Self::SignificantPopularityDifference => "SIGNIFICANT_POPULARITY_DIFFERENCE",
            Self::Ambiguous => "AMBIGUOUS",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal outcome for one row
#[derive(Debug, Clone)]
pub enum Decision {
    /// Add the candidate to the row's destination bucket
    Accept {
        candidate: Candidate,
        reason: MatchReason,
    },
    /// Send the row to manual review, with the best scorer as a
    /// suggestion when one exists
    Defer {
        suggestion: Option<Candidate>,
        reason: MatchReason,
    },
}

impl Decision {
    pub fn reason(&self) -> MatchReason {
        match self {
            Self::Accept { reason, .. } | Self::Defer { reason, .. } => *reason,
        }
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept { .. })
    }
}

/// Decide one row.
///
/// Candidates must arrive in catalog order (popularity descending); the
/// popularity-difference rule reads that ordering directly. The same
/// inputs always produce the same decision.
pub fn decide(query: &CleanedQuery, candidates: &[Candidate], config: &DecisionConfig) -> Decision {
    if candidates.is_empty() {
        return Decision::Defer {
            suggestion: None,
            reason: MatchReason::NotFound,
        };
    }

    // A lone candidate needs no scoring
    if candidates.len() == 1 {
        return Decision::Accept {
            candidate: candidates[0].clone(),
            reason: MatchReason::SingleMatch,
        };
    }

    let ranked = ranker::rank(query, candidates);
    let best = ranked.best();
    let second = ranked.second();

    if (best.score - second.score).abs() < TIE_EPSILON {
        return Decision::Defer {
            suggestion: Some(best.candidate.clone()),
            reason: MatchReason::PerfectTie,
        };
    }

    if best.score >= EXCELLENT_SCORE {
        return Decision::Accept {
            candidate: best.candidate.clone(),
            reason: MatchReason::ExcellentMatch,
        };
    }

    if best.score >= VERY_GOOD_SCORE {
        return Decision::Accept {
            candidate: best.candidate.clone(),
            reason: MatchReason::VeryGoodMatch,
        };
    }

    if best.score >= GOOD_SCORE && candidates.len() <= FEW_ALTERNATIVES_MAX {
        return Decision::Accept {
            candidate: best.candidate.clone(),
            reason: MatchReason::GoodMatchFewAlternatives,
        };
    }

    if best.score - second.score >= CLEAR_WINNER_GAP {
        return Decision::Accept {
            candidate: best.candidate.clone(),
            reason: MatchReason::ClearSimilarityWinner,
        };
    }

    if best.candidate.popularity > config.high_popularity && best.score >= DECENT_SCORE {
        return Decision::Accept {
            candidate: best.candidate.clone(),
            reason: MatchReason::HighPopularityDecentMatch,
        };
    }

    // The popularity rule compares the two most popular candidates, not
    // the two best scorers, and accepts the popularity leader.
    let pop_best = &ranked.by_popularity[0];
    let pop_second = &ranked.by_popularity[1];
    if pop_best.popularity - pop_second.popularity > config.popularity_gap
        && pop_best.popularity > config.min_popularity_for_auto_select
    {
        return Decision::Accept {
            candidate: pop_best.clone(),
            reason: MatchReason::SignificantPopularityDifference,
        };
    }

    Decision::Defer {
        suggestion: Some(best.candidate.clone()),
        reason: MatchReason::Ambiguous,
    }
}
