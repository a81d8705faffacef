use crate::catalog::Candidate;
use crate::normalize::CleanedQuery;
use super::similarity::title_similarity;

/// Bonus added when the candidate's year equals the row's year hint
const YEAR_BONUS: f64 = 0.2;
/// Bonus added when the candidate's kind equals the row's kind hint
const KIND_BONUS: f64 = 0.1;

/// A candidate together with its combined match score
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
}

/// The two orderings the decision rules consult.
///
/// `by_score` is sorted descending by combined score; the sort is stable,
/// so equal scores keep catalog order. `by_popularity` is the untouched
/// catalog order, which the search step already produces popularity
/// descending. Both are kept side by side, neither is derived from the
/// other after ranking.
#[derive(Debug, Clone)]
pub struct RankedCandidates {
    pub by_score: Vec<ScoredCandidate>,
    pub by_popularity: Vec<Candidate>,
}

impl RankedCandidates {
    /// The best candidate by combined score
    pub fn best(&self) -> &ScoredCandidate {
        &self.by_score[0]
    }

    /// The runner-up by combined score
    pub fn second(&self) -> &ScoredCandidate {
        &self.by_score[1]
    }
}

/// Score every candidate against the query and rank them.
///
/// The combined score is the title similarity of the lowercased titles,
/// plus a fixed bonus for a matching year hint and another for a matching
/// kind hint. Missing hints contribute nothing either way.
pub fn rank(query: &CleanedQuery, candidates: &[Candidate]) -> RankedCandidates {
    let query_title = query.title.to_lowercase();

    let mut by_score: Vec<ScoredCandidate> = candidates.iter()
        .map(|candidate| ScoredCandidate {
            candidate: candidate.clone(),
            score: score_candidate(&query_title, query, candidate),
        })
        .collect();

    by_score.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    RankedCandidates {
        by_score,
        by_popularity: candidates.to_vec(),
    }
}

fn score_candidate(query_title_lower: &str, query: &CleanedQuery, candidate: &Candidate) -> f64 {
    let candidate_title = candidate.title.as_deref().unwrap_or("").to_lowercase();
    let mut score = title_similarity(query_title_lower, &candidate_title);

    if let Some(year) = query.year_hint {
        if candidate.year == Some(year) {
            score += YEAR_BONUS;
        }
    }

    if let Some(kind) = query.kind_hint {
        if candidate.kind == kind {
            score += KIND_BONUS;
        }
    }

    score
}
