use crate::error::AppError;
use rapidfuzz::fuzz;

/// Resolves free-text input to the closest known name.
///
/// This is best-effort "did you mean" matching, not validation: as long as
/// the candidate list is non-empty it always picks something, even for a poor
/// match. A misspelled or partial filter value silently becomes the nearest
/// canonical entity. Scoring is the normalized Indel ratio over lowercased
/// strings; the first candidate with a strictly higher score wins, so the
/// tie-break is stable within a process run.
pub fn resolve<'a>(query: &str, candidates: &'a [String]) -> Result<&'a str, AppError> {
    let query_lower = query.to_lowercase();

    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = fuzz::ratio(query_lower.chars(), candidate.to_lowercase().chars());
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate.as_str(), score));
        }
    }

    best.map(|(name, _)| name).ok_or(AppError::NoCandidates)
}
