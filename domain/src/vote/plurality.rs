//! Plurality vote over candidate texts

use std::collections::HashMap;

/// Pick the most frequent text among `candidates`.
///
/// Ties go to the candidate whose first occurrence comes earliest, so the
/// outcome is deterministic for a given candidate order. Returns `None` only
/// for an empty slice.
///
/// # Example
///
/// ```
/// use crowdsum_domain::plurality_vote;
///
/// let candidates = ["a".to_string(), "b".to_string(), "a".to_string()];
/// assert_eq!(plurality_vote(&candidates), Some("a"));
/// ```
pub fn plurality_vote(candidates: &[String]) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        *counts.entry(candidate.as_str()).or_insert(0) += 1;
    }

    // Walk in candidate order so the first-occurring text wins ties.
    let mut winner: Option<(&str, usize)> = None;
    for candidate in candidates {
        let count = counts[candidate.as_str()];
        match winner {
            Some((_, best)) if best >= count => {}
            _ => winner = Some((candidate.as_str(), count)),
        }
    }
    winner.map(|(text, _)| text)
}
