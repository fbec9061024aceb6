//! Relevancy ranking of notes against a query.

use crate::note::Note;
use crate::search::query::Query;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

/// One row of a ranked result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedNote<'a, K> {
    /// Store id of the note.
    pub id: K,
    /// The matching note.
    pub note: &'a Note,
    /// Number of distinct query terms the note matched.
    pub relevancy: usize,
}

/// Notes matching a single (already lowercased) term, in source order.
pub fn relevant_notes<'a>(term: &str, notes: &'a [Note]) -> Vec<&'a Note> {
    notes.iter().filter(|note| note.matches_term(term)).collect()
}

fn matching_positions<'a>(term: &'a str, notes: &'a [Note]) -> impl Iterator<Item = usize> + 'a {
    notes
        .iter()
        .enumerate()
        .filter(move |(_, note)| note.matches_term(term))
        .map(|(position, _)| position)
}

/// Count how many times each id occurs.
pub fn relevancy_counts<K, I>(ids: I) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts = HashMap::new();
    for id in ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}

/// Rank `notes` against `query`, resolving each note's id with `id_of`.
///
/// `id_of` is called once per note. See [`rank_with_ids`].
pub fn rank<'a, K, F>(query: &Query, notes: &'a [Note], id_of: F) -> Vec<RankedNote<'a, K>>
where
    K: Clone + Eq + Hash,
    F: Fn(&Note) -> K,
{
    let ids: Vec<K> = notes.iter().map(id_of).collect();
    rank_with_ids(query, notes, &ids)
}

/// Rank `notes` against `query`, where `ids[i]` is the id of `notes[i]`.
///
/// Every term contributes its matches in source order; the concatenation is
/// deduplicated by id (first occurrence wins) and stable-sorted by how many
/// terms matched each note, highest first. Notes past the end of `ids` are
/// not considered.
pub fn rank_with_ids<'a, K>(query: &Query, notes: &'a [Note], ids: &[K]) -> Vec<RankedNote<'a, K>>
where
    K: Clone + Eq + Hash,
{
    let notes = &notes[..notes.len().min(ids.len())];

    let combined: Vec<usize> = query
        .terms()
        .iter()
        .flat_map(|term| matching_positions(term, notes))
        .collect();

    let counts = relevancy_counts(combined.iter().map(|&position| &ids[position]));

    let mut seen = HashSet::new();
    let mut ranked: Vec<RankedNote<'a, K>> = combined
        .iter()
        .filter(|&&position| seen.insert(&ids[position]))
        .map(|&position| RankedNote {
            id: ids[position].clone(),
            note: &notes[position],
            relevancy: counts[&ids[position]],
        })
        .collect();

    // `sort_by` is stable: ties keep their discovery order.
    ranked.sort_by(|a, b| b.relevancy.cmp(&a.relevancy));

    debug!(
        terms = query.terms().len(),
        notes = notes.len(),
        matches = ranked.len(),
        "ranked notes"
    );

    ranked
}

/// Filter and order `notes` by relevancy to the raw `query` text.
pub fn filter<'a, K, F>(query: &str, notes: &'a [Note], id_of: F) -> Vec<&'a Note>
where
    K: Clone + Eq + Hash,
    F: Fn(&Note) -> K,
{
    rank(&Query::parse(query), notes, id_of)
        .into_iter()
        .map(|ranked| ranked.note)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn by_position(notes: &[Note]) -> impl Fn(&Note) -> usize + '_ {
        move |note| {
            notes
                .iter()
                .position(|candidate| std::ptr::eq(candidate, note))
                .unwrap()
        }
    }

    fn sample() -> Vec<Note> {
        vec![
            Note::new("apple pie", ""),
            Note::new("apple", "pie crust"),
            Note::new("banana", "split"),
        ]
    }

    fn positions(query: &str, notes: &[Note]) -> Vec<usize> {
        rank(&Query::parse(query), notes, by_position(notes))
            .into_iter()
            .map(|ranked| ranked.id)
            .collect()
    }

    #[test]
    fn test_ranking_example() {
        let notes = sample();
        let ranked = rank(&Query::parse("apple pie"), &notes, by_position(&notes));

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, 0);
        assert_eq!(ranked[0].relevancy, 2);
        assert_eq!(ranked[1].id, 1);
        assert_eq!(ranked[1].relevancy, 2);
    }

    #[test]
    fn test_single_term() {
        let notes = sample();
        let result = filter("banana", &notes, by_position(&notes));
        assert_eq!(result, vec![&notes[2]]);
    }

    #[test]
    fn test_more_terms_rank_higher() {
        let notes = vec![
            Note::titled("banana bread"),
            Note::titled("apple"),
            Note::new("apple", "banana"),
        ];
        assert_eq!(positions("apple banana", &notes), vec![2, 1, 0]);
    }

    #[test]
    fn test_ties_follow_discovery_order() {
        let notes = vec![Note::titled("apple"), Note::titled("pie")];
        // "pie" is the first term, so its match is discovered first.
        assert_eq!(positions("pie apple", &notes), vec![1, 0]);
        assert_eq!(positions("apple pie", &notes), vec![0, 1]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let notes = sample();
        let expected = positions("apple pie", &notes);
        assert_eq!(positions("  APPLE Pie  ", &notes), expected);
        assert_eq!(positions("apple pie apple", &notes), expected);
    }

    #[test]
    fn test_no_duplicates() {
        let notes = vec![Note::new("pie", "pie"), Note::new("apple pie", "apple")];
        let ids = positions("pie apple pie", &notes);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids, vec![1, 0]);
    }

    #[test]
    fn test_every_result_matches_a_term() {
        let notes = sample();
        let query = Query::parse("crust split kiwi");
        for ranked in rank(&query, &notes, by_position(&notes)) {
            assert!(query.terms().iter().any(|t| ranked.note.matches_term(t)));
        }
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let notes = sample();
        let ranked = rank(&Query::parse(""), &notes, by_position(&notes));
        assert_eq!(ranked.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(ranked.iter().all(|r| r.relevancy == 1));
    }

    #[test]
    fn test_empty_term_inflates_uniformly() {
        let notes = vec![
            Note::titled("apple"),
            Note::titled("pie"),
            Note::titled("apple pie"),
        ];
        let plain = rank(&Query::parse("apple pie"), &notes, by_position(&notes));
        let spaced = rank(&Query::parse("apple  pie"), &notes, by_position(&notes));

        assert_eq!(plain.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 0, 1]);
        assert_eq!(spaced.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 0, 1]);
        for (a, b) in plain.iter().zip(&spaced) {
            assert_eq!(a.relevancy + 1, b.relevancy);
        }
    }

    #[test]
    fn test_empty_term_brings_in_every_note() {
        // The empty term matches everything, so notes matching no real term
        // still appear, after the ones that do.
        let notes = vec![Note::titled("kiwi"), Note::titled("apple")];
        assert_eq!(positions("apple  pie", &notes), vec![1, 0]);
    }

    #[test]
    fn test_field_absence() {
        let notes = vec![Note::with_body("apple"), Note::default()];
        assert_eq!(positions("apple", &notes), vec![0]);
        assert_eq!(positions("", &notes), vec![0, 1]);
    }

    #[test]
    fn test_rank_with_ids_reads_ids_by_position() {
        let notes = sample();
        let ids = ["a", "b", "c"];
        let ranked = rank_with_ids(&Query::parse("pie split"), &notes, &ids);
        assert_eq!(
            ranked.iter().map(|r| (r.id, r.relevancy)).collect::<Vec<_>>(),
            vec![("a", 1), ("b", 1), ("c", 1)]
        );
        assert!(std::ptr::eq(ranked[2].note, &notes[2]));
    }

    #[test]
    fn test_rank_with_short_ids_ignores_the_rest() {
        let notes = sample();
        let ranked = rank_with_ids(&Query::parse("banana apple"), &notes, &[10, 20]);
        assert_eq!(ranked.iter().map(|r| r.id).collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn test_empty_collection() {
        let notes: Vec<Note> = Vec::new();
        assert!(filter("apple", &notes, by_position(&notes)).is_empty());
    }

    #[test]
    fn test_relevant_notes() {
        let notes = sample();
        let matched = relevant_notes("pie", &notes);
        assert_eq!(matched, vec![&notes[0], &notes[1]]);
    }

    #[test]
    fn test_relevancy_counts_default_zero() {
        let counts = relevancy_counts(["a", "b", "a"]);
        assert_eq!(counts["a"], 2);
        assert_eq!(counts["b"], 1);
        assert_eq!(counts.get("c"), None);
    }
}
