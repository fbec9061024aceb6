//! Free-text filtering with relevancy ranking.
//!
//! A raw query is split into unique lowercase terms ([`Query`]). A note
//! matches a term when its title or body contains it; the more distinct
//! terms a note matches, the higher it ranks.

pub mod query;
pub mod ranking;

pub use query::{parse_query, Query};
pub use ranking::{filter, rank, rank_with_ids, relevancy_counts, relevant_notes, RankedNote};
