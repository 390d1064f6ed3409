use std::cmp::{Ordering, Reverse};

use carefind_catalog::SearchItem;
use serde::Serialize;

use super::filters::SortBy;

/// A candidate that survived filtering, identified by its corpus position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedHit {
	pub index: usize,
	pub score: u32,
}

/// Order `hits` in place according to `sort`.
///
/// The sort is stable, so equal keys keep corpus order.
pub fn rank(hits: &mut [RankedHit], sort: SortBy, items: &[SearchItem]) {
	match sort {
		SortBy::Relevance => hits.sort_by(|a, b| {
			b.score
				.cmp(&a.score)
				.then_with(|| by_popularity(items, a, b))
		}),
		SortBy::Popularity => hits.sort_by(|a, b| by_popularity(items, a, b)),
		SortBy::Newest => hits.sort_by_key(|hit| Reverse(items[hit.index].created_at)),
	}
}

fn by_popularity(items: &[SearchItem], a: &RankedHit, b: &RankedHit) -> Ordering {
	items[b.index].popularity.cmp(&items[a.index].popularity)
}
