//! Dense 1-based ranking shared by the client and consultant boards.

use std::cmp::Ordering;

use crate::domain::Identifiable;

/// Item paired with its 1-based position on a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub rank: usize,
    pub item: T,
}

impl<T: Identifiable> Identifiable for Ranked<T> {
    fn id(&self) -> u32 {
        self.item.id()
    }
}

/// Sorts descending by `key` and assigns dense 1-based ranks.
///
/// The sort must stay stable: ties keep their source order, so two
/// equal entries still receive distinct, reproducible ranks.
pub fn rank_by<T, F>(items: Vec<T>, key: F) -> Vec<Ranked<T>>
where
    F: Fn(&T) -> f64,
{
    let mut items = items;
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Ranked {
            rank: index + 1,
            item,
        })
        .collect()
}

/// Linear lookup of an entity's ranked row, wherever it placed.
pub fn find_rank<T: Identifiable>(ranked: &[Ranked<T>], id: u32) -> Option<&Ranked<T>> {
    ranked.iter().find(|entry| entry.item.id() == id)
}

/// True when the entity placed within the leading `n` positions.
pub fn is_in_top_n<T: Identifiable>(ranked: &[Ranked<T>], id: u32, n: usize) -> bool {
    find_rank(ranked, id).map(|entry| entry.rank <= n).unwrap_or(false)
}
