mod common;

use commission_core::core::{find_rank, is_in_top_n, rank_by};
use commission_core::domain::Identifiable;

#[derive(Debug, Clone)]
struct Seller {
    id: u32,
    sales: f64,
}

impl Identifiable for Seller {
    fn id(&self) -> u32 {
        self.id
    }
}

fn sellers(sales: &[f64]) -> Vec<Seller> {
    sales
        .iter()
        .enumerate()
        .map(|(index, sales)| Seller {
            id: index as u32 + 1,
            sales: *sales,
        })
        .collect()
}

#[test]
fn ranks_form_a_dense_permutation() {
    let input = sellers(&[40.0, 10.0, 40.0, 0.0, 25.0, 25.0, 99.0, 10.0]);
    let count = input.len();
    let ranked = rank_by(input, |seller| seller.sales);

    let mut ranks: Vec<usize> = ranked.iter().map(|entry| entry.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=count).collect::<Vec<_>>());
}

#[test]
fn ties_resolve_by_source_order() {
    // A and B tie at 500; A is listed first and must stay ahead.
    let ranked = rank_by(sellers(&[500.0, 500.0, 300.0]), |seller| seller.sales);
    let order: Vec<(usize, u32)> = ranked.iter().map(|entry| (entry.rank, entry.id())).collect();
    assert_eq!(order, vec![(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn all_equal_keys_keep_source_order() {
    let ranked = rank_by(sellers(&[7.0, 7.0, 7.0, 7.0]), |seller| seller.sales);
    let ids: Vec<u32> = ranked.iter().map(|entry| entry.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn empty_input_ranks_to_nothing() {
    let ranked = rank_by(sellers(&[]), |seller| seller.sales);
    assert!(ranked.is_empty());
}

#[test]
fn find_rank_locates_entries_outside_any_slice() {
    let ranked = rank_by(sellers(&[50.0, 40.0, 30.0, 20.0, 10.0]), |seller| seller.sales);
    let entry = find_rank(&ranked, 5).expect("seller 5 is ranked");
    assert_eq!(entry.rank, 5);
    assert!(find_rank(&ranked, 42).is_none());
}

#[test]
fn top_n_membership_uses_the_rank_boundary() {
    let ranked = rank_by(sellers(&[50.0, 40.0, 30.0]), |seller| seller.sales);
    assert!(is_in_top_n(&ranked, 2, 2));
    assert!(!is_in_top_n(&ranked, 3, 2));
    assert!(!is_in_top_n(&ranked, 1, 0));
    assert!(!is_in_top_n(&ranked, 42, 3));
}

#[test]
fn sample_roster_ranks_by_invested_amount() {
    let snapshot = common::sample_snapshot();
    let stats = commission_core::core::derive_client_stats(
        &snapshot.clients,
        &snapshot.contracts,
        &snapshot.withdrawals,
        0.10,
    );
    let ranked = rank_by(stats, |entry| entry.total_invested);
    let order: Vec<(usize, u32)> = ranked.iter().map(|entry| (entry.rank, entry.id())).collect();
    assert_eq!(order, vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
    assert_eq!(ranked[0].item.client.name, "Helena Souza");
}
