//! Memoized derivations keyed on the snapshot version and parameters.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::EntitySnapshot;

use super::derivation::{self, ClientStats, ConsultantStats};
use super::ranking::{self, Ranked};
use super::statement::{self, LedgerEntry};

type RateKey = (Uuid, u64);
type YearKey = (Uuid, i32);

/// Caches the expensive aggregate passes so view interactions (search
/// keystrokes, page clicks) re-derive cheap views instead of rescanning
/// the snapshot.
///
/// A hit requires the full key to match; a new snapshot version always
/// recomputes, so a stale aggregate is never served. Rates key by bit
/// pattern.
#[derive(Debug, Default)]
pub struct DerivedCache {
    client_stats: Option<(RateKey, Arc<Vec<Ranked<ClientStats>>>)>,
    consultant_stats: Option<(YearKey, Arc<Vec<Ranked<ConsultantStats>>>)>,
    ledger: Option<(RateKey, Arc<Vec<LedgerEntry>>)>,
}

impl DerivedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clients ranked by invested amount, derived at `rate`.
    pub fn ranked_client_stats(
        &mut self,
        snapshot: &EntitySnapshot,
        rate: f64,
    ) -> Arc<Vec<Ranked<ClientStats>>> {
        let key = (snapshot.version, rate.to_bits());
        if let Some((cached_key, cached)) = &self.client_stats {
            if *cached_key == key {
                return Arc::clone(cached);
            }
        }
        let stats = derivation::derive_client_stats(
            &snapshot.clients,
            &snapshot.contracts,
            &snapshot.withdrawals,
            rate,
        );
        let ranked = Arc::new(ranking::rank_by(stats, |entry| entry.total_invested));
        self.client_stats = Some((key, Arc::clone(&ranked)));
        ranked
    }

    /// Consultants ranked by sales in the target year.
    pub fn ranked_consultant_stats(
        &mut self,
        snapshot: &EntitySnapshot,
        year: i32,
    ) -> Arc<Vec<Ranked<ConsultantStats>>> {
        let key = (snapshot.version, year);
        if let Some((cached_key, cached)) = &self.consultant_stats {
            if *cached_key == key {
                return Arc::clone(cached);
            }
        }
        let stats = derivation::derive_consultant_stats(
            &snapshot.consultants,
            &snapshot.contracts,
            year,
        );
        let ranked = Arc::new(ranking::rank_by(stats, |entry| entry.total_sales));
        self.consultant_stats = Some((key, Arc::clone(&ranked)));
        ranked
    }

    /// The consultant statement derived at `rate`.
    pub fn ledger(&mut self, snapshot: &EntitySnapshot, rate: f64) -> Arc<Vec<LedgerEntry>> {
        let key = (snapshot.version, rate.to_bits());
        if let Some((cached_key, cached)) = &self.ledger {
            if *cached_key == key {
                return Arc::clone(cached);
            }
        }
        let entries = Arc::new(statement::build_ledger(
            &snapshot.contracts,
            &snapshot.consultant_withdrawals,
            rate,
        ));
        self.ledger = Some((key, Arc::clone(&entries)));
        entries
    }
}
