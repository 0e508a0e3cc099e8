//! Client roster and per-client detail views.

use std::sync::Arc;

use crate::config::PlatformConfig;
use crate::core::cache::DerivedCache;
use crate::core::derivation::ClientStats;
use crate::core::query::{Page, TableView};
use crate::core::ranking::{self, Ranked};
use crate::domain::{Contract, EntitySnapshot, Withdrawal};
use crate::errors::PlatformError;

use super::ServiceResult;

/// Read-side helpers behind the client list and the client modal.
pub struct ClientService;

impl ClientService {
    /// Full roster ranked by invested amount, memoized per snapshot.
    pub fn ranked_clients(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
    ) -> Arc<Vec<Ranked<ClientStats>>> {
        cache.ranked_client_stats(snapshot, config.client_commission_rate)
    }

    /// Roster filtered by name, CPF, or phone, then paginated.
    pub fn search(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        view: &TableView,
    ) -> Page<Ranked<ClientStats>> {
        let ranked = Self::ranked_clients(snapshot, config, cache);
        view.apply(&ranked)
    }

    /// The ranked stats row for one client.
    pub fn detail(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        client_id: u32,
    ) -> ServiceResult<Ranked<ClientStats>> {
        let ranked = Self::ranked_clients(snapshot, config, cache);
        ranking::find_rank(&ranked, client_id)
            .cloned()
            .ok_or_else(|| PlatformError::InvalidRef(format!("client {client_id} not found")).into())
    }

    /// Contract tab of the client modal, searchable by id or value.
    pub fn contracts_page(stats: &ClientStats, view: &TableView) -> Page<Contract> {
        view.apply(&stats.contracts)
    }

    /// Withdrawal tab of the client modal.
    pub fn withdrawals_page(stats: &ClientStats, view: &TableView) -> Page<Withdrawal> {
        view.apply(&stats.withdrawals)
    }
}
