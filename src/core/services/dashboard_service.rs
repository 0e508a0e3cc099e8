//! Aggregates behind the dashboard landing screen.

use chrono::{Datelike, NaiveDate};

use crate::config::PlatformConfig;
use crate::core::cache::DerivedCache;
use crate::core::derivation::ConsultantStats;
use crate::core::ranking::{self, Ranked};
use crate::core::statement::{self, EntryKind};
use crate::dates;
use crate::domain::{Client, EntitySnapshot};

/// Headline figures for the KPI cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub active_contracts: usize,
    pub month_income: f64,
    pub previous_month_income: f64,
}

/// Entry on the best-clients board.
#[derive(Debug, Clone, PartialEq)]
pub struct TopClient {
    pub client: Client,
    pub total_invested: f64,
    /// Progress-bar share against the leading client, in percent.
    pub goal_share: f64,
}

/// Consultant leaderboard slice plus the logged-in consultant's row.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultantRanking {
    pub top: Vec<Ranked<ConsultantStats>>,
    /// The logged-in consultant's ranked row, wherever it placed.
    pub logged: Option<Ranked<ConsultantStats>>,
    pub logged_in_top: bool,
}

/// Derives everything the landing screen shows.
pub struct DashboardService;

impl DashboardService {
    /// KPI figures for the reference date's month and the month before.
    ///
    /// Month income reads the statement's credit totals, so the cards
    /// and the statement screen can never drift apart. The reference
    /// date is an explicit parameter; the core never reads the clock.
    pub fn summary(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        reference: NaiveDate,
    ) -> DashboardSummary {
        let ledger = cache.ledger(snapshot, config.consultant_commission_rate);
        let (month, year) = (reference.month(), reference.year());
        let (prev_month, prev_year) = dates::previous_month(month, year);
        DashboardSummary {
            total_clients: snapshot.clients.len(),
            active_contracts: snapshot
                .contracts
                .iter()
                .filter(|contract| contract.is_active())
                .count(),
            month_income: statement::monthly_total(&ledger, EntryKind::Credit, month, year),
            previous_month_income: statement::monthly_total(
                &ledger,
                EntryKind::Credit,
                prev_month,
                prev_year,
            ),
        }
    }

    /// The `limit` highest-invested clients with their share of the
    /// leader's total (the leader reports 100).
    pub fn best_clients(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        limit: usize,
    ) -> Vec<TopClient> {
        let ranked = cache.ranked_client_stats(snapshot, config.client_commission_rate);
        let goal = ranked
            .first()
            .map(|leader| leader.item.total_invested)
            .filter(|total| *total > 0.0)
            .unwrap_or(1.0);
        ranked
            .iter()
            .take(limit)
            .map(|entry| TopClient {
                client: entry.item.client.clone(),
                total_invested: entry.item.total_invested,
                goal_share: entry.item.total_invested / goal * 100.0,
            })
            .collect()
    }

    /// Top `top_n` consultants by yearly sales, plus the logged-in
    /// consultant's row even when it placed outside the slice.
    pub fn consultant_ranking(
        snapshot: &EntitySnapshot,
        cache: &mut DerivedCache,
        year: i32,
        top_n: usize,
    ) -> ConsultantRanking {
        let ranked = cache.ranked_consultant_stats(snapshot, year);
        let logged = ranking::find_rank(&ranked, snapshot.logged_consultant_id).cloned();
        ConsultantRanking {
            top: ranked.iter().take(top_n).cloned().collect(),
            logged_in_top: ranking::is_in_top_n(&ranked, snapshot.logged_consultant_id, top_n),
            logged,
        }
    }
}
