//! Statement screen: summary cards plus the two movement tabs.

use chrono::{Datelike, NaiveDate};

use crate::config::PlatformConfig;
use crate::core::cache::DerivedCache;
use crate::core::query::{Page, TableView};
use crate::core::statement::{self, EntryKind, LedgerEntry};
use crate::domain::EntitySnapshot;

/// Card figures above the statement tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementSummary {
    pub income_this_month: f64,
    pub withdrawn_this_month: f64,
    /// Net credits minus debits; may legitimately be negative.
    pub available_balance: f64,
}

pub struct StatementService;

impl StatementService {
    /// Month-scoped movement totals and the running balance for the
    /// injected reference date.
    pub fn summary(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        reference: NaiveDate,
    ) -> StatementSummary {
        let ledger = cache.ledger(snapshot, config.consultant_commission_rate);
        let (month, year) = (reference.month(), reference.year());
        StatementSummary {
            income_this_month: statement::monthly_total(&ledger, EntryKind::Credit, month, year),
            withdrawn_this_month: statement::monthly_total(&ledger, EntryKind::Debit, month, year),
            available_balance: statement::available_balance(&ledger),
        }
    }

    /// Commission credits tab, sorted and paginated per the view.
    pub fn commissions(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        view: &TableView,
    ) -> Page<LedgerEntry> {
        Self::entries(snapshot, config, cache, view, EntryKind::Credit)
    }

    /// Withdrawal debits tab.
    pub fn withdrawals(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        view: &TableView,
    ) -> Page<LedgerEntry> {
        Self::entries(snapshot, config, cache, view, EntryKind::Debit)
    }

    fn entries(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        view: &TableView,
        kind: EntryKind,
    ) -> Page<LedgerEntry> {
        let ledger = cache.ledger(snapshot, config.consultant_commission_rate);
        let rows: Vec<LedgerEntry> = ledger
            .iter()
            .filter(|entry| entry.kind == kind)
            .cloned()
            .collect();
        view.apply(&rows)
    }
}
