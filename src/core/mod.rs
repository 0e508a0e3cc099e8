//! Derived-metrics engine: aggregation, ranking, statement building,
//! and the query pipeline shared by every dashboard screen.

pub mod cache;
pub mod derivation;
pub mod query;
pub mod ranking;
pub mod services;
pub mod statement;

pub use cache::DerivedCache;
pub use derivation::{derive_client_stats, derive_consultant_stats, ClientStats, ConsultantStats};
pub use query::{
    query, Page, QueryRow, SortDirection, SortKey, SortSpec, TableView, DEFAULT_PAGE_SIZE,
};
pub use ranking::{find_rank, is_in_top_n, rank_by, Ranked};
pub use statement::{available_balance, build_ledger, monthly_total, EntryKind, LedgerEntry};
