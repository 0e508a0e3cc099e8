//! Raw entity model supplied by the read-only entity source.

pub mod client;
pub mod common;
pub mod consultant;
pub mod contract;
pub mod snapshot;
pub mod withdrawal;

pub use client::Client;
pub use common::Identifiable;
pub use consultant::{Consultant, ConsultantProfile};
pub use contract::{Contract, ContractStatus};
pub use snapshot::EntitySnapshot;
pub use withdrawal::{ConsultantWithdrawal, Withdrawal, WithdrawalStatus};
