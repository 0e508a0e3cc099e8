//! Stateless view services consumed by the dashboard shell.

pub mod client_service;
pub mod dashboard_service;
pub mod statement_service;
pub mod withdrawal_service;

pub use client_service::ClientService;
pub use dashboard_service::{ConsultantRanking, DashboardService, DashboardSummary, TopClient};
pub use statement_service::{StatementService, StatementSummary};
pub use withdrawal_service::WithdrawalService;

use crate::errors::PlatformError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("{0}")]
    Invalid(String),
}
