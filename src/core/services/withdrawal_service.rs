//! Consultant withdrawal request screen.

use tracing::debug;

use crate::config::PlatformConfig;
use crate::core::cache::DerivedCache;
use crate::core::statement;
use crate::currency;
use crate::domain::EntitySnapshot;

use super::{ServiceError, ServiceResult};

/// Shown when the amount is not a positive number.
pub const INVALID_AMOUNT: &str = "Por favor, insira um valor válido.";
/// Shown when the amount exceeds the available balance.
pub const AMOUNT_ABOVE_BALANCE: &str =
    "O valor do saque não pode ser maior que o saldo disponível.";

pub struct WithdrawalService;

impl WithdrawalService {
    /// The balance shown on the request screen; reads the same
    /// statement the extract screen does.
    pub fn available_balance(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
    ) -> f64 {
        let ledger = cache.ledger(snapshot, config.consultant_commission_rate);
        statement::available_balance(&ledger)
    }

    /// Validates a raw withdrawal request without touching any balance.
    ///
    /// The snapshot stays read-only either way; acceptance only yields
    /// the confirmation message the shell displays.
    pub fn request(
        snapshot: &EntitySnapshot,
        config: &PlatformConfig,
        cache: &mut DerivedCache,
        raw_amount: &str,
    ) -> ServiceResult<String> {
        let amount: f64 = match raw_amount.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                debug!(raw_amount, "rejected non-numeric withdrawal amount");
                return Err(ServiceError::Invalid(INVALID_AMOUNT.into()));
            }
        };
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(INVALID_AMOUNT.into()));
        }
        let balance = Self::available_balance(snapshot, config, cache);
        if amount > balance {
            debug!(amount, balance, "rejected withdrawal above available balance");
            return Err(ServiceError::Invalid(AMOUNT_ABOVE_BALANCE.into()));
        }
        Ok(format!(
            "Saque de {} solicitado com sucesso!",
            currency::format_currency(Some(amount))
        ))
    }
}
