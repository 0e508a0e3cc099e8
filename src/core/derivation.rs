//! Single source of truth for every derived financial aggregate.
//!
//! All screens consume these outputs; no view recomputes a sum on its
//! own, so rate and definition drift between screens cannot happen.

use crate::domain::{Client, Consultant, Contract, Identifiable, Withdrawal};

/// Client enriched with the aggregates the roster and modal consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientStats {
    pub client: Client,
    /// Every contract owned by the client, active or not.
    pub contracts: Vec<Contract>,
    pub withdrawals: Vec<Withdrawal>,
    /// Principal across appreciating contracts only.
    pub total_invested: f64,
    pub commission: f64,
    pub total_profit: f64,
    pub total_withdrawn: f64,
    /// Profit minus withdrawals, clamped at zero.
    pub available_for_withdrawal: f64,
}

impl Identifiable for ClientStats {
    fn id(&self) -> u32 {
        self.client.id
    }
}

/// Consultant paired with their sales total for a target year.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultantStats {
    pub consultant: Consultant,
    pub total_sales: f64,
}

impl Identifiable for ConsultantStats {
    fn id(&self) -> u32 {
        self.consultant.id
    }
}

/// Computes per-client aggregates from the raw snapshot collections.
///
/// Only appreciating contracts count toward the invested, commission,
/// and profit sums; contracts in other statuses stay listed untouched.
/// Withdrawals are summed across all statuses. Inputs are never
/// mutated and the output order follows the input client order.
pub fn derive_client_stats(
    clients: &[Client],
    contracts: &[Contract],
    withdrawals: &[Withdrawal],
    commission_rate: f64,
) -> Vec<ClientStats> {
    clients
        .iter()
        .map(|client| {
            let owned: Vec<Contract> = contracts
                .iter()
                .filter(|contract| contract.client_id == client.id)
                .cloned()
                .collect();
            let owned_withdrawals: Vec<Withdrawal> = withdrawals
                .iter()
                .filter(|withdrawal| withdrawal.client_id == client.id)
                .cloned()
                .collect();

            let active: Vec<&Contract> =
                owned.iter().filter(|contract| contract.is_active()).collect();
            let total_invested: f64 = active.iter().map(|contract| contract.value).sum();
            let total_profit: f64 = active.iter().map(|contract| contract.profit()).sum();
            let total_withdrawn: f64 =
                owned_withdrawals.iter().map(|withdrawal| withdrawal.value).sum();

            ClientStats {
                client: client.clone(),
                commission: total_invested * commission_rate,
                available_for_withdrawal: (total_profit - total_withdrawn).max(0.0),
                contracts: owned,
                withdrawals: owned_withdrawals,
                total_invested,
                total_profit,
                total_withdrawn,
            }
        })
        .collect()
}

/// Sums each consultant's contract principal for the target year.
///
/// Status is ignored here: a finished or cancelled contract still
/// counts as a sale in the year it started. Consultants without
/// matching contracts stay listed at zero.
pub fn derive_consultant_stats(
    consultants: &[Consultant],
    contracts: &[Contract],
    year: i32,
) -> Vec<ConsultantStats> {
    consultants
        .iter()
        .map(|consultant| {
            let total_sales: f64 = contracts
                .iter()
                .filter(|contract| {
                    contract.consultant_id == consultant.id && contract.start_year() == year
                })
                .map(|contract| contract.value)
                .sum();
            ConsultantStats {
                consultant: consultant.clone(),
                total_sales,
            }
        })
        .collect()
}
