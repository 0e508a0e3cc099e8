//! Consultant statement: commission credits merged with withdrawal debits.

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::domain::{ConsultantWithdrawal, Contract};

/// Direction of a statement movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryKind {
    Credit,
    Debit,
}

/// Single dated movement in the consultant's derived statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: String,
    pub kind: EntryKind,
    pub description: String,
    pub date: String,
    pub value: f64,
}

/// Builds the unified statement: one synthetic credit per appreciating
/// contract, dated at the contract start, plus one debit per consultant
/// withdrawal at its own date.
///
/// The two sets are disjoint by construction and are concatenated
/// without any merge or dedup.
pub fn build_ledger(
    contracts: &[Contract],
    consultant_withdrawals: &[ConsultantWithdrawal],
    commission_rate: f64,
) -> Vec<LedgerEntry> {
    let credits = contracts
        .iter()
        .filter(|contract| contract.is_active())
        .map(|contract| LedgerEntry {
            id: format!("c-{}", contract.id),
            kind: EntryKind::Credit,
            description: format!("Comissão - Contrato #{}", contract.id),
            date: contract.start_date.clone(),
            value: contract.value * commission_rate,
        });
    let debits = consultant_withdrawals.iter().map(|withdrawal| LedgerEntry {
        id: format!("s-{}", withdrawal.id),
        kind: EntryKind::Debit,
        description: format!("Saque - Solicitação #{}", withdrawal.id),
        date: withdrawal.date.clone(),
        value: withdrawal.value,
    });
    credits.chain(debits).collect()
}

/// Sums entries of `kind` whose parsed date falls in the month bucket.
pub fn monthly_total(entries: &[LedgerEntry], kind: EntryKind, month: u32, year: i32) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.kind == kind)
        .filter(|entry| dates::in_month(dates::parse_br_date(&entry.date), month, year))
        .map(|entry| entry.value)
        .sum()
}

/// Net statement balance: credits minus debits, deliberately unclamped.
///
/// A negative figure is a reportable state here, unlike the per-client
/// available balance which clamps at zero.
pub fn available_balance(entries: &[LedgerEntry]) -> f64 {
    entries
        .iter()
        .map(|entry| match entry.kind {
            EntryKind::Credit => entry.value,
            EntryKind::Debit => -entry.value,
        })
        .sum()
}
