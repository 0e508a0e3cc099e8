use serde::{Deserialize, Serialize};

/// Review state of a client withdrawal request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Pendente,
    Aprovado,
    Recusado,
}

/// Withdrawal requested by a client against their contract profits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Withdrawal {
    pub id: u32,
    pub client_id: u32,
    pub value: f64,
    pub date: String,
    pub status: WithdrawalStatus,
}

/// Debit requested by the consultant against their own commission ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsultantWithdrawal {
    pub id: u32,
    pub value: f64,
    pub date: String,
}
