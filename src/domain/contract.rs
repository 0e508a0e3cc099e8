use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::dates;

/// Lifecycle state of an investment contract, matching the wire strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContractStatus {
    /// Actively appreciating; the only status counted in invested and
    /// commission sums.
    Valorizando,
    Finalizado,
    Cancelado,
}

/// Investment contract owned by exactly one client and one consultant.
///
/// Dates stay in their raw `day/month/year` wire form; the `dates`
/// module normalizes them on use so a malformed record never fails a
/// derivation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: u32,
    pub client_id: u32,
    pub consultant_id: u32,
    pub value: f64,
    pub current_progress: f64,
    pub final_valorization_percentage: f64,
    pub start_date: String,
    pub end_date: String,
    pub status: ContractStatus,
}

impl Contract {
    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Valorizando
    }

    /// Profit realized so far: principal times the progress fraction.
    pub fn profit(&self) -> f64 {
        self.value * (self.current_progress / 100.0)
    }

    /// Average valorization per calendar month of the contract span.
    /// Spans shorter than one full month report zero.
    pub fn monthly_valorization(&self) -> f64 {
        let start = dates::parse_br_date(&self.start_date);
        let end = dates::parse_br_date(&self.end_date);
        let total_months = dates::months_between(start, end);
        if total_months > 0 {
            self.current_progress / total_months as f64
        } else {
            0.0
        }
    }

    /// Calendar year of the parsed start date.
    pub fn start_year(&self) -> i32 {
        dates::parse_br_date(&self.start_date).year()
    }
}
