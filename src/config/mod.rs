use serde::{Deserialize, Serialize};

/// Runtime knobs for the commission platform core.
///
/// The client-side and consultant-side commission rates are observed
/// equal in production data but are configured independently; nothing
/// in the engine assumes they match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformConfig {
    /// Fraction of a client's active invested value attributed as commission.
    pub client_commission_rate: f64,
    /// Fraction of each active contract's value credited to the consultant ledger.
    pub consultant_commission_rate: f64,
    /// Rows per page across the tabular views.
    pub page_size: usize,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            client_commission_rate: 0.10,
            consultant_commission_rate: 0.10,
            page_size: 5,
        }
    }
}
