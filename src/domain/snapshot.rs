use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PlatformError;

use super::{
    client::Client,
    consultant::{Consultant, ConsultantProfile},
    contract::Contract,
    withdrawal::{ConsultantWithdrawal, Withdrawal},
};

/// Read-only entity source snapshot, fixed for the session.
///
/// The version stamp is minted whenever a snapshot is constructed, so
/// memoized derivations can tell fresh data from stale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntitySnapshot {
    #[serde(default = "EntitySnapshot::fresh_version")]
    pub version: Uuid,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub withdrawals: Vec<Withdrawal>,
    #[serde(default)]
    pub consultant_withdrawals: Vec<ConsultantWithdrawal>,
    #[serde(default)]
    pub consultants: Vec<Consultant>,
    pub profile: ConsultantProfile,
    pub logged_consultant_id: u32,
}

impl EntitySnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clients: Vec<Client>,
        contracts: Vec<Contract>,
        withdrawals: Vec<Withdrawal>,
        consultant_withdrawals: Vec<ConsultantWithdrawal>,
        consultants: Vec<Consultant>,
        profile: ConsultantProfile,
        logged_consultant_id: u32,
    ) -> Self {
        Self {
            version: Self::fresh_version(),
            clients,
            contracts,
            withdrawals,
            consultant_withdrawals,
            consultants,
            profile,
            logged_consultant_id,
        }
    }

    /// Decodes a snapshot from the mock-data store's JSON form and
    /// stamps it with a fresh version.
    pub fn from_json(data: &str) -> Result<Self, PlatformError> {
        let mut snapshot: Self = serde_json::from_str(data)?;
        snapshot.version = Self::fresh_version();
        Ok(snapshot)
    }

    fn fresh_version() -> Uuid {
        Uuid::new_v4()
    }
}
