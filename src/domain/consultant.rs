use serde::{Deserialize, Serialize};

use super::common::Identifiable;

/// Consultant referenced by contracts and listed on the ranking board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultant {
    pub id: u32,
    pub name: String,
    pub avatar: String,
}

impl Identifiable for Consultant {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Profile record of the logged-in consultant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsultantProfile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub cpf: String,
    pub commission_percentage: f64,
    pub indication_link: String,
}
