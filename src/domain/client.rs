use serde::{Deserialize, Serialize};

use super::common::Identifiable;

/// Immutable client reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
}

impl Client {
    /// Single-character avatar the shell renders next to the name.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|ch| ch.to_string())
            .unwrap_or_default()
    }
}

impl Identifiable for Client {
    fn id(&self) -> u32 {
        self.id
    }
}
