#![allow(dead_code)]

use commission_core::domain::{
    Client, Consultant, ConsultantProfile, ConsultantWithdrawal, Contract, ContractStatus,
    EntitySnapshot, Withdrawal, WithdrawalStatus,
};
use once_cell::sync::Lazy;

/// Canonical snapshot shared by the integration suites; cloning keeps
/// the version stamp, so clones hit the same cache entries.
static SNAPSHOT: Lazy<EntitySnapshot> = Lazy::new(build_snapshot);

pub fn sample_snapshot() -> EntitySnapshot {
    SNAPSHOT.clone()
}

pub fn client(id: u32, name: &str, cpf: &str, phone: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        cpf: cpf.to_string(),
        email: format!("cliente{id}@example.com"),
        phone: phone.to_string(),
    }
}

pub fn consultant(id: u32, name: &str, avatar: &str) -> Consultant {
    Consultant {
        id,
        name: name.to_string(),
        avatar: avatar.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn contract(
    id: u32,
    client_id: u32,
    consultant_id: u32,
    value: f64,
    current_progress: f64,
    start_date: &str,
    end_date: &str,
    status: ContractStatus,
) -> Contract {
    Contract {
        id,
        client_id,
        consultant_id,
        value,
        current_progress,
        final_valorization_percentage: current_progress + 20.0,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        status,
    }
}

pub fn withdrawal(id: u32, client_id: u32, value: f64, date: &str) -> Withdrawal {
    Withdrawal {
        id,
        client_id,
        value,
        date: date.to_string(),
        status: WithdrawalStatus::Aprovado,
    }
}

pub fn consultant_withdrawal(id: u32, value: f64, date: &str) -> ConsultantWithdrawal {
    ConsultantWithdrawal {
        id,
        value,
        date: date.to_string(),
    }
}

pub fn profile() -> ConsultantProfile {
    ConsultantProfile {
        name: "Bruno Costa".to_string(),
        role: "Consultor Sênior".to_string(),
        email: "bruno.costa@example.com".to_string(),
        cpf: "123.456.789-00".to_string(),
        commission_percentage: 10.0,
        indication_link: "https://plataforma.example/indicacao/bc-42".to_string(),
    }
}

/// Snapshot with the given collections and the standard profile,
/// logged in as consultant 2.
pub fn snapshot_with(
    clients: Vec<Client>,
    contracts: Vec<Contract>,
    withdrawals: Vec<Withdrawal>,
    consultant_withdrawals: Vec<ConsultantWithdrawal>,
    consultants: Vec<Consultant>,
) -> EntitySnapshot {
    EntitySnapshot::new(
        clients,
        contracts,
        withdrawals,
        consultant_withdrawals,
        consultants,
        profile(),
        2,
    )
}

/// Fixture layout, all dates in 2025 unless noted:
///
/// * client 1 holds two appreciating contracts (15 000 invested,
///   2 500 profit) and withdrew 300;
/// * client 2 holds one appreciating contract (9 000) plus a finished
///   one from 2024 that must stay out of the sums;
/// * client 3 holds one small appreciating contract and one cancelled
///   contract, and has withdrawn more than its profit (clamp case);
/// * client 4 holds nothing at all.
///
/// Consultant statement at the default 10% rate: credits 1 000 (Jan),
/// 900 (Jun), 500 + 300 (Jul); debits 50 (Jun) and 100 (Jul).
fn build_snapshot() -> EntitySnapshot {
    let clients = vec![
        client(1, "Helena Souza", "111.222.333-44", "(11) 91111-1111"),
        client(2, "Igor Lima", "222.333.444-55", "(21) 92222-2222"),
        client(3, "Joana Alves", "333.444.555-66", "(31) 93333-3333"),
        client(4, "Kleber Nunes", "444.555.666-77", "(41) 94444-4444"),
    ];
    let contracts = vec![
        contract(1, 1, 1, 10_000.0, 20.0, "10/01/2025", "10/11/2025", ContractStatus::Valorizando),
        contract(2, 1, 2, 5_000.0, 10.0, "05/07/2025", "05/07/2026", ContractStatus::Valorizando),
        contract(3, 2, 2, 9_000.0, 50.0, "20/06/2025", "20/12/2025", ContractStatus::Valorizando),
        contract(4, 2, 1, 7_000.0, 100.0, "01/03/2024", "01/03/2025", ContractStatus::Finalizado),
        contract(5, 3, 3, 3_000.0, 5.0, "02/07/2025", "02/09/2025", ContractStatus::Valorizando),
        contract(6, 3, 1, 2_000.0, 0.0, "15/05/2025", "15/05/2026", ContractStatus::Cancelado),
    ];
    let withdrawals = vec![
        withdrawal(1, 1, 300.0, "01/07/2025"),
        withdrawal(2, 3, 500.0, "03/07/2025"),
    ];
    let consultant_withdrawals = vec![
        consultant_withdrawal(1, 100.0, "10/07/2025"),
        consultant_withdrawal(2, 50.0, "11/06/2025"),
    ];
    let consultants = vec![
        consultant(1, "Ana Prates", "AP"),
        consultant(2, "Bruno Costa", "BC"),
        consultant(3, "Carla Dias", "CD"),
    ];
    snapshot_with(
        clients,
        contracts,
        withdrawals,
        consultant_withdrawals,
        consultants,
    )
}
