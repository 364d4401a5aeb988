//! Seed data: the built-in sample pipeline and the optional TOML seed file.
//!
//! Leads are created here and only ever mutated through
//! [`BoardState::move_lead`](crate::board::BoardState::move_lead); there is
//! no deletion path.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Local};
use serde::Deserialize;
use thiserror::Error;

use crate::board::{Lead, Metric, Priority, Stage, Trend};
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("duplicate lead id `{0}` in seed file")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    leads: Vec<Lead>,
}

/// Initial lead collection: the seed file when configured, the built-in
/// sample pipeline otherwise.
pub fn load_leads(config: &AppConfig) -> Result<Vec<Lead>, SeedError> {
    let Some(ref path) = config.data.seed_file else {
        return Ok(sample_leads());
    };
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.clone(),
        source,
    })?;
    let seed: SeedFile = toml::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.clone(),
        source,
    })?;
    check_unique_ids(&seed.leads)?;
    Ok(seed.leads)
}

fn check_unique_ids(leads: &[Lead]) -> Result<(), SeedError> {
    let mut seen: Vec<&str> = Vec::with_capacity(leads.len());
    for lead in leads {
        if seen.contains(&lead.id.as_str()) {
            return Err(SeedError::DuplicateId(lead.id.clone()));
        }
        seen.push(&lead.id);
    }
    Ok(())
}

fn days_ago(days: i64) -> DateTime<Local> {
    Local::now() - Duration::days(days)
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: &str,
    name: &str,
    company: &str,
    email: &str,
    value: u64,
    status: Stage,
    priority: Priority,
    assigned_to: &str,
    avatar: &str,
    age_days: i64,
    idle_days: i64,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
        phone: "+1 (555) 010-0134".to_string(),
        value,
        status,
        priority,
        assigned_to: assigned_to.to_string(),
        assigned_to_avatar: avatar.to_string(),
        notes: None,
        created_at: days_ago(age_days),
        last_activity: days_ago(idle_days),
    }
}

/// The built-in sample pipeline.
pub fn sample_leads() -> Vec<Lead> {
    vec![
        lead(
            "lead-1", "Olivia Turner", "Northwind Traders", "olivia@northwind.com",
            45_000, Stage::New, Priority::High, "Sarah Chen", "SC", 3, 0,
        ),
        lead(
            "lead-2", "James Holt", "Contoso Ltd", "j.holt@contoso.com",
            12_500, Stage::New, Priority::Medium, "Marcus Webb", "MW", 5, 1,
        ),
        lead(
            "lead-3", "Ana Sousa", "Fabrikam Inc", "ana.sousa@fabrikam.com",
            8_000, Stage::New, Priority::Low, "Priya Patel", "PP", 6, 2,
        ),
        lead(
            "lead-4", "Ethan Brooks", "Tailspin Toys", "ethan@tailspin.io",
            23_000, Stage::Contacted, Priority::Medium, "Sarah Chen", "SC", 9, 1,
        ),
        lead(
            "lead-5", "Mei Lin", "Wingtip Labs", "mei.lin@wingtip.dev",
            61_000, Stage::Contacted, Priority::High, "Diego Ramos", "DR", 11, 0,
        ),
        lead(
            "lead-6", "Victor Osei", "Lucerne Publishing", "v.osei@lucerne.pub",
            17_500, Stage::Qualified, Priority::Medium, "Marcus Webb", "MW", 14, 3,
        ),
        lead(
            "lead-7", "Hana Suzuki", "Adventure Works", "hana@adventure-works.com",
            54_000, Stage::Qualified, Priority::High, "Priya Patel", "PP", 16, 1,
        ),
        lead(
            "lead-8", "Liam Doyle", "Proseware", "liam.doyle@proseware.com",
            32_000, Stage::Proposal, Priority::High, "Sarah Chen", "SC", 21, 2,
        ),
        lead(
            "lead-9", "Carla Mendes", "Blue Yonder Airlines", "carla@blueyonder.air",
            19_000, Stage::Proposal, Priority::Low, "Diego Ramos", "DR", 24, 5,
        ),
        lead(
            "lead-10", "Tom Eriksen", "Woodgrove Bank", "tom.e@woodgrove.bank",
            88_000, Stage::Negotiation, Priority::High, "Marcus Webb", "MW", 30, 0,
        ),
        lead(
            "lead-11", "Ines Castillo", "Margie's Travel", "ines@margiestravel.com",
            27_500, Stage::Won, Priority::Medium, "Priya Patel", "PP", 38, 4,
        ),
        lead(
            "lead-12", "Noah Fischer", "Trey Research", "noah@treyresearch.net",
            15_000, Stage::Lost, Priority::Low, "Sarah Chen", "SC", 42, 12,
        ),
    ]
}

/// Summary cards for the metrics row.
pub fn sample_metrics() -> Vec<Metric> {
    vec![
        Metric {
            title: "Total Leads".to_string(),
            value: "12".to_string(),
            change: 12.5,
            change_label: "vs last month".to_string(),
            trend: Trend::Up,
        },
        Metric {
            title: "Qualified Rate".to_string(),
            value: "32%".to_string(),
            change: 4.1,
            change_label: "vs last month".to_string(),
            trend: Trend::Up,
        },
        Metric {
            title: "Pipeline Value".to_string(),
            value: "$360K".to_string(),
            change: -2.3,
            change_label: "vs last month".to_string(),
            trend: Trend::Down,
        },
        Metric {
            title: "Conversion Rate".to_string(),
            value: "18.2%".to_string(),
            change: 1.8,
            change_label: "vs last quarter".to_string(),
            trend: Trend::Up,
        },
    ]
}
