//! Command script replay
//!
//! A script is a JSON array of intake commands, as a front end would emit
//! them. Replaying folds the commands through a session.

use crate::session::IntakeSession;
use anyhow::Context;
use serde::Serialize;
use shared::models::JobOrderCreate;
use shared::order::{IntakeCommand, OrderDraft};
use std::path::Path;

/// What a replay produced
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    pub commands: usize,
    pub draft: &'a OrderDraft,
    pub payload: JobOrderCreate,
}

/// Read a command script from disk
pub fn load_script(path: impl AsRef<Path>) -> anyhow::Result<Vec<IntakeCommand>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let commands = serde_json::from_str(&text)
        .with_context(|| format!("Invalid command script {}", path.display()))?;
    Ok(commands)
}

/// Apply every command in order and report the resulting draft
pub fn replay<'a>(session: &'a mut IntakeSession, commands: &[IntakeCommand]) -> ReplayReport<'a> {
    for command in commands {
        session.apply(command);
    }
    tracing::info!(
        commands = commands.len(),
        lines = session.draft().lines.len(),
        total = %session.draft().totals.total,
        "Script replayed"
    );
    let payload = session.payload();
    ReplayReport {
        commands: commands.len(),
        draft: session.draft(),
        payload,
    }
}
