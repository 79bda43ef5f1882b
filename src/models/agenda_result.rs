use serde::Serialize;

/// Outcome of one briefing run, as returned to the trigger surface.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgendaResult {
    pub message: String,
    pub success: bool,
    pub delivered: bool,
    pub warnings: Vec<String>,
}
