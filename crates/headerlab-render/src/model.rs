#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    /// The attacker lost.
    Blocked,
    /// The attacker won.
    Allowed,
    /// Informational scenario; nothing to win or lose.
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableOutcome {
    pub scenario: String,
    pub title: String,
    pub status: RenderableStatus,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableHeader {
    pub name: String,
    pub value: String,
}

/// One line of the simulated browser console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableConsoleLine {
    pub is_error: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSummary {
    pub attacks_blocked: u32,
    pub attacks_allowed: u32,
    pub mime_risk: String,
    pub isolation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub preset: Option<String>,
    pub config_digest: String,
    pub summary: RenderableSummary,
    pub outcomes: Vec<RenderableOutcome>,
    pub console: Vec<RenderableConsoleLine>,
    pub headers: Vec<RenderableHeader>,
}
