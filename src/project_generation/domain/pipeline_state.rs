/// States of one project generation run.
///
/// The pipeline is linear: each state has exactly one successor until
/// `Done`. Any failed transition lands in `Failed` and the run halts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    CatalogLoaded,
    Resolved,
    Fetched,
    Materialized,
    Patched,
    Done,
    Failed(String),
}

impl PipelineState {
    /// The successor of this state, `None` for `Done` and `Failed`
    pub fn next(&self) -> Option<PipelineState> {
        match self {
            PipelineState::Idle => Some(PipelineState::CatalogLoaded),
            PipelineState::CatalogLoaded => Some(PipelineState::Resolved),
            PipelineState::Resolved => Some(PipelineState::Fetched),
            PipelineState::Fetched => Some(PipelineState::Materialized),
            PipelineState::Materialized => Some(PipelineState::Patched),
            PipelineState::Patched => Some(PipelineState::Done),
            PipelineState::Done | PipelineState::Failed(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::CatalogLoaded => "catalog loaded",
            PipelineState::Resolved => "dependencies resolved",
            PipelineState::Fetched => "archive fetched",
            PipelineState::Materialized => "project materialized",
            PipelineState::Patched => "project patched",
            PipelineState::Done => "done",
            PipelineState::Failed(_) => "failed",
        }
    }
}
