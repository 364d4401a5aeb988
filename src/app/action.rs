use crate::board::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reassign a lead to a pipeline stage. The board silently ignores
    /// unknown ids.
    MoveLead { lead_id: String, to: Stage },
    Quit,
}
