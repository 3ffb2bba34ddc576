use aquaview_schemas::{alert::Alert, control::ControlPanel, reading::Reading};

/// The single mutable copy of dashboard state, owned by the engine.
///
/// The reading is replaced wholesale each tick; alerts hold only the
/// current tick's events; the control panel changes only on explicit
/// toggles and never influences the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryState {
    pub tick: u64,
    pub reading: Reading,
    pub controls: ControlPanel,
    pub alerts: Vec<Alert>,
}
