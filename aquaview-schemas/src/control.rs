use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean actuator toggle. Controls never feed back into readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Control {
    Pump,
    Fan,
    PhAdjust,
    Aerator,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::Pump, Control::Fan, Control::PhAdjust, Control::Aerator];

    pub fn label(&self) -> &'static str {
        match self {
            Control::Pump => "Water Pump",
            Control::Fan => "Ventilation Fan",
            Control::PhAdjust => "pH Adjustment",
            Control::Aerator => "Aerator",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// In-memory actuator state for the session. Mutated only by explicit
/// toggles; lost when the process exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPanel {
    pub pump: bool,
    pub fan: bool,
    pub ph_adjust: bool,
    pub aerator: bool,
}

impl ControlPanel {
    pub fn is_on(&self, control: Control) -> bool {
        match control {
            Control::Pump => self.pump,
            Control::Fan => self.fan,
            Control::PhAdjust => self.ph_adjust,
            Control::Aerator => self.aerator,
        }
    }

    pub fn set(&mut self, control: Control, on: bool) {
        match control {
            Control::Pump => self.pump = on,
            Control::Fan => self.fan = on,
            Control::PhAdjust => self.ph_adjust = on,
            Control::Aerator => self.aerator = on,
        }
    }

    /// Flips the given control and returns its new state.
    pub fn toggle(&mut self, control: Control) -> bool {
        let next = !self.is_on(control);
        self.set(control, next);
        next
    }
}

/// The body submitted to POST /controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlCommand {
    pub control: Control,
    pub on: bool,
}
