//! Machine data model
//!
//! This module provides:
//! - The `Machine` row as stored in the `machines` table
//! - Floors, the spatial partition the map editor is scoped to
//! - Machine and power status encodings with their display colours
//! - Operator roles
//! - Partial-update payloads (position and bulk status)

mod floor;
mod role;
mod status;

pub use floor::Floor;
pub use role::Role;
pub use status::{MachineStatus, PowerStatus, Rgb, StatusKind, TokenFill};

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned machine identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineId(pub u64);

impl std::fmt::Display for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MachineId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One row of the `machines` table.
///
/// Column names follow the backend schema. Positions are percentages of the
/// floor's map area and may be negative or exceed 100; a missing or null
/// coordinate reads as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: MachineId,
    #[serde(rename = "MACHINE #", default)]
    pub machine_number: Option<String>,
    #[serde(rename = "MACHINE NAME", default)]
    pub machine_name: Option<String>,
    #[serde(rename = "FLOOR", default)]
    pub floor: String,
    #[serde(rename = "MACHINE STATUS", default)]
    pub machine_status: Option<String>,
    #[serde(rename = "POWER STATUS", default)]
    pub power_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub x: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub y: f64,
}

impl Machine {
    /// Creates a machine on `floor` at the given percent position.
    pub fn new(id: impl Into<MachineId>, floor: Floor, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            machine_number: None,
            machine_name: None,
            floor: floor.as_str().to_string(),
            machine_status: None,
            power_status: None,
            x,
            y,
        }
    }

    /// Sets the machine number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.machine_number = Some(number.into());
        self
    }

    /// Sets the machine name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.machine_name = Some(name.into());
        self
    }

    /// Sets the machine status label.
    pub fn with_machine_status(mut self, status: impl Into<String>) -> Self {
        self.machine_status = Some(status.into());
        self
    }

    /// Sets the power status label.
    pub fn with_power_status(mut self, status: impl Into<String>) -> Self {
        self.power_status = Some(status.into());
        self
    }

    /// Label drawn on the machine token: the machine number, or `#<id>`.
    pub fn label(&self) -> String {
        match self.machine_number.as_deref() {
            Some(number) if !number.is_empty() => number.to_string(),
            _ => format!("#{}", self.id),
        }
    }

    /// Returns true if the machine belongs to `floor`.
    pub fn is_on(&self, floor: Floor) -> bool {
        self.floor == floor.as_str()
    }

    /// Parsed machine status.
    pub fn machine_status(&self) -> MachineStatus {
        MachineStatus::from_label(self.machine_status.as_deref().unwrap_or_default())
    }

    /// Parsed power status.
    pub fn power_status(&self) -> PowerStatus {
        PowerStatus::from_label(self.power_status.as_deref().unwrap_or_default())
    }

    /// Token fill for the given status kind.
    pub fn fill(&self, kind: StatusKind) -> TokenFill {
        match kind {
            StatusKind::Machine => self.machine_status().fill(),
            StatusKind::Power => self.power_status().fill(),
        }
    }

    /// Current position as a `PositionUpdate`.
    pub fn position(&self) -> PositionUpdate {
        PositionUpdate {
            id: self.id,
            x: self.x,
            y: self.y,
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// A partial update of exactly the position fields of one machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: MachineId,
    pub x: f64,
    pub y: f64,
}

impl PositionUpdate {
    pub fn new(id: impl Into<MachineId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }
}

/// A bulk status change: each present field is written to every target row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    #[serde(rename = "MACHINE STATUS", skip_serializing_if = "Option::is_none")]
    pub machine_status: Option<String>,
    #[serde(rename = "POWER STATUS", skip_serializing_if = "Option::is_none")]
    pub power_status: Option<String>,
}

impl StatusPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.machine_status.as_deref().map_or(true, str::is_empty)
            && self.power_status.as_deref().map_or(true, str::is_empty)
    }

    /// Applies the non-empty fields of the patch to `machine`.
    pub fn apply_to(&self, machine: &mut Machine) {
        if let Some(status) = self.machine_status.as_deref().filter(|s| !s.is_empty()) {
            machine.machine_status = Some(status.to_string());
        }
        if let Some(status) = self.power_status.as_deref().filter(|s| !s.is_empty()) {
            machine.power_status = Some(status.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_coordinates_read_as_zero() {
        let json = r#"[
            {"id": 1, "FLOOR": "CYBER STUDIO", "x": null, "y": 12.5},
            {"id": 2, "FLOOR": "H1/F"}
        ]"#;
        let rows: Vec<Machine> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].x, 0.0);
        assert_eq!(rows[0].y, 12.5);
        assert_eq!(rows[1].x, 0.0);
        assert_eq!(rows[1].y, 0.0);
        assert!(rows[1].is_on(Floor::H1F));
    }

    #[test]
    fn test_negative_and_oversized_positions_survive() {
        let json = r#"{"id": 9, "FLOOR": "GREEN ROOM", "x": -12.25, "y": 140.0}"#;
        let row: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(row.x, -12.25);
        assert_eq!(row.y, 140.0);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let m = Machine::new(42, Floor::CyberStudio, 0.0, 0.0);
        assert_eq!(m.label(), "#42");
        assert_eq!(m.with_number("CS-001").label(), "CS-001");
    }

    #[test]
    fn test_status_patch_only_touches_present_fields() {
        let mut m = Machine::new(1, Floor::CyberStudio, 10.0, 10.0)
            .with_machine_status("Configured")
            .with_power_status("On");
        let patch = StatusPatch {
            machine_status: Some("Go Live".to_string()),
            power_status: None,
        };
        patch.apply_to(&mut m);
        assert_eq!(m.machine_status.as_deref(), Some("Go Live"));
        assert_eq!(m.power_status.as_deref(), Some("On"));
        assert_eq!((m.x, m.y), (10.0, 10.0));
        assert!(StatusPatch::default().is_empty());
    }
}
