//! Machine and power status encodings.
//!
//! Status columns are free-form strings in the backend. They are parsed
//! case-insensitively into closed enums here, each with a total mapping to
//! the colour its token is drawn with and an explicit fallback for labels
//! nobody recognises.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EditorError;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Builds a colour from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// `#rrggbb` notation.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Horizontal two-stop gradient used to fill a machine token.
///
/// A solid fill has equal stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFill {
    pub start: Rgb,
    pub end: Rgb,
}

impl TokenFill {
    pub const fn gradient(start: u32, end: u32) -> Self {
        Self {
            start: Rgb::from_u32(start),
            end: Rgb::from_u32(end),
        }
    }

    pub const fn solid(rgb: u32) -> Self {
        Self::gradient(rgb, rgb)
    }

    pub fn is_solid(&self) -> bool {
        self.start == self.end
    }
}

/// Which status column drives token colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Machine,
    Power,
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Machine => write!(f, "machine"),
            Self::Power => write!(f, "power"),
        }
    }
}

impl FromStr for StatusKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "machine" => Ok(Self::Machine),
            "power" => Ok(Self::Power),
            _ => Err(EditorError::UnknownStatusKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle status of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineStatus {
    GoLive,
    UatTesting,
    OngoingInstallation,
    PendingToSlotTech,
    IslotInstalled,
    PendingInstallation,
    GreenRoom,
    Configured,
    Freeplay,
    FirmwareUpdate,
    Project,
    /// Empty or unrecognised label.
    Unknown,
}

impl MachineStatus {
    /// Every recognised status, excluding `Unknown`.
    pub const KNOWN: [MachineStatus; 11] = [
        MachineStatus::GoLive,
        MachineStatus::UatTesting,
        MachineStatus::OngoingInstallation,
        MachineStatus::PendingToSlotTech,
        MachineStatus::IslotInstalled,
        MachineStatus::PendingInstallation,
        MachineStatus::GreenRoom,
        MachineStatus::Configured,
        MachineStatus::Freeplay,
        MachineStatus::FirmwareUpdate,
        MachineStatus::Project,
    ];

    /// Lower-case label as written in the status column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GoLive => "go live",
            Self::UatTesting => "uat testing",
            Self::OngoingInstallation => "ongoing installation",
            Self::PendingToSlotTech => "pending to slot tech",
            Self::IslotInstalled => "islot installed",
            Self::PendingInstallation => "pending installation",
            Self::GreenRoom => "green room",
            Self::Configured => "configured",
            Self::Freeplay => "freeplay",
            Self::FirmwareUpdate => "firmware update",
            Self::Project => "project",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a status label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|s| s.label() == normalized)
            .unwrap_or(Self::Unknown)
    }

    pub fn fill(&self) -> TokenFill {
        match self {
            Self::GoLive => TokenFill::gradient(0xffe5a0, 0xd4b063),
            Self::UatTesting => TokenFill::gradient(0xd4edbc, 0xa6d79b),
            Self::OngoingInstallation => TokenFill::gradient(0x753800, 0x5a2400),
            Self::PendingToSlotTech => TokenFill::gradient(0xffc8aa, 0xe5997e),
            Self::IslotInstalled => TokenFill::gradient(0xffcfc9, 0xe29c9b),
            Self::PendingInstallation => TokenFill::gradient(0x3d3d3d, 0x1e1e1e),
            Self::GreenRoom => TokenFill::gradient(0x11734b, 0x0a4b2d),
            Self::Configured => TokenFill::gradient(0x0a53a8, 0x06366e),
            Self::Freeplay => TokenFill::gradient(0x5a3286, 0x3b1f63),
            Self::FirmwareUpdate => TokenFill::gradient(0xe6e6e6, 0xbfbfbf),
            Self::Project => TokenFill::gradient(0xb10202, 0x7a0101),
            Self::Unknown => TokenFill::gradient(0x6b7280, 0x4b5563),
        }
    }
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Power state of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerStatus {
    On,
    Off,
    /// Empty or unrecognised label.
    Unknown,
}

impl PowerStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "on" => Self::On,
            "off" => Self::Off,
            _ => Self::Unknown,
        }
    }

    pub fn fill(&self) -> TokenFill {
        match self {
            Self::On => TokenFill::solid(0x16a34a),
            Self::Off => TokenFill::solid(0xdc2626),
            Self::Unknown => TokenFill::solid(0x9ca3af),
        }
    }
}

impl std::fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_status_labels_are_case_insensitive() {
        assert_eq!(MachineStatus::from_label("Go Live"), MachineStatus::GoLive);
        assert_eq!(
            MachineStatus::from_label("  PENDING TO SLOT TECH "),
            MachineStatus::PendingToSlotTech
        );
        for status in MachineStatus::KNOWN {
            assert_eq!(MachineStatus::from_label(status.label()), status);
        }
    }

    #[test]
    fn test_unknown_machine_status_uses_fallback_fill() {
        let status = MachineStatus::from_label("decommissioned");
        assert_eq!(status, MachineStatus::Unknown);
        assert_eq!(status.fill().start.hex(), "#6b7280");
        assert_eq!(status.fill().end.hex(), "#4b5563");
        assert_eq!(MachineStatus::from_label(""), MachineStatus::Unknown);
    }

    #[test]
    fn test_known_fills() {
        let fill = MachineStatus::Configured.fill();
        assert_eq!(fill.start, Rgb(0x0a, 0x53, 0xa8));
        assert_eq!(fill.end, Rgb(0x06, 0x36, 0x6e));
        assert!(!fill.is_solid());
    }

    #[test]
    fn test_power_status() {
        assert_eq!(PowerStatus::from_label("ON"), PowerStatus::On);
        assert_eq!(PowerStatus::from_label("off"), PowerStatus::Off);
        assert_eq!(PowerStatus::from_label("standby"), PowerStatus::Unknown);
        assert_eq!(PowerStatus::On.fill().start.hex(), "#16a34a");
        assert!(PowerStatus::Unknown.fill().is_solid());
    }

    #[test]
    fn test_status_kind_parse() {
        assert_eq!("machine".parse::<StatusKind>(), Ok(StatusKind::Machine));
        assert_eq!("Power".parse::<StatusKind>(), Ok(StatusKind::Power));
        assert!("thermal".parse::<StatusKind>().is_err());
    }
}
