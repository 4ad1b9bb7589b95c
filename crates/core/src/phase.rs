//! Lifecycle phase of a video.

use serde::{Deserialize, Serialize};

/// The lifecycle stage a video is in.
///
/// Ids are stable and used on the wire; they are not in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Phase {
    /// Released, repository linked
    Published,
    /// Uploaded and announced, waiting to go live
    PublishPending,
    /// Handed over for editing
    EditRequested,
    /// All recorded material is done
    MaterialDone,
    /// Scheduled
    Started,
    /// Postponed
    Delayed,
    /// Blocked by the sponsor
    SponsoredBlocked,
    /// Nothing happened yet
    Ideas,
}

impl Phase {
    /// All phases in id order.
    pub const ALL: [Phase; 8] = [
        Phase::Published,
        Phase::PublishPending,
        Phase::EditRequested,
        Phase::MaterialDone,
        Phase::Started,
        Phase::Delayed,
        Phase::SponsoredBlocked,
        Phase::Ideas,
    ];

    /// Wire id.
    pub fn id(self) -> u8 {
        match self {
            Phase::Published => 0,
            Phase::PublishPending => 1,
            Phase::EditRequested => 2,
            Phase::MaterialDone => 3,
            Phase::Started => 4,
            Phase::Delayed => 5,
            Phase::SponsoredBlocked => 6,
            Phase::Ideas => 7,
        }
    }

    /// Look a phase up by its wire id.
    pub fn from_id(id: u8) -> Option<Phase> {
        Phase::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Human readable name.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Published => "Published",
            Phase::PublishPending => "Pending Publish",
            Phase::EditRequested => "Edit Requested",
            Phase::MaterialDone => "Material Done",
            Phase::Started => "Started",
            Phase::Delayed => "Delayed",
            Phase::SponsoredBlocked => "Sponsored Blocked",
            Phase::Ideas => "Ideas",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> u8 {
        phase.id()
    }
}

/// Returned when a number is not a phase id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPhase(pub u8);

impl std::fmt::Display for InvalidPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid phase id: {}", self.0)
    }
}

impl std::error::Error for InvalidPhase {}

impl TryFrom<u8> for Phase {
    type Error = InvalidPhase;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Phase::from_id(id).ok_or(InvalidPhase(id))
    }
}
