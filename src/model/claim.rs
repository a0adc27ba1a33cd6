//! Claim paths, parameters and outcomes.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::{catalog::CatalogItem, rarity::CategoryMatch};

/// Number of claims in one cycle; the claim that reaches it starts the cooldown.
pub const MAX_USES: u32 = 3;

/// Which pack is being claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    Daily,
    Weekly,
}

impl ClaimKind {
    /// Length of the cooldown window for this claim path.
    pub fn period(self) -> TimeDelta {
        match self {
            ClaimKind::Daily => TimeDelta::days(1),
            ClaimKind::Weekly => TimeDelta::days(7),
        }
    }

    /// Lowercase name, matching the slash subcommand.
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimKind::Daily => "daily",
            ClaimKind::Weekly => "weekly",
        }
    }

    /// Parses a slash subcommand name.
    pub fn from_subcommand(name: &str) -> Option<Self> {
        match name {
            "daily" => Some(ClaimKind::Daily),
            "weekly" => Some(ClaimKind::Weekly),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for claiming a pack.
#[derive(Debug, Clone, Copy)]
pub struct ClaimPackParam {
    /// Discord ID of the claiming user.
    pub owner_id: u64,
    pub kind: ClaimKind,
}

/// Result of a claim attempt that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    /// The claim went through and a reward was granted.
    Claimed(PackReward),
    /// The claim path is on cooldown until `available_at`.
    OnCooldown {
        kind: ClaimKind,
        available_at: DateTime<Utc>,
    },
    /// The claim path has no rarity bounds configured.
    NotConfigured(ClaimKind),
}

/// A granted pack reward, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct PackReward {
    pub kind: ClaimKind,
    /// The drawn catalog item.
    pub item: CatalogItem,
    /// ID of the item instance created for the owner.
    pub instance_id: i32,
    pub health_bonus: i32,
    pub attack_bonus: i32,
    /// Owner's use count after this claim.
    pub uses: u32,
    /// Category tables that contain the item's rarity.
    pub categories: Vec<CategoryMatch>,
}
