//! Per-owner pack claim state and its cooldown state machine.
//!
//! All time-dependent operations take `now` explicitly so callers decide which clock
//! a claim is evaluated against.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::claim::{ClaimKind, MAX_USES};

/// Pack claim state for a single owner.
///
/// `uses` is shared between the daily and weekly paths. Only clearing the daily
/// cooldown resets it; clearing the weekly cooldown leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackResource {
    /// Discord ID of the owner.
    pub owner_id: u64,
    pub uses: u32,
    pub daily_cooldown: Option<DateTime<Utc>>,
    pub weekly_cooldown: Option<DateTime<Utc>>,
}

impl PackResource {
    /// Creates the initial state for an owner who has never claimed.
    pub fn new(owner_id: u64) -> Self {
        Self {
            owner_id,
            uses: 0,
            daily_cooldown: None,
            weekly_cooldown: None,
        }
    }

    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::pack_resource::Model) -> Self {
        Self {
            owner_id: entity.owner_id as u64,
            uses: entity.uses.max(0) as u32,
            daily_cooldown: entity.daily_cooldown,
            weekly_cooldown: entity.weekly_cooldown,
        }
    }

    /// True while `now` is less than one day after the daily cooldown stamp.
    pub fn is_daily_on_cooldown(&self, now: DateTime<Utc>) -> bool {
        self.available_at(ClaimKind::Daily).is_some_and(|at| now < at)
    }

    /// True while `now` is less than seven days after the weekly cooldown stamp.
    pub fn is_weekly_on_cooldown(&self, now: DateTime<Utc>) -> bool {
        self.available_at(ClaimKind::Weekly).is_some_and(|at| now < at)
    }

    /// Whether `now` falls inside the cooldown window of the given claim path.
    pub fn is_on_cooldown(&self, kind: ClaimKind, now: DateTime<Utc>) -> bool {
        match kind {
            ClaimKind::Daily => self.is_daily_on_cooldown(now),
            ClaimKind::Weekly => self.is_weekly_on_cooldown(now),
        }
    }

    /// The cooldown timestamp for a claim path.
    pub fn cooldown(&self, kind: ClaimKind) -> Option<DateTime<Utc>> {
        match kind {
            ClaimKind::Daily => self.daily_cooldown,
            ClaimKind::Weekly => self.weekly_cooldown,
        }
    }

    /// When the claim path becomes available again, if a cooldown is recorded.
    pub fn available_at(&self, kind: ClaimKind) -> Option<DateTime<Utc>> {
        self.cooldown(kind).map(|at| at + kind.period())
    }

    /// Computes the state after a successful claim at `now`.
    ///
    /// Returns `None` while the claim path is on cooldown. An expired cooldown is
    /// cleared first (the daily path also resets `uses`), then `uses` is incremented;
    /// reaching [`MAX_USES`] stamps a fresh cooldown at `now` in the same transition.
    pub fn claim(&self, kind: ClaimKind, now: DateTime<Utc>) -> Option<PackResource> {
        if self.is_on_cooldown(kind, now) {
            return None;
        }

        let mut next = self.clone();

        if next.cooldown(kind).is_some() {
            next.clear_cooldown(kind);
        }

        next.uses = next.uses.saturating_add(1);
        if next.uses >= MAX_USES {
            next.set_cooldown(kind, now);
        }

        Some(next)
    }

    /// Stamps the cooldown of a claim path.
    pub fn set_cooldown(&mut self, kind: ClaimKind, at: DateTime<Utc>) {
        match kind {
            ClaimKind::Daily => self.daily_cooldown = Some(at),
            ClaimKind::Weekly => self.weekly_cooldown = Some(at),
        }
    }

    /// Clears the cooldown of a claim path.
    ///
    /// Clearing the daily cooldown also resets `uses` to 0.
    pub fn clear_cooldown(&mut self, kind: ClaimKind) {
        match kind {
            ClaimKind::Daily => {
                self.daily_cooldown = None;
                self.uses = 0;
            }
            ClaimKind::Weekly => self.weekly_cooldown = None,
        }
    }
}
