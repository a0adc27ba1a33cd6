//! Pack claim service.
//!
//! A claim runs in one database transaction: read (or lazily create) the owner's pack
//! resource, evaluate the cooldown state machine, persist the transition with a
//! compare-and-swap, draw an item from the rarity-filtered pool and grant it. Any error
//! drops the transaction, so a failed claim never consumes a use.

use chrono::{DateTime, Utc};
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::{
    config::{PackSettings, RarityBounds, StatBonusRange},
    data::{
        catalog::CatalogRepository, item_instance::ItemInstanceRepository,
        pack_resource::PackResourceRepository,
    },
    error::{pack::PackError, AppError},
    model::{
        catalog::CreateItemInstanceParam,
        claim::{ClaimOutcome, ClaimPackParam, PackReward},
        pack_resource::PackResource,
        rarity::RarityTables,
    },
    service::weighted,
};

/// How many times a claim re-reads the owner's state after losing a race.
const MAX_CLAIM_ATTEMPTS: u32 = 3;

/// Service orchestrating daily and weekly pack claims.
pub struct PackService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a PackSettings,
    rarity_tables: &'a RarityTables,
    stat_bonus: StatBonusRange,
}

impl<'a> PackService<'a> {
    /// Creates a new PackService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `settings` - Rarity bounds per claim path
    /// - `rarity_tables` - Category tables used to describe the drawn item
    /// - `stat_bonus` - Bounds for the random stat bonuses
    pub fn new(
        db: &'a DatabaseConnection,
        settings: &'a PackSettings,
        rarity_tables: &'a RarityTables,
        stat_bonus: StatBonusRange,
    ) -> Self {
        Self {
            db,
            settings,
            rarity_tables,
            stat_bonus,
        }
    }

    /// Claims a pack for the owner at the current time.
    pub async fn claim(&self, param: ClaimPackParam) -> Result<ClaimOutcome, AppError> {
        self.claim_at(param, Utc::now()).await
    }

    /// Claims a pack for the owner, evaluating cooldowns against `now`.
    ///
    /// The cooldown is checked before the configuration so an owner on cooldown is told
    /// when to come back even if the path has since been disabled.
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome::Claimed)` - Use recorded and reward granted
    /// - `Ok(ClaimOutcome::OnCooldown)` - Claim path still cooling down; nothing changed
    /// - `Ok(ClaimOutcome::NotConfigured)` - Claim path has no rarity bounds
    /// - `Err(AppError::PackErr(EmptyPool))` - No catalog item matches the bounds
    /// - `Err(AppError::PackErr(ClaimContention))` - State kept changing concurrently
    /// - `Err(AppError::DbErr)` - Database failure; the claim was rolled back
    pub async fn claim_at(
        &self,
        param: ClaimPackParam,
        now: DateTime<Utc>,
    ) -> Result<ClaimOutcome, AppError> {
        let kind = param.kind;
        let txn = self.db.begin().await?;

        let recorded =
            record_use(&PackResourceRepository::new(&txn), self.settings, param, now).await?;

        let (uses, bounds) = match recorded {
            RecordedUse::Used { uses, bounds } => (uses, bounds),
            RecordedUse::Rejected(outcome) => {
                txn.commit().await?;
                return Ok(outcome);
            }
        };

        let reward = self.grant(&txn, param, bounds, uses).await?;
        txn.commit().await?;

        tracing::info!(
            "Owner {} claimed {} pack: {} (rarity {}), uses {}",
            param.owner_id,
            kind,
            reward.item.name,
            reward.item.rarity,
            reward.uses
        );

        Ok(ClaimOutcome::Claimed(reward))
    }

    /// Draws an item from the pack's pool and grants it to the owner.
    async fn grant(
        &self,
        txn: &DatabaseTransaction,
        param: ClaimPackParam,
        bounds: RarityBounds,
        uses: u32,
    ) -> Result<PackReward, AppError> {
        let pool = CatalogRepository::new(txn).filter_eligible(bounds).await?;

        if pool.is_empty() {
            tracing::warn!(
                "No catalog items for {} pack within rarity {}..={}",
                param.kind,
                bounds.min,
                bounds.max
            );
        }

        // ThreadRng is not Send; keep it out of scope across awaits
        let (item, health_bonus, attack_bonus) = {
            let mut rng = rand::rng();
            let item = weighted::pick(&pool, |item| item.rarity, &mut rng)?.clone();
            let health_bonus = roll_bonus(&mut rng, self.stat_bonus.max_health_bonus);
            let attack_bonus = roll_bonus(&mut rng, self.stat_bonus.max_attack_bonus);
            (item, health_bonus, attack_bonus)
        };

        let instance = ItemInstanceRepository::new(txn)
            .create(CreateItemInstanceParam {
                owner_id: param.owner_id,
                catalog_item_id: item.id,
                health_bonus,
                attack_bonus,
            })
            .await?;

        let categories = self.rarity_tables.matches(item.rarity);

        Ok(PackReward {
            kind: param.kind,
            item,
            instance_id: instance.id,
            health_bonus,
            attack_bonus,
            uses,
            categories,
        })
    }
}

/// Reads and conditionally writes an owner's pack state.
///
/// Implemented by [`PackResourceRepository`]; the claim loop only depends on these two
/// steps.
pub(crate) trait PackStateStore {
    async fn get_or_create(&self, owner_id: u64) -> Result<PackResource, DbErr>;

    async fn compare_and_swap(
        &self,
        current: &PackResource,
        next: &PackResource,
    ) -> Result<bool, DbErr>;
}

impl<C: ConnectionTrait> PackStateStore for PackResourceRepository<'_, C> {
    async fn get_or_create(&self, owner_id: u64) -> Result<PackResource, DbErr> {
        PackResourceRepository::get_or_create(self, owner_id).await
    }

    async fn compare_and_swap(
        &self,
        current: &PackResource,
        next: &PackResource,
    ) -> Result<bool, DbErr> {
        PackResourceRepository::compare_and_swap(self, current, next).await
    }
}

/// Result of recording a use against the owner's pack state.
#[derive(Debug, Clone, PartialEq)]
enum RecordedUse {
    /// The use was written; `uses` is the count after it.
    Used { uses: u32, bounds: RarityBounds },
    /// Nothing was written and the claim ends with this outcome.
    Rejected(ClaimOutcome),
}

/// Evaluates the cooldown state machine and records one use.
///
/// A lost compare-and-swap re-reads the state and evaluates it again, so a claim that
/// raced another one to the third use ends up on cooldown instead of over-granting.
///
/// # Returns
/// - `Ok(RecordedUse::Used)` - State advanced by one use
/// - `Ok(RecordedUse::Rejected)` - On cooldown or not configured; nothing written
/// - `Err(AppError::PackErr(ClaimContention))` - Lost the swap `MAX_CLAIM_ATTEMPTS` times
/// - `Err(AppError::DbErr)` - Database error while reading or writing
async fn record_use<S: PackStateStore>(
    store: &S,
    settings: &PackSettings,
    param: ClaimPackParam,
    now: DateTime<Utc>,
) -> Result<RecordedUse, AppError> {
    let kind = param.kind;

    for attempt in 1..=MAX_CLAIM_ATTEMPTS {
        let current = store.get_or_create(param.owner_id).await?;

        let Some(next) = current.claim(kind, now) else {
            let available_at = current.available_at(kind).unwrap_or(now);
            return Ok(RecordedUse::Rejected(ClaimOutcome::OnCooldown {
                kind,
                available_at,
            }));
        };

        let Some(bounds) = settings.bounds(kind) else {
            return Ok(RecordedUse::Rejected(ClaimOutcome::NotConfigured(kind)));
        };

        if store.compare_and_swap(&current, &next).await? {
            return Ok(RecordedUse::Used {
                uses: next.uses,
                bounds,
            });
        }

        tracing::debug!(
            "Pack state for owner {} changed during {} claim (attempt {})",
            param.owner_id,
            kind,
            attempt
        );
    }

    Err(PackError::ClaimContention {
        owner_id: param.owner_id,
        attempts: MAX_CLAIM_ATTEMPTS,
    }
    .into())
}

/// Rolls a bonus uniformly in `-max..=max`.
fn roll_bonus<R: Rng + ?Sized>(rng: &mut R, max: i32) -> i32 {
    rng.random_range(-max..=max)
}
