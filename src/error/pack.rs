use thiserror::Error;

/// Failures while drawing or granting a pack reward.
///
/// Every variant aborts the claim transaction; the caller reports an operational
/// error to the user instead of crashing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackError {
    /// No catalog items matched the pack's rarity filter.
    #[error("No items available to draw from")]
    EmptyPool,

    /// A candidate carries a weight that cannot take part in weighted sampling.
    #[error("Candidate {index} has invalid weight {weight}; weights must be finite and positive")]
    InvalidWeight { index: usize, weight: f64 },

    /// The sampler rejected the weights for any other reason.
    #[error("Weighted sampling failed: {0}")]
    Sampling(String),

    /// The owner's pack state kept changing underneath the claim.
    #[error("Pack state for owner {owner_id} changed concurrently {attempts} times")]
    ClaimContention { owner_id: u64, attempts: u32 },

    /// The `/pack` command arrived without a claim path this bot knows.
    #[error("Unknown pack subcommand {0:?}")]
    UnknownSubcommand(Option<String>),
}
