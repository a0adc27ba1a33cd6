//! Service layer for business logic and orchestration.
//!
//! Services sit between the Discord handlers and the data layer:
//!
//! - **Pack** (`pack`) - Claim orchestration inside a single transaction
//! - **Weighted** (`weighted`) - Rarity-weighted candidate selection
//! - **Export** (`export`) - Canonical record export for secondary consumers

pub mod export;
pub mod pack;
pub mod weighted;
