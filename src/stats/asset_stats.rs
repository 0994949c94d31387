use crate::records::{Asset, AssetStatus};
use serde::Serialize;

/// Status panel counts for the asset registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub total: usize,
    pub operational: usize,
    pub maintenance: usize,
    pub critical: usize,
}

/// Count assets per headline status. Order independent.
#[must_use]
pub fn compute_asset_stats(assets: &[Asset]) -> AssetStats {
    let mut stats = AssetStats {
        total: assets.len(),
        ..AssetStats::default()
    };

    for asset in assets {
        match asset.status {
            AssetStatus::Operational => stats.operational += 1,
            AssetStatus::Maintenance => stats.maintenance += 1,
            AssetStatus::Critical => stats.critical += 1,
            AssetStatus::Active | AssetStatus::Inactive => {}
        }
    }

    stats
}
