//! Pretrained and baseline weight locations, local and remote.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Bucket every downloadable asset lives under.
pub const BASE_URL: &str = "https://s3-us-west-1.amazonaws.com/deepdrive";
pub const BASE_WEIGHTS_URL: &str = "https://s3-us-west-1.amazonaws.com/deepdrive/weights";

pub const ALEXNET_BASELINE_WEIGHTS_VERSION: &str = "model.ckpt-143361";
pub const ALEXNET_PRETRAINED_NAME: &str = "bvlc_alexnet.ckpt";
pub const MNET2_BASELINE_WEIGHTS_VERSION: &str = "model.ckpt-45466";
pub const MNET2_PRETRAINED_NAME: &str = "mobilenet_v2_1.0_224_checkpoint";
pub const PPO_BASELINE_WEIGHTS_VERSION: &str = "03125";

/// A weights bundle: where it is unpacked and where it is downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightsAsset {
    pub local_path: PathBuf,
    pub url: String,
    /// Checkpoint name inside `local_path`, for bundles that carry one.
    pub version: Option<&'static str>,
}

/// Every weights bundle the agents know how to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightsLayout {
    pub alexnet_baseline: WeightsAsset,
    pub alexnet_pretrained: WeightsAsset,
    pub mnet2_baseline: WeightsAsset,
    pub mnet2_pretrained: WeightsAsset,
    pub ppo_baseline: WeightsAsset,
}

fn zip_url(name: &str) -> String {
    format!("{BASE_WEIGHTS_URL}/{name}.zip")
}

impl WeightsLayout {
    /// Lay the bundles out under `weights_dir`.
    pub fn under(weights_dir: &Path) -> Self {
        Self {
            alexnet_baseline: WeightsAsset {
                local_path: weights_dir.join("baseline_agent_weights"),
                url: zip_url("baseline_agent_weights"),
                version: Some(ALEXNET_BASELINE_WEIGHTS_VERSION),
            },
            alexnet_pretrained: WeightsAsset {
                local_path: weights_dir.join(ALEXNET_PRETRAINED_NAME),
                url: zip_url(ALEXNET_PRETRAINED_NAME),
                version: None,
            },
            mnet2_baseline: WeightsAsset {
                local_path: weights_dir.join("mnet2_baseline_weights"),
                url: zip_url("mnet2_baseline_weights"),
                version: Some(MNET2_BASELINE_WEIGHTS_VERSION),
            },
            mnet2_pretrained: WeightsAsset {
                local_path: weights_dir
                    .join(MNET2_PRETRAINED_NAME)
                    .join("mobilenet_v2_1.0_224.ckpt"),
                url: zip_url(MNET2_PRETRAINED_NAME),
                version: None,
            },
            ppo_baseline: WeightsAsset {
                local_path: weights_dir.join("ppo_baseline_agent_weights"),
                url: zip_url("ppo_baseline_agent_weights"),
                version: Some(PPO_BASELINE_WEIGHTS_VERSION),
            },
        }
    }
}
