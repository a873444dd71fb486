//! 节点配置（config）
//!
//! 各节点共享的配置片段（`FetchTo`）以及配置文档的版本升级链。
//!
mod upgrade;

pub use upgrade::{ConfigUpgradeChain, ConfigUpgrader, UpgradeOutcome};

use serde::{Deserialize, Serialize};

/// 取到的字段写入消息体（DATA）还是元数据（METADATA）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchTo {
    #[default]
    Data,
    Metadata,
}
