//! 配置升级（Config Upgrade）
//!
//! 当节点配置结构演进时，通过升级器（`ConfigUpgrader`）把旧版本的配置文档
//! 逐步改写为新版本，`ConfigUpgradeChain` 负责串联多步升级直到没有适用的升级器。
//!
use crate::error::NodeError;
use serde_json::Value;
use std::sync::Arc;

/// 配置版本升级器
pub trait ConfigUpgrader: Send + Sync {
    fn applies(&self, from_version: u32) -> bool;

    /// 升级后的版本，必须大于 `applies` 接受的版本
    fn target_version(&self) -> u32;

    fn upgrade(&self, configuration: Value) -> Result<Value, NodeError>;
}

impl<T> ConfigUpgrader for Arc<T>
where
    T: ConfigUpgrader + ?Sized,
{
    fn applies(&self, from_version: u32) -> bool {
        (**self).applies(from_version)
    }

    fn target_version(&self) -> u32 {
        (**self).target_version()
    }

    fn upgrade(&self, configuration: Value) -> Result<Value, NodeError> {
        (**self).upgrade(configuration)
    }
}

/// 升级结果
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeOutcome {
    /// 升级后的版本
    pub version: u32,
    /// 是否发生了改写（调用方据此决定是否回写配置）
    pub changed: bool,
    pub configuration: Value,
}

/// 配置升级链：按顺序查找适用的升级器，直到版本稳定
pub struct ConfigUpgradeChain {
    stages: Vec<Arc<dyn ConfigUpgrader>>,
}

impl Default for ConfigUpgradeChain {
    fn default() -> Self {
        Self::from_iter(vec![])
    }
}

impl ConfigUpgradeChain {
    pub fn upgrade(
        &self,
        from_version: u32,
        mut configuration: Value,
    ) -> Result<UpgradeOutcome, NodeError> {
        let mut version = from_version;
        let mut changed = false;

        while let Some(stage) = self.stages.iter().find(|s| s.applies(version)) {
            let target = stage.target_version();
            if target <= version {
                return Err(NodeError::configuration(format!(
                    "config upgrader does not advance version: from={version}, target={target}"
                )));
            }
            configuration = stage.upgrade(configuration)?;
            version = target;
            changed = true;
        }

        Ok(UpgradeOutcome {
            version,
            changed,
            configuration,
        })
    }
}

impl FromIterator<Arc<dyn ConfigUpgrader>> for ConfigUpgradeChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ConfigUpgrader>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl Extend<Arc<dyn ConfigUpgrader>> for ConfigUpgradeChain {
    fn extend<I: IntoIterator<Item = Arc<dyn ConfigUpgrader>>>(&mut self, iter: I) {
        self.stages.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // v0 -> v1：重命名 a 为 b
    struct RenameAToB;
    impl ConfigUpgrader for RenameAToB {
        fn applies(&self, from_version: u32) -> bool {
            from_version == 0
        }
        fn target_version(&self) -> u32 {
            1
        }
        fn upgrade(&self, mut configuration: Value) -> Result<Value, NodeError> {
            if let Some(obj) = configuration.as_object_mut() {
                if let Some(v) = obj.remove("a") {
                    obj.insert("b".to_string(), v);
                }
            }
            Ok(configuration)
        }
    }

    // v1 -> v2：补充默认字段 c
    struct AddC;
    impl ConfigUpgrader for AddC {
        fn applies(&self, from_version: u32) -> bool {
            from_version == 1
        }
        fn target_version(&self) -> u32 {
            2
        }
        fn upgrade(&self, mut configuration: Value) -> Result<Value, NodeError> {
            if let Some(obj) = configuration.as_object_mut() {
                obj.entry("c").or_insert(json!(true));
            }
            Ok(configuration)
        }
    }

    struct Stuck;
    impl ConfigUpgrader for Stuck {
        fn applies(&self, _from_version: u32) -> bool {
            true
        }
        fn target_version(&self) -> u32 {
            0
        }
        fn upgrade(&self, configuration: Value) -> Result<Value, NodeError> {
            Ok(configuration)
        }
    }

    fn chain() -> ConfigUpgradeChain {
        ConfigUpgradeChain::from_iter(vec![
            Arc::new(AddC) as Arc<dyn ConfigUpgrader>,
            Arc::new(RenameAToB) as Arc<dyn ConfigUpgrader>,
        ])
    }

    #[test]
    fn applies_stages_until_stable() {
        let out = chain().upgrade(0, json!({"a": 1})).unwrap();
        assert_eq!(out.version, 2);
        assert!(out.changed);
        assert_eq!(out.configuration, json!({"b": 1, "c": true}));
    }

    #[test]
    fn current_version_is_left_untouched() {
        let out = chain().upgrade(2, json!({"b": 1})).unwrap();
        assert_eq!(out.version, 2);
        assert!(!out.changed);
        assert_eq!(out.configuration, json!({"b": 1}));
    }

    #[test]
    fn empty_chain_is_noop() {
        let out = ConfigUpgradeChain::default()
            .upgrade(0, json!({"a": 1}))
            .unwrap();
        assert!(!out.changed);
        assert_eq!(out.version, 0);
    }

    #[test]
    fn non_advancing_stage_is_rejected() {
        let mut chain = ConfigUpgradeChain::default();
        chain.extend(vec![Arc::new(Stuck) as Arc<dyn ConfigUpgrader>]);
        let err = chain.upgrade(0, json!({})).unwrap_err();
        assert!(matches!(err, NodeError::Configuration(_)));
    }
}
