use super::extractor::EntityDetail;
use crate::config::{ConfigUpgrader, FetchTo};
use crate::error::NodeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 客户详情节点配置
///
/// 文档形如 `{"detailsList": ["ID", "TITLE"], "fetchTo": "METADATA"}`；
/// `fetchTo` 允许在文档中为 `null`，由 [`validate`](Self::validate) 拒绝。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailsNodeConfiguration {
    #[serde(default)]
    pub details_list: Vec<EntityDetail>,
    pub fetch_to: Option<FetchTo>,
}

impl Default for CustomerDetailsNodeConfiguration {
    fn default() -> Self {
        Self {
            details_list: Vec::new(),
            fetch_to: Some(FetchTo::Data),
        }
    }
}

impl CustomerDetailsNodeConfiguration {
    pub fn new(details_list: Vec<EntityDetail>, fetch_to: FetchTo) -> Self {
        Self {
            details_list,
            fetch_to: Some(fetch_to),
        }
    }

    /// 校验并返回 (详情列表, 写入目标)
    pub fn validate(&self) -> Result<(Vec<EntityDetail>, FetchTo), NodeError> {
        let Some(fetch_to) = self.fetch_to else {
            return Err(NodeError::configuration("FetchTo cannot be null!"));
        };
        if self.details_list.is_empty() {
            return Err(NodeError::configuration("No entity details selected!"));
        }
        Ok((self.details_list.clone(), fetch_to))
    }
}

/// v0 -> v1：布尔字段 `addToMetadata` 改写为 `fetchTo`
pub struct FetchToUpgrader;

impl ConfigUpgrader for FetchToUpgrader {
    fn applies(&self, from_version: u32) -> bool {
        from_version == 0
    }

    fn target_version(&self) -> u32 {
        1
    }

    fn upgrade(&self, mut configuration: Value) -> Result<Value, NodeError> {
        let Some(obj) = configuration.as_object_mut() else {
            return Err(NodeError::configuration(
                "node configuration is not an object",
            ));
        };

        let fetch_to = match obj.remove("addToMetadata") {
            Some(Value::Bool(true)) => Some(FetchTo::Metadata),
            Some(Value::Bool(false)) | Some(Value::Null) => Some(FetchTo::Data),
            Some(other) => {
                return Err(NodeError::configuration(format!(
                    "addToMetadata must be a boolean, found: {other}"
                )));
            }
            None if obj.contains_key("fetchTo") => None,
            None => Some(FetchTo::Data),
        };
        if let Some(fetch_to) = fetch_to {
            obj.insert("fetchTo".to_string(), serde_json::to_value(fetch_to)?);
        }

        Ok(configuration)
    }
}
