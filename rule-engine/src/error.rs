use rule_domain::error::DomainError;
use rule_domain::id::{EntityId, EntityType};

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum NodeError {
    /// 节点配置无效，节点无法初始化
    #[error("{0}")]
    Configuration(String),

    /// 消息体形状不符合要求（例如合并到 DATA 时消息体不是 JSON 对象）
    #[error("{reason}")]
    InvalidBody { reason: String },

    #[error("entity type '{0}' is not supported")]
    UnsupportedEntityType(EntityType),

    #[error("originator {0} is not assigned to any customer")]
    MissingCustomer(EntityId),

    /// 由上下文的租户校验抛出，节点原样向调用方传播
    #[error("{0}")]
    TenantCheck(String),

    #[error("lookup failed: {0}")]
    Domain(#[from] DomainError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl NodeError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        NodeError::Configuration(reason.into())
    }

    pub fn invalid_body(reason: impl Into<String>) -> Self {
        NodeError::InvalidBody {
            reason: reason.into(),
        }
    }
}
