//! 实体标识（Entity Id）
//!
//! `EntityId` 是携带实体类型标签的通用引用（例如消息的发起者），
//! 各类强类型 ID 由 `#[entity_id]` 生成，并可与 `EntityId` 互相转换。
//!
use crate::error::DomainError;
use rule_macros::entity_id;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 实体类型（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Tenant,
    Customer,
    User,
    Dashboard,
    Asset,
    Device,
    EntityView,
    Edge,
    RuleChain,
    Alarm,
}

impl EntityType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityType::Tenant => "TENANT",
            EntityType::Customer => "CUSTOMER",
            EntityType::User => "USER",
            EntityType::Dashboard => "DASHBOARD",
            EntityType::Asset => "ASSET",
            EntityType::Device => "DEVICE",
            EntityType::EntityView => "ENTITY_VIEW",
            EntityType::Edge => "EDGE",
            EntityType::RuleChain => "RULE_CHAIN",
            EntityType::Alarm => "ALARM",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "TENANT" => EntityType::Tenant,
            "CUSTOMER" => EntityType::Customer,
            "USER" => EntityType::User,
            "DASHBOARD" => EntityType::Dashboard,
            "ASSET" => EntityType::Asset,
            "DEVICE" => EntityType::Device,
            "ENTITY_VIEW" => EntityType::EntityView,
            "EDGE" => EntityType::Edge,
            "RULE_CHAIN" => EntityType::RuleChain,
            "ALARM" => EntityType::Alarm,
            other => {
                return Err(DomainError::Parse {
                    reason: format!("unknown entity type: {other}"),
                });
            }
        };
        Ok(ty)
    }
}

/// 通用实体引用：(实体类型, UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityId {
    entity_type: EntityType,
    id: Uuid,
}

impl EntityId {
    pub const fn new(entity_type: EntityType, id: Uuid) -> Self {
        Self { entity_type, id }
    }

    pub const fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.entity_type, self.id)
    }
}

#[entity_id(entity_type = Tenant)]
pub struct TenantId(Uuid);

#[entity_id(entity_type = Customer)]
pub struct CustomerId(Uuid);

#[entity_id(entity_type = Device)]
pub struct DeviceId(Uuid);

#[entity_id(entity_type = Asset)]
pub struct AssetId(Uuid);

#[entity_id(entity_type = EntityView)]
pub struct EntityViewId(Uuid);

#[entity_id(entity_type = User)]
pub struct UserId(Uuid);

#[entity_id(entity_type = Edge)]
pub struct EdgeId(Uuid);

#[entity_id(entity_type = Dashboard)]
pub struct DashboardId(Uuid);
