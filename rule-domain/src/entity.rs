//! 实体记录（Entity）
//!
//! 规则节点可能面对的消息发起者：设备、资产、实体视图、用户与边缘节点。
//! 它们都归属于某个租户，并且可以（但不必）分配给某个客户。
//!
use crate::id::{AssetId, CustomerId, DeviceId, EdgeId, EntityViewId, TenantId, UserId};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 可分配给客户的实体
pub trait CustomerOwned: Send + Sync {
    fn tenant_id(&self) -> TenantId;

    /// 所属客户；未分配（缺失或 nil）时返回 `None`
    fn customer_id(&self) -> Option<CustomerId>;
}

// nil 的客户 ID 等同于未分配
fn assigned(customer_id: Option<CustomerId>) -> Option<CustomerId> {
    customer_id.filter(|id| !id.is_null())
}

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    id: DeviceId,
    tenant_id: TenantId,
    customer_id: Option<CustomerId>,
    #[builder(into)]
    name: String,
    #[builder(into)]
    device_type: Option<String>,
}

impl Device {
    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device_type(&self) -> Option<&str> {
        self.device_type.as_deref()
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    id: AssetId,
    tenant_id: TenantId,
    customer_id: Option<CustomerId>,
    #[builder(into)]
    name: String,
}

impl Asset {
    pub fn id(&self) -> AssetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 实体视图：对设备或资产的受限投影
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityView {
    id: EntityViewId,
    tenant_id: TenantId,
    customer_id: Option<CustomerId>,
    #[builder(into)]
    name: String,
}

impl EntityView {
    pub fn id(&self) -> EntityViewId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    tenant_id: TenantId,
    customer_id: Option<CustomerId>,
    #[builder(into)]
    email: String,
}

impl User {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    id: EdgeId,
    tenant_id: TenantId,
    customer_id: Option<CustomerId>,
    #[builder(into)]
    name: String,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CustomerOwned for Device {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn customer_id(&self) -> Option<CustomerId> {
        assigned(self.customer_id)
    }
}

impl CustomerOwned for Asset {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn customer_id(&self) -> Option<CustomerId> {
        assigned(self.customer_id)
    }
}

impl CustomerOwned for EntityView {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn customer_id(&self) -> Option<CustomerId> {
        assigned(self.customer_id)
    }
}

impl CustomerOwned for User {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn customer_id(&self) -> Option<CustomerId> {
        assigned(self.customer_id)
    }
}

impl CustomerOwned for Edge {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn customer_id(&self) -> Option<CustomerId> {
        assigned(self.customer_id)
    }
}
