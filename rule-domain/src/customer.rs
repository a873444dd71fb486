//! 客户（Customer）记录
//!
//! 对规则节点只读；除标量字段外还带有自由格式的 `additional_info` JSON 文档。
//!
use crate::id::{CustomerId, TenantId};
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: CustomerId,
    tenant_id: TenantId,
    #[builder(into)]
    title: Option<String>,
    #[builder(into)]
    country: Option<String>,
    #[builder(into)]
    city: Option<String>,
    #[builder(into)]
    state: Option<String>,
    #[builder(into)]
    zip: Option<String>,
    #[builder(into)]
    address: Option<String>,
    #[builder(into)]
    address2: Option<String>,
    #[builder(into)]
    phone: Option<String>,
    #[builder(into)]
    email: Option<String>,
    /// 附加信息（例如 `{"description": "..."}`）
    additional_info: Option<Value>,
}

impl Customer {
    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn address2(&self) -> Option<&str> {
        self.address2.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn additional_info(&self) -> Option<&Value> {
        self.additional_info.as_ref()
    }
}
