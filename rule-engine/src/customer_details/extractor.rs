//! 客户详情提取
//!
//! 按配置顺序把客户字段转换为 `(customer_<字段名>, 值)` 对；
//! 缺失或为空的字段直接跳过，不产生占位值。
//!
use rule_domain::customer::Customer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 输出键的固定前缀，下游按 `customer_title` 这类名字取值
pub const CUSTOMER_PREFIX: &str = "customer_";

const DESCRIPTION: &str = "description";

/// 可提取的客户字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityDetail {
    Id,
    Title,
    Country,
    City,
    State,
    Zip,
    Address,
    #[serde(rename = "ADDRESS2")]
    Address2,
    Phone,
    Email,
    /// 取 `additional_info` 中的 `description`
    #[serde(rename = "ADDITIONAL_INFO", alias = "ADDITIONAL_INFO_DESCRIPTION")]
    AdditionalInfo,
}

impl EntityDetail {
    pub const ALL: [EntityDetail; 11] = [
        EntityDetail::Id,
        EntityDetail::Title,
        EntityDetail::Country,
        EntityDetail::City,
        EntityDetail::State,
        EntityDetail::Zip,
        EntityDetail::Address,
        EntityDetail::Address2,
        EntityDetail::Phone,
        EntityDetail::Email,
        EntityDetail::AdditionalInfo,
    ];

    /// 规范字段名
    pub const fn field_name(&self) -> &'static str {
        match self {
            EntityDetail::Id => "id",
            EntityDetail::Title => "title",
            EntityDetail::Country => "country",
            EntityDetail::City => "city",
            EntityDetail::State => "state",
            EntityDetail::Zip => "zip",
            EntityDetail::Address => "address",
            EntityDetail::Address2 => "address2",
            EntityDetail::Phone => "phone",
            EntityDetail::Email => "email",
            EntityDetail::AdditionalInfo => "additionalInfo",
        }
    }

    pub fn output_key(&self) -> String {
        format!("{CUSTOMER_PREFIX}{}", self.field_name())
    }

    fn value_of(&self, customer: &Customer) -> Option<String> {
        let scalar = match self {
            EntityDetail::Id => return Some(customer.id().to_string()),
            EntityDetail::AdditionalInfo => return description(customer.additional_info()),
            EntityDetail::Title => customer.title(),
            EntityDetail::Country => customer.country(),
            EntityDetail::City => customer.city(),
            EntityDetail::State => customer.state(),
            EntityDetail::Zip => customer.zip(),
            EntityDetail::Address => customer.address(),
            EntityDetail::Address2 => customer.address2(),
            EntityDetail::Phone => customer.phone(),
            EntityDetail::Email => customer.email(),
        };
        scalar.filter(|s| !s.is_empty()).map(str::to_string)
    }
}

/// 按 `details` 的顺序（保留重复项）提取客户字段
pub fn extract(details: &[EntityDetail], customer: &Customer) -> Vec<(String, String)> {
    details
        .iter()
        .filter_map(|detail| {
            detail
                .value_of(customer)
                .map(|value| (detail.output_key(), value))
        })
        .collect()
}

// additional_info 可能以 JSON 文本形式存储，先展开再取 description；
// 显式的 null 与缺失同样跳过
fn description(additional_info: Option<&Value>) -> Option<String> {
    let parsed;
    let info = match additional_info? {
        Value::String(raw) => {
            parsed = serde_json::from_str::<Value>(raw).ok()?;
            &parsed
        }
        other => other,
    };

    match info.get(DESCRIPTION)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
