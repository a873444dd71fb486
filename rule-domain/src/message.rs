//! 消息模型（Message）
//!
//! 消息由管道独占；规则节点只能通过 `transform_*` 产生替换了消息体或元数据的新消息，
//! 原消息保持不变。
//!
use crate::id::EntityId;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Iter;
use uuid::Uuid;

/// 消息元数据：字符串到字符串的映射，不保证顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageMetadata(HashMap<String, String>);

impl MessageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// 插入或覆盖
    pub fn put_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for MessageMetadata {
    fn from(values: HashMap<String, String>) -> Self {
        Self(values)
    }
}

impl<K, V> FromIterator<(K, V)> for MessageMetadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// 管道中流转的消息
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[builder(default = Uuid::new_v4())]
    id: Uuid,
    #[builder(into)]
    msg_type: String,
    /// 发起者
    originator: EntityId,
    #[builder(default)]
    metadata: MessageMetadata,
    /// 消息体（JSON 字符串）
    #[builder(into)]
    data: String,
    #[builder(default = Utc::now())]
    ts: DateTime<Utc>,
}

impl Message {
    pub fn new(
        msg_type: impl Into<String>,
        originator: EntityId,
        metadata: MessageMetadata,
        data: impl Into<String>,
    ) -> Self {
        Self::builder()
            .msg_type(msg_type)
            .originator(originator)
            .metadata(metadata)
            .data(data)
            .build()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn msg_type(&self) -> &str {
        &self.msg_type
    }

    pub fn originator(&self) -> EntityId {
        self.originator
    }

    pub fn metadata(&self) -> &MessageMetadata {
        &self.metadata
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn ts(&self) -> DateTime<Utc> {
        self.ts
    }

    /// 以新的消息体生成一条新消息（其余部分保持不变）
    pub fn transform_data(&self, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..self.clone()
        }
    }

    /// 以新的元数据生成一条新消息（其余部分保持不变）
    pub fn transform_metadata(&self, metadata: MessageMetadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::DeviceId;

    fn sample() -> Message {
        let metadata: MessageMetadata = [("metaKey1", "metaValue1")].into_iter().collect();
        Message::new(
            "POST_TELEMETRY_REQUEST",
            DeviceId::random().into(),
            metadata,
            r#"{"temperature":21}"#,
        )
    }

    #[test]
    fn transform_data_keeps_identity_and_metadata() {
        let msg = sample();
        let out = msg.transform_data("{}");

        assert_eq!(out.id(), msg.id());
        assert_eq!(out.originator(), msg.originator());
        assert_eq!(out.metadata(), msg.metadata());
        assert_eq!(out.data(), "{}");
        assert_eq!(msg.data(), r#"{"temperature":21}"#);
    }

    #[test]
    fn transform_metadata_replaces_only_metadata() {
        let msg = sample();
        let mut metadata = msg.metadata().clone();
        metadata.put_value("metaKey2", "metaValue2");

        let out = msg.transform_metadata(metadata);
        assert_eq!(out.metadata().len(), 2);
        assert_eq!(out.metadata().get_value("metaKey2"), Some("metaValue2"));
        assert_eq!(out.data(), msg.data());
        assert_eq!(msg.metadata().len(), 1);
    }
}
