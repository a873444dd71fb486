//! 合并策略
//!
//! - METADATA：逐项插入/覆盖元数据；
//! - DATA：解析消息体为 JSON 对象，按提取顺序追加字段后重新序列化为紧凑字符串。
//!   已存在的同名字段保留原位置、值被客户字段覆盖。
//!
use crate::config::FetchTo;
use crate::error::NodeError;
use rule_domain::message::Message;
use serde_json::{Map, Value};

/// 将消息体解析为 JSON 对象
pub fn parse_object(data: &str) -> Result<Map<String, Value>, NodeError> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| NodeError::invalid_body(format!("Message body is not valid JSON: {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(NodeError::invalid_body("Message body is not an object!")),
    }
}

/// 合并目标；DATA 携带在查询前已解析好的消息体
#[derive(Debug, Clone, PartialEq)]
pub enum MergeTarget {
    Data(Map<String, Value>),
    Metadata,
}

impl MergeTarget {
    /// 按配置准备合并目标；DATA 的消息体不是 JSON 对象时立即失败
    pub fn prepare(fetch_to: FetchTo, msg: &Message) -> Result<Self, NodeError> {
        match fetch_to {
            FetchTo::Data => Ok(MergeTarget::Data(parse_object(msg.data())?)),
            FetchTo::Metadata => Ok(MergeTarget::Metadata),
        }
    }

    pub fn fetch_to(&self) -> FetchTo {
        match self {
            MergeTarget::Data(_) => FetchTo::Data,
            MergeTarget::Metadata => FetchTo::Metadata,
        }
    }
}

/// 合并提取结果并生成新消息；没有可合并的字段时原样返回
pub fn merge(
    target: MergeTarget,
    msg: &Message,
    pairs: &[(String, String)],
) -> Result<Message, NodeError> {
    if pairs.is_empty() {
        return Ok(msg.clone());
    }

    match target {
        MergeTarget::Metadata => {
            let mut metadata = msg.metadata().clone();
            for (key, value) in pairs {
                metadata.put_value(key.as_str(), value.as_str());
            }
            Ok(msg.transform_metadata(metadata))
        }
        MergeTarget::Data(mut body) => {
            for (key, value) in pairs {
                body.insert(key.clone(), Value::String(value.clone()));
            }
            let data = serde_json::to_string(&Value::Object(body))?;
            Ok(msg.transform_data(data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_domain::id::DeviceId;
    use rule_domain::message::MessageMetadata;

    fn msg(data: &str) -> Message {
        let metadata: MessageMetadata = [("metaKey1", "metaValue1"), ("metaKey2", "metaValue2")]
            .into_iter()
            .collect();
        Message::new("POST_TELEMETRY_REQUEST", DeviceId::random().into(), metadata, data)
    }

    fn target(fetch_to: FetchTo, msg: &Message) -> MergeTarget {
        MergeTarget::prepare(fetch_to, msg).unwrap()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn data_fields_are_appended_in_order() {
        let original = msg(r#"{"dataKey1":123,"dataKey2":"dataValue2"}"#);
        let out = merge(
            target(FetchTo::Data, &original),
            &original,
            &pairs(&[("customer_title", "Acme"), ("customer_city", "Kyiv")]),
        )
        .unwrap();

        assert_eq!(
            out.data(),
            concat!(
                r#"{"dataKey1":123,"dataKey2":"dataValue2","#,
                r#""customer_title":"Acme","customer_city":"Kyiv"}"#
            )
        );
        assert_eq!(out.metadata(), original.metadata());
    }

    #[test]
    fn colliding_data_field_keeps_position() {
        let original = msg(r#"{"customer_title":"old","x":1}"#);
        let out = merge(
            target(FetchTo::Data, &original),
            &original,
            &pairs(&[("customer_title", "new")]),
        )
        .unwrap();
        assert_eq!(out.data(), r#"{"customer_title":"new","x":1}"#);
    }

    #[test]
    fn metadata_is_upserted() {
        let original = msg("{}");
        let out = merge(
            target(FetchTo::Metadata, &original),
            &original,
            &pairs(&[("customer_phone", "+1"), ("metaKey1", "replaced")]),
        )
        .unwrap();

        assert_eq!(out.data(), "{}");
        assert_eq!(out.metadata().len(), 3);
        assert_eq!(out.metadata().get_value("customer_phone"), Some("+1"));
        assert_eq!(out.metadata().get_value("metaKey1"), Some("replaced"));
        assert_eq!(out.metadata().get_value("metaKey2"), Some("metaValue2"));
    }

    #[test]
    fn nothing_to_merge_is_identity() {
        let original = msg(r#"{ "spaced" : true }"#);
        let data = target(FetchTo::Data, &original);
        assert_eq!(merge(data, &original, &[]).unwrap(), original);
        let metadata = target(FetchTo::Metadata, &original);
        assert_eq!(merge(metadata, &original, &[]).unwrap(), original);
    }

    #[test]
    fn data_merge_writes_into_prepared_body() {
        let original = msg(r#"{"dataKey1":123}"#);
        let mut body = Map::new();
        body.insert("prepared".to_string(), Value::Bool(true));

        let out = merge(
            MergeTarget::Data(body),
            &original,
            &pairs(&[("customer_zip", "01001")]),
        )
        .unwrap();

        assert_eq!(out.data(), r#"{"prepared":true,"customer_zip":"01001"}"#);
    }

    #[test]
    fn prepare_checks_body_only_for_data() {
        let original = msg("[]");
        let err = MergeTarget::prepare(FetchTo::Data, &original).unwrap_err();
        assert_eq!(err.to_string(), "Message body is not an object!");

        let metadata = target(FetchTo::Metadata, &original);
        assert_eq!(metadata, MergeTarget::Metadata);
        assert_eq!(metadata.fetch_to(), FetchTo::Metadata);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = parse_object("[]").unwrap_err();
        assert_eq!(err.to_string(), "Message body is not an object!");

        let err = parse_object("42").unwrap_err();
        assert!(matches!(err, NodeError::InvalidBody { .. }));

        let err = parse_object("not json").unwrap_err();
        assert!(err.to_string().starts_with("Message body is not valid JSON"));
    }
}
