//! 规则引擎过程宏（rule-macros）
//!
//! 目前仅提供 `#[entity_id]`，用于生成带实体类型标签的强类型 ID。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;

/// 实体 ID 宏
///
/// 用于 `struct DeviceId(Uuid);` 形式的单字段 tuple struct，参数 `entity_type`
/// 指定对应的 `EntityType` 变体：
///
/// ```ignore
/// #[entity_id(entity_type = Device)]
/// pub struct DeviceId(Uuid);
/// ```
///
/// 生成内容：
/// - 合并派生：Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize
/// - `ENTITY_TYPE` 常量与 `new/random/id/is_null/entity_type`
/// - `Display`/`FromStr`（规范 UUID 字符串）
/// - 与 `Uuid`、`EntityId` 之间的互相转换（`TryFrom<EntityId>` 在类型不符时返回错误）
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
