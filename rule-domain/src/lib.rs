//! 规则引擎领域层（rule-domain）
//!
//! 为规则节点提供与存储/传输解耦的领域构件：
//! - 标识（`id`）：实体类型、通用实体 ID 与强类型 ID
//! - 实体记录（`entity`、`customer`）：设备、资产、实体视图、用户、边缘节点与客户
//! - 消息模型（`message`）：消息体（JSON 字符串）与元数据
//! - 查询服务（`service`）：按租户与 ID 异步查找各类实体
//! - 内存实现（`inmemory`）：基于 `DashMap` 的查询服务实现，便于测试与演示
//!
pub mod customer;
pub mod entity;
pub mod error;
pub mod id;
pub mod inmemory;
pub mod message;
pub mod service;

// 允许在本 crate 内部通过 ::rule_domain 进行自引用，
// 以便 #[entity_id] 生成的代码在本 crate 中也能解析到 ::rule_domain 路径。
extern crate self as rule_domain;
