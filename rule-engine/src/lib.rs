//! 规则引擎节点层（rule-engine）
//!
//! 在领域层之上定义规则节点的运行契约与具体节点：
//! - `context`：节点执行时可用的能力句柄（租户、租户校验、查询服务、结果上报）
//! - `node`：规则节点协议（初始化、处理消息、配置升级）
//! - `config`：节点配置的公共部分与版本升级链
//! - `customer_details`：查找消息发起者所属客户并将客户字段合并到消息中
//!
pub mod config;
pub mod context;
pub mod customer_details;
pub mod error;
pub mod node;

pub use customer_details::CustomerDetailsNode;
