use crate::config::UpgradeOutcome;
use crate::context::NodeContext;
use crate::error::NodeError;
use async_trait::async_trait;
use rule_domain::message::Message;
use serde_json::Value;

/// 规则节点（Rule Node）
///
/// - `init`：校验配置并构造节点，失败时节点不处理任何消息；
/// - `on_msg`：处理一条消息，通过上下文上报结果；返回 `Err` 表示异常绕过了上报通道；
/// - `upgrade`：将旧版本的配置文档升级到 `CONFIG_VERSION`。
#[async_trait]
pub trait RuleNode: Send + Sync {
    /// 节点的稳定名称，用于日志与注册
    const NAME: &'static str;

    /// 当前配置版本
    const CONFIG_VERSION: u32;

    fn init(configuration: &Value) -> Result<Self, NodeError>
    where
        Self: Sized;

    async fn on_msg(&self, ctx: &dyn NodeContext, msg: Message) -> Result<(), NodeError>;

    fn upgrade(from_version: u32, configuration: Value) -> Result<UpgradeOutcome, NodeError>
    where
        Self: Sized,
    {
        Ok(UpgradeOutcome {
            version: from_version,
            changed: false,
            configuration,
        })
    }
}
