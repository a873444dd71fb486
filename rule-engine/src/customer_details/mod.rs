//! 客户详情节点（CustomerDetailsNode）
//!
//! 对每条消息：
//! 1. 写入 DATA 时先校验消息体是 JSON 对象（同步失败，不发起任何查询）；
//! 2. 校验发起者属于当前租户（错误原样传播，不上报）；
//! 3. 查找发起者：不支持的类型上报失败，不存在则原样成功；
//! 4. 发起者未分配客户时上报失败，否则查找客户，客户不存在则原样成功；
//! 5. 提取配置的客户字段并合并到消息体或元数据，上报成功。
//!
//! 两次查询严格串行；节点自身只持有初始化时校验过的不可变配置。
//!
mod config;
mod extractor;
mod merge;
mod resolver;

pub use config::{CustomerDetailsNodeConfiguration, FetchToUpgrader};
pub use extractor::{CUSTOMER_PREFIX, EntityDetail, extract};
pub use merge::{MergeTarget, merge, parse_object};
pub use resolver::{Originator, Resolution, resolve};

use crate::config::{ConfigUpgradeChain, ConfigUpgrader, FetchTo, UpgradeOutcome};
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::node::RuleNode;
use async_trait::async_trait;
use rule_domain::message::Message;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// 一次调用的终态
#[derive(Debug)]
pub enum Outcome {
    /// 成功：携带合并后的消息（关联记录不存在时为原消息）
    Success(Message),
    /// 失败：携带原消息与原因
    Failure(Message, NodeError),
    /// 查询完成前调用已被管道放弃，不上报
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetailsNode {
    details: Vec<EntityDetail>,
    fetch_to: FetchTo,
}

impl CustomerDetailsNode {
    pub fn new(config: &CustomerDetailsNodeConfiguration) -> Result<Self, NodeError> {
        let (details, fetch_to) = config.validate()?;
        Ok(Self { details, fetch_to })
    }

    pub fn details(&self) -> &[EntityDetail] {
        &self.details
    }

    pub fn fetch_to(&self) -> FetchTo {
        self.fetch_to
    }

    /// 执行一次富化并返回终态，不经过上报通道
    ///
    /// 返回 `Err` 的只有两种情况：消息体形状错误与租户校验失败。
    pub async fn process(
        &self,
        ctx: &dyn NodeContext,
        msg: &Message,
    ) -> Result<Outcome, NodeError> {
        let target = MergeTarget::prepare(self.fetch_to, msg)?;
        ctx.check_tenant_entity(msg.originator())?;

        Ok(match self.enrich(ctx, msg, target).await {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failure(msg.clone(), err),
        })
    }

    async fn enrich(
        &self,
        ctx: &dyn NodeContext,
        msg: &Message,
        target: MergeTarget,
    ) -> Result<Outcome, NodeError> {
        let resolution = resolve(ctx, msg.originator()).await?;
        if ctx.is_cancelled() {
            return Ok(Outcome::Abandoned);
        }

        let originator = match resolution {
            Resolution::Found(originator) => originator,
            Resolution::NotFound => {
                debug!(originator = %msg.originator(), "originator not found, nothing to fetch");
                return Ok(Outcome::Success(msg.clone()));
            }
            Resolution::Unsupported(entity_type) => {
                return Err(NodeError::UnsupportedEntityType(entity_type));
            }
        };

        debug!(
            originator = %originator.entity_id(),
            name = originator.name(),
            "originator resolved"
        );

        let Some(customer_id) = originator.customer_id() else {
            return Err(NodeError::MissingCustomer(originator.entity_id()));
        };

        let customer = ctx
            .customer_service()
            .find_customer_by_id(ctx.tenant_id(), customer_id)
            .await?;
        if ctx.is_cancelled() {
            return Ok(Outcome::Abandoned);
        }

        let Some(customer) = customer else {
            debug!(%customer_id, "customer not found, nothing to fetch");
            return Ok(Outcome::Success(msg.clone()));
        };

        let pairs = extract(&self.details, &customer);
        trace!(fields = pairs.len(), fetch_to = ?target.fetch_to(), "merging customer details");

        Ok(Outcome::Success(merge(target, msg, &pairs)?))
    }

    fn upgrade_chain() -> ConfigUpgradeChain {
        ConfigUpgradeChain::from_iter(vec![Arc::new(FetchToUpgrader) as Arc<dyn ConfigUpgrader>])
    }
}

#[async_trait]
impl RuleNode for CustomerDetailsNode {
    const NAME: &'static str = "customer details";
    const CONFIG_VERSION: u32 = 1;

    fn init(configuration: &Value) -> Result<Self, NodeError> {
        let config: CustomerDetailsNodeConfiguration =
            serde_json::from_value(configuration.clone()).map_err(|e| {
                NodeError::configuration(format!("invalid {} configuration: {e}", Self::NAME))
            })?;
        Self::new(&config)
    }

    async fn on_msg(&self, ctx: &dyn NodeContext, msg: Message) -> Result<(), NodeError> {
        match self.process(ctx, &msg).await? {
            Outcome::Success(out) => ctx.tell_success(out),
            Outcome::Failure(original, err) => {
                warn!(
                    msg_id = %msg.id(),
                    originator = %msg.originator(),
                    error = %err,
                    "failed to fetch customer details"
                );
                ctx.tell_failure(original, err);
            }
            Outcome::Abandoned => {
                debug!(msg_id = %msg.id(), "invocation abandoned, skipping report");
            }
        }
        Ok(())
    }

    fn upgrade(from_version: u32, configuration: Value) -> Result<UpgradeOutcome, NodeError> {
        Self::upgrade_chain().upgrade(from_version, configuration)
    }
}
