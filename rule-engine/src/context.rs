use crate::error::NodeError;
use rule_domain::id::{EntityId, TenantId};
use rule_domain::message::Message;
use rule_domain::service::{
    AssetService, CustomerService, DeviceService, EdgeService, EntityViewService, UserService,
};
use tokio_util::sync::CancellationToken;

/// 节点上下文（Node Context）
///
/// 由外部管道为每次调用提供，承载：
/// - 当前租户与租户归属校验；
/// - 按实体类型划分的查询服务；
/// - 结果上报：每次调用恰好一次 `tell_success` 或 `tell_failure`；
/// - 可选的取消令牌：管道放弃调用后，节点在查询完成时不再上报。
pub trait NodeContext: Send + Sync {
    fn tenant_id(&self) -> TenantId;

    /// 校验实体属于当前租户；错误由节点原样向调用方传播
    fn check_tenant_entity(&self, entity_id: EntityId) -> Result<(), NodeError>;

    fn device_service(&self) -> &dyn DeviceService;

    fn asset_service(&self) -> &dyn AssetService;

    fn entity_view_service(&self) -> &dyn EntityViewService;

    fn user_service(&self) -> &dyn UserService;

    fn edge_service(&self) -> &dyn EdgeService;

    fn customer_service(&self) -> &dyn CustomerService;

    fn tell_success(&self, msg: Message);

    fn tell_failure(&self, msg: Message, error: NodeError);

    fn cancellation_token(&self) -> Option<&CancellationToken> {
        None
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation_token()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
