//! 发起者解析：按实体类型分派到对应的查询服务
//!
use crate::context::NodeContext;
use crate::error::NodeError;
use rule_domain::entity::{Asset, CustomerOwned, Device, Edge, EntityView, User};
use rule_domain::id::{
    AssetId, CustomerId, DeviceId, EdgeId, EntityId, EntityType, EntityViewId, UserId,
};

/// 已解析的发起者（封闭变体）
#[derive(Debug, Clone, PartialEq)]
pub enum Originator {
    Device(Device),
    Asset(Asset),
    EntityView(EntityView),
    User(User),
    Edge(Edge),
}

impl Originator {
    pub fn entity_id(&self) -> EntityId {
        match self {
            Originator::Device(e) => e.id().into(),
            Originator::Asset(e) => e.id().into(),
            Originator::EntityView(e) => e.id().into(),
            Originator::User(e) => e.id().into(),
            Originator::Edge(e) => e.id().into(),
        }
    }

    /// 用于日志的可读名称；用户取邮箱
    pub fn name(&self) -> &str {
        match self {
            Originator::Device(e) => e.name(),
            Originator::Asset(e) => e.name(),
            Originator::EntityView(e) => e.name(),
            Originator::User(e) => e.email(),
            Originator::Edge(e) => e.name(),
        }
    }

    fn owner(&self) -> &dyn CustomerOwned {
        match self {
            Originator::Device(e) => e as &dyn CustomerOwned,
            Originator::Asset(e) => e as &dyn CustomerOwned,
            Originator::EntityView(e) => e as &dyn CustomerOwned,
            Originator::User(e) => e as &dyn CustomerOwned,
            Originator::Edge(e) => e as &dyn CustomerOwned,
        }
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.owner().customer_id()
    }
}

/// 解析结果：“不存在”与“不支持”是两种不同的终态
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Originator),
    NotFound,
    Unsupported(EntityType),
}

/// 查找发起者；不支持的实体类型不会触发任何查询
pub async fn resolve(ctx: &dyn NodeContext, originator: EntityId) -> Result<Resolution, NodeError> {
    let id = originator.id();

    let found = match originator.entity_type() {
        EntityType::Device => ctx
            .device_service()
            .find_device_by_id(ctx.tenant_id(), DeviceId::new(id))
            .await?
            .map(Originator::Device),
        EntityType::Asset => ctx
            .asset_service()
            .find_asset_by_id(ctx.tenant_id(), AssetId::new(id))
            .await?
            .map(Originator::Asset),
        EntityType::EntityView => ctx
            .entity_view_service()
            .find_entity_view_by_id(ctx.tenant_id(), EntityViewId::new(id))
            .await?
            .map(Originator::EntityView),
        EntityType::User => ctx
            .user_service()
            .find_user_by_id(ctx.tenant_id(), UserId::new(id))
            .await?
            .map(Originator::User),
        EntityType::Edge => ctx
            .edge_service()
            .find_edge_by_id(ctx.tenant_id(), EdgeId::new(id))
            .await?
            .map(Originator::Edge),
        other => return Ok(Resolution::Unsupported(other)),
    };

    Ok(found.map_or(Resolution::NotFound, Resolution::Found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_domain::id::TenantId;

    #[test]
    fn user_is_named_by_email() {
        let customer_id = CustomerId::random();
        let user = User::builder()
            .id(UserId::random())
            .tenant_id(TenantId::random())
            .customer_id(customer_id)
            .email("operator@tenant.com")
            .build();
        let originator = Originator::User(user.clone());

        assert_eq!(originator.name(), "operator@tenant.com");
        assert_eq!(originator.customer_id(), Some(customer_id));
        assert_eq!(originator.entity_id(), EntityId::from(user.id()));
    }

    #[test]
    fn unassigned_edge_has_no_customer() {
        let edge = Edge::builder()
            .id(EdgeId::random())
            .tenant_id(TenantId::random())
            .name("edge-north")
            .build();
        let originator = Originator::Edge(edge);

        assert_eq!(originator.name(), "edge-north");
        assert_eq!(originator.customer_id(), None);
    }
}
