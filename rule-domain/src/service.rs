//! 查询服务（Service）协议
//!
//! 按租户与 ID 异步查找实体；查不到时返回 `Ok(None)`，
//! 仅在基础设施出错时返回 `Err`。具体存储后端由上层提供实现并注入。
//!
use crate::customer::Customer;
use crate::entity::{Asset, Device, Edge, EntityView, User};
use crate::error::DomainResult as Result;
use crate::id::{AssetId, CustomerId, DeviceId, EdgeId, EntityViewId, TenantId, UserId};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait DeviceService: Send + Sync {
    async fn find_device_by_id(
        &self,
        tenant_id: TenantId,
        device_id: DeviceId,
    ) -> Result<Option<Device>>;
}

#[async_trait]
pub trait AssetService: Send + Sync {
    async fn find_asset_by_id(
        &self,
        tenant_id: TenantId,
        asset_id: AssetId,
    ) -> Result<Option<Asset>>;
}

#[async_trait]
pub trait EntityViewService: Send + Sync {
    async fn find_entity_view_by_id(
        &self,
        tenant_id: TenantId,
        entity_view_id: EntityViewId,
    ) -> Result<Option<EntityView>>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn find_user_by_id(&self, tenant_id: TenantId, user_id: UserId)
    -> Result<Option<User>>;
}

#[async_trait]
pub trait EdgeService: Send + Sync {
    async fn find_edge_by_id(&self, tenant_id: TenantId, edge_id: EdgeId)
    -> Result<Option<Edge>>;
}

#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn find_customer_by_id(
        &self,
        tenant_id: TenantId,
        customer_id: CustomerId,
    ) -> Result<Option<Customer>>;
}

#[async_trait]
impl<T> DeviceService for Arc<T>
where
    T: DeviceService + ?Sized,
{
    async fn find_device_by_id(
        &self,
        tenant_id: TenantId,
        device_id: DeviceId,
    ) -> Result<Option<Device>> {
        (**self).find_device_by_id(tenant_id, device_id).await
    }
}

#[async_trait]
impl<T> AssetService for Arc<T>
where
    T: AssetService + ?Sized,
{
    async fn find_asset_by_id(
        &self,
        tenant_id: TenantId,
        asset_id: AssetId,
    ) -> Result<Option<Asset>> {
        (**self).find_asset_by_id(tenant_id, asset_id).await
    }
}

#[async_trait]
impl<T> EntityViewService for Arc<T>
where
    T: EntityViewService + ?Sized,
{
    async fn find_entity_view_by_id(
        &self,
        tenant_id: TenantId,
        entity_view_id: EntityViewId,
    ) -> Result<Option<EntityView>> {
        (**self)
            .find_entity_view_by_id(tenant_id, entity_view_id)
            .await
    }
}

#[async_trait]
impl<T> UserService for Arc<T>
where
    T: UserService + ?Sized,
{
    async fn find_user_by_id(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Option<User>> {
        (**self).find_user_by_id(tenant_id, user_id).await
    }
}

#[async_trait]
impl<T> EdgeService for Arc<T>
where
    T: EdgeService + ?Sized,
{
    async fn find_edge_by_id(
        &self,
        tenant_id: TenantId,
        edge_id: EdgeId,
    ) -> Result<Option<Edge>> {
        (**self).find_edge_by_id(tenant_id, edge_id).await
    }
}

#[async_trait]
impl<T> CustomerService for Arc<T>
where
    T: CustomerService + ?Sized,
{
    async fn find_customer_by_id(
        &self,
        tenant_id: TenantId,
        customer_id: CustomerId,
    ) -> Result<Option<Customer>> {
        (**self).find_customer_by_id(tenant_id, customer_id).await
    }
}
