//! 内存版查询服务（InMemoryEntityStore）
//!
//! 基于 `DashMap` 的轻量实现，同时满足全部查询服务协议：
//! - 以 (租户, ID) 为键，其它租户的实体视为“不存在”；
//! - 典型用途：测试环境、示例与本地开发。
//!
use crate::customer::Customer;
use crate::entity::{Asset, CustomerOwned, Device, Edge, EntityView, User};
use crate::error::DomainResult as Result;
use crate::id::{AssetId, CustomerId, DeviceId, EdgeId, EntityViewId, TenantId, UserId};
use crate::service::{
    AssetService, CustomerService, DeviceService, EdgeService, EntityViewService, UserService,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::hash::Hash;

type Table<K, V> = DashMap<(TenantId, K), V>;

#[derive(Default)]
pub struct InMemoryEntityStore {
    devices: Table<DeviceId, Device>,
    assets: Table<AssetId, Asset>,
    entity_views: Table<EntityViewId, EntityView>,
    users: Table<UserId, User>,
    edges: Table<EdgeId, Edge>,
    customers: Table<CustomerId, Customer>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_device(&self, device: Device) {
        self.devices
            .insert((device.tenant_id(), device.id()), device);
    }

    pub fn insert_asset(&self, asset: Asset) {
        self.assets.insert((asset.tenant_id(), asset.id()), asset);
    }

    pub fn insert_entity_view(&self, entity_view: EntityView) {
        self.entity_views
            .insert((entity_view.tenant_id(), entity_view.id()), entity_view);
    }

    pub fn insert_user(&self, user: User) {
        self.users.insert((user.tenant_id(), user.id()), user);
    }

    pub fn insert_edge(&self, edge: Edge) {
        self.edges.insert((edge.tenant_id(), edge.id()), edge);
    }

    pub fn insert_customer(&self, customer: Customer) {
        self.customers
            .insert((customer.tenant_id(), customer.id()), customer);
    }
}

fn lookup<K, V>(table: &Table<K, V>, tenant_id: TenantId, id: K) -> Option<V>
where
    K: Eq + Hash,
    V: Clone,
{
    table.get(&(tenant_id, id)).map(|entry| entry.value().clone())
}

#[async_trait]
impl DeviceService for InMemoryEntityStore {
    async fn find_device_by_id(
        &self,
        tenant_id: TenantId,
        device_id: DeviceId,
    ) -> Result<Option<Device>> {
        Ok(lookup(&self.devices, tenant_id, device_id))
    }
}

#[async_trait]
impl AssetService for InMemoryEntityStore {
    async fn find_asset_by_id(
        &self,
        tenant_id: TenantId,
        asset_id: AssetId,
    ) -> Result<Option<Asset>> {
        Ok(lookup(&self.assets, tenant_id, asset_id))
    }
}

#[async_trait]
impl EntityViewService for InMemoryEntityStore {
    async fn find_entity_view_by_id(
        &self,
        tenant_id: TenantId,
        entity_view_id: EntityViewId,
    ) -> Result<Option<EntityView>> {
        Ok(lookup(&self.entity_views, tenant_id, entity_view_id))
    }
}

#[async_trait]
impl UserService for InMemoryEntityStore {
    async fn find_user_by_id(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
    ) -> Result<Option<User>> {
        Ok(lookup(&self.users, tenant_id, user_id))
    }
}

#[async_trait]
impl EdgeService for InMemoryEntityStore {
    async fn find_edge_by_id(
        &self,
        tenant_id: TenantId,
        edge_id: EdgeId,
    ) -> Result<Option<Edge>> {
        Ok(lookup(&self.edges, tenant_id, edge_id))
    }
}

#[async_trait]
impl CustomerService for InMemoryEntityStore {
    async fn find_customer_by_id(
        &self,
        tenant_id: TenantId,
        customer_id: CustomerId,
    ) -> Result<Option<Customer>> {
        Ok(lookup(&self.customers, tenant_id, customer_id))
    }
}
