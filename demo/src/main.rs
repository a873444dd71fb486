use anyhow::Context as _;
use clap::Parser;
use rule_domain::customer::Customer;
use rule_domain::entity::Device;
use rule_domain::id::{CustomerId, DeviceId, EntityId, TenantId};
use rule_domain::inmemory::InMemoryEntityStore;
use rule_domain::message::{Message, MessageMetadata};
use rule_domain::service::{
    AssetService, CustomerService, DeviceService, EdgeService, EntityViewService, UserService,
};
use rule_engine::CustomerDetailsNode;
use rule_engine::context::NodeContext;
use rule_engine::error::NodeError;
use rule_engine::node::RuleNode;
use serde_json::{Value, json};
use std::path::PathBuf;

/// 用内存仓储运行一次客户详情节点
#[derive(Parser, Debug)]
#[command(name = "demo", version)]
struct Cli {
    /// 节点配置文件（JSON）；缺省时取全部字段写入 DATA
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 配置文件的版本，旧版本会先升级
    #[arg(long, default_value_t = 1)]
    config_version: u32,

    /// 消息体
    #[arg(long, default_value = r#"{"temperature":21.5}"#)]
    data: String,

    /// 发起者设备不分配客户
    #[arg(long)]
    unassigned: bool,
}

struct ConsoleContext {
    tenant_id: TenantId,
    store: InMemoryEntityStore,
}

impl NodeContext for ConsoleContext {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn check_tenant_entity(&self, _entity_id: EntityId) -> Result<(), NodeError> {
        Ok(())
    }

    fn device_service(&self) -> &dyn DeviceService {
        &self.store
    }

    fn asset_service(&self) -> &dyn AssetService {
        &self.store
    }

    fn entity_view_service(&self) -> &dyn EntityViewService {
        &self.store
    }

    fn user_service(&self) -> &dyn UserService {
        &self.store
    }

    fn edge_service(&self) -> &dyn EdgeService {
        &self.store
    }

    fn customer_service(&self) -> &dyn CustomerService {
        &self.store
    }

    fn tell_success(&self, msg: Message) {
        println!("success: {} at {}", msg.msg_type(), msg.ts().to_rfc3339());
        println!("  data: {}", msg.data());
        for (key, value) in msg.metadata().iter() {
            println!("  metadata: {key} = {value}");
        }
    }

    fn tell_failure(&self, msg: Message, error: NodeError) {
        println!("failure: {} at {}: {error}", msg.msg_type(), msg.ts().to_rfc3339());
        println!("  data: {}", msg.data());
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_configuration(cli: &Cli) -> anyhow::Result<Value> {
    let Some(path) = &cli.config else {
        return Ok(json!({
            "detailsList": ["ID", "TITLE", "COUNTRY", "CITY", "EMAIL", "ADDITIONAL_INFO"],
            "fetchTo": "DATA",
        }));
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let configuration: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let outcome = CustomerDetailsNode::upgrade(cli.config_version, configuration)?;
    if outcome.changed {
        tracing::info!(
            from = cli.config_version,
            to = outcome.version,
            "configuration upgraded"
        );
    }
    Ok(outcome.configuration)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let configuration = load_configuration(&cli)?;
    let node = CustomerDetailsNode::init(&configuration)?;
    tracing::info!(
        node = CustomerDetailsNode::NAME,
        details = node.details().len(),
        fetch_to = ?node.fetch_to(),
        "node initialized"
    );

    let ctx = ConsoleContext {
        tenant_id: TenantId::random(),
        store: InMemoryEntityStore::new(),
    };

    let customer = Customer::builder()
        .id(CustomerId::random())
        .tenant_id(ctx.tenant_id)
        .title("Acme Corp")
        .country("Germany")
        .city("Berlin")
        .email("ops@acme.example")
        .additional_info(json!({"description": "Key account"}))
        .build();
    let device = Device::builder()
        .id(DeviceId::random())
        .tenant_id(ctx.tenant_id)
        .maybe_customer_id((!cli.unassigned).then(|| customer.id()))
        .name("thermostat-01")
        .device_type("thermostat")
        .build();
    ctx.store.insert_customer(customer);
    ctx.store.insert_device(device.clone());

    let metadata: MessageMetadata = [
        ("deviceName", device.name()),
        ("deviceType", device.device_type().unwrap_or_default()),
    ]
    .into_iter()
    .collect();
    let msg = Message::new("POST_TELEMETRY_REQUEST", device.id().into(), metadata, cli.data);

    node.on_msg(&ctx, msg).await?;
    Ok(())
}
