use rule_macros::entity_id;
use uuid::Uuid;

// 已有的 derive 与宏要求的派生合并，不会重复
#[entity_id(entity_type = Alarm)]
#[derive(Debug, serde::Serialize)]
struct AlarmId(Uuid);

fn main() {
    let id = AlarmId::random();
    let _ = format!("{:?}", id);
}
