use rule_domain::id::{EntityId, EntityType};
use rule_macros::entity_id;
use uuid::Uuid;

#[entity_id(entity_type = RuleChain)]
struct RuleChainId(Uuid);

fn main() {
    let id = RuleChainId::new(Uuid::new_v4());
    let entity_id: EntityId = id.into();
    assert_eq!(entity_id.entity_type(), EntityType::RuleChain);
    assert_eq!(RuleChainId::try_from(entity_id).unwrap(), id);
}
