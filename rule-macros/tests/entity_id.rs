use rule_domain::error::DomainError;
use rule_domain::id::{DeviceId, EntityId, EntityType};
use rule_macros::entity_id;
use uuid::Uuid;

#[entity_id(entity_type = Alarm)]
pub struct AlarmId(Uuid);

#[test]
fn generated_constants_and_accessors() {
    let uuid = Uuid::new_v4();
    let id = AlarmId::new(uuid);

    assert_eq!(AlarmId::ENTITY_TYPE, EntityType::Alarm);
    assert_eq!(id.entity_type(), EntityType::Alarm);
    assert_eq!(id.id(), uuid);
    assert_eq!(Uuid::from(id), uuid);
    assert_eq!(AlarmId::from(uuid), id);
    assert!(!id.is_null());
    assert!(AlarmId::new(Uuid::nil()).is_null());
}

#[test]
fn serializes_as_plain_uuid() {
    let id = AlarmId::random();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.id()));

    let back: AlarmId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn entity_id_conversion_checks_type() {
    let alarm = EntityId::from(AlarmId::random());
    assert!(AlarmId::try_from(alarm).is_ok());

    match DeviceId::try_from(alarm) {
        Err(DomainError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "DEVICE");
            assert_eq!(found, "ALARM");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
