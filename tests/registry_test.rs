use serde_json::{json, Value};
use zoo_inventory::{Animal, Entity, Fields, Registry, Staff, ZooError};

fn record_fields(value: Value) -> Fields {
    let mut fields = value.as_object().cloned().unwrap();
    fields.remove("type");
    fields
}

#[test]
fn test_describe_then_construct_for_every_variant() {
    let registry = Registry::default();

    let animals = [
        Animal::bird("Sparrow", 2, 15.5),
        Animal::mammal("Lion", 5, "golden"),
        Animal::reptile("Snake", 3, "smooth"),
    ];
    for animal in animals {
        let described = animal.describe();
        let tag = described["type"].as_str().unwrap().to_string();
        let rebuilt = registry
            .construct(&tag, &record_fields(Value::Object(described)))
            .unwrap();
        assert_eq!(rebuilt, Entity::Animal(animal));
    }

    for member in [Staff::ZooKeeper, Staff::Veterinarian] {
        let rebuilt = registry
            .construct(member.tag(), &record_fields(Value::Object(member.describe())))
            .unwrap();
        assert_eq!(rebuilt, Entity::Staff(member));
    }
}

#[test]
fn test_dragon_is_unknown() {
    let registry = Registry::default();
    let err = registry
        .construct("Dragon", &record_fields(json!({"name": "Smaug", "age": 171})))
        .unwrap_err();
    assert!(matches!(err, ZooError::UnknownType { .. }));
}

#[test]
fn test_bird_without_wingspan() {
    let registry = Registry::default();
    let err = registry
        .construct("Bird", &record_fields(json!({"name": "X", "age": 1})))
        .unwrap_err();
    assert!(matches!(err, ZooError::MissingField { ref field, .. } if field == "wingspan"));
}

#[test]
fn test_tags_are_case_sensitive() {
    let registry = Registry::default();
    let err = registry
        .construct(
            "bird",
            &record_fields(json!({"name": "X", "age": 1, "wingspan": 2.0})),
        )
        .unwrap_err();
    assert!(matches!(err, ZooError::UnknownType { .. }));

    let err = registry
        .construct(
            "Mammal",
            &record_fields(json!({"name": "Lion", "age": 5, "fur_color": "golden"})),
        )
        .unwrap_err();
    assert!(matches!(err, ZooError::MissingField { ref field, .. } if field == "furColor"));
}
