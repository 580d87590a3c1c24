//! Tag-driven construction of animal and staff records.
//!
//! Every registered variant declares the exact set of fields its record
//! carries (besides `type`). [`Registry::construct`] checks the incoming
//! fields against that list before the constructor runs, so a record with a
//! missing or unexpected key never produces a value.

use crate::domain::model::{Animal, Staff};
use crate::utils::error::{Result, ZooError};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A serialized record with its `type` tag removed.
pub type Fields = Map<String, Value>;

pub type AnimalConstructor = fn(&str, &Fields) -> Result<Animal>;
pub type StaffConstructor = fn(&str, &Fields) -> Result<Staff>;

/// Either kind of record the registry can build.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Animal(Animal),
    Staff(Staff),
}

struct Blueprint<C> {
    fields: &'static [&'static str],
    build: C,
}

pub struct Registry {
    animals: HashMap<String, Blueprint<AnimalConstructor>>,
    staff: HashMap<String, Blueprint<StaffConstructor>>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            animals: HashMap::new(),
            staff: HashMap::new(),
        }
    }

    /// Registry holding the built-in variants.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register_animal("Bird", &["name", "age", "wingspan"], build_bird);
        registry.register_animal("Mammal", &["name", "age", "furColor"], build_mammal);
        registry.register_animal("Reptile", &["name", "age", "scaleType"], build_reptile);
        registry.register_staff("ZooKeeper", &[], |_, _| Ok(Staff::ZooKeeper));
        registry.register_staff("Veterinarian", &[], |_, _| Ok(Staff::Veterinarian));
        registry
    }

    /// Registers (or replaces) an animal variant.
    pub fn register_animal(
        &mut self,
        tag: impl Into<String>,
        fields: &'static [&'static str],
        build: AnimalConstructor,
    ) {
        self.animals.insert(tag.into(), Blueprint { fields, build });
    }

    pub fn register_staff(
        &mut self,
        tag: impl Into<String>,
        fields: &'static [&'static str],
        build: StaffConstructor,
    ) {
        self.staff.insert(tag.into(), Blueprint { fields, build });
    }

    pub fn is_animal_tag(&self, tag: &str) -> bool {
        self.animals.contains_key(tag)
    }

    pub fn is_staff_tag(&self, tag: &str) -> bool {
        self.staff.contains_key(tag)
    }

    pub fn construct_animal(&self, tag: &str, fields: &Fields) -> Result<Animal> {
        let blueprint = self.animals.get(tag).ok_or_else(|| unknown(tag))?;
        check_fields(tag, blueprint.fields, fields)?;
        let animal = (blueprint.build)(tag, fields)?;
        tracing::debug!("Constructed {} '{}'", tag, animal.name);
        Ok(animal)
    }

    pub fn construct_staff(&self, tag: &str, fields: &Fields) -> Result<Staff> {
        let blueprint = self.staff.get(tag).ok_or_else(|| unknown(tag))?;
        check_fields(tag, blueprint.fields, fields)?;
        let member = (blueprint.build)(tag, fields)?;
        tracing::debug!("Constructed {}", tag);
        Ok(member)
    }

    /// Builds whichever kind of record `tag` names.
    pub fn construct(&self, tag: &str, fields: &Fields) -> Result<Entity> {
        if self.is_animal_tag(tag) {
            self.construct_animal(tag, fields).map(Entity::Animal)
        } else if self.is_staff_tag(tag) {
            self.construct_staff(tag, fields).map(Entity::Staff)
        } else {
            Err(unknown(tag))
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

fn unknown(tag: &str) -> ZooError {
    ZooError::UnknownType {
        tag: tag.to_string(),
    }
}

fn check_fields(tag: &str, expected: &[&str], fields: &Fields) -> Result<()> {
    if let Some(missing) = expected.iter().find(|name| !fields.contains_key(**name)) {
        return Err(ZooError::MissingField {
            tag: tag.to_string(),
            field: missing.to_string(),
        });
    }

    if let Some(extra) = fields.keys().find(|key| !expected.contains(&key.as_str())) {
        return Err(ZooError::UnexpectedField {
            tag: tag.to_string(),
            field: extra.clone(),
        });
    }

    Ok(())
}

fn invalid(tag: &str, field: &str, reason: &str) -> ZooError {
    ZooError::InvalidField {
        tag: tag.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// Field readers assume presence was already checked by `check_fields`.

fn string_field(tag: &str, fields: &Fields, field: &str) -> Result<String> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| invalid(tag, field, "expected a string"))
}

fn age_field(tag: &str, fields: &Fields) -> Result<u32> {
    let age = fields
        .get("age")
        .and_then(Value::as_u64)
        .ok_or_else(|| invalid(tag, "age", "expected a non-negative integer"))?;
    u32::try_from(age).map_err(|_| invalid(tag, "age", "out of range"))
}

fn number_field(tag: &str, fields: &Fields, field: &str) -> Result<f64> {
    fields
        .get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid(tag, field, "expected a number"))
}

fn build_bird(tag: &str, fields: &Fields) -> Result<Animal> {
    Ok(Animal::bird(
        string_field(tag, fields, "name")?,
        age_field(tag, fields)?,
        number_field(tag, fields, "wingspan")?,
    ))
}

fn build_mammal(tag: &str, fields: &Fields) -> Result<Animal> {
    Ok(Animal::mammal(
        string_field(tag, fields, "name")?,
        age_field(tag, fields)?,
        string_field(tag, fields, "furColor")?,
    ))
}

fn build_reptile(tag: &str, fields: &Fields) -> Result<Animal> {
    Ok(Animal::reptile(
        string_field(tag, fields, "name")?,
        age_field(tag, fields)?,
        string_field(tag, fields, "scaleType")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {}", other),
        }
    }

    fn without_type(mut record: Fields) -> Fields {
        record.remove("type");
        record
    }

    #[test]
    fn test_construct_inverts_describe() {
        let registry = Registry::standard();
        let animals = vec![
            Animal::bird("Sparrow", 2, 15.5),
            Animal::mammal("Lion", 5, "golden"),
            Animal::reptile("Snake", 3, "smooth"),
        ];

        for animal in animals {
            let rebuilt = registry
                .construct(animal.tag(), &without_type(animal.describe()))
                .unwrap();
            assert_eq!(rebuilt, Entity::Animal(animal));
        }

        for member in [Staff::ZooKeeper, Staff::Veterinarian] {
            let rebuilt = registry
                .construct(member.tag(), &without_type(member.describe()))
                .unwrap();
            assert_eq!(rebuilt, Entity::Staff(member));
        }
    }

    #[test]
    fn test_unknown_tag() {
        let registry = Registry::standard();
        let result = registry.construct("Dragon", &fields(json!({"name": "Smaug", "age": 171})));
        assert!(matches!(result, Err(ZooError::UnknownType { tag }) if tag == "Dragon"));

        // staff tags are not animal tags
        let result = registry.construct_animal("ZooKeeper", &Fields::new());
        assert!(matches!(result, Err(ZooError::UnknownType { .. })));
    }

    #[test]
    fn test_missing_field() {
        let registry = Registry::standard();
        let result = registry.construct("Bird", &fields(json!({"name": "X", "age": 1})));
        match result {
            Err(ZooError::MissingField { tag, field }) => {
                assert_eq!(tag, "Bird");
                assert_eq!(field, "wingspan");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_field() {
        let registry = Registry::standard();
        let result = registry.construct(
            "Mammal",
            &fields(json!({"name": "Lion", "age": 5, "furColor": "golden", "mane": true})),
        );
        assert!(matches!(result, Err(ZooError::UnexpectedField { field, .. }) if field == "mane"));

        let result = registry.construct("ZooKeeper", &fields(json!({"name": "Bob"})));
        assert!(matches!(result, Err(ZooError::UnexpectedField { .. })));
    }

    #[test]
    fn test_invalid_field_shapes() {
        let registry = Registry::standard();

        let negative_age = fields(json!({"name": "Snake", "age": -3, "scaleType": "smooth"}));
        assert!(matches!(
            registry.construct("Reptile", &negative_age),
            Err(ZooError::InvalidField { field, .. }) if field == "age"
        ));

        let text_wingspan = fields(json!({"name": "Owl", "age": 4, "wingspan": "wide"}));
        assert!(matches!(
            registry.construct("Bird", &text_wingspan),
            Err(ZooError::InvalidField { field, .. }) if field == "wingspan"
        ));
    }

    #[test]
    fn test_integer_wingspan_is_accepted() {
        let registry = Registry::standard();
        let animal = registry
            .construct_animal("Bird", &fields(json!({"name": "Owl", "age": 4, "wingspan": 90})))
            .unwrap();
        assert_eq!(animal, Animal::bird("Owl", 4, 90.0));
    }

    #[test]
    fn test_register_custom_variant() {
        let mut registry = Registry::empty();
        assert!(!registry.is_animal_tag("Bird"));

        registry.register_animal("Parrot", &["name", "age", "wingspan"], |tag, fields| {
            build_bird(tag, fields)
        });
        let animal = registry
            .construct_animal(
                "Parrot",
                &fields(json!({"name": "Polly", "age": 12, "wingspan": 40.0})),
            )
            .unwrap();
        assert_eq!(animal.name, "Polly");
    }
}
