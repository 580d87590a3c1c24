use crate::core::registry::{Fields, Registry};
use crate::core::zoo::Zoo;
use crate::domain::model::Species;
use crate::utils::error::{Result, ZooError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What `load` does with a record whose `type` the registry does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum UnknownTypePolicy {
    #[default]
    Fail,
    Skip,
}

pub struct Serializer<'r> {
    registry: &'r Registry,
    unknown_types: UnknownTypePolicy,
}

impl<'r> Serializer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            unknown_types: UnknownTypePolicy::Fail,
        }
    }

    pub fn with_unknown_type_policy(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// `{ "animals": [...], "staff": [...] }` in insertion order.
    ///
    /// A non-finite wingspan has no JSON number form and is written as `null`;
    /// [`Serializer::to_json_string`] refuses such a zoo instead.
    pub fn save(&self, zoo: &Zoo) -> Value {
        let animals = zoo
            .animals()
            .iter()
            .map(|animal| Value::Object(animal.describe()))
            .collect();
        let staff = zoo
            .staff()
            .iter()
            .map(|member| Value::Object(member.describe()))
            .collect();

        let mut document = Map::new();
        document.insert("animals".to_string(), Value::Array(animals));
        document.insert("staff".to_string(), Value::Array(staff));
        Value::Object(document)
    }

    pub fn load(&self, document: &Value) -> Result<Zoo> {
        let root = document
            .as_object()
            .ok_or_else(|| ZooError::malformed("document is not a JSON object"))?;
        let animals = section(root, "animals")?;
        let staff = section(root, "staff")?;

        let mut zoo = Zoo::new();

        for (index, entry) in animals.iter().enumerate() {
            let (tag, fields) = split_tag("animals", index, entry)?;
            if !self.registry.is_animal_tag(&tag) && self.skips(&tag, "animals", index)? {
                continue;
            }
            zoo.add_animal(self.registry.construct_animal(&tag, &fields)?);
        }

        for (index, entry) in staff.iter().enumerate() {
            let (tag, fields) = split_tag("staff", index, entry)?;
            if !self.registry.is_staff_tag(&tag) && self.skips(&tag, "staff", index)? {
                continue;
            }
            zoo.add_staff(self.registry.construct_staff(&tag, &fields)?);
        }

        tracing::debug!(
            "Loaded {} animals and {} staff",
            zoo.animal_count(),
            zoo.staff_count()
        );
        Ok(zoo)
    }

    pub fn to_json_string(&self, zoo: &Zoo) -> Result<String> {
        ensure_representable(zoo)?;
        Ok(serde_json::to_string_pretty(&self.save(zoo))?)
    }

    pub fn from_json_str(&self, text: &str) -> Result<Zoo> {
        let document: Value = serde_json::from_str(text)?;
        self.load(&document)
    }

    fn skips(&self, tag: &str, section: &str, index: usize) -> Result<bool> {
        match self.unknown_types {
            UnknownTypePolicy::Skip => {
                tracing::warn!("Skipping {}[{}]: unknown type '{}'", section, index, tag);
                Ok(true)
            }
            UnknownTypePolicy::Fail => Err(ZooError::UnknownType {
                tag: tag.to_string(),
            }),
        }
    }
}

fn ensure_representable(zoo: &Zoo) -> Result<()> {
    for animal in zoo.animals() {
        if let Species::Bird { wingspan } = animal.species {
            if !wingspan.is_finite() {
                return Err(ZooError::InvalidField {
                    tag: animal.tag().to_string(),
                    field: "wingspan".to_string(),
                    reason: format!("{} has no JSON representation", wingspan),
                });
            }
        }
    }
    Ok(())
}

fn section<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>> {
    match root.get(key) {
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => Err(ZooError::malformed(format!("`{}` is not an array", key))),
        None => Err(ZooError::malformed(format!("missing `{}` key", key))),
    }
}

fn split_tag(section: &str, index: usize, entry: &Value) -> Result<(String, Fields)> {
    let mut fields = entry
        .as_object()
        .cloned()
        .ok_or_else(|| ZooError::malformed(format!("{}[{}] is not an object", section, index)))?;

    match fields.remove("type") {
        Some(Value::String(tag)) => Ok((tag, fields)),
        _ => Err(ZooError::malformed(format!(
            "{}[{}] has no string `type` tag",
            section, index
        ))),
    }
}
