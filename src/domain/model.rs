use serde_json::{json, Map, Value};

/// An animal record. The variant-specific attribute lives in [`Species`].
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    pub name: String,
    pub age: u32,
    pub species: Species,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Species {
    Bird { wingspan: f64 },
    Mammal { fur_color: String },
    Reptile { scale_type: String },
}

impl Species {
    pub fn tag(&self) -> &'static str {
        match self {
            Species::Bird { .. } => "Bird",
            Species::Mammal { .. } => "Mammal",
            Species::Reptile { .. } => "Reptile",
        }
    }
}

impl Animal {
    pub fn bird(name: impl Into<String>, age: u32, wingspan: f64) -> Self {
        Self {
            name: name.into(),
            age,
            species: Species::Bird { wingspan },
        }
    }

    pub fn mammal(name: impl Into<String>, age: u32, fur_color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            species: Species::Mammal {
                fur_color: fur_color.into(),
            },
        }
    }

    pub fn reptile(name: impl Into<String>, age: u32, scale_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            species: Species::Reptile {
                scale_type: scale_type.into(),
            },
        }
    }

    /// The variant name, which is also the `type` tag of the described record.
    pub fn tag(&self) -> &'static str {
        self.species.tag()
    }

    pub fn make_sound(&self) -> String {
        match self.species {
            Species::Bird { .. } => format!("{} chirps!", self.name),
            Species::Mammal { .. } => format!("{} roars!", self.name),
            Species::Reptile { .. } => format!("{} hisses!", self.name),
        }
    }

    pub fn eat(&self) -> String {
        format!("{} eats", self.name)
    }

    /// Flat tagged record: `type`, `name`, `age` and the variant field.
    pub fn describe(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("type".to_string(), json!(self.tag()));
        record.insert("name".to_string(), json!(self.name));
        record.insert("age".to_string(), json!(self.age));
        match &self.species {
            Species::Bird { wingspan } => {
                record.insert("wingspan".to_string(), json!(wingspan));
            }
            Species::Mammal { fur_color } => {
                record.insert("furColor".to_string(), json!(fur_color));
            }
            Species::Reptile { scale_type } => {
                record.insert("scaleType".to_string(), json!(scale_type));
            }
        }
        record
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffAction {
    Feed,
    Heal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staff {
    ZooKeeper,
    Veterinarian,
}

impl Staff {
    pub fn tag(&self) -> &'static str {
        match self {
            Staff::ZooKeeper => "ZooKeeper",
            Staff::Veterinarian => "Veterinarian",
        }
    }

    pub fn action(&self) -> StaffAction {
        match self {
            Staff::ZooKeeper => StaffAction::Feed,
            Staff::Veterinarian => StaffAction::Heal,
        }
    }

    /// Narration of this staff member's action on `animal`, one line per step.
    pub fn perform_action(&self, animal: &Animal) -> Vec<String> {
        match self.action() {
            StaffAction::Feed => vec![
                format!("{} feeds {}", self.tag(), animal.name),
                animal.eat(),
            ],
            StaffAction::Heal => vec![
                format!("{} heals {}", self.tag(), animal.name),
                format!("{} feels better!", animal.name),
            ],
        }
    }

    pub fn describe(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("type".to_string(), json!(self.tag()));
        record
    }
}
