use crate::domain::model::{Animal, Staff};

/// Ordered, append-only collection of animals and staff.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Zoo {
    animals: Vec<Animal>,
    staff: Vec<Staff>,
}

impl Zoo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_animal(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    pub fn add_staff(&mut self, member: Staff) {
        self.staff.push(member);
    }

    /// Each animal's sound, in the order the animals were added.
    pub fn all_sounds(&self) -> Vec<String> {
        self.animals.iter().map(Animal::make_sound).collect()
    }

    /// Has staff member `staff_index` perform its action on animal `animal_index`.
    pub fn staff_work(&self, staff_index: usize, animal_index: usize) -> Option<Vec<String>> {
        let member = self.staff.get(staff_index)?;
        let animal = self.animals.get(animal_index)?;
        Some(member.perform_action(animal))
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn animal(&self, index: usize) -> Option<&Animal> {
        self.animals.get(index)
    }

    pub fn staff_member(&self, index: usize) -> Option<&Staff> {
        self.staff.get(index)
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty() && self.staff.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sounds_in_insertion_order() {
        let mut zoo = Zoo::new();
        zoo.add_animal(Animal::reptile("Snake", 3, "smooth"));
        zoo.add_animal(Animal::bird("Sparrow", 2, 15.5));
        zoo.add_animal(Animal::mammal("Lion", 5, "golden"));

        assert_eq!(
            zoo.all_sounds(),
            vec!["Snake hisses!", "Sparrow chirps!", "Lion roars!"]
        );
    }

    #[test]
    fn test_all_sounds_is_pure() {
        let mut zoo = Zoo::new();
        zoo.add_animal(Animal::bird("Sparrow", 2, 15.5));
        zoo.add_staff(Staff::ZooKeeper);
        let before = zoo.clone();

        let first = zoo.all_sounds();
        let second = zoo.all_sounds();

        assert_eq!(first, second);
        assert_eq!(zoo, before);
    }

    #[test]
    fn test_staff_work() {
        let mut zoo = Zoo::new();
        zoo.add_animal(Animal::bird("Sparrow", 2, 15.5));
        zoo.add_animal(Animal::mammal("Lion", 5, "golden"));
        zoo.add_staff(Staff::ZooKeeper);
        zoo.add_staff(Staff::Veterinarian);

        assert_eq!(
            zoo.staff_work(0, 0).unwrap(),
            vec!["ZooKeeper feeds Sparrow", "Sparrow eats"]
        );
        assert_eq!(
            zoo.staff_work(1, 1).unwrap(),
            vec!["Veterinarian heals Lion", "Lion feels better!"]
        );
        assert!(zoo.staff_work(2, 0).is_none());
        assert!(zoo.staff_work(0, 5).is_none());
    }

    #[test]
    fn test_accessors() {
        let mut zoo = Zoo::new();
        assert!(zoo.is_empty());

        zoo.add_staff(Staff::Veterinarian);
        assert!(!zoo.is_empty());
        assert_eq!(zoo.animal_count(), 0);
        assert_eq!(zoo.staff_count(), 1);
        assert_eq!(zoo.staff_member(0), Some(&Staff::Veterinarian));
        assert!(zoo.animal(0).is_none());
    }
}
