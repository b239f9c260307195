//! Participant registry
//!
//! Keeps people in the order they were added; that order breaks ties when
//! balances are sorted.

use crate::models::{Person, PersonId};

/// In-memory collection of participants
#[derive(Debug, Clone, Default)]
pub struct ParticipantRegistry {
    people: Vec<Person>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a person
    pub fn insert(&mut self, person: Person) {
        debug_assert!(!self.contains(person.id), "duplicate participant id");
        self.people.push(person);
    }

    /// Remove a person by id, returning them if present
    pub fn remove(&mut self, id: PersonId) -> Option<Person> {
        let index = self.people.iter().position(|p| p.id == id)?;
        Some(self.people.remove(index))
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.get(id).is_some()
    }

    /// All participants in insertion order
    pub fn all(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn clear(&mut self) {
        self.people.clear();
    }
}
