//! In-memory person storage.
//!
//! Keeps every record in a `Vec` behind a tokio `RwLock`. Nothing survives a
//! restart; `seeded()` reloads the four starter entries each time.

use async_trait::async_trait;
use shared::Person;
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::{canonical_id, generate_id, PersonStorage, StoreResult};

const SEED_PERSONS: [(&str, &str); 4] = [
    ("Arto Hellas", "040-123456"),
    ("Ada Lovelace", "39-44-5323523"),
    ("Dan Abramov", "12-43-234345"),
    ("Mary Poppendieck", "39-23-6423122"),
];

#[derive(Default)]
pub struct MemoryPersonStore {
    persons: RwLock<Vec<Person>>,
}

impl MemoryPersonStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the starter phonebook
    pub fn seeded() -> Self {
        let persons = SEED_PERSONS
            .iter()
            .map(|(name, number)| Person {
                id: generate_id(),
                name: name.to_string(),
                number: number.to_string(),
            })
            .collect();

        Self {
            persons: RwLock::new(persons),
        }
    }
}

#[async_trait]
impl PersonStorage for MemoryPersonStore {
    async fn list_all(&self) -> StoreResult<Vec<Person>> {
        Ok(self.persons.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>> {
        let id = canonical_id(id)?;
        let persons = self.persons.read().await;
        Ok(persons.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, name: &str, number: &str) -> StoreResult<Person> {
        let person = Person {
            id: generate_id(),
            name: name.to_string(),
            number: number.to_string(),
        };
        self.persons.write().await.push(person.clone());
        debug!("Stored person {} in memory", person.id);
        Ok(person)
    }

    async fn update_by_id(&self, id: &str, name: &str, number: &str) -> StoreResult<Option<Person>> {
        let id = canonical_id(id)?;
        let mut persons = self.persons.write().await;

        match persons.iter_mut().find(|p| p.id == id) {
            Some(person) => {
                person.name = name.to_string();
                person.number = number.to_string();
                Ok(Some(person.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let id = canonical_id(id)?;
        self.persons.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.persons.read().await.len())
    }
}
