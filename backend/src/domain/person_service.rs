use std::sync::Arc;

use shared::{Person, PersonPayload};
use tracing::{info, warn};

use super::errors::{PersonError, PersonResult};
use super::validation;
use crate::storage::PersonStorage;

/// Service for managing phonebook entries
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStorage>,
}

impl PersonService {
    /// Create a new PersonService over the given store
    pub fn new(store: Arc<dyn PersonStorage>) -> Self {
        Self { store }
    }

    /// List all persons
    pub async fn list_persons(&self) -> PersonResult<Vec<Person>> {
        let persons = self.store.list_all().await?;
        info!("Found {} persons", persons.len());
        Ok(persons)
    }

    /// Get a person by ID
    pub async fn get_person(&self, id: &str) -> PersonResult<Person> {
        match self.store.find_by_id(id).await? {
            Some(person) => Ok(person),
            None => {
                warn!("Person not found: {}", id);
                Err(PersonError::NotFound(id.to_string()))
            }
        }
    }

    /// Create a new person.
    ///
    /// The duplicate-name check reads a snapshot and then inserts, so two
    /// concurrent creates with the same name can both succeed.
    pub async fn create_person(&self, payload: PersonPayload) -> PersonResult<Person> {
        let existing = self.store.list_all().await?;
        let valid = validation::validate_new(&payload, &existing)?;

        let person = self.store.create(&valid.name, &valid.number).await?;
        info!("Created person: {} with ID: {}", person.name, person.id);
        Ok(person)
    }

    /// Replace name and number of an existing person.
    ///
    /// Name uniqueness is not re-checked here, only on create.
    pub async fn update_person(&self, id: &str, payload: PersonPayload) -> PersonResult<Person> {
        let valid = validation::validate(&payload)?;

        match self.store.update_by_id(id, &valid.name, &valid.number).await? {
            Some(person) => {
                info!("Updated person: {} with ID: {}", person.name, person.id);
                Ok(person)
            }
            None => {
                warn!("Person not found for update: {}", id);
                Err(PersonError::NotFound(id.to_string()))
            }
        }
    }

    /// Delete a person. Unknown IDs are ignored.
    pub async fn delete_person(&self, id: &str) -> PersonResult<()> {
        self.store.delete_by_id(id).await?;
        info!("Deleted person with ID: {}", id);
        Ok(())
    }

    /// Number of persons currently stored
    pub async fn count_persons(&self) -> PersonResult<usize> {
        Ok(self.store.count().await?)
    }
}
