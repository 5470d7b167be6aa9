use async_trait::async_trait;
use shared::Person;
use sqlx::{sqlite::SqliteRow, Row};

use super::connection::DbConnection;
use crate::storage::traits::{canonical_id, generate_id, PersonStorage, StoreResult};

/// SQLite-backed person repository
#[derive(Clone)]
pub struct SqlitePersonStore {
    db: DbConnection,
}

impl SqlitePersonStore {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_person(row: &SqliteRow) -> Person {
        Person {
            id: row.get("id"),
            name: row.get("name"),
            number: row.get("number"),
        }
    }
}

#[async_trait]
impl PersonStorage for SqlitePersonStore {
    async fn list_all(&self) -> StoreResult<Vec<Person>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, number
            FROM persons
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_person).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>> {
        let id = canonical_id(id)?;
        let row = sqlx::query(
            r#"
            SELECT id, name, number
            FROM persons
            WHERE id = ?
            "#,
        )
        .bind(&id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::row_to_person))
    }

    async fn create(&self, name: &str, number: &str) -> StoreResult<Person> {
        let person = Person {
            id: generate_id(),
            name: name.to_string(),
            number: number.to_string(),
        };

        sqlx::query(
            r#"
            INSERT INTO persons (id, name, number)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&person.id)
        .bind(&person.name)
        .bind(&person.number)
        .execute(self.db.pool())
        .await?;

        Ok(person)
    }

    async fn update_by_id(&self, id: &str, name: &str, number: &str) -> StoreResult<Option<Person>> {
        let id = canonical_id(id)?;
        let result = sqlx::query(
            r#"
            UPDATE persons
            SET name = ?, number = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(number)
        .bind(&id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Person {
            id,
            name: name.to_string(),
            number: number.to_string(),
        }))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let id = canonical_id(id)?;
        sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(&id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM persons")
            .fetch_one(self.db.pool())
            .await?;
        let count: i64 = row.get("count");
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;

    async fn setup_test() -> SqlitePersonStore {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        SqlitePersonStore::new(db)
    }

    #[tokio::test]
    async fn test_create_and_list_in_insertion_order() {
        let store = setup_test().await;

        let empty = store.list_all().await.expect("Failed to list persons");
        assert!(empty.is_empty(), "Database should be empty at test start");

        let first = store.create("Zed Last", "1").await.unwrap();
        let second = store.create("Abe First", "2").await.unwrap();

        let persons = store.list_all().await.unwrap();
        assert_eq!(persons, vec![first, second]);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = setup_test().await;
        let created = store.create("Ada Lovelace", "39-44-5323523").await.unwrap();

        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = store.find_by_id(&generate_id()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let store = setup_test().await;

        assert!(matches!(
            store.find_by_id("5f1a").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            store.update_by_id("5f1a", "a", "b").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            store.delete_by_id("5f1a").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
    }

    #[tokio::test]
    async fn test_update_by_id() {
        let store = setup_test().await;
        let created = store.create("Dan Abramov", "12-43-234345").await.unwrap();

        let updated = store
            .update_by_id(&created.id, "Dan Abramov", "000")
            .await
            .unwrap()
            .expect("person should exist");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.number, "000");

        let reloaded = store.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(reloaded, updated);

        let missing = store.update_by_id(&generate_id(), "x", "y").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = setup_test().await;
        let created = store.create("Arto Hellas", "040-123456").await.unwrap();

        store.delete_by_id(&created.id).await.unwrap();
        store.delete_by_id(&created.id).await.unwrap();

        assert!(store.find_by_id(&created.id).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("phonebook.db").display());

        let created = {
            let store = SqlitePersonStore::new(DbConnection::new(&url).await.unwrap());
            store.create("Mary Poppendieck", "39-23-6423122").await.unwrap()
        };

        let reopened = SqlitePersonStore::new(DbConnection::new(&url).await.unwrap());
        let found = reopened.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }
}
