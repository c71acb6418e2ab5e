//! `SQLite` implementation of [`CustomerRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use clientele_app::ports::CustomerRepository;
use clientele_domain::customer::{Customer, CustomerDetails};
use clientele_domain::error::ClienteleError;
use clientele_domain::id::CustomerId;
use clientele_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Customer);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Customer> {
        value.map(|w| w.0)
    }
}

/// `SQLite`'s `CURRENT_TIMESTAMP` text form, always UTC.
const SQLITE_DATETIME: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Accepts RFC 3339 and, for tables created with `CURRENT_TIMESTAMP`
/// defaults, `SQLite`'s own `YYYY-MM-DD HH:MM:SS` form.
fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(value, SQLITE_DATETIME)
                .map(|naive| naive.and_utc())
        })
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        // Older tables declare these columns without NOT NULL.
        let name: Option<String> = row.try_get("name")?;
        let date_of_birth: Option<String> = row.try_get("dob")?;
        let email: Option<String> = row.try_get("email")?;
        let contact: Option<String> = row.try_get("contact")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Customer {
            id: CustomerId::from_raw(id),
            name: name.unwrap_or_default(),
            date_of_birth: date_of_birth.unwrap_or_default(),
            email: email.unwrap_or_default(),
            contact: contact.unwrap_or_default(),
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO customers (name, dob, email, contact) VALUES (?, ?, ?, ?)";

const UPDATE: &str = r"
    UPDATE customers
    SET name = ?, dob = ?, email = ?, contact = ?,
        updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
    WHERE id = ?
";

const SELECT_BY_ID: &str = r"
    SELECT id, name, dob, email, contact, created_at, updated_at
    FROM customers
    WHERE id = ?
";

// No ORDER BY: callers get the store's natural order.
const SELECT_PAGE: &str = r"
    SELECT id, name, dob, email, contact, created_at, updated_at
    FROM customers
    LIMIT ? OFFSET ?
";

const COUNT_ALL: &str = "SELECT COUNT(*) FROM customers";

async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Customer>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(Wrapper::maybe(row))
}

/// `SQLite`-backed customer repository.
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for SqliteCustomerRepository {
    fn create(
        &self,
        details: CustomerDetails,
    ) -> impl Future<Output = Result<Customer, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(details.name)
                .bind(details.date_of_birth)
                .bind(details.email)
                .bind(details.contact)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = result.last_insert_rowid();
            // The row was just written, so a miss here is a store failure.
            let customer = fetch_by_id(&pool, id)
                .await?
                .ok_or(StorageError::Database(sqlx::Error::RowNotFound))?;

            Ok(customer)
        }
    }

    fn update(
        &self,
        id: CustomerId,
        details: CustomerDetails,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(details.name)
                .bind(details.date_of_birth)
                .bind(details.email)
                .bind(details.contact)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(fetch_by_id(&pool, id.as_i64()).await?)
        }
    }

    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(fetch_by_id(&pool, id.as_i64()).await?) }
    }

    fn list(
        &self,
        offset: u64,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_PAGE)
                .bind(i64::from(limit))
                .bind(i64::try_from(offset).unwrap_or(i64::MAX))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT_ALL)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u64::try_from(count).unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteCustomerRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteCustomerRepository::new(db.pool().clone())
    }

    fn details(name: &str) -> CustomerDetails {
        CustomerDetails {
            name: name.to_string(),
            date_of_birth: "1969-07-20".to_string(),
            email: format!("{name}@example.com"),
            contact: "555-0199".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_customer() {
        let repo = setup().await;

        let created = repo.create(details("armstrong")).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.details(), details("armstrong"));
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let repo = setup().await;

        let first = repo.create(details("a")).await.unwrap();
        let second = repo.create(details("b")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_store_empty_strings_for_default_details() {
        let repo = setup().await;

        let created = repo.create(CustomerDetails::default()).await.unwrap();

        assert_eq!(created.name, "");
        assert_eq!(created.date_of_birth, "");
    }

    #[tokio::test]
    async fn should_return_none_when_customer_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(CustomerId::from_raw(12345)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_update_customer_when_exists() {
        let repo = setup().await;
        let created = repo.create(details("aldrin")).await.unwrap();

        let updated = repo
            .update(created.id, details("collins"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.details(), details("collins"));
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_customer() {
        let repo = setup().await;

        let result = repo
            .update(CustomerId::from_raw(9), details("ghost"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_list_pages_and_count_all() {
        let repo = setup().await;
        for i in 0..25 {
            repo.create(details(&format!("c{i}"))).await.unwrap();
        }

        let first = repo.list(0, 10).await.unwrap();
        let last = repo.list(20, 10).await.unwrap();
        let beyond = repo.list(30, 10).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(last.len(), 5);
        assert!(beyond.is_empty());
        assert_eq!(repo.count().await.unwrap(), 25);
    }

    const LEGACY_TABLE: &str = r"
        CREATE TABLE customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            dob TEXT,
            email TEXT,
            contact TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
    ";

    async fn setup_legacy() -> SqliteCustomerRepository {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(LEGACY_TABLE).execute(&pool).await.unwrap();
        SqliteCustomerRepository::new(pool)
    }

    #[tokio::test]
    async fn should_read_rows_with_sqlite_datetime_timestamps() {
        let repo = setup_legacy().await;
        sqlx::query(
            "INSERT INTO customers (name, dob, created_at, updated_at)
             VALUES ('lovelace', '1815-12-10', '2023-05-06 07:08:09', '2023-05-06 07:08:09')",
        )
        .execute(&repo.pool)
        .await
        .unwrap();

        let fetched = repo.get_by_id(CustomerId::from_raw(1)).await.unwrap().unwrap();

        assert_eq!(fetched.name, "lovelace");
        assert_eq!(fetched.email, "");
        assert_eq!(
            fetched.created_at,
            chrono::DateTime::parse_from_rfc3339("2023-05-06T07:08:09Z")
                .unwrap()
                .to_utc()
        );
        assert_eq!(repo.list(0, 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_create_and_update_in_table_with_current_timestamp_defaults() {
        let repo = setup_legacy().await;

        let created = repo.create(details("babbage")).await.unwrap();
        let updated = repo
            .update(created.id, details("menabrea"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn should_reject_unrecognised_timestamp_text() {
        assert!(decode_timestamp("yesterday").is_err());
        assert!(decode_timestamp("2024-03-04T05:06:07.089Z").is_ok());
        assert!(decode_timestamp("2024-03-04 05:06:07").is_ok());
    }

    #[tokio::test]
    async fn should_clamp_huge_offset() {
        let repo = setup().await;
        repo.create(details("x")).await.unwrap();

        let rows = repo.list(u64::MAX, 10).await.unwrap();

        assert!(rows.is_empty());
    }
}
