use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::{contact::{Contact, NewContact}, record::NoChanges},
    errors::AppError,
    repositories::{
        record_store::{not_found, read_only, RecordStore},
        sqlx_repo::{ping, SqlxContactRepo},
    },
};

impl SqlxContactRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl RecordStore<Contact> for SqlxContactRepo {
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Contact>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM contacts ORDER BY id");

        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let contacts = builder
            .build_query_as::<Contact>()
            .fetch_all(&self.pool)
            .await?;

        Ok(contacts)
    }

    async fn get(&self, id: i64) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found::<Contact>(id))
    }

    async fn create(&self, new: &NewContact) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    async fn update(&self, _id: i64, _changes: &NoChanges) -> Result<Contact, AppError> {
        Err(read_only::<Contact>())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found::<Contact>(id));
        }

        Ok(())
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        ping(&self.pool).await
    }
}
