use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::testimonial::{NewTestimonial, Testimonial, TestimonialChanges},
    errors::AppError,
    repositories::{
        record_store::{not_found, RecordStore},
        sqlx_repo::{ping, SqlxTestimonialRepo},
    },
};

impl SqlxTestimonialRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxTestimonialRepo { pool }
    }
}

#[async_trait]
impl RecordStore<Testimonial> for SqlxTestimonialRepo {
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM testimonials ORDER BY id");

        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let testimonials = builder
            .build_query_as::<Testimonial>()
            .fetch_all(&self.pool)
            .await?;

        Ok(testimonials)
    }

    async fn get(&self, id: i64) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found::<Testimonial>(id))
    }

    async fn create(&self, new: &NewTestimonial) -> Result<Testimonial, AppError> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (client_name, company, message, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&new.client_name)
        .bind(&new.company)
        .bind(&new.message)
        .bind(new.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(testimonial)
    }

    async fn update(&self, id: i64, changes: &TestimonialChanges) -> Result<Testimonial, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE testimonials SET ");
        let mut touched = 0;

        {
            let mut set = builder.separated(", ");

            if let Some(client_name) = &changes.client_name {
                set.push("client_name = ").push_bind_unseparated(client_name);
                touched += 1;
            }
            if !changes.company.is_unchanged() {
                set.push("company = ")
                    .push_bind_unseparated(changes.company.flatten_str());
                touched += 1;
            }
            if let Some(message) = &changes.message {
                set.push("message = ").push_bind_unseparated(message);
                touched += 1;
            }
            if let Some(rating) = changes.rating {
                set.push("rating = ").push_bind_unseparated(rating);
                touched += 1;
            }
        }

        if touched == 0 {
            return self.get(id).await;
        }

        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        builder
            .build_query_as::<Testimonial>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found::<Testimonial>(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found::<Testimonial>(id));
        }

        Ok(())
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        ping(&self.pool).await
    }
}
