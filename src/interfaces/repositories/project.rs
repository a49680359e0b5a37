use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::project::{NewProject, Project, ProjectChanges},
    errors::AppError,
    repositories::{
        record_store::{not_found, RecordStore},
        sqlx_repo::{ping, SqlxProjectRepo},
    },
};

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl RecordStore<Project> for SqlxProjectRepo {
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM projects ORDER BY id");

        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn get(&self, id: i64) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found::<Project>(id))
    }

    async fn create(&self, new: &NewProject) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                name, description, github_url, stack, image_url,
                detailed_description, demo_url, features
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.github_url)
        .bind(&new.stack)
        .bind(&new.image_url)
        .bind(&new.detailed_description)
        .bind(&new.demo_url)
        .bind(&new.features)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn update(&self, id: i64, changes: &ProjectChanges) -> Result<Project, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE projects SET ");
        let mut touched = 0;

        {
            let mut set = builder.separated(", ");

            if let Some(name) = &changes.name {
                set.push("name = ").push_bind_unseparated(name);
                touched += 1;
            }
            if let Some(description) = &changes.description {
                set.push("description = ").push_bind_unseparated(description);
                touched += 1;
            }
            if let Some(github_url) = &changes.github_url {
                set.push("github_url = ").push_bind_unseparated(github_url);
                touched += 1;
            }
            if let Some(stack) = &changes.stack {
                set.push("stack = ").push_bind_unseparated(stack);
                touched += 1;
            }
            if let Some(image_url) = &changes.image_url {
                set.push("image_url = ").push_bind_unseparated(image_url);
                touched += 1;
            }
            if !changes.detailed_description.is_unchanged() {
                set.push("detailed_description = ")
                    .push_bind_unseparated(changes.detailed_description.flatten_str());
                touched += 1;
            }
            if !changes.demo_url.is_unchanged() {
                set.push("demo_url = ")
                    .push_bind_unseparated(changes.demo_url.flatten_str());
                touched += 1;
            }
            if !changes.features.is_unchanged() {
                set.push("features = ")
                    .push_bind_unseparated(changes.features.flatten_str());
                touched += 1;
            }
        }

        if touched == 0 {
            return self.get(id).await;
        }

        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        builder
            .build_query_as::<Project>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found::<Project>(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found::<Project>(id));
        }

        Ok(())
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        ping(&self.pool).await
    }
}
