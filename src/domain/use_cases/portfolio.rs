use crate::{
    entities::{project::Project, testimonial::Testimonial},
    errors::AppError,
    shared_repos::{ProjectStore, TestimonialStore},
};

/// Projects shown on the home page.
pub const HOME_PROJECT_LIMIT: i64 = 3;

pub struct PortfolioHandler {
    pub project_repo: ProjectStore,
    pub testimonial_repo: TestimonialStore,
}

impl PortfolioHandler {
    pub fn new(project_repo: ProjectStore, testimonial_repo: TestimonialStore) -> Self {
        PortfolioHandler {
            project_repo,
            testimonial_repo,
        }
    }

    /// Featured projects (first by id) and every testimonial.
    pub async fn home(&self) -> Result<(Vec<Project>, Vec<Testimonial>), AppError> {
        let projects = self.project_repo.list(Some(HOME_PROJECT_LIMIT)).await?;
        let testimonials = self.testimonial_repo.list(None).await?;
        Ok((projects, testimonials))
    }

    pub async fn all_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list(None).await
    }

    pub async fn project_detail(&self, id: i64) -> Result<Project, AppError> {
        self.project_repo.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        entities::{project::NewProject, testimonial::NewTestimonial},
        repositories::{memory::MemoryStore, record_store::RecordStore},
    };

    fn new_project(name: &str) -> NewProject {
        NewProject {
            name: name.into(),
            description: "desc".into(),
            github_url: format!("https://github.com/cognito-inc/{}", name),
            stack: "Rust".into(),
            image_url: "default-project.jpg".into(),
            detailed_description: None,
            demo_url: None,
            features: None,
        }
    }

    async fn handler(projects: usize, testimonials: usize) -> PortfolioHandler {
        let project_repo = Arc::new(MemoryStore::<Project>::new());
        let testimonial_repo = Arc::new(MemoryStore::<Testimonial>::new());

        for i in 0..projects {
            project_repo.create(&new_project(&format!("p{}", i))).await.unwrap();
        }
        for i in 0..testimonials {
            testimonial_repo
                .create(&NewTestimonial {
                    client_name: format!("Client {}", i),
                    company: None,
                    message: "Great work".into(),
                    rating: 5,
                })
                .await
                .unwrap();
        }

        PortfolioHandler::new(project_repo, testimonial_repo)
    }

    #[tokio::test]
    async fn home_shows_first_three_projects_and_all_testimonials() {
        let (projects, testimonials) = handler(5, 4).await.home().await.unwrap();

        let ids: Vec<_> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(testimonials.len(), 4);
    }

    #[tokio::test]
    async fn home_with_empty_store_is_empty() {
        let (projects, testimonials) = handler(0, 0).await.home().await.unwrap();
        assert!(projects.is_empty());
        assert!(testimonials.is_empty());
    }

    #[tokio::test]
    async fn all_projects_lists_everything() {
        assert_eq!(handler(5, 0).await.all_projects().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let handler = handler(2, 0).await;
        assert_eq!(handler.project_detail(2).await.unwrap().name, "p1");
        assert!(matches!(handler.project_detail(999).await, Err(AppError::NotFound(_))));
    }
}
