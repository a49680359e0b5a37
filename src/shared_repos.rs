use std::sync::Arc;

use crate::{
    entities::{contact::Contact, project::Project, testimonial::Testimonial},
    repositories::{
        memory::MemoryStore,
        record_store::RecordStore,
        sqlx_repo::{SqlxContactRepo, SqlxProjectRepo, SqlxTestimonialRepo},
    },
};

pub type ProjectStore = Arc<dyn RecordStore<Project>>;
pub type TestimonialStore = Arc<dyn RecordStore<Testimonial>>;
pub type ContactStore = Arc<dyn RecordStore<Contact>>;

#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: ProjectStore,
    pub testimonial_repo: TestimonialStore,
    pub contact_repo: ContactStore,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let project_repo = Arc::new(SqlxProjectRepo::new(pool.clone()));
        let testimonial_repo = Arc::new(SqlxTestimonialRepo::new(pool.clone()));
        let contact_repo = Arc::new(SqlxContactRepo::new(pool));

        SharedRepositories {
            project_repo,
            testimonial_repo,
            contact_repo,
        }
    }

    pub fn in_memory() -> Self {
        SharedRepositories {
            project_repo: Arc::new(MemoryStore::<Project>::new()),
            testimonial_repo: Arc::new(MemoryStore::<Testimonial>::new()),
            contact_repo: Arc::new(MemoryStore::<Contact>::new()),
        }
    }
}
