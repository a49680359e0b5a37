use crate::{
    entities::{project::NewProject, testimonial::NewTestimonial},
    errors::AppError,
    shared_repos::SharedRepositories,
};

/// Inserts the showcase projects and testimonials when the project table is empty.
/// Returns whether anything was written.
pub async fn seed_demo_data(repos: &SharedRepositories) -> Result<bool, AppError> {
    if !repos.project_repo.list(Some(1)).await?.is_empty() {
        tracing::debug!("Projects already present, skipping demo seed");
        return Ok(false);
    }

    for project in demo_projects() {
        repos.project_repo.create(&project).await?;
    }

    if repos.testimonial_repo.list(Some(1)).await?.is_empty() {
        for testimonial in demo_testimonials() {
            repos.testimonial_repo.create(&testimonial).await?;
        }
    }

    tracing::info!("Seeded demo projects and testimonials");
    Ok(true)
}

fn demo_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            name: "LMS Platform - Loyola University of Congo/ICAM".into(),
            description: "Complete AI-assisted learning management system for higher education".into(),
            github_url: "https://github.com/cognito-inc/loyola-lms".into(),
            stack: "Python, Flask, AI/ML, PostgreSQL, React".into(),
            image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=400&h=300&fit=crop&crop=center".into(),
            detailed_description: Some(
                "Digital education platform built for Loyola University of Congo in partnership with ICAM. \
                 It uses artificial intelligence to personalise learning and improve student engagement."
                    .into(),
            ),
            demo_url: Some("https://loyola-lms.cognito-inc.com".into()),
            features: Some(
                "Course and content management, Student progress tracking, AI recommendations, \
                 Automated assessment, Multilingual interface, Analytics dashboard"
                    .into(),
            ),
        },
        NewProject {
            name: "CognitoAI Platform".into(),
            description: "Artificial intelligence platform for business process automation".into(),
            github_url: "https://github.com/cognito-inc/cognitoai-platform".into(),
            stack: "Python, Flask, TensorFlow, React".into(),
            image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=400&h=300&fit=crop&crop=center".into(),
            detailed_description: Some(
                "All-in-one AI platform that lets companies automate complex business processes \
                 with pre-trained and customisable models."
                    .into(),
            ),
            demo_url: Some("https://cognitoai.cognito-inc.com".into()),
            features: Some(
                "Pre-trained models, Drag-and-drop interface, Full REST API, Real-time dashboard, \
                 Third-party integrations, Monitoring"
                    .into(),
            ),
        },
        NewProject {
            name: "Smart Analytics Dashboard".into(),
            description: "Real-time analytics dashboard for startups".into(),
            github_url: "https://github.com/cognito-inc/smart-analytics".into(),
            stack: "Python, Django, Chart.js, PostgreSQL".into(),
            image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=300&fit=crop&crop=center".into(),
            detailed_description: Some(
                "Data analysis product for startups with actionable insight into business \
                 performance and market trends."
                    .into(),
            ),
            demo_url: Some("https://analytics.cognito-inc.com".into()),
            features: Some(
                "Interactive visualisations, Automated reports, Smart alerts, Multi-source integration, \
                 Data export, Team collaboration"
                    .into(),
            ),
        },
    ]
}

fn demo_testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            client_name: "Marie Dubois".into(),
            company: Some("TechStart SAS".into()),
            message: "Jonathan turned our vision into an exceptional application. \
                      His technical expertise and creativity are remarkable."
                .into(),
            rating: 5,
        },
        NewTestimonial {
            client_name: "Pierre Martin".into(),
            company: Some("InnovCorp".into()),
            message: "Professional work, deadlines met and results beyond our expectations. Highly recommended!".into(),
            rating: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[tokio::test]
    async fn seeds_once() {
        let repos = SharedRepositories::in_memory();

        assert!(seed_demo_data(&repos).await.unwrap());
        assert!(!seed_demo_data(&repos).await.unwrap());

        assert_eq!(repos.project_repo.list(None).await.unwrap().len(), 3);
        assert_eq!(repos.testimonial_repo.list(None).await.unwrap().len(), 2);
    }

    #[test]
    fn demo_records_pass_validation() {
        assert!(demo_projects().iter().all(|p| p.validate().is_ok()));
        assert!(demo_testimonials().iter().all(|t| t.validate().is_ok()));
    }
}
