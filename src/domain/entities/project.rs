use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{option_fields::PatchString, record::Record};

pub const DEFAULT_IMAGE_URL: &str = "default-project.jpg";

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub github_url: String,
    pub stack: String,
    pub image_url: String,
    pub detailed_description: Option<String>,
    pub demo_url: Option<String>,
    pub features: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Comma separated `features` column as display items.
    pub fn features_list(&self) -> Vec<String> {
        split_list(self.features.as_deref().unwrap_or_default())
    }

    /// Comma separated `stack` column as display items.
    pub fn stack_list(&self) -> Vec<String> {
        split_list(&self.stack)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1, max = 200))]
    pub github_url: String,

    #[validate(length(min = 1, max = 200))]
    pub stack: String,

    #[serde(default = "default_image_url")]
    #[validate(length(min = 1, max = 200))]
    pub image_url: String,

    #[serde(default)]
    pub detailed_description: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub demo_url: Option<String>,

    #[serde(default)]
    pub features: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectChanges {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub github_url: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub stack: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub image_url: Option<String>,

    pub detailed_description: PatchString,

    #[validate(length(max = 200))]
    pub demo_url: PatchString,

    pub features: PatchString,
}

impl Record for Project {
    type New = NewProject;
    type Changes = ProjectChanges;

    const LABEL: &'static str = "Project";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_new(id: i64, created_at: DateTime<Utc>, new: &NewProject) -> Self {
        Project {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            github_url: new.github_url.clone(),
            stack: new.stack.clone(),
            image_url: new.image_url.clone(),
            detailed_description: new.detailed_description.clone(),
            demo_url: new.demo_url.clone(),
            features: new.features.clone(),
            created_at,
        }
    }

    fn apply_changes(&mut self, changes: &ProjectChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(github_url) = &changes.github_url {
            self.github_url = github_url.clone();
        }
        if let Some(stack) = &changes.stack {
            self.stack = stack.clone();
        }
        if let Some(image_url) = &changes.image_url {
            self.image_url = image_url.clone();
        }
        changes.detailed_description.apply_to(&mut self.detailed_description);
        changes.demo_url.apply_to(&mut self.demo_url);
        changes.features.apply_to(&mut self.features);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::option_fields::OptionField;

    fn sample() -> Project {
        Project::from_new(
            7,
            Utc::now(),
            &NewProject {
                name: "Smart Analytics Dashboard".into(),
                description: "Real-time analytics".into(),
                github_url: "https://github.com/cognito-inc/smart-analytics".into(),
                stack: "Python, Django , Chart.js,".into(),
                image_url: DEFAULT_IMAGE_URL.into(),
                detailed_description: None,
                demo_url: Some("https://analytics.example.com".into()),
                features: Some("Reports, , Alerts".into()),
            },
        )
    }

    #[test]
    fn lists_are_trimmed_and_skip_empty_items() {
        let project = sample();
        assert_eq!(project.stack_list(), vec!["Python", "Django", "Chart.js"]);
        assert_eq!(project.features_list(), vec!["Reports", "Alerts"]);
    }

    #[test]
    fn image_url_defaults_when_omitted() {
        let new: NewProject = serde_json::from_value(serde_json::json!({
            "name": "x",
            "description": "y",
            "github_url": "https://github.com/x/y",
            "stack": "Rust"
        }))
        .unwrap();
        assert_eq!(new.image_url, DEFAULT_IMAGE_URL);
        assert!(new.validate().is_ok());
    }

    #[test]
    fn changes_keep_id_and_creation_time() {
        let mut project = sample();
        let created_at = project.created_at;
        project.apply_changes(&ProjectChanges {
            name: Some("Renamed".into()),
            demo_url: OptionField::SetToNull,
            ..Default::default()
        });

        assert_eq!(project.id, 7);
        assert_eq!(project.created_at, created_at);
        assert_eq!(project.name, "Renamed");
        assert_eq!(project.demo_url, None);
        assert_eq!(project.description, "Real-time analytics");
    }

    #[test]
    fn required_fields_are_enforced() {
        let new = NewProject {
            name: String::new(),
            description: String::new(),
            github_url: "https://github.com/x/y".into(),
            stack: "Rust".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
            detailed_description: None,
            demo_url: None,
            features: None,
        };
        let errors = new.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
    }
}
