pub mod contact;
pub mod github_profile;
pub mod portfolio;
