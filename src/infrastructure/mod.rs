pub mod db;
pub mod github;
pub mod mail;
pub mod render;
pub mod utils;
