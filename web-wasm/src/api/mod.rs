pub mod http;
pub mod projects;
pub mod github;
