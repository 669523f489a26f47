pub mod home;
pub mod projects;
