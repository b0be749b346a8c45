pub mod home;
pub mod register;
pub mod settings;
pub mod teacher;
