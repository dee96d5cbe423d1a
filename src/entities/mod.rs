pub mod app;
pub mod app_category;
pub mod game;
