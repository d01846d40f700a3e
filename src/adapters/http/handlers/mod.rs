pub mod editor_api;
pub mod pages;
