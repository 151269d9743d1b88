pub mod about;
pub mod catalog;
pub mod list;
pub mod new;

pub const JSON_ARG: &str = "json";
