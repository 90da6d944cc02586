pub mod checks;
pub mod comments;
pub mod pulls;
