mod label;
mod user;

pub use label::GhLabel;
pub use user::GhUser;
