mod common;
mod pulls;
mod reviews;
mod statuses;
mod timeline;

pub use common::*;
pub use pulls::*;
pub use reviews::*;
pub use statuses::*;
pub use timeline::*;
