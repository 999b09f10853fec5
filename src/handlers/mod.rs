//! HTTP handlers for the items resource and the root welcome route.

pub mod home;
pub mod items;
pub use home::*;
pub use items::*;
