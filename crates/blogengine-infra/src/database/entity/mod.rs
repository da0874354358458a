//! SeaORM entities for the blog tables.

pub mod category;
pub mod post;
