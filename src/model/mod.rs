//! Model-level resolution: one provider object in, one record of column values out

pub mod schema;

pub use schema::{ModelSchema, Record};
