pub mod config;
pub mod error;
pub mod parse;
pub mod transform;
pub mod view;

pub use transform::{PrepareOptions, SchemaNode, TypeConverter, prepare};
