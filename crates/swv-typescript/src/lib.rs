pub mod converter;
pub mod type_mapper;

pub use converter::TypeScriptConverter;
pub use type_mapper::{TsProperty, TsType};
