//! The flat, render-ready view model handed to template engines.
//!
//! Every type here serializes with the camelCase keys templates expect.

pub mod method;
pub mod model;
pub mod parameter;

pub use method::{Header, Method, ResponseView, ReturnView, SchemaView};
pub use model::{DefinitionView, PropertyView, Swagger2View, TagGroup, ViewModel};
pub use parameter::{ByIn, ComputedType, ParameterView};

fn is_false(value: &bool) -> bool {
    !*value
}
