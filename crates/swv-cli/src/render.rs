use minijinja::{Environment, Value, context};
use swv_core::view::ViewModel;

/// Template used when neither the command line nor the config names one.
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/class.ts.j2");

/// Escape `*/` sequences that would prematurely close a block comment.
fn escape_comment(value: String) -> String {
    value.replace("*/", "*\\/")
}

/// Render `source` with the view model as its context.
///
/// Besides the view model's own keys, templates see `type_property`: the key
/// computed types were attached under.
pub fn render_view(
    name: &str,
    source: &str,
    view: &ViewModel,
    type_property: &str,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("escape_comment", escape_comment);
    env.add_template(name, source)?;
    let tmpl = env.get_template(name)?;

    tmpl.render(context! {
        type_property => type_property,
        ..Value::from_serialize(view)
    })
}
