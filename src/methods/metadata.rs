use crate::actions::metadata::Metadata;
use crate::traits::action::Action;
use crate::types::value::Value;

/// Visits every metadata payload of `action` in pipeline order, descending
/// into nested pipelines.
fn visit<'a, A, F>(action: &'a A, f: &mut F)
where
    A: Action + ?Sized,
    F: FnMut(&'a Metadata),
{
    if let Some(metadata) = action.metadata() {
        f(metadata);
    }
    for item in action.items().unwrap_or_default() {
        visit(&**item, f);
    }
}

/// Collects the values of every `examples` step, in order.
///
/// ```
/// use vali_rail::{actions::{examples, isbn}, get_examples, pipe, schemas::string, Value};
///
/// let schema = pipe!(string(), isbn(), examples(["0306406152", "9780306406157"]));
/// assert_eq!(get_examples(&schema), vec![Value::from("0306406152"), Value::from("9780306406157")]);
/// ```
pub fn get_examples<A: Action + ?Sized>(action: &A) -> Vec<Value> {
    let mut collected = Vec::new();
    visit(action, &mut |metadata| {
        if let Metadata::Examples(values) = metadata {
            collected.extend(values.iter().cloned());
        }
    });
    collected
}

/// Returns the text of the last `title` step.
pub fn get_title<A: Action + ?Sized>(action: &A) -> Option<&str> {
    let mut found = None;
    visit(action, &mut |metadata| {
        if let Metadata::Title(text) = metadata {
            found = Some(text.as_str());
        }
    });
    found
}

/// Returns the text of the last `description` step.
pub fn get_description<A: Action + ?Sized>(action: &A) -> Option<&str> {
    let mut found = None;
    visit(action, &mut |metadata| {
        if let Metadata::Description(text) = metadata {
            found = Some(text.as_str());
        }
    });
    found
}
