use fluent_model::{Fluent, MutatorSpec, Result, Schema};
use serde_json::{json, Map, Value};

/// Model with hooks on `foo` (all three) and a getter-only `foobar`.
pub struct ModelWithMutators;

impl Schema for ModelWithMutators {
    const MUTATORS: &'static [MutatorSpec] = &[
        MutatorSpec::new("foo")
            .setter(set_foo)
            .getter(get_foo)
            .presence(has_foo),
        MutatorSpec::new("foobar").getter(get_foobar),
    ];
}

fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn set_foo(store: &mut Fluent, value: Value) -> Result<()> {
    store.insert("foo", format!("mutated `{}`", text(&value)));
    Ok(())
}

fn get_foo(_: &Fluent, value: Value) -> Result<Value> {
    Ok(Value::String(format!("mutated `{}`", text(&value))))
}

fn has_foo(_: &Fluent, _: &str) -> Result<bool> {
    Ok(true)
}

fn get_foobar(_: &Fluent, _: Value) -> Result<Value> {
    Ok(Value::from("FOOBAR"))
}

pub fn sample() -> Map<String, Value> {
    match json!({ "foo": "FOO", "bar": "BAR" }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}
