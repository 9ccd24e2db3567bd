//! Studly casing and hook name derivation.
//!
//! Field names reach the container in whatever shape the caller likes
//! (`foo_bar`, `foo-bar`, `fooBar`, `FooBar`). Hooks are keyed by the studly
//! form so all of those spellings land on the same hook.
//!
//! | Input | Studly |
//! |-------|--------|
//! | `foo`, `Foo` | `Foo` |
//! | `fooBar`, `FooBar`, `foo_bar`, `foo-bar` | `FooBar` |
//! | `foo123` | `Foo123` |

/// Convert a field name to studly case.
///
/// `-`, `_` and whitespace split words; each word gets its first character
/// upper-cased and keeps the rest as written; separators are dropped.
pub fn studly(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for word in value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Name of the setter hook for `key`, e.g. `setFooBarAttribute`.
pub fn set_mutator_name(key: &str) -> String {
    format!("set{}Attribute", studly(key))
}

/// Name of the getter hook for `key`, e.g. `getFooBarAttribute`.
pub fn get_mutator_name(key: &str) -> String {
    format!("get{}Attribute", studly(key))
}

/// Name of the presence hook for `key`, e.g. `hasFooBarAttribute`.
pub fn has_mutator_name(key: &str) -> String {
    format!("has{}Attribute", studly(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studly_normalizes_case_and_separators() {
        assert_eq!(studly("foo"), "Foo");
        assert_eq!(studly("Foo"), "Foo");
        assert_eq!(studly("fooBar"), "FooBar");
        assert_eq!(studly("FooBar"), "FooBar");
        assert_eq!(studly("foo_bar"), "FooBar");
        assert_eq!(studly("foo-bar"), "FooBar");
        assert_eq!(studly("foo123"), "Foo123");
    }

    #[test]
    fn studly_drops_empty_segments() {
        assert_eq!(studly("foo__bar"), "FooBar");
        assert_eq!(studly("_foo-"), "Foo");
        assert_eq!(studly("foo bar"), "FooBar");
        assert_eq!(studly(""), "");
    }

    #[test]
    fn studly_handles_non_ascii() {
        assert_eq!(studly("élan_vital"), "ÉlanVital");
    }

    #[test]
    fn mutator_names() {
        assert_eq!(set_mutator_name("foo"), "setFooAttribute");
        assert_eq!(get_mutator_name("Foo"), "getFooAttribute");
        assert_eq!(has_mutator_name("foo-bar"), "hasFooBarAttribute");
        assert_eq!(set_mutator_name("foo123"), "setFoo123Attribute");
    }
}
