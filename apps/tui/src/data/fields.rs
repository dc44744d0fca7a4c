use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::domain::Month;

static NULL: Value = Value::Null;

#[allow(clippy::expect_used)]
static LIST_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;]+").expect("list delimiter pattern compiles"));

/// Read-only view over a loosely structured JSON document.
///
/// Every accessor is total: a missing key, a `null`, or a value of the wrong
/// type all come back as `None` (or an empty list), so the flatteners never
/// have to check shapes themselves.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a>(&'a Value);

impl<'a> Document<'a> {
    pub const fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Looks up a dotted path (`"entidades.producto"`). Nulls count as absent.
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        path.split('.')
            .try_fold(self.0, |current, key| match current {
                Value::Object(map) => map.get(key),
                _ => None,
            })
            .filter(|value| !value.is_null())
    }

    /// First present value among several aliases.
    pub fn get_any(&self, paths: &[&str]) -> Option<&'a Value> {
        paths.iter().find_map(|path| self.get(path))
    }

    /// Nested document; an absent object yields a document where every
    /// lookup is absent.
    pub fn nested(&self, path: &str) -> Self {
        Self(self.get(path).unwrap_or(&NULL))
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.get(path).and_then(as_text)
    }

    pub fn text_any(&self, paths: &[&str]) -> Option<String> {
        self.get_any(paths).and_then(as_text)
    }

    /// Text only when the document holds a JSON string; numbers and
    /// booleans are not coerced.
    pub fn string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(Value::as_str).map(ToString::to_string)
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(as_number)
    }

    pub fn number_any(&self, paths: &[&str]) -> Option<f64> {
        self.get_any(paths).and_then(as_number)
    }

    /// Month number under the first present alias, as written in the
    /// document; may lie outside 1..12.
    pub fn month_any(&self, paths: &[&str]) -> Option<i64> {
        self.get_any(paths).and_then(as_month)
    }

    pub fn list(&self, path: &str) -> Vec<String> {
        self.get(path).map(as_list).unwrap_or_default()
    }

    /// Raw JSON kept as-is for free-form sections.
    pub fn raw(&self, path: &str) -> Option<Value> {
        self.get(path).cloned()
    }

    /// Array elements, or nothing when the value is absent or not an array.
    pub fn items(&self, path: &str) -> &'a [Value] {
        match self.get(path) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn as_month(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && float.abs() < 1e6)
                .map(|float| float as i64)
        }),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| Month::parse(text).map(|month| i64::from(month.number()))),
        _ => None,
    }
}

fn as_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect(),
        Value::String(text) => LIST_DELIMITERS
            .split(text)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_paths_tolerate_missing_and_wrong_shapes() {
        let value = json!({"entidades": {"producto": "Aguacate", "pais": null}, "titulo": 5});
        let doc = Document::new(&value);

        assert_eq!(doc.text("entidades.producto").as_deref(), Some("Aguacate"));
        assert_eq!(doc.text("entidades.pais"), None);
        assert_eq!(doc.text("entidades.producto.nombre"), None);
        assert_eq!(doc.text("titulo").as_deref(), Some("5"));
        assert_eq!(doc.nested("ausente").text("producto"), None);
    }

    #[test]
    fn numbers_accept_numeric_strings_only() {
        let value = json!({"a": 1.5, "b": " -0.25 ", "c": "alto", "d": [1]});
        let doc = Document::new(&value);

        assert_eq!(doc.number("a"), Some(1.5));
        assert_eq!(doc.number("b"), Some(-0.25));
        assert_eq!(doc.number("c"), None);
        assert_eq!(doc.number("d"), None);
    }

    #[test]
    fn months_accept_integers_names_and_keep_out_of_range_values() {
        let value = json!({"a": 11, "b": "3", "c": "noviembre", "d": 14, "e": 2.5, "f": 4.0});
        let doc = Document::new(&value);

        assert_eq!(doc.month_any(&["a"]), Some(11));
        assert_eq!(doc.month_any(&["b"]), Some(3));
        assert_eq!(doc.month_any(&["c"]), Some(11));
        assert_eq!(doc.month_any(&["d"]), Some(14));
        assert_eq!(doc.month_any(&["e"]), None);
        assert_eq!(doc.month_any(&["f"]), Some(4));
    }

    #[test]
    fn lists_accept_arrays_and_delimited_strings() {
        let value = json!({"a": ["sequía", 3, " exportación "], "b": "precio; clima,", "c": 7});
        let doc = Document::new(&value);

        assert_eq!(doc.list("a"), vec!["sequía", "exportación"]);
        assert_eq!(doc.list("b"), vec!["precio", "clima"]);
        assert!(doc.list("c").is_empty());
        assert!(doc.list("ausente").is_empty());
    }

    #[test]
    fn items_of_non_arrays_are_empty() {
        let value = json!({"zonas": {"pais": "Perú"}, "lista": [{}, {}]});
        let doc = Document::new(&value);

        assert!(doc.items("zonas").is_empty());
        assert_eq!(doc.items("lista").len(), 2);
        assert!(Document::new(&json!("texto")).items("lista").is_empty());
    }
}
