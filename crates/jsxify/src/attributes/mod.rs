//! Markup attribute to JSX attribute mapping.

mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::jsx::{Expression, JsxAttribute, ObjectProperty};
use crate::markup::AttributeValue;

pub use table::ATTRIBUTE_NAMES;

/// JSX name of the `class` attribute.
pub const CLASS_NAME: &str = "className";

static ATTRIBUTE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ATTRIBUTE_NAMES.iter().copied().collect());

/// Look up the JSX spelling of a markup attribute name (case-insensitive).
pub fn jsx_name(name: &str) -> Option<&'static str> {
    ATTRIBUTE_INDEX.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Convert markup attributes into JSX attributes, keeping their order.
///
/// `style` becomes an object expression (or nothing when empty), `class`
/// becomes `className`, and every other name goes through the table.
pub fn convert_attributes(attributes: &[(String, AttributeValue)]) -> Vec<JsxAttribute> {
    attributes
        .iter()
        .filter_map(|(name, value)| convert_attribute(name, value))
        .collect()
}

/// Convert a single attribute.
pub fn convert_attribute(name: &str, value: &AttributeValue) -> Option<JsxAttribute> {
    match name {
        "style" => {
            if value.is_empty() {
                return None;
            }
            let properties = parse_style(&value.to_string());
            Some(JsxAttribute::expression(name, Expression::Object(properties)))
        }
        "class" => Some(JsxAttribute::string(CLASS_NAME, value.to_string())),
        _ => {
            let name = jsx_name(name).unwrap_or(name);
            Some(JsxAttribute::string(name, value.to_string()))
        }
    }
}

/// Parse a `style` attribute into object properties, in declaration order.
///
/// Declarations without a property or a value are skipped.
pub fn parse_style(style: &str) -> Vec<ObjectProperty> {
    style
        .split(';')
        .filter_map(|declaration| {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                return None;
            }

            let parsed = declaration
                .split_once(':')
                .map(|(property, value)| (property.trim(), value.trim()))
                .filter(|(property, value)| !property.is_empty() && !value.is_empty());

            match parsed {
                Some((property, value)) => Some(ObjectProperty::string(style_key(property), value)),
                None => {
                    tracing::debug!(declaration, "skipping malformed style declaration");
                    None
                }
            }
        })
        .collect()
}

/// Turn a CSS property name into its JSX style key.
///
/// `background-color` -> `backgroundColor`, `-webkit-transition` ->
/// `WebkitTransition`, `-ms-transform` -> `msTransform`. Custom properties
/// are kept as written.
pub fn style_key(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let property = property.to_ascii_lowercase();
    let property = match property.strip_prefix("-ms-") {
        Some(rest) => format!("ms-{rest}"),
        None => property,
    };

    let mut key = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            key.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            key.push(c);
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, AttributeValue)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), AttributeValue::from(*v)))
            .collect()
    }

    #[test]
    fn renames_class() {
        let converted = convert_attributes(&attrs(&[("class", "container")]));
        assert_eq!(converted, vec![JsxAttribute::string("className", "container")]);
    }

    #[test]
    fn translates_names_through_table() {
        let converted = convert_attributes(&attrs(&[
            ("for", "email"),
            ("tabindex", "1"),
            ("stroke-width", "2"),
            ("xlink:href", "#a"),
        ]));

        let names: Vec<&str> = converted.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["htmlFor", "tabIndex", "strokeWidth", "xlinkHref"]);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(jsx_name("TabIndex"), Some("tabIndex"));
        assert_eq!(jsx_name("viewBox"), Some("viewBox"));
    }

    #[test]
    fn keeps_unknown_names() {
        let converted = convert_attributes(&attrs(&[("data-id", "7"), ("aria-label", "x")]));
        assert_eq!(
            converted,
            vec![
                JsxAttribute::string("data-id", "7"),
                JsxAttribute::string("aria-label", "x"),
            ]
        );
    }

    #[test]
    fn keeps_attribute_order() {
        let converted = convert_attributes(&attrs(&[
            ("id", "a"),
            ("style", "color: red"),
            ("class", "b"),
        ]));

        let names: Vec<&str> = converted.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "style", "className"]);
    }

    #[test]
    fn coerces_numeric_values() {
        let converted = convert_attributes(&[("colspan".to_string(), AttributeValue::from(2i64))]);
        assert_eq!(converted, vec![JsxAttribute::string("colSpan", "2")]);
    }

    #[test]
    fn converts_style_to_object() {
        let converted = convert_attributes(&attrs(&[("style", "color: red; background: red;")]));

        assert_eq!(
            converted,
            vec![JsxAttribute::expression(
                "style",
                Expression::Object(vec![
                    ObjectProperty::string("color", "red"),
                    ObjectProperty::string("background", "red"),
                ])
            )]
        );
    }

    #[test]
    fn drops_empty_style() {
        assert!(convert_attributes(&attrs(&[("style", "")])).is_empty());
    }

    #[test]
    fn skips_malformed_declarations() {
        let properties = parse_style("color; : red; margin:; padding: 0 ;;");
        assert_eq!(properties, vec![ObjectProperty::string("padding", "0")]);
    }

    #[test]
    fn splits_declarations_on_first_colon() {
        let properties = parse_style("background: url(http://example.com/a.png)");
        assert_eq!(
            properties,
            vec![ObjectProperty::string(
                "background",
                "url(http://example.com/a.png)"
            )]
        );
    }

    #[test]
    fn camel_cases_style_keys() {
        assert_eq!(style_key("background-color"), "backgroundColor");
        assert_eq!(style_key("-webkit-transition"), "WebkitTransition");
        assert_eq!(style_key("-ms-transform"), "msTransform");
        assert_eq!(style_key("Color"), "color");
        assert_eq!(style_key("--main-color"), "--main-color");
    }

    #[test]
    fn table_keys_are_unique_and_lower_case() {
        assert_eq!(ATTRIBUTE_INDEX.len(), ATTRIBUTE_NAMES.len());
        for (name, _) in ATTRIBUTE_NAMES {
            assert_eq!(*name, name.to_ascii_lowercase());
        }
    }
}
