//! Frontend Models
//!
//! Catalog records as served by `menu.json`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A display value that may arrive as a JSON number or string
///
/// Rendered verbatim, never converted. Absent or `null` values render empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Number(n) => write!(f, "{}", n),
            DisplayValue::Text(s) => f.write_str(s),
            DisplayValue::Missing => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for DisplayValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => DisplayValue::Number(n),
            other => scalar_text(&other).map_or(DisplayValue::Missing, DisplayValue::Text),
        })
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue::Text(s.to_string())
    }
}

impl From<u64> for DisplayValue {
    fn from(n: u64) -> Self {
        DisplayValue::Number(n.into())
    }
}

/// Category of a menu item: one label or an ordered list of labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    One(String),
    Many(Vec<String>),
}

impl Category {
    /// Space-joined tag, case preserved
    pub fn tag(&self) -> String {
        match self {
            Category::One(label) => label.clone(),
            Category::Many(labels) => labels.join(" "),
        }
    }
}

/// Nutrition facts, each an opaque display value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: DisplayValue,
    pub carbs: DisplayValue,
    pub protein: DisplayValue,
    pub fats: DisplayValue,
}

/// One catalog entry (matches `menu.json`)
///
/// Missing or wrongly typed fields fall back to empty values; no record is
/// rejected. Scalars in text fields are rendered as their JSON text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub image: String,
    pub rating: DisplayValue,
    #[serde(deserialize_with = "lenient_text")]
    pub price: String,
    #[serde(deserialize_with = "lenient_optional_text")]
    pub original_price: Option<String>,
    #[serde(deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    #[serde(deserialize_with = "lenient_nutrition")]
    pub nutrition: Nutrition,
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(&Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(&Value::deserialize(deserializer)?))
}

fn lenient_category<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Category>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(labels) => Some(Category::Many(labels.iter().filter_map(scalar_text).collect())),
        other => scalar_text(&other).map(Category::One),
    })
}

fn lenient_nutrition<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Nutrition, D::Error> {
    // Anything but an object renders as empty facts
    Ok(Nutrition::deserialize(Value::deserialize(deserializer)?).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_scalar_and_list() {
        let one: Category = serde_json::from_str(r#""Dessert""#).unwrap();
        assert_eq!(one.tag(), "Dessert");

        let many: Category = serde_json::from_str(r#"["Vegan", "bowl"]"#).unwrap();
        assert_eq!(many.tag(), "Vegan bowl");
    }

    #[test]
    fn test_display_value_keeps_source_text() {
        let item: MenuItem = serde_json::from_str(
            r#"{"rating": 4.5, "nutrition": {"calories": 450, "carbs": "52", "fats": null}}"#,
        )
        .unwrap();

        assert_eq!(item.rating.to_string(), "4.5");
        assert_eq!(item.nutrition.calories.to_string(), "450");
        assert_eq!(item.nutrition.carbs.to_string(), "52");
        assert_eq!(item.nutrition.fats, DisplayValue::Missing);
        assert_eq!(item.nutrition.protein.to_string(), "");
    }

    #[test]
    fn test_malformed_item_uses_defaults() {
        let item: MenuItem = serde_json::from_str(r#"{"price": "$4"}"#).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.price, "$4");
        assert!(item.category.is_none());
        assert!(item.original_price.is_none());
    }

    #[test]
    fn test_wrongly_typed_fields_render_as_text() {
        let item: MenuItem = serde_json::from_str(
            r#"{"name": null, "price": 9, "originalPrice": 12.5, "category": 7,
                "nutrition": "n/a", "rating": true}"#,
        )
        .unwrap();

        assert_eq!(item.name, "");
        assert_eq!(item.price, "9");
        assert_eq!(item.original_price.as_deref(), Some("12.5"));
        assert_eq!(item.category, Some(Category::One("7".into())));
        assert_eq!(item.nutrition, Nutrition::default());
        assert_eq!(item.rating.to_string(), "true");
    }

    #[test]
    fn test_original_price_camel_case() {
        let item: MenuItem =
            serde_json::from_str(r#"{"name": "Toast", "originalPrice": "$12"}"#).unwrap();
        assert_eq!(item.original_price.as_deref(), Some("$12"));
    }
}
