//! Catalog Loader
//!
//! Fetches `menu.json` and parses it into menu items.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{MenuError, MenuResult};
use crate::models::MenuItem;

/// Parse a catalog body. The top level must be a JSON array; an element that
/// is not a record renders as an empty item instead of failing the catalog.
pub fn parse_catalog(body: &str) -> MenuResult<Vec<MenuItem>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .map(|record| serde_json::from_value(record).unwrap_or_default())
        .collect())
}

/// GET the catalog and parse it
pub async fn fetch_catalog(url: &str) -> MenuResult<Vec<MenuItem>> {
    let body = fetch_text(url).await?;
    parse_catalog(&body)
}

async fn fetch_text(url: &str) -> MenuResult<String> {
    let fetch_err = |reason: String| MenuError::Fetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fetch_err("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| fetch_err(js_reason(&e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_err(js_reason(&e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| fetch_err(js_reason(&e)))?;

    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }

    let text = JsFuture::from(resp.text().map_err(|e| fetch_err(js_reason(&e)))?)
        .await
        .map_err(|e| fetch_err(js_reason(&e)))?;
    text.as_string()
        .ok_or_else(|| fetch_err("response body is not text".into()))
}

fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_keeps_order() {
        let items = parse_catalog(
            r#"[
                {"name": "Bowl A", "category": ["vegan", "bowl"], "price": "$9"},
                {"name": "Cake", "category": "dessert", "price": "$5"},
                {"name": "Wrap", "category": "lunch", "price": "$7"}
            ]"#,
        )
        .unwrap();

        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bowl A", "Cake", "Wrap"]);
    }

    #[test]
    fn test_parse_catalog_empty_list() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_catalog_keeps_bad_records() {
        let items = parse_catalog(
            r#"[
                {"name": "Bowl A", "price": "$9"},
                {"name": "Soup", "price": 9},
                {"name": null, "price": "$4"},
                42
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].price, "$9");
        assert_eq!(items[1].price, "9");
        assert_eq!(items[2].name, "");
        assert_eq!(items[3], MenuItem::default());
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        assert!(matches!(parse_catalog("<html>404</html>"), Err(MenuError::Parse(_))));
        assert!(matches!(parse_catalog(r#"{"name": "x"}"#), Err(MenuError::Parse(_))));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let items = parse_catalog(include_str!("../menu.json")).unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.category.is_some()));
    }
}
