//! Raw capture payload types and conversion from the Playwright script output.

use serde::Deserialize;

/// Top-level script result as printed on stdout by the capture script.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCaptureResult {
    pub status: String,
    pub page: Option<RawPage>,
    #[serde(default)]
    pub screenshot_error: Option<String>,
}

/// Raw page snapshot as assembled in page context.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPage {
    pub heading: Option<String>,
    pub price_text: Option<String>,
    #[serde(default)]
    pub rim_inputs: Vec<RawVariationInput>,
    #[serde(default)]
    pub tire_inputs: Vec<RawVariationInput>,
}

/// Attribute bundle for one variation radio input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawVariationInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub data_value: String,
    #[serde(default)]
    pub data_url: String,
}

/// Everything the extraction passes need from the rendered page.
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    /// Raw `h1` text, if the page had one.
    pub heading: Option<String>,
    /// Raw text of the first matching price element, if any.
    pub price_text: Option<String>,
    /// Attribute bundles for `input[name="rimDiameter"]` controls.
    pub rim_inputs: Vec<VariationInput>,
    /// Attribute bundles for `input[name="tireSizeCode"]` controls.
    pub tire_inputs: Vec<VariationInput>,
    /// Set when the screenshot attempt failed; extraction still succeeded.
    pub screenshot_error: Option<String>,
}

/// Attribute bundle for one variation input, absent attributes as empty strings.
#[derive(Debug, Clone, Default)]
pub struct VariationInput {
    pub id: String,
    pub value: String,
    pub data_value: String,
    pub data_url: String,
}

/// Converts the raw script payload into the application's snapshot type.
pub(crate) fn convert_raw_page(page: RawPage, screenshot_error: Option<String>) -> PageSnapshot {
    let convert = |raw: Vec<RawVariationInput>| {
        raw.into_iter()
            .map(|input| VariationInput {
                id: input.id,
                value: input.value,
                data_value: input.data_value,
                data_url: input.data_url,
            })
            .collect()
    };

    PageSnapshot {
        heading: page.heading,
        price_text: page.price_text,
        rim_inputs: convert(page.rim_inputs),
        tire_inputs: convert(page.tire_inputs),
        screenshot_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_capture_result_deserializes() {
        let json = r#"{
            "status": "ok",
            "page": {
                "heading": "Assurance WeatherReady 2",
                "priceText": "  $129.99   ea ",
                "rimInputs": [
                    {"id": "", "value": "17", "dataValue": "17\"", "dataUrl": "/specs/17"}
                ],
                "tireInputs": [
                    {"id": "235/65R18", "value": "/p?pid=ABC123", "dataValue": "", "dataUrl": "/specs/235-65"}
                ]
            },
            "screenshotError": null
        }"#;

        let result: RawCaptureResult = serde_json::from_str(json).expect("parse capture result");
        assert_eq!(result.status, "ok");
        assert!(result.screenshot_error.is_none());

        let page = result.page.expect("page present");
        assert_eq!(page.heading.as_deref(), Some("Assurance WeatherReady 2"));
        assert_eq!(page.price_text.as_deref(), Some("  $129.99   ea "));
        assert_eq!(page.rim_inputs.len(), 1);
        assert_eq!(page.rim_inputs[0].value, "17");
        assert_eq!(page.rim_inputs[0].data_value, "17\"");
        assert_eq!(page.tire_inputs[0].id, "235/65R18");
        assert_eq!(page.tire_inputs[0].data_url, "/specs/235-65");
    }

    #[test]
    fn raw_capture_result_defaults_missing_fields() {
        let json = r#"{
            "status": "ok",
            "page": {
                "heading": null,
                "priceText": null,
                "rimInputs": [{}]
            }
        }"#;

        let result: RawCaptureResult = serde_json::from_str(json).expect("parse sparse result");
        let page = result.page.unwrap();
        assert!(page.heading.is_none());
        assert!(page.tire_inputs.is_empty());
        assert_eq!(page.rim_inputs[0].value, "");
        assert_eq!(page.rim_inputs[0].data_url, "");
    }

    #[test]
    fn convert_raw_page_copies_bundles() {
        let page = RawPage {
            heading: Some("Tire".into()),
            price_text: None,
            rim_inputs: vec![RawVariationInput {
                id: String::new(),
                value: "18".into(),
                data_value: "18\"".into(),
                data_url: "/specs/18".into(),
            }],
            tire_inputs: vec![],
        };

        let snapshot = convert_raw_page(page, Some("disk full".into()));
        assert_eq!(snapshot.heading.as_deref(), Some("Tire"));
        assert!(snapshot.price_text.is_none());
        assert_eq!(snapshot.rim_inputs[0].data_value, "18\"");
        assert_eq!(snapshot.screenshot_error.as_deref(), Some("disk full"));
    }
}
