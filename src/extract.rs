//! DOM extraction passes over a captured page snapshot.
//!
//! The capture script hands back raw attribute bundles; everything here is
//! pure string work: price normalization, the size-code grammar, and the two
//! variation maps.

use crate::browser::{PageSnapshot, VariationInput};
use crate::types::{AvailableSizes, ProductInfo, RimDiameter, SpecLinks, TireSize};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Reported when no price selector candidate matched.
pub const PRICE_NOT_FOUND: &str = "Price not found";

/// Reported when the page had no primary heading.
pub const NAME_NOT_FOUND: &str = "Product name not found";

/// Size codes look like "235/65R18": width, aspect ratio, radial marker,
/// rim diameter. Anything else is dropped from the output.
fn size_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)/(\d+)R(\d+)$").expect("valid size-code pattern"))
}

/// Builds the product info block from the captured heading and price text.
/// Missing elements degrade to sentinel values; they are not errors.
pub fn product_info(snapshot: &PageSnapshot, base_product_id: &str) -> ProductInfo {
    let name = snapshot
        .heading
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(NAME_NOT_FOUND)
        .to_string();

    let price_range = match snapshot.price_text.as_deref() {
        Some(raw) => normalize_price(raw),
        None => PRICE_NOT_FOUND.to_string(),
    };

    ProductInfo {
        name,
        base_product_id: base_product_id.to_string(),
        price_range,
    }
}

/// Collapses whitespace runs to single spaces, trims, and rewrites a trailing
/// "ea" unit marker to the word "each".
pub fn normalize_price(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_suffix("ea") {
        Some(prefix) => format!("{} each", prefix.trim_end()),
        None => collapsed,
    }
}

/// Builds both variation maps from the captured input bundles.
pub fn available_sizes(snapshot: &PageSnapshot) -> AvailableSizes {
    AvailableSizes {
        rim_diameters: rim_diameters(&snapshot.rim_inputs),
        tire_sizes: tire_sizes(&snapshot.tire_inputs),
    }
}

/// Maps each rim-diameter input by its value attribute. No format validation;
/// duplicate values overwrite earlier entries.
pub fn rim_diameters(inputs: &[VariationInput]) -> BTreeMap<String, RimDiameter> {
    let mut diameters = BTreeMap::new();
    for input in inputs {
        diameters.insert(
            input.value.clone(),
            RimDiameter {
                value: input.data_value.clone(),
                specs: SpecLinks {
                    url: input.data_url.clone(),
                    full_url: input.value.clone(),
                },
            },
        );
    }
    diameters
}

/// Maps each tire-size input by its element id, parsed against the size-code
/// grammar. Inputs whose id does not match are dropped without comment.
pub fn tire_sizes(inputs: &[VariationInput]) -> BTreeMap<String, TireSize> {
    let mut sizes = BTreeMap::new();
    for input in inputs {
        let Some(captures) = size_code_pattern().captures(&input.id) else {
            continue;
        };

        sizes.insert(
            input.id.clone(),
            TireSize {
                size: input.id.clone(),
                width: captures[1].to_string(),
                aspect_ratio: captures[2].to_string(),
                construction: "R".to_string(),
                diameter: captures[3].to_string(),
                product_id: product_id_from_value(&input.value),
                specs: SpecLinks {
                    url: input.data_url.clone(),
                    full_url: input.value.clone(),
                },
            },
        );
    }
    sizes
}

/// Takes the portion of a URL-like value attribute after the first `pid=`,
/// or the empty string when the marker is absent.
pub fn product_id_from_value(value: &str) -> String {
    value
        .split_once("pid=")
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_default()
}
