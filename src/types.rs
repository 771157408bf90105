//! Output data model for a scrape run.
//!
//! A single [`TireData`] record is built once at the end of a successful run
//! and serialized to `tire_data.json`. The metadata counts are derived from
//! the size maps at construction time and are not independently settable.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireData {
    pub product_info: ProductInfo,
    pub available_sizes: AvailableSizes,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub name: String,
    pub base_product_id: String,
    pub price_range: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSizes {
    pub rim_diameters: BTreeMap<String, RimDiameter>,
    pub tire_sizes: BTreeMap<String, TireSize>,
}

/// One rim-diameter variation, keyed in the parent map by its diameter code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RimDiameter {
    pub value: String,
    pub specs: SpecLinks,
}

/// One tire-size variation with its parsed size components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireSize {
    pub size: String,
    pub width: String,
    pub aspect_ratio: String,
    pub construction: String,
    pub diameter: String,
    pub product_id: String,
    pub specs: SpecLinks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecLinks {
    pub url: String,
    pub full_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub scraped_url: String,
    pub scraped_at: String,
    pub scraped_timestamp: i64,
    pub timezone: String,
    pub counts: Counts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    pub rim_diameters: usize,
    pub tire_sizes: usize,
}

impl TireData {
    /// Assembles the record and derives the metadata block. Counts always
    /// equal the map sizes because they are computed here and nowhere else.
    pub fn new(
        product_info: ProductInfo,
        available_sizes: AvailableSizes,
        scraped_url: &str,
        scraped_at: DateTime<Utc>,
        timezone: String,
    ) -> Self {
        let counts = Counts {
            rim_diameters: available_sizes.rim_diameters.len(),
            tire_sizes: available_sizes.tire_sizes.len(),
        };

        Self {
            product_info,
            available_sizes,
            metadata: Metadata {
                scraped_url: scraped_url.to_string(),
                scraped_at: scraped_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                scraped_timestamp: scraped_at.timestamp(),
                timezone,
                counts,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_sizes() -> AvailableSizes {
        let mut sizes = AvailableSizes::default();
        sizes.rim_diameters.insert(
            "18".to_string(),
            RimDiameter {
                value: "18".to_string(),
                specs: SpecLinks::default(),
            },
        );
        sizes.tire_sizes.insert(
            "235/65R18".to_string(),
            TireSize {
                size: "235/65R18".to_string(),
                width: "235".to_string(),
                aspect_ratio: "65".to_string(),
                construction: "R".to_string(),
                diameter: "18".to_string(),
                product_id: "ABC123".to_string(),
                specs: SpecLinks::default(),
            },
        );
        sizes
    }

    fn sample_data() -> TireData {
        TireData::new(
            ProductInfo {
                name: "Assurance WeatherReady 2".to_string(),
                base_product_id: "24987".to_string(),
                price_range: "$129.99 each".to_string(),
            },
            sample_sizes(),
            "https://example.com/tire",
            Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
            "America/New_York".to_string(),
        )
    }

    #[test]
    fn counts_match_map_sizes() {
        let data = sample_data();
        assert_eq!(
            data.metadata.counts.rim_diameters,
            data.available_sizes.rim_diameters.len()
        );
        assert_eq!(
            data.metadata.counts.tire_sizes,
            data.available_sizes.tire_sizes.len()
        );
    }

    #[test]
    fn counts_match_for_empty_maps() {
        let data = TireData::new(
            ProductInfo {
                name: "Product name not found".to_string(),
                base_product_id: "24987".to_string(),
                price_range: "Price not found".to_string(),
            },
            AvailableSizes::default(),
            "https://example.com/tire",
            Utc::now(),
            "UTC".to_string(),
        );
        assert_eq!(data.metadata.counts, Counts { rim_diameters: 0, tire_sizes: 0 });
    }

    #[test]
    fn metadata_timestamps_agree() {
        let data = sample_data();
        assert_eq!(data.metadata.scraped_at, "2025-03-14T09:26:53.000Z");
        assert_eq!(data.metadata.scraped_timestamp, 1741944413);
    }

    #[test]
    fn serializes_camel_case_keys() {
        let json = serde_json::to_string(&sample_data()).expect("serialize tire data");
        assert!(json.contains("\"productInfo\""));
        assert!(json.contains("\"availableSizes\""));
        assert!(json.contains("\"rimDiameters\""));
        assert!(json.contains("\"tireSizes\""));
        assert!(json.contains("\"aspectRatio\":\"65\""));
        assert!(json.contains("\"fullUrl\""));
        assert!(json.contains("\"scrapedAt\""));
        assert!(json.contains("\"scrapedTimestamp\""));
        assert!(json.contains("\"baseProductId\":\"24987\""));
    }

    #[test]
    fn deserializes_back() {
        let json = serde_json::to_string_pretty(&sample_data()).unwrap();
        let parsed: TireData = serde_json::from_str(&json).expect("round trip");
        assert_eq!(parsed.metadata.counts.tire_sizes, 1);
        assert_eq!(
            parsed.available_sizes.tire_sizes["235/65R18"].product_id,
            "ABC123"
        );
    }
}
