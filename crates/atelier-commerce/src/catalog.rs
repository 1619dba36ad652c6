//! Product records as served by the product service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ids::ProductId;

/// A product in the catalog.
///
/// The product service is loosely typed: apart from the identifier every
/// field may be missing, `null` or of the wrong type, in which case it reads
/// as empty. Numbers sent as strings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Price, used directly as a display number.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    /// Units in stock.
    #[serde(default, deserialize_with = "lenient_stock")]
    pub stock: i64,
    /// Long description.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Image URLs, first one is the default main image.
    #[serde(default, deserialize_with = "string_list")]
    pub images: Vec<String>,
    /// Available colors.
    #[serde(default, rename = "color", deserialize_with = "string_list")]
    pub colors: Vec<String>,
    /// Available sizes.
    #[serde(default, rename = "size", deserialize_with = "string_list")]
    pub sizes: Vec<String>,
    /// Free-form descriptive fields (fabric, care, origin, ...).
    #[serde(default, deserialize_with = "object")]
    pub details: Map<String, Value>,
}

impl Product {
    /// Create a product with only an id and a name.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: 0.0,
            stock: 0,
            description: String::new(),
            images: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            details: Map::new(),
        }
    }

    /// The first listed image, if any.
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Image at a zero-based thumbnail position.
    pub fn image_at(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// Stock availability.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock > 0 {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Struck-through "was" price shown next to the current price.
    pub fn compare_at_price(&self, markup: f64) -> f64 {
        self.price + markup
    }

    /// Display text of a detail field; missing or `null` reads as empty.
    pub fn detail(&self, key: &str) -> String {
        match self.details.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Check if a size is offered.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if a color is offered.
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

/// Stock availability badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Badge CSS class.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "stock-in",
            StockStatus::OutOfStock => "stock-out",
        }
    }
}

/// A labelled entry of the product details record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailField {
    /// Key in the `details` object.
    pub key: &'static str,
    /// Label shown to shoppers.
    pub label: &'static str,
}

/// Detail fields in display order.
pub const DETAIL_FIELDS: &[DetailField] = &[
    DetailField { key: "fabric", label: "Fabric" },
    DetailField { key: "careInstructions", label: "Care Instructions" },
    DetailField { key: "fabricCare", label: "FabricCare" },
    DetailField { key: "hooded", label: "Hooded" },
    DetailField { key: "knitType", label: "KnitType" },
    DetailField { key: "material", label: "Material" },
    DetailField { key: "neck", label: "Neck" },
    DetailField { key: "netQuantity", label: "NetQuantity" },
    DetailField { key: "occasion", label: "Occasion" },
    DetailField { key: "origin", label: "Origin" },
    DetailField { key: "pattern", label: "Pattern" },
    DetailField { key: "pockets", label: "Pockets" },
    DetailField { key: "reversible", label: "Reversible" },
    DetailField { key: "secondaryColor", label: "SecondaryColor" },
    DetailField { key: "shippingInfo", label: "ShippingInfo" },
    DetailField { key: "sleeve", label: "Sleeve" },
    DetailField { key: "styleCode", label: "StyleCode" },
    DetailField { key: "suitableFor", label: "SuitableFor" },
];

// Field decoders. Each reads the raw value and falls back to the default
// instead of failing the whole product.

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let price = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(price.filter(|p| p.is_finite()).unwrap_or_default())
}

fn lenient_stock<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let stock = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        _ => None,
    };
    Ok(stock.unwrap_or_default())
}

fn whole_number(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64).then_some(value as i64)
}

fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}
