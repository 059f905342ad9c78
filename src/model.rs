//! Product rows and the typed inputs derived from validated request bodies.

use crate::validation::rules::{as_bool, numeric_value, string_form};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection: no id and no timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct ProductSummary {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            price: p.price,
            availability: p.availability,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl NewProduct {
    /// Build from a body that passed `CREATE_PRODUCT`. Availability defaults to `true`.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        Self {
            name: string_form(body.get("name")),
            price: numeric_value(body.get("price")),
            availability: body.get("availability").map_or(true, |v| as_bool(Some(v))),
        }
    }
}

/// Full replacement of the writable fields (PUT).
#[derive(Clone, Debug, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl ProductChanges {
    /// Build from a body that passed `UPDATE_PRODUCT`.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        Self {
            name: string_form(body.get("name")),
            price: numeric_value(body.get("price")),
            availability: as_bool(body.get("availability")),
        }
    }
}

/// Price-ascending listing capped at `limit` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
}

/// Request-body schemas for the OpenAPI document.
pub mod docs {
    use serde::Deserialize;
    use utoipa::ToSchema;

    #[derive(Deserialize, ToSchema)]
    pub struct CreateProductRequest {
        #[schema(example = "Monitor Curvo de 49 Pulgadas")]
        pub name: String,
        #[schema(example = 399.0)]
        pub price: f64,
        pub availability: Option<bool>,
    }

    #[derive(Deserialize, ToSchema)]
    pub struct UpdateProductRequest {
        #[schema(example = "Monitor Curvo de 49 Pulgadas")]
        pub name: String,
        #[schema(example = 399.0)]
        pub price: f64,
        #[schema(example = true)]
        pub availability: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn new_product_defaults_to_available() {
        let p = NewProduct::from_body(&map(json!({ "name": "Mouse", "price": "60.5" })));
        assert_eq!(
            p,
            NewProduct { name: "Mouse".into(), price: 60.5, availability: true }
        );
        let p = NewProduct::from_body(&map(json!({ "name": "Mouse", "price": 1, "availability": false })));
        assert!(!p.availability);
    }

    #[test]
    fn changes_read_boolean_strings() {
        let c = ProductChanges::from_body(&map(json!({ "name": "Monitor", "price": 400, "availability": "0" })));
        assert_eq!(c.price, 400.0);
        assert!(!c.availability);
    }

    #[test]
    fn product_serializes_timestamps_in_camel_case() {
        let now = Utc::now();
        let p = Product {
            id: 1,
            name: "Mouse".into(),
            price: 60.0,
            availability: true,
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("createdAt").is_some());
        assert!(v.get("updatedAt").is_some());
        assert!(v.get("created_at").is_none());
    }
}
