//! Request validation from declarative per-route rule tables.
//!
//! A [`RuleSet`] is an ordered list of [`Rule`]s. Every rule is checked, failing rules
//! contribute one [`FieldError`] each, and a non-empty list rejects the request.

pub mod rules;

use crate::error::AppError;
use serde::Serialize;
use serde_json::{Map, Value};

pub use rules::{CREATE_PRODUCT, PRODUCT_ID, UPDATE_PRODUCT};

/// Where a validated field came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One failed rule, serialized as `{type, value?, msg, param, location}`.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    pub msg: String,
    pub param: String,
    pub location: Location,
}

/// Predicate over a field's raw value; `None` means the field was not supplied.
pub type Check = fn(Option<&Value>) -> bool;

#[derive(Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub location: Location,
    pub check: Check,
    pub message: &'static str,
    /// Skip the rule entirely when the field is absent.
    pub optional: bool,
}

impl Rule {
    pub const fn param(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            location: Location::Params,
            check,
            message,
            optional: false,
        }
    }

    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            location: Location::Body,
            check,
            message,
            optional: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn apply(&self, input: &RequestInput<'_>) -> Option<FieldError> {
        let value = input.get(self.location, self.field);
        if self.optional && value.is_none() {
            return None;
        }
        if (self.check)(value) {
            return None;
        }
        Some(FieldError {
            kind: "field".to_string(),
            value: value.cloned(),
            msg: self.message.to_string(),
            param: self.field.to_string(),
            location: self.location,
        })
    }
}

/// Path parameters and decoded JSON body of one request.
pub struct RequestInput<'a> {
    pub params: &'a Map<String, Value>,
    pub body: &'a Map<String, Value>,
}

impl<'a> RequestInput<'a> {
    fn get(&self, location: Location, field: &str) -> Option<&'a Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.get(field),
        }
    }
}

pub struct RuleSet {
    pub rules: &'static [Rule],
}

impl RuleSet {
    /// Run every rule in order and collect the failures.
    pub fn check(&self, input: &RequestInput<'_>) -> Vec<FieldError> {
        self.rules.iter().filter_map(|rule| rule.apply(input)).collect()
    }

    /// Like [`RuleSet::check`], but turns a non-empty error list into [`AppError::Validation`].
    pub fn enforce(&self, input: &RequestInput<'_>) -> Result<(), AppError> {
        let errors = self.check(input);
        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = errors.len(), "request rejected by validation");
            Err(AppError::Validation(errors))
        }
    }
}

/// Path parameters map for routes keyed by `:id`.
pub fn id_params(raw: &str) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("id".to_string(), Value::String(raw.to_string()));
    params
}
