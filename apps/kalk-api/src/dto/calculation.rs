//! DTOs for calculation endpoints

use std::fmt;

use kalk_domain::Factorials;
use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use utoipa::ToSchema;

/// Request body for the calculate endpoint
///
/// Both fields are optional at the decoding stage so that an absent field
/// stays distinguishable from zero; the validator rejects absent values.
///
/// Keys match case-insensitively (`"A"` reads as `a`), a repeated key keeps
/// its last value and unknown keys are skipped.
#[derive(Debug, Default, PartialEq, Eq, ToSchema)]
pub struct CalculateRequest {
    /// Non-negative integer whose factorial is returned as `a`
    #[schema(example = 2)]
    pub a: Option<i64>,
    /// Non-negative integer whose factorial is returned as `b`
    #[schema(example = 3)]
    pub b: Option<i64>,
}

impl<'de> Deserialize<'de> for CalculateRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CalculateRequestVisitor)
    }
}

struct CalculateRequestVisitor;

impl<'de> Visitor<'de> for CalculateRequestVisitor {
    type Value = CalculateRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with integer fields `a` and `b`")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut request = CalculateRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("a") {
                request.a = map.next_value()?;
            } else if key.eq_ignore_ascii_case("b") {
                request.b = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(request)
    }
}

/// Response body for a successful calculation
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculateResponse {
    /// `a!`
    #[schema(example = 2)]
    pub a: u64,
    /// `b!`
    #[schema(example = 6)]
    pub b: u64,
}

impl From<Factorials> for CalculateResponse {
    fn from(factorials: Factorials) -> Self {
        Self {
            a: factorials.a(),
            b: factorials.b(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "Incorrect input")]
    pub error: String,
}
