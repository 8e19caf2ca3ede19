// Handler Arguments

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Marker for an argument field the operation does not declare.
///
/// Carries no data, is never decoded from the request and is left out of the
/// argument object's serialized shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Serialize for Absent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

/// One field of [`HandlerArgs`]: either a decodable type or [`Absent`]
pub trait ArgField: Sized + Send + 'static {
    /// Whether the operation declares this field
    const PRESENT: bool = true;

    /// Decode the field from its raw request value
    fn extract(field: &'static str, raw: Value) -> Result<Self>;

    fn is_absent(&self) -> bool {
        !Self::PRESENT
    }
}

impl<T> ArgField for T
where
    T: DeserializeOwned + Send + 'static,
{
    fn extract(field: &'static str, raw: Value) -> Result<Self> {
        serde_json::from_value(raw).map_err(|e| AppError::InvalidArgument {
            field,
            message: e.to_string(),
        })
    }
}

impl ArgField for Absent {
    const PRESENT: bool = false;

    fn extract(_field: &'static str, _raw: Value) -> Result<Self> {
        Ok(Absent)
    }
}

/// Argument object passed to an idiomatic handler
///
/// Handlers destructure the fields they declared:
///
/// ```
/// use marquee_core::application::handler::{Absent, HandlerArgs};
///
/// fn movie_id(HandlerArgs { params, .. }: HandlerArgs<Absent, String>) -> String {
///     params
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(bound(serialize = "Q: Serialize + ArgField, P: Serialize + ArgField, B: Serialize + ArgField"))]
pub struct HandlerArgs<Q = Absent, P = Absent, B = Absent> {
    #[serde(skip_serializing_if = "ArgField::is_absent")]
    pub query: Q,
    #[serde(skip_serializing_if = "ArgField::is_absent")]
    pub params: P,
    #[serde(skip_serializing_if = "ArgField::is_absent")]
    pub body: B,
}

impl<Q: ArgField, P: ArgField, B: ArgField> HandlerArgs<Q, P, B> {
    /// Build the argument object from raw request pieces
    pub fn extract(query: Value, params: Value, body: Value) -> Result<Self> {
        Ok(Self {
            query: Q::extract("query", query)?,
            params: P::extract("params", params)?,
            body: B::extract("body", body)?,
        })
    }

    /// Names of the fields this argument shape declares, in order
    pub fn declared_fields() -> Vec<&'static str> {
        [
            ("query", Q::PRESENT),
            ("params", P::PRESENT),
            ("body", B::PRESENT),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}
