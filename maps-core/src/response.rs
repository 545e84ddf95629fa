use crate::{
    error::{Error, Invalidation},
    operation::Operation,
    Result,
};
use serde_json::Value;
use std::fmt;

/// The `status` field of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    ZeroResults,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parsed response body of a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    operation: Operation,
    body: Value,
}

impl GeocodeResult {
    pub const fn new(operation: Operation, body: Value) -> Self {
        Self { operation, body }
    }

    pub fn from_json_str(operation: Operation, json: &str) -> Result<Self> {
        let body = serde_json::from_str(json)?;
        Ok(Self::new(operation, body))
    }

    pub const fn operation(&self) -> Operation {
        self.operation
    }

    pub const fn body(&self) -> &Value {
        &self.body
    }

    pub fn status(&self) -> Result<Status> {
        self.body
            .get("status")
            .and_then(Value::as_str)
            .map(Status::from)
            .ok_or_else(|| Error::structure("status"))
    }

    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error_message").and_then(Value::as_str)
    }

    /// The address components of the first result followed by
    /// its latitude and longitude.
    ///
    /// Derived from the response on every call.
    pub fn info(&self) -> Result<Vec<String>> {
        if self.operation != Operation::Geocode {
            return Err(Error::UnsupportedOperation(self.operation));
        }
        match self.status()? {
            Status::Ok => {}
            Status::ZeroResults => {
                return Err(Invalidation::ZeroResults(self.operation).into());
            }
            status => {
                log::warn!(
                    "Geocoding responded with status {}: {}",
                    status,
                    self.error_message().unwrap_or("no error message")
                );
            }
        }
        let first = self
            .body
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .ok_or_else(|| Error::structure("results[0]"))?;
        let components = first
            .get("address_components")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::structure("results[0].address_components"))?;

        let mut info = Vec::with_capacity(components.len() + 2);
        for (i, component) in components.iter().enumerate() {
            info.push(address_component_info(i, component)?);
        }

        let location = first
            .get("geometry")
            .and_then(|geometry| geometry.get("location"))
            .ok_or_else(|| Error::structure("results[0].geometry.location"))?;
        let lat = location
            .get("lat")
            .and_then(scalar_text)
            .ok_or_else(|| Error::structure("results[0].geometry.location.lat"))?;
        let lng = location
            .get("lng")
            .and_then(scalar_text)
            .ok_or_else(|| Error::structure("results[0].geometry.location.lng"))?;
        info.push(format!("latitude: {lat}"));
        info.push(format!("longitude: {lng}"));
        Ok(info)
    }
}

fn address_component_info(index: usize, component: &Value) -> Result<String> {
    let path = |field: &str| format!("results[0].address_components[{index}].{field}");
    let long_name = component
        .get("long_name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::structure(path("long_name")))?;
    let short_name = component
        .get("short_name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::structure(path("short_name")))?;
    let types = component
        .get("types")
        .filter(|types| types.is_array())
        .ok_or_else(|| Error::structure(path("types")))?;
    Ok(format!(
        "long name: {long_name}, short name: {short_name}, types: {types}"
    ))
}

// Numbers keep their JSON representation.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
