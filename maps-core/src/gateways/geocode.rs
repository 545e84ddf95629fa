use crate::{request::GeocodeRequest, response::GeocodeResult, Result};

pub trait GeoCodingGateway {
    /// Perform exactly one request and return the parsed response body.
    fn geocode(&self, request: &GeocodeRequest) -> Result<GeocodeResult>;
}
