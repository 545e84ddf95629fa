//! Request building and response extraction for the Google Maps
//! geocoding web service.
//!
//! The network transport lives behind [`gateways::geocode::GeoCodingGateway`],
//! so everything in here is free of I/O.

pub mod address;
pub mod error;
pub mod gateways;
pub mod operation;
pub mod request;
pub mod response;
pub mod usecases;

pub use self::{
    address::AddressQuery,
    error::{Error, ErrorKind, Invalidation},
    operation::Operation,
    request::{GeocodeRequest, GeocodeRequestBuilder},
    response::{GeocodeResult, Status},
};

pub type Result<T> = std::result::Result<T, Error>;
