use crate::{
    address::AddressQuery,
    error::{Error, Invalidation},
    gateways::geocode::GeoCodingGateway,
    operation::Operation,
    response::GeocodeResult,
    Result,
};

/// Collects the parts of a [`GeocodeRequest`].
///
/// The setters store their values verbatim; validation
/// happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct GeocodeRequestBuilder {
    street_address: Option<String>,
    area: Option<String>,
    division: Option<String>,
    operation: Option<Operation>,
}

impl GeocodeRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Just the street address, e.g. `123 Main Street`.
    pub fn street_address(mut self, street_address: impl Into<String>) -> Self {
        self.street_address = Some(street_address.into());
        self
    }

    /// The town/city/municipality of the street address.
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// The province/state of the area.
    pub fn division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self
    }

    pub fn operation(mut self, operation: Operation) -> Result<Self> {
        if !operation.is_supported() {
            return Err(Error::UnsupportedOperation(operation));
        }
        self.operation = Some(operation);
        Ok(self)
    }

    pub fn build(self) -> Result<GeocodeRequest> {
        let Self {
            street_address,
            area,
            division,
            operation,
        } = self;
        let operation = operation.ok_or(Invalidation::Operation)?;
        let address = AddressQuery::new(
            street_address.unwrap_or_default(),
            area.unwrap_or_default(),
            division.unwrap_or_default(),
        )?;
        GeocodeRequest::new(operation, address)
    }
}

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    operation: Operation,
    address: AddressQuery,
}

impl GeocodeRequest {
    pub fn new(operation: Operation, address: AddressQuery) -> Result<Self> {
        if !operation.is_supported() {
            return Err(Error::UnsupportedOperation(operation));
        }
        Ok(Self { operation, address })
    }

    pub const fn operation(&self) -> Operation {
        self.operation
    }

    pub const fn address(&self) -> &AddressQuery {
        &self.address
    }

    pub fn address_fragment(&self) -> String {
        self.address.to_query_fragment()
    }

    /// `<base>/<operation>/json?address=<address>&key=<api_key>`
    pub fn url(&self, api_base_url: &str, api_key: &str) -> String {
        format!(
            "{}/{}/json?address={}&key={}",
            api_base_url.trim_end_matches('/'),
            self.operation,
            self.address_fragment(),
            api_key
        )
    }

    pub fn send<G>(&self, gateway: &G) -> Result<GeocodeResult>
    where
        G: GeoCodingGateway + ?Sized,
    {
        gateway.geocode(self)
    }
}
