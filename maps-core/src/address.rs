use crate::error::Invalidation;
use itertools::Itertools;

/// Street address, area (town/city/municipality) and
/// division (province/state) of a location.
///
/// All three parts are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    street_address: String,
    area: String,
    division: String,
}

impl AddressQuery {
    pub fn new(
        street_address: impl Into<String>,
        area: impl Into<String>,
        division: impl Into<String>,
    ) -> Result<Self, Invalidation> {
        let street_address = non_empty(street_address.into(), Invalidation::StreetAddress)?;
        let area = non_empty(area.into(), Invalidation::Area)?;
        let division = non_empty(division.into(), Invalidation::Division)?;
        Ok(Self {
            street_address,
            area,
            division,
        })
    }

    pub fn street_address(&self) -> &str {
        &self.street_address
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn division(&self) -> &str {
        &self.division
    }

    /// The value of the `address` query parameter.
    ///
    /// Spaces become `+` and the parts are joined by `,+`.
    /// No other characters are escaped.
    pub fn to_query_fragment(&self) -> String {
        [&self.street_address, &self.area, &self.division]
            .into_iter()
            .map(|part| part.replace(' ', "+"))
            .join(",+")
    }
}

fn non_empty(s: String, err: Invalidation) -> Result<String, Invalidation> {
    if s.is_empty() {
        Err(err)
    } else {
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_fragment() {
        let addr = AddressQuery::new("94 Auburn Lane", "Courtice", "Ontario").unwrap();
        assert_eq!(
            addr.to_query_fragment(),
            "94+Auburn+Lane,+Courtice,+Ontario"
        );
        let addr = AddressQuery::new("227 Daly Ave", "Ottawa", "New Brunswick").unwrap();
        assert_eq!(
            addr.to_query_fragment(),
            "227+Daly+Ave,+Ottawa,+New+Brunswick"
        );
    }

    #[test]
    fn reject_empty_parts() {
        assert_eq!(
            AddressQuery::new("", "Courtice", "Ontario").unwrap_err(),
            Invalidation::StreetAddress
        );
        assert_eq!(
            AddressQuery::new("94 Auburn Lane", "", "Ontario").unwrap_err(),
            Invalidation::Area
        );
        assert_eq!(
            AddressQuery::new("94 Auburn Lane", "Courtice", "").unwrap_err(),
            Invalidation::Division
        );
    }
}
