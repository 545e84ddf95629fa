use crate::{gateways::geocode::GeoCodingGateway, request::GeocodeRequest, Result};

pub fn geocode_address<G>(gateway: &G, request: &GeocodeRequest) -> Result<Vec<String>>
where
    G: GeoCodingGateway + ?Sized,
{
    let info = request.send(gateway)?.info()?;
    log::info!(
        "Resolved address '{}' into {} entries",
        request.address_fragment(),
        info.len()
    );
    Ok(info)
}
