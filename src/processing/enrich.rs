//! Geo and owner enrichment of aggregated CIDRs.

use super::aggregate::CidrMap;
use crate::config::LARGE_CIDR_SIZE;
use crate::errors::SgIpsError;
use crate::geoip::{CityInfo, GeoLookup};
use crate::models::{Advisories, Advisory, Coordinate, EnrichedCidr, Ipv4};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Owner name used when the ASN database has no record.
pub const UNKNOWN: &str = "Unknown";
/// Sort key stand-in for a missing city, state or country.
const NONE_PLACEHOLDER: &str = "None";

/// Drop every non-ASCII character.
pub fn to_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Short display names for the most common countries.
pub fn shorten_country(country: &str) -> String {
    match country {
        "United States" => "US".to_string(),
        "United Kingdom" => "UK".to_string(),
        other => other.to_string(),
    }
}

/// Trim corporate suffixes off network owner names.
pub fn shorten_isp(isp: &str) -> String {
    if isp == "MCI Communications Services d/b/a Verizon Business" {
        return "MCI".to_string();
    }
    isp.replace(", Inc.", "")
        .replace(" Ltd. ", "")
        .replace("Group PLC", "")
        .replace("Akamai International B.V. ", "Akamai")
}

/// "City, State, Country" from whichever parts are known, else "Unknown".
pub fn location_name(city: Option<&str>, state: Option<&str>, country: Option<&str>) -> String {
    let name = [city, state, country].into_iter().flatten().join(", ");
    if name.is_empty() {
        UNKNOWN.to_string()
    } else {
        name
    }
}

/// `country-state-city-cidr`, with "None" for missing parts.
pub fn sort_key(
    country: Option<&str>,
    state: Option<&str>,
    city: Option<&str>,
    cidr: &Ipv4,
) -> String {
    format!(
        "{}-{}-{}-{cidr}",
        country.unwrap_or(NONE_PLACEHOLDER),
        state.unwrap_or(NONE_PLACEHOLDER),
        city.unwrap_or(NONE_PLACEHOLDER),
    )
}

/// Enrich every aggregated CIDR.
///
/// Fails on the first lookup error other than "not found", in which case no
/// entries are returned.
pub fn enrich_cidrs<L: GeoLookup + ?Sized>(
    cidrs: &CidrMap,
    lookup: &L,
    advisories: &mut Advisories,
) -> Result<Vec<EnrichedCidr>, SgIpsError> {
    cidrs
        .iter()
        .map(|(cidr, descriptions)| enrich_cidr(cidr, descriptions, lookup, advisories))
        .collect()
}

/// Enrich one CIDR with its location and network owner.
pub fn enrich_cidr<L: GeoLookup + ?Sized>(
    cidr: &Ipv4,
    descriptions: &BTreeSet<String>,
    lookup: &L,
    advisories: &mut Advisories,
) -> Result<EnrichedCidr, SgIpsError> {
    let description = to_ascii(&descriptions.iter().join("|"));

    let size = cidr.size();
    if size > LARGE_CIDR_SIZE {
        advisories.raise(Advisory::LargeCidr { cidr: *cidr, size });
    }

    let ip = cidr.lo();
    let location = match lookup.city(ip) {
        Ok(location) => Some(location),
        Err(SgIpsError::LookupNotFound { .. }) => {
            advisories.raise(Advisory::UnknownLocation(*cidr));
            None
        }
        Err(e) => return Err(e),
    };

    let isp = match lookup.asn(ip) {
        Ok(asn) => asn.organization.map(|org| to_ascii(&org)),
        Err(SgIpsError::LookupNotFound { .. }) => None,
        Err(e) => return Err(e),
    };
    let isp = match isp {
        Some(isp) => shorten_isp(&isp),
        None => {
            advisories.raise(Advisory::UnknownOwner(*cidr));
            UNKNOWN.to_string()
        }
    };

    let CityInfo {
        city,
        subdivision,
        country,
        latitude,
        longitude,
    } = location.unwrap_or_default();
    let city = city.map(|c| to_ascii(&c));
    let state = subdivision.map(|s| to_ascii(&s));
    let country = country.map(|c| to_ascii(&c));
    let display_country = country.as_deref().map(shorten_country);

    // No map point without both coordinates, even when a location was found.
    let coordinate = match (longitude, latitude) {
        (Some(longitude), Some(latitude)) => Some(Coordinate {
            longitude,
            latitude,
        }),
        _ => None,
    };

    Ok(EnrichedCidr {
        cidr: *cidr,
        description,
        location_name: location_name(
            city.as_deref(),
            state.as_deref(),
            display_country.as_deref(),
        ),
        isp,
        sort_key: sort_key(country.as_deref(), state.as_deref(), city.as_deref(), cidr),
        coordinate,
    })
}
