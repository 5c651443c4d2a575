//! MaxMind GeoLite2 database readers.

use super::{AsnInfo, CityInfo, GeoLookup};
use crate::config::{ASN_DB_FILE, CITY_DB_FILE};
use crate::errors::SgIpsError;
use maxminddb::{geoip2, MaxMindDBError, Reader};
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

/// Open City and ASN databases. Dropping the value closes both.
pub struct GeoIpDatabases {
    city: Reader<Vec<u8>>,
    asn: Reader<Vec<u8>>,
}

impl GeoIpDatabases {
    /// Open `GeoLite2-ASN.mmdb` and `GeoLite2-City.mmdb` from `dir`.
    pub fn open(dir: &Path) -> Result<Self, SgIpsError> {
        let asn = open_reader(&dir.join(ASN_DB_FILE))?;
        let city = open_reader(&dir.join(CITY_DB_FILE))?;
        log::info!("Opened geoip databases in {}", dir.display());
        Ok(GeoIpDatabases { city, asn })
    }
}

fn open_reader(path: &Path) -> Result<Reader<Vec<u8>>, SgIpsError> {
    Reader::open_readfile(path).map_err(|e| SgIpsError::LookupUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn lookup_error(ip: Ipv4Addr, database: &'static str, err: MaxMindDBError) -> SgIpsError {
    match err {
        MaxMindDBError::AddressNotFoundError(_) => SgIpsError::LookupNotFound { ip, database },
        other => SgIpsError::LookupFailed {
            ip,
            reason: other.to_string(),
        },
    }
}

fn english_name(names: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    names.and_then(|n| n.get("en")).map(|s| s.to_string())
}

impl GeoLookup for GeoIpDatabases {
    fn city(&self, ip: Ipv4Addr) -> Result<CityInfo, SgIpsError> {
        let record: geoip2::City = self
            .city
            .lookup(IpAddr::V4(ip))
            .map_err(|e| lookup_error(ip, "city", e))?;

        let location = record.location.as_ref();
        Ok(CityInfo {
            city: record
                .city
                .as_ref()
                .and_then(|c| english_name(c.names.as_ref())),
            subdivision: record
                .subdivisions
                .as_ref()
                .and_then(|s| s.last())
                .and_then(|s| english_name(s.names.as_ref())),
            country: record
                .country
                .as_ref()
                .and_then(|c| english_name(c.names.as_ref())),
            latitude: location.and_then(|l| l.latitude),
            longitude: location.and_then(|l| l.longitude),
        })
    }

    fn asn(&self, ip: Ipv4Addr) -> Result<AsnInfo, SgIpsError> {
        let record: geoip2::Asn = self
            .asn
            .lookup(IpAddr::V4(ip))
            .map_err(|e| lookup_error(ip, "ASN", e))?;
        Ok(AsnInfo {
            organization: record.autonomous_system_organization.map(str::to_string),
            number: record.autonomous_system_number,
        })
    }
}

/// How to fetch the GeoLite2 databases into `dir`.
pub fn install_instructions(dir: &Path) -> String {
    let dir = dir.display();
    format!(
        "You must download the geoip files {ASN_DB_FILE} and {CITY_DB_FILE}\n\
         from https://dev.maxmind.com/geoip/geolite2-free-geolocation-data and put them in {dir}/\n\
         \nSteps:\n\
         mkdir -p {dir}; cd {dir}\n\
         # Download GeoLite2-City and GeoLite2-ASN (mmdb format) with your MaxMind license key, then:\n\
         tar -zxvf GeoLite2-City.tar.gz && mv GeoLite2-City_*/{CITY_DB_FILE} .\n\
         tar -zxvf GeoLite2-ASN.tar.gz && mv GeoLite2-ASN_*/{ASN_DB_FILE} .\n\
         rm -rf GeoLite2-City_* GeoLite2-ASN_* GeoLite2-*.tar.gz"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_databases() {
        let dir = Path::new("src/tests/test_data/no-geoip-here");
        match GeoIpDatabases::open(dir) {
            Err(SgIpsError::LookupUnavailable { path, .. }) => {
                assert_eq!(path, dir.join(ASN_DB_FILE));
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("databases should not open"),
        }
    }

    #[test]
    fn test_lookup_error_mapping() {
        let ip = Ipv4Addr::new(192, 0, 2, 1);
        let not_found = lookup_error(
            ip,
            "ASN",
            MaxMindDBError::AddressNotFoundError("no record".to_string()),
        );
        assert!(matches!(
            not_found,
            SgIpsError::LookupNotFound { database: "ASN", .. }
        ));

        let broken = lookup_error(
            ip,
            "city",
            MaxMindDBError::InvalidDatabaseError("bad tree".to_string()),
        );
        assert!(matches!(broken, SgIpsError::LookupFailed { .. }));
    }

    #[test]
    fn test_english_name() {
        let mut names = BTreeMap::new();
        names.insert("de", "Vereinigte Staaten");
        names.insert("en", "United States");
        assert_eq!(english_name(Some(&names)), Some("United States".to_string()));
        assert_eq!(english_name(None), None);
    }

    #[test]
    fn test_install_instructions_name_files() {
        let text = install_instructions(Path::new("data"));
        assert!(text.contains(CITY_DB_FILE));
        assert!(text.contains("mkdir -p data"));
    }
}
