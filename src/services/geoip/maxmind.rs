//! MaxMind GeoLite2 本地数据库查询（Country 或 City 版本）

use std::net::IpAddr;

use maxminddb::Reader;
use tracing::trace;

use super::provider::CountryLookup;
use crate::errors::Result;

pub struct MaxMindLookup {
    reader: Reader<Vec<u8>>,
}

impl MaxMindLookup {
    pub fn open(path: &str) -> Result<Self> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self { reader })
    }
}

impl CountryLookup for MaxMindLookup {
    fn lookup_country(&self, ip: &IpAddr) -> Option<String> {
        let result = self.reader.lookup(*ip).ok()?;
        let record: maxminddb::geoip2::Country = result.decode().ok()??;
        let country = record.country.iso_code.map(String::from);
        trace!("MaxMind lookup for {}: country={:?}", ip, country);
        country
    }

    fn name(&self) -> &'static str {
        "MaxMind"
    }
}
