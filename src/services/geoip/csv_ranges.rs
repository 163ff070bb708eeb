//! 从 CSV 加载的 IPv4 区间表
//!
//! 每行格式为 `start,end,country[,...]`，`start` 和 `end` 可以是点分 IPv4
//! 地址或整数形式（IP2Location LITE DB1 格式）。国家为 `-` 表示未分配区间，
//! 多余的列会被忽略。

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use tracing::{trace, warn};

use super::provider::CountryLookup;
use crate::errors::{LinkRouterError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Range {
    start: u32,
    end: u32,
    country: String,
}

#[derive(Debug, Default)]
pub struct CsvRangeLookup {
    ranges: Vec<Range>,
}

fn parse_bound(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .ok()
        .or_else(|| raw.parse::<Ipv4Addr>().ok().map(u32::from))
}

impl CsvRangeLookup {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path.as_ref())?;
        Self::from_reader(reader)
    }

    pub fn from_csv_str(data: &str) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_bytes());
        Self::from_reader(reader)
    }

    fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut ranges = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;
            let (Some(start), Some(end), Some(country)) = (
                record.get(0).and_then(parse_bound),
                record.get(1).and_then(parse_bound),
                record.get(2).map(str::trim),
            ) else {
                warn!("GeoIP CSV: skipping malformed row {}", line + 1);
                continue;
            };
            if start > end {
                warn!("GeoIP CSV: skipping inverted range on row {}", line + 1);
                continue;
            }
            if country.is_empty() || country == "-" {
                continue;
            }
            ranges.push(Range {
                start,
                end,
                country: country.to_string(),
            });
        }

        if ranges.is_empty() {
            return Err(LinkRouterError::geoip("CSV contains no usable ranges"));
        }
        ranges.sort_by_key(|r| r.start);
        Ok(Self { ranges })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl CountryLookup for CsvRangeLookup {
    fn lookup_country(&self, ip: &IpAddr) -> Option<String> {
        let IpAddr::V4(v4) = ip else {
            return None;
        };
        let needle = u32::from(*v4);

        // 起点不大于该地址的最后一个区间
        let idx = self.ranges.partition_point(|r| r.start <= needle);
        let range = self.ranges.get(idx.checked_sub(1)?)?;
        let found = (needle <= range.end).then(|| range.country.clone());
        trace!("CSV lookup for {}: country={:?}", ip, found);
        found
    }

    fn name(&self) -> &'static str {
        "CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
\"0\",\"16777215\",\"-\",\"-\"
\"16777216\",\"16777471\",\"US\",\"United States of America\"
1.0.1.0,1.0.3.255,CN
8.8.8.0,8.8.8.255,US
not,a,row
";

    fn lookup(table: &CsvRangeLookup, ip: &str) -> Option<String> {
        table.lookup_country(&ip.parse().unwrap())
    }

    #[test]
    fn test_ranges_resolve() {
        let table = CsvRangeLookup::from_csv_str(TABLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(lookup(&table, "1.0.0.1").as_deref(), Some("US"));
        assert_eq!(lookup(&table, "1.0.2.7").as_deref(), Some("CN"));
        assert_eq!(lookup(&table, "8.8.8.8").as_deref(), Some("US"));
    }

    #[test]
    fn test_gaps_and_unassigned_are_none() {
        let table = CsvRangeLookup::from_csv_str(TABLE).unwrap();
        assert_eq!(lookup(&table, "0.0.0.1"), None);
        assert_eq!(lookup(&table, "5.5.5.5"), None);
        assert_eq!(lookup(&table, "2001:db8::1"), None);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert!(CsvRangeLookup::from_csv_str("x,y,z\n").is_err());
    }
}
