//! GeoIP 国家查询模块
//!
//! 支持两种数据来源：
//! - MaxMind GeoLite2 本地数据库
//! - IPv4 区间 CSV（IP2Location LITE 格式）

mod csv_ranges;
mod maxmind;
mod provider;

pub use csv_ranges::CsvRangeLookup;
pub use maxmind::MaxMindLookup;
pub use provider::{CountryLookup, GeoIpProvider};
