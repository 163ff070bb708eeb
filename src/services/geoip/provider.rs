//! GeoIP Provider 抽象层
//!
//! 根据配置选择数据来源：
//! 1. 配置了 `maxminddb_path` 且可读 → [`MaxMindLookup`]
//! 2. 否则配置了 `csv_path` 且可读 → [`CsvRangeLookup`]
//! 3. 都不可用 → 不查询，所有请求的国家均为 unknown

use std::net::IpAddr;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::csv_ranges::CsvRangeLookup;
use super::maxmind::MaxMindLookup;
use crate::config::GeoIpConfig;
use crate::routing::UNKNOWN;
use crate::utils::ip::{is_private_or_local, parse_ip};

pub trait CountryLookup: Send + Sync {
    /// 查询 IP 对应的 ISO 3166-1 alpha-2 国家代码
    fn lookup_country(&self, ip: &IpAddr) -> Option<String>;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;
}

#[derive(Clone)]
pub struct GeoIpProvider {
    inner: Arc<dyn CountryLookup>,
}

impl GeoIpProvider {
    pub fn new(inner: Arc<dyn CountryLookup>) -> Self {
        Self { inner }
    }

    /// 根据 GeoIpConfig 初始化，没有可用来源时返回 `None`
    pub fn from_config(config: &GeoIpConfig) -> Option<Self> {
        if let Some(ref path) = config.maxminddb_path {
            match MaxMindLookup::open(path) {
                Ok(lookup) => {
                    info!("GeoIP: Using MaxMind database at {}", path);
                    return Some(Self::new(Arc::new(lookup)));
                }
                Err(e) => warn!("GeoIP: Failed to load MaxMind database at {}: {}", path, e),
            }
        }

        if let Some(ref path) = config.csv_path {
            match CsvRangeLookup::open(path) {
                Ok(lookup) => {
                    info!(
                        "GeoIP: Using CSV ranges at {} ({} ranges)",
                        path,
                        lookup.len()
                    );
                    return Some(Self::new(Arc::new(lookup)));
                }
                Err(e) => warn!("GeoIP: Failed to load CSV ranges at {}: {}", path, e),
            }
        }

        debug!("GeoIP: No country source configured");
        None
    }

    /// 查询 IP 字符串的国家代码，无法确定时返回 [`UNKNOWN`]
    ///
    /// 私有地址、回环地址和无法解析的地址不会查询
    pub fn country_for(&self, ip: &str) -> String {
        let Some(addr) = parse_ip(ip) else {
            return UNKNOWN.to_string();
        };
        if is_private_or_local(&addr) {
            return UNKNOWN.to_string();
        }
        self.inner
            .lookup_country(&addr)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn provider_name(&self) -> &'static str {
        self.inner.name()
    }
}
