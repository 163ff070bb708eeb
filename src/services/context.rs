//! Derive a [`RequestContext`] from raw request metadata

use tracing::debug;

use super::geoip::GeoIpProvider;
use super::user_agent::detect_browser;
use crate::routing::{RequestContext, UNKNOWN};
use crate::utils::ip::client_ip;

/// Header values and peer address of an inbound request
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
    pub user_agent: Option<String>,
    pub x_real_ip: Option<String>,
    pub x_forwarded_for: Option<String>,
    pub remote_addr: Option<String>,
}

#[derive(Clone, Default)]
pub struct ContextResolver {
    geoip: Option<GeoIpProvider>,
}

impl ContextResolver {
    pub fn new(geoip: Option<GeoIpProvider>) -> Self {
        Self { geoip }
    }

    pub fn has_geoip(&self) -> bool {
        self.geoip.is_some()
    }

    /// Country for `ip`, [`UNKNOWN`] without a GeoIP source
    pub fn country_for(&self, ip: &str) -> String {
        match &self.geoip {
            Some(geoip) => geoip.country_for(ip),
            None => UNKNOWN.to_string(),
        }
    }

    pub fn build(&self, headers: &RequestHeaders) -> RequestContext {
        let ip = client_ip(
            headers.x_real_ip.as_deref(),
            headers.x_forwarded_for.as_deref(),
            headers.remote_addr.as_deref(),
        )
        .unwrap_or_default();

        let country = if ip.is_empty() {
            UNKNOWN.to_string()
        } else {
            self.country_for(&ip)
        };
        let browser = detect_browser(headers.user_agent.as_deref().unwrap_or_default());

        debug!(
            "Request context: ip={} country={} browser={}",
            ip, country, browser
        );
        RequestContext::new(ip, country).with_browser(browser)
    }
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;
    use std::sync::Arc;

    use super::*;
    use crate::services::geoip::CountryLookup;

    struct AlwaysIndia;

    impl CountryLookup for AlwaysIndia {
        fn lookup_country(&self, _ip: &IpAddr) -> Option<String> {
            Some("IN".to_string())
        }

        fn name(&self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn test_build_without_geoip() {
        let resolver = ContextResolver::default();
        let ctx = resolver.build(&RequestHeaders {
            remote_addr: Some("203.0.113.9:5555".to_string()),
            ..Default::default()
        });
        assert_eq!(ctx.ip, "203.0.113.9");
        assert_eq!(ctx.country, UNKNOWN);
        assert_eq!(ctx.browser, UNKNOWN);
    }

    #[test]
    fn test_build_with_geoip_and_forwarded_header() {
        let resolver = ContextResolver::new(Some(GeoIpProvider::new(Arc::new(AlwaysIndia))));
        let ctx = resolver.build(&RequestHeaders {
            user_agent: Some(
                "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0"
                    .to_string(),
            ),
            x_forwarded_for: Some("49.36.1.1, 10.0.0.2".to_string()),
            remote_addr: Some("10.0.0.2:80".to_string()),
            ..Default::default()
        });
        assert_eq!(ctx.ip, "49.36.1.1");
        assert_eq!(ctx.country, "IN");
        assert_eq!(ctx.browser, "firefox");
    }
}
