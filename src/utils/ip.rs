//! 客户端 IP 工具函数

use std::net::{IpAddr, SocketAddr};

/// 是否为私有、回环或链路本地地址
pub fn is_private_or_local(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local(),
        IpAddr::V6(v6) => {
            v6.is_loopback()
                || (v6.segments()[0] & 0xfe00) == 0xfc00 // fc00::/7
                || (v6.segments()[0] & 0xffc0) == 0xfe80 // fe80::/10
        }
    }
}

/// 解析 `ip`、`ip:port` 或 `[v6]:port`
pub fn parse_ip(raw: &str) -> Option<IpAddr> {
    let raw = raw.trim();
    raw.parse::<IpAddr>()
        .ok()
        .or_else(|| raw.parse::<SocketAddr>().ok().map(|s| s.ip()))
}

/// 从代理头和对端地址中提取客户端 IP
///
/// 优先级：`X-Real-Ip` > `X-Forwarded-For` 第一项 > 对端地址的 host 部分
pub fn client_ip(
    x_real_ip: Option<&str>,
    x_forwarded_for: Option<&str>,
    remote_addr: Option<&str>,
) -> Option<String> {
    let non_empty = |s: &&str| !s.trim().is_empty();

    if let Some(real_ip) = x_real_ip.filter(non_empty) {
        return Some(real_ip.trim().to_string());
    }

    if let Some(first) = x_forwarded_for
        .and_then(|h| h.split(',').next())
        .filter(non_empty)
    {
        return Some(first.trim().to_string());
    }

    remote_addr.filter(non_empty).map(|addr| match parse_ip(addr) {
        Some(ip) => ip.to_string(),
        None => addr.trim().to_string(),
    })
}
