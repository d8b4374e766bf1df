//! Host private IPv4 discovery for node assignment

use std::net::{IpAddr, Ipv4Addr};

use tracing::debug;

/// First non-loopback private IPv4 address of this host, if any
pub fn private_ipv4() -> Option<Ipv4Addr> {
    let interfaces = match local_ip_address::list_afinet_netifas() {
        Ok(interfaces) => interfaces,
        Err(err) => {
            debug!(%err, "failed to list network interfaces");
            return None;
        }
    };

    interfaces.into_iter().find_map(|(_, ip)| match ip {
        IpAddr::V4(v4) if is_private_ipv4(v4) => Some(v4),
        _ => None,
    })
}

/// 10/8, 172.16/12 or 192.168/16
#[inline]
pub(crate) fn is_private_ipv4(ip: Ipv4Addr) -> bool {
    !ip.is_loopback() && ip.is_private()
}

#[inline]
pub(crate) fn node_from_ipv4(ip: Ipv4Addr, node_mask: i64) -> i64 {
    u32::from(ip) as i64 & node_mask
}
