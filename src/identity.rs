//! Host and account name resolution
//!
//! Thin wrappers over the OS lookups. Every lookup has a fallback so a
//! record can always be built: the host becomes `"unknown"` and an
//! unresolvable uid/gid is rendered as its decimal number.

use uzers::{Groups, Users, UsersCache};

/// Placeholder used when the host name cannot be determined.
pub const UNKNOWN_HOST: &str = "unknown";

/// Resolve the short host name of this machine.
pub fn short_hostname() -> String {
    hostname::get()
        .map(|h| shorten_hostname(&h.to_string_lossy()))
        .unwrap_or_else(|_| UNKNOWN_HOST.to_string())
}

/// Strip the domain part of a host name ("build01.lab.example" -> "build01").
pub fn shorten_hostname(name: &str) -> String {
    match name.split('.').next() {
        Some(short) if !short.is_empty() => short.to_string(),
        _ => UNKNOWN_HOST.to_string(),
    }
}

/// Resolves numeric owner and group IDs to names, caching each answer.
pub struct NameResolver {
    cache: UsersCache,
}

impl NameResolver {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }

    pub fn user_name(&self, uid: u32) -> String {
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| uid.to_string())
    }

    pub fn group_name(&self, gid: u32) -> String {
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| gid.to_string())
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}
