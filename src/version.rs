//! Vulkan packed API version helpers
//!
//! Vulkan packs versions into a u32: variant in bits 29..32, major in
//! 22..29, minor in 12..22, patch in 0..12.

use std::fmt;
use std::str::FromStr;

/// `VK_API_VERSION_1_0`
pub const VK_API_VERSION_1_0: u32 = make_api_version(1, 0, 0);

/// `VK_API_VERSION_1_1`, the first version whose devices report the
/// subgroup, multiview, id, maintenance3 and related structures.
pub const VK_API_VERSION_1_1: u32 = make_api_version(1, 1, 0);

pub const fn make_api_version(major: u32, minor: u32, patch: u32) -> u32 {
    (major << 22) | (minor << 12) | patch
}

/// Decoded form of a packed API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    pub const fn from_packed(packed: u32) -> Self {
        ApiVersion {
            major: (packed >> 22) & 0x7f,
            minor: (packed >> 12) & 0x3ff,
            patch: packed & 0xfff,
        }
    }

    pub const fn packed(self) -> u32 {
        make_api_version(self.major, self.minor, self.patch)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Accepts either a packed integer (`4198400`) or a dotted version (`1.1`, `1.1.0`).
impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.contains('.') {
            return s
                .parse::<u32>()
                .map(ApiVersion::from_packed)
                .map_err(|e| format!("invalid packed version `{}`: {}", s, e));
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() > 3 {
            return Err(format!("invalid version `{}`: too many components", s));
        }
        let mut nums = [0u32; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|e| format!("invalid version `{}`: {}", s, e))?;
        }
        let [major, minor, patch] = nums;
        if major > 0x7f || minor > 0x3ff || patch > 0xfff {
            return Err(format!("invalid version `{}`: component out of range", s));
        }
        Ok(ApiVersion { major, minor, patch })
    }
}
