use std::fmt;

/// Build facts embedded by `build.rs`; fields read `unknown` outside a cargo build.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("FINWISE_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("FINWISE_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("FINWISE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("FINWISE_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("FINWISE_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "finwise {} ({}", self.version, self.git_hash)?;
        if self.git_status == "dirty" {
            f.write_str("+dirty")?;
        }
        write!(f, ", {} {})", self.target, self.profile)
    }
}
