use serde::{Deserialize, Serialize};

use schemata_core::config::{active_profile, profiled_env_opt, profiled_env_or};

/// Env var naming the active profile.
pub const PROFILE_VAR: &str = "SCHEMATA_PROFILE";

const DEFAULT_REGION: &str = "us-east-1";

/// Client-side defaults for Athena requests.
///
/// Reads from environment variables with optional profile prefix.
/// When `SCHEMATA_PROFILE=PROD`, checks `PROD_ATHENA_DATABASE` before `ATHENA_DATABASE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthenaConfig {
    /// AWS region the endpoint lives in.
    pub region: String,
    /// Service endpoint handed to the transport.
    pub endpoint: String,
    /// Default database for query execution context.
    pub database: String,
    /// Default data catalog for query execution context.
    pub catalog: String,
    /// Default work group.
    pub workgroup: String,
    /// S3 path for query results; the work group setting applies when unset.
    pub output_location: Option<String>,
}

impl Default for AthenaConfig {
    fn default() -> Self {
        Self::for_region(DEFAULT_REGION)
    }
}

impl AthenaConfig {
    /// Defaults for `region` with the regional public endpoint.
    pub fn for_region(region: &str) -> Self {
        Self {
            region: region.to_string(),
            endpoint: default_endpoint(region),
            database: "default".to_string(),
            catalog: "AwsDataCatalog".to_string(),
            workgroup: "primary".to_string(),
            output_location: None,
        }
    }

    /// Build config from environment variables.
    ///
    /// Reads `SCHEMATA_PROFILE` to determine profile prefix.
    /// For each key, tries `{PROFILE}_ATHENA_*` first, then `ATHENA_*`.
    /// `ATHENA_REGION` falls back to `AWS_REGION` before using the default.
    pub fn from_env() -> Self {
        Self::from_env_profiled(&active_profile(PROFILE_VAR))
    }

    /// Build config for a specific named profile.
    pub fn from_env_profiled(profile: &str) -> Self {
        let region = profiled_env_opt(profile, "ATHENA_REGION")
            .or_else(|| profiled_env_opt(profile, "AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            endpoint: profiled_env_opt(profile, "ATHENA_ENDPOINT")
                .unwrap_or_else(|| default_endpoint(&region)),
            database: profiled_env_or(profile, "ATHENA_DATABASE", "default"),
            catalog: profiled_env_or(profile, "ATHENA_CATALOG", "AwsDataCatalog"),
            workgroup: profiled_env_or(profile, "ATHENA_WORKGROUP", "primary"),
            output_location: profiled_env_opt(profile, "ATHENA_OUTPUT_LOCATION"),
            region,
        }
    }
}

fn default_endpoint(region: &str) -> String {
    format!("https://athena.{region}.amazonaws.com")
}
