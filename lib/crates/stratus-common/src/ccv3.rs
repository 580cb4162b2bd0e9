//! Cloud Controller v3 resource shapes.
//!
//! Only the fields stratus reads are modelled. Unknown fields are ignored and
//! state strings are kept verbatim so callers decide how to classify them.

use serde::Deserialize;

// ── Root ──────────────────────────────────────────────────────────────────────

/// Response of `GET /`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RootResponse {
    #[serde(default)]
    pub links: RootLinks,
}

/// Links advertised by the API root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RootLinks {
    #[serde(default)]
    pub app_ssh: Option<AppSshLink>,
    #[serde(default)]
    pub uaa: Option<Link>,
    #[serde(default)]
    pub login: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
}

/// The `app_ssh` link carries the proxy address plus its metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSshLink {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub meta: AppSshMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSshMeta {
    #[serde(default)]
    pub host_key_fingerprint: String,
}

// ── Collections ───────────────────────────────────────────────────────────────

/// Paginated list envelope. Only the first page is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
}

// ── Apps and processes ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AppResource {
    pub guid: String,
    pub name: String,
    /// `STARTED` or `STOPPED`.
    pub state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResource {
    pub guid: String,
    #[serde(rename = "type")]
    pub process_type: String,
}

/// One entry of `GET /v3/processes/:guid/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessStatsResource {
    pub index: u32,
    /// `RUNNING`, `CRASHED`, `STARTING`, `DOWN`, ...
    pub state: String,
}

// ── Service instances and jobs ────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInstanceResource {
    pub guid: String,
}

/// Response of `GET /v3/jobs/:guid`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobResource {
    pub guid: String,
    /// `PROCESSING`, `POLLING`, `COMPLETE` or `FAILED`.
    pub state: String,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub warnings: Vec<JobWarning>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobWarning {
    #[serde(default)]
    pub detail: String,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Error envelope returned with any non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorsResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Short machine name such as `CF-ResourceNotFound`.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}
