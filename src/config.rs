static DEFAULT_API_BASE: &str = "https://triivya-clothing.onrender.com/api";

/// Base URL of the storefront REST API. Deployments override it at build
/// time; the default points at the hosted backend.
pub fn api_base() -> &'static str {
	option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_BASE)
}

pub fn api_url(path: &str) -> String {
	format!("{}{path}", api_base())
}
