use crate::data::Me;
use crate::response::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Credentials<'a> {
	email: &'a str,
	password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
	token: String,
}

/// Exchanges credentials for a bearer token. Persisting it is the caller's
/// job, so a failed login never clobbers an existing session.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
	let resp: TokenResponse = super::post("/auth/login")
		.with_json(&Credentials { email, password })
		.send()
		.await?;
	Ok(resp.token)
}

#[derive(Serialize)]
struct Registration<'a> {
	name: &'a str,
	email: &'a str,
	password: &'a str,
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
	super::post::<serde_json::Value>("/auth/register")
		.with_json(&Registration { name, email, password })
		.send_ok()
		.await
}

/// Identity probe: decides whether the stored credential is still valid and
/// what privileges it grants.
pub async fn me() -> Result<Me, ApiError> {
	super::get("/auth/me").send().await
}
