use crate::session::{StorageValue, Token};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A typed request against the storefront API.
///
/// Construction attaches the stored bearer credential when one is present;
/// sending enforces the global 401 policy: the credential is dropped and the
/// window falls back to the login view, whatever endpoint produced the
/// rejection.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}

impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}

impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn new(method: Method, path: &str) -> Self {
		let mut builder = reqwest::Client::new().request(method, crate::config::api_url(path));
		builder = builder.header("Accept", "application/json");
		builder = builder.header("Content-Type", "application/json");
		if let Some(Token(token)) = Token::load() {
			builder = builder.header("Authorization", format!("Bearer {token}"));
		}
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<T, ApiError> {
		let text = self.dispatch().await?;
		match serde_json::from_str(&text) {
			Ok(data) => Ok(data),
			Err(err) => Err(ApiError::InvalidJson(text, err)),
		}
	}

	/// Sends and checks the status, discarding the body. For endpoints whose
	/// success payload the caller does not need.
	pub async fn send_ok(self) -> Result<(), ApiError> {
		self.dispatch().await?;
		Ok(())
	}

	async fn dispatch(self) -> Result<String, ApiError> {
		let response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		if status == StatusCode::UNAUTHORIZED {
			let err = expire_session();
			let _ = gloo_utils::window().location().replace("/login");
			return Err(err);
		}
		if !status.is_success() {
			return Err(ApiError::Rejected {
				status: status.as_u16(),
				msg: server_msg(&text),
			});
		}
		Ok(text)
	}
}

/// Ends the session on a 401: the credential is dropped before the caller
/// redirects, so nothing can retry with it in the meantime.
fn expire_session() -> ApiError {
	Token::delete();
	ApiError::SessionExpired
}

/// The backend reports failures as `{ "msg": "..." }`.
fn server_msg(text: &str) -> String {
	#[derive(Deserialize)]
	struct Body {
		msg: Option<String>,
	}
	serde_json::from_str::<Body>(text)
		.ok()
		.and_then(|body| body.msg)
		.unwrap_or_else(|| "Something went wrong".into())
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
	#[error("Something went wrong")]
	Transport(#[from] reqwest::Error),
	#[error("Session expired, please sign in again")]
	SessionExpired,
	#[error("{msg}")]
	Rejected { status: u16, msg: String },
	#[error("Invalid json: {0:?}\nError: {1:?}")]
	InvalidJson(String, serde_json::Error),
}

#[cfg(test)]
mod test {
	use super::server_msg;

	#[test]
	fn server_msg_prefers_the_payload() {
		assert_eq!(server_msg(r#"{"msg":"Invalid credentials"}"#), "Invalid credentials");
	}

	#[test]
	fn server_msg_falls_back_on_junk() {
		assert_eq!(server_msg("<html>502</html>"), "Something went wrong");
		assert_eq!(server_msg(r#"{"error":"nope"}"#), "Something went wrong");
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_test {
	use super::{expire_session, ApiError};
	use crate::session::{StorageValue, Token};
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn an_expired_session_drops_the_stored_token() {
		Token("stale".into()).save();
		assert!(matches!(expire_session(), ApiError::SessionExpired));
		assert!(Token::load().is_none());
	}
}
