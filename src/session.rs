use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// A value persisted in browser local storage under a fixed key.
///
/// All accessors swallow storage failures: a missing browser context, a
/// quota error, or malformed stored JSON read back as `None` and overwrite
/// cleanly on the next save.
pub trait StorageValue {
	fn id() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		LocalStorage::get::<Self>(Self::id()).ok()
	}

	fn save(self)
	where
		Self: Sized + Serialize,
	{
		let _ = LocalStorage::set(Self::id(), self);
	}

	fn delete() {
		LocalStorage::delete(Self::id());
	}
}

/// The bearer credential issued by `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token(pub String);
impl StorageValue for Token {
	fn id() -> &'static str {
		"token"
	}
}
