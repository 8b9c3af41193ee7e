use crate::api;
use crate::session::{StorageValue, Token};
use yew::prelude::*;
use yewdux::prelude::*;

/// Process-wide authentication state, derived from the stored credential.
///
/// Starts at `Unknown` until the identity probe settles; every view reads it
/// through the global store, so login and logout are reflected everywhere at
/// once.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Store)]
pub enum Status {
	#[default]
	Unknown,
	Guest,
	Authenticated {
		is_admin: bool,
	},
}

impl Status {
	pub fn is_authenticated(&self) -> bool {
		matches!(self, Self::Authenticated { .. })
	}

	pub fn is_admin(&self) -> bool {
		matches!(self, Self::Authenticated { is_admin: true })
	}
}

fn settle(status: Status) {
	Dispatch::<Status>::global().set(status);
}

/// Re-derives [`Status`] from the stored credential: no token means guest,
/// otherwise `/auth/me` decides. A failed probe also discards the token.
pub fn probe() {
	if Token::load().is_none() {
		settle(Status::Guest);
		return;
	}
	wasm_bindgen_futures::spawn_local(async move {
		match api::auth::me().await {
			Ok(me) => settle(Status::Authenticated { is_admin: me.is_admin }),
			Err(err) => {
				log::warn!(target: "auth", "identity probe failed: {err:?}");
				Token::delete();
				settle(Status::Guest);
			}
		}
	});
}

/// Marks the session authenticated after a successful login.
pub fn signed_in(is_admin: bool) {
	settle(Status::Authenticated { is_admin });
}

/// Discards the credential and returns to guest mode. The guest collections
/// are not repopulated from the account's server state.
pub fn logout() {
	Token::delete();
	settle(Status::Guest);
}

#[hook]
pub fn use_auth() -> std::rc::Rc<Status> {
	use_store_value::<Status>()
}

#[cfg(test)]
mod test {
	use super::Status;

	#[test]
	fn admin_implies_authenticated() {
		assert!(Status::Authenticated { is_admin: true }.is_authenticated());
		assert!(Status::Authenticated { is_admin: true }.is_admin());
		assert!(Status::Authenticated { is_admin: false }.is_authenticated());
		assert!(!Status::Authenticated { is_admin: false }.is_admin());
	}

	#[test]
	fn pending_probe_grants_nothing() {
		assert!(!Status::Unknown.is_authenticated());
		assert!(!Status::Unknown.is_admin());
		assert!(!Status::Guest.is_authenticated());
	}
}
