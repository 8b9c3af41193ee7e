use crate::auth::Status;
use crate::route::{LoginQuery, Route};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct ProtectedProps {
	/// Also require the admin flag from the identity probe.
	#[prop_or_default]
	pub admin: bool,
	#[prop_or_default]
	pub children: Html,
}

/// Gates a subtree behind authentication. Nothing renders until the identity
/// probe settles; guests are then bounced to the login view, and non-admins
/// are bounced home when the admin flag is required.
#[function_component]
pub fn Protected(props: &ProtectedProps) -> Html {
	let status = use_store_value::<Status>();
	let navigator = use_navigator().unwrap();
	let origin = use_location().map(|location| location.path().to_string());
	use_effect_with((*status, props.admin), move |(status, requires_admin)| {
		match status {
			Status::Guest => {
				// Remember where the guest was headed so login can resume there.
				let redirect = origin.unwrap_or_else(|| "/".into());
				let _ = navigator.push_with_query(&Route::Login, &LoginQuery { redirect });
			}
			Status::Authenticated { is_admin } if *requires_admin && !*is_admin => {
				crate::notify::error("You do not have access to that page");
				navigator.push(&Route::Home);
			}
			_ => {}
		}
	});
	let allowed = match *status {
		Status::Authenticated { is_admin } => !props.admin || is_admin,
		_ => false,
	};
	if allowed {
		html! { <>{props.children.clone()}</> }
	} else {
		html! { <div class="page-loading">{"Loading"}</div> }
	}
}
