use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Protected;
use crate::page;

/// Query string carried into the login view when a gated page bounces a
/// guest, so a successful sign-in can resume where they left off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginQuery {
	pub redirect: String,
}

/// Resolves a stored redirect path back into a route, falling back to the
/// landing page when the path is absent or no longer recognized.
pub fn redirect_target(path: Option<&str>) -> Route {
	match path.and_then(Route::recognize) {
		None | Some(Route::NotFound) => Route::Home,
		Some(route) => route,
	}
}

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/products")]
	Products,
	#[at("/products/:id")]
	Product { id: String },
	#[at("/cart")]
	Cart,
	#[at("/wishlist")]
	Wishlist,
	#[at("/checkout")]
	Checkout,
	#[at("/login")]
	Login,
	#[at("/register")]
	Register,
	#[at("/profile")]
	Profile,
	#[at("/admin")]
	Admin,
	#[not_found]
	#[at("/404")]
	NotFound,
}

pub fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <page::Home /> },
		Route::Products => html! { <page::Products /> },
		Route::Product { id } => html! { <page::ProductDetail {id} /> },
		Route::Cart => html! { <page::CartPage /> },
		Route::Wishlist => html! { <page::WishlistPage /> },
		Route::Checkout => html! { <Protected><page::Checkout /></Protected> },
		Route::Login => html! { <page::Login /> },
		Route::Register => html! { <page::Register /> },
		Route::Profile => html! { <Protected><page::Profile /></Protected> },
		Route::Admin => html! { <Protected admin=true><page::Admin /></Protected> },
		Route::NotFound => html! { <page::NotFound /> },
	}
}

#[cfg(test)]
mod test {
	use super::{redirect_target, Route};

	#[test]
	fn redirect_returns_the_recognized_route() {
		assert_eq!(redirect_target(Some("/checkout")), Route::Checkout);
		assert_eq!(
			redirect_target(Some("/products/abc123")),
			Route::Product { id: "abc123".into() }
		);
	}

	#[test]
	fn missing_or_unknown_redirects_land_home() {
		assert_eq!(redirect_target(None), Route::Home);
		assert_eq!(redirect_target(Some("/no/such/page")), Route::Home);
	}
}
