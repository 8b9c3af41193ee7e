use crate::auth;
use crate::components::AuthSwitch;
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Navbar() -> Html {
	let navigator = use_navigator().unwrap();
	let status = use_store_value::<auth::Status>();
	let logout = {
		let navigator = navigator.clone();
		Callback::from(move |_| {
			auth::logout();
			crate::notify::success("Signed out");
			navigator.push(&Route::Home);
		})
	};
	html! {
		<nav class="navbar">
			<div class="navbar-brand">
				<Link<Route> classes="navbar-item brand" to={Route::Home}>{"TRIIVYA"}</Link<Route>>
			</div>
			<div class="navbar-start">
				<Link<Route> classes="navbar-item" to={Route::Products}>{"Shop"}</Link<Route>>
				<Link<Route> classes="navbar-item" to={Route::Wishlist}>{"Wishlist"}</Link<Route>>
				<Link<Route> classes="navbar-item" to={Route::Cart}>{"Cart"}</Link<Route>>
			</div>
			<div class="navbar-end">
				{ status.is_admin().then(|| html! {
					<Link<Route> classes="navbar-item" to={Route::Admin}>{"Manage"}</Link<Route>>
				}) }
				<AuthSwitch
					identified={html! {<>
						<Link<Route> classes="navbar-item" to={Route::Profile}>{"Account"}</Link<Route>>
						<button class="navbar-item button" onclick={logout}>{"Sign Out"}</button>
					</>}}
					anonymous={html! {
						<Link<Route> classes="navbar-item" to={Route::Login}>{"Sign In"}</Link<Route>>
					}}
				/>
			</div>
		</nav>
	}
}
