use crate::route::{self, Route};
use crate::session::{StorageValue, Token};
use crate::{api, auth, notify, sync};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Login() -> Html {
	let navigator = use_navigator().unwrap();
	// Where a gated page sent us from, if anywhere.
	let redirect = use_location()
		.and_then(|location| location.query::<route::LoginQuery>().ok())
		.map(|query| query.redirect);
	let email = use_state(String::new);
	let password = use_state(String::new);
	let busy = use_state(|| false);

	let oninput_email = {
		let email = email.clone();
		Callback::from(move |event: InputEvent| {
			let input: web_sys::HtmlInputElement = event.target_unchecked_into();
			email.set(input.value());
		})
	};
	let oninput_password = {
		let password = password.clone();
		Callback::from(move |event: InputEvent| {
			let input: web_sys::HtmlInputElement = event.target_unchecked_into();
			password.set(input.value());
		})
	};

	let onsubmit = {
		let navigator = navigator.clone();
		let redirect = redirect.clone();
		let email = email.clone();
		let password = password.clone();
		let busy = busy.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			if *busy {
				return;
			}
			busy.set(true);
			let navigator = navigator.clone();
			let redirect = redirect.clone();
			let busy = busy.clone();
			let email = (*email).clone();
			let password = (*password).clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::auth::login(&email, &password).await {
					Ok(token) => {
						Token(token).save();
						// Resolve the admin flag before any view renders
						// against the new session.
						let is_admin = api::auth::me().await.map(|me| me.is_admin).unwrap_or(false);
						auth::signed_in(is_admin);
						// Drain the guest collections into the account
						// before leaving this page.
						sync::sync_guest_data().await;
						notify::success("Logged in successfully");
						navigator.push(&route::redirect_target(redirect.as_deref()));
					}
					Err(err) => notify::error(err.to_string()),
				}
				busy.set(false);
			});
		})
	};

	html! {
		<section class="auth-form">
			<h1>{"Sign In"}</h1>
			<form {onsubmit}>
				<label>
					{"Email"}
					<input type="email" value={(*email).clone()} oninput={oninput_email} required=true />
				</label>
				<label>
					{"Password"}
					<input type="password" value={(*password).clone()} oninput={oninput_password} required=true />
				</label>
				<button class="button is-primary" type="submit" disabled={*busy}>
					{ if *busy { "Signing in" } else { "Sign In" } }
				</button>
			</form>
			<p>
				{"New here? "}
				<Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
			</p>
		</section>
	}
}
