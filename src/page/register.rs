use crate::route::Route;
use crate::{api, notify};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Register() -> Html {
	let navigator = use_navigator().unwrap();
	let name = use_state(String::new);
	let email = use_state(String::new);
	let password = use_state(String::new);
	let confirm = use_state(String::new);
	let busy = use_state(|| false);

	let bind = |state: &UseStateHandle<String>| {
		let state = state.clone();
		Callback::from(move |event: InputEvent| {
			let input: web_sys::HtmlInputElement = event.target_unchecked_into();
			state.set(input.value());
		})
	};
	let oninput_name = bind(&name);
	let oninput_email = bind(&email);
	let oninput_password = bind(&password);
	let oninput_confirm = bind(&confirm);

	let onsubmit = {
		let navigator = navigator.clone();
		let name = name.clone();
		let email = email.clone();
		let password = password.clone();
		let confirm = confirm.clone();
		let busy = busy.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			if *busy {
				return;
			}
			if *password != *confirm {
				notify::error("Passwords do not match");
				return;
			}
			busy.set(true);
			let navigator = navigator.clone();
			let busy = busy.clone();
			let name = (*name).clone();
			let email = (*email).clone();
			let password = (*password).clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::auth::register(&name, &email, &password).await {
					Ok(()) => {
						notify::success("Account created, please sign in");
						navigator.push(&Route::Login);
					}
					Err(err) => notify::error(err.to_string()),
				}
				busy.set(false);
			});
		})
	};

	html! {
		<section class="auth-form">
			<h1>{"Create Account"}</h1>
			<form {onsubmit}>
				<label>
					{"Name"}
					<input type="text" value={(*name).clone()} oninput={oninput_name} required=true />
				</label>
				<label>
					{"Email"}
					<input type="email" value={(*email).clone()} oninput={oninput_email} required=true />
				</label>
				<label>
					{"Password"}
					<input type="password" value={(*password).clone()} oninput={oninput_password} required=true />
				</label>
				<label>
					{"Confirm password"}
					<input type="password" value={(*confirm).clone()} oninput={oninput_confirm} required=true />
				</label>
				<button class="button is-primary" type="submit" disabled={*busy}>{"Register"}</button>
			</form>
			<p>
				{"Already have an account? "}
				<Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
			</p>
		</section>
	}
}
