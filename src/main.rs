use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod components;
mod config;
mod data;
mod hooks;
mod notify;
mod page;
mod response;
mod route;
mod session;
mod storage;
mod sync;

use session::StorageValue;

#[cfg(target_family = "wasm")]
fn main() {
	let _ = console_log::init_with_level(log::Level::Debug);
	yew::Renderer::<App>::new().render();
}

// The crate only renders on wasm; the native target exists for `cargo test`.
#[cfg(not(target_family = "wasm"))]
fn main() {}

#[function_component]
fn App() -> Html {
	// Resolve the auth state once at startup, then keep tabs converged: a
	// credential change observed in another tab re-runs the identity probe
	// here.
	use_effect_with((), |_| {
		auth::probe();
		let window = gloo_utils::window();
		let listener = gloo_events::EventListener::new(&window, "storage", |event| {
			let key = event
				.dyn_ref::<web_sys::StorageEvent>()
				.and_then(|event| event.key());
			if key.as_deref() == Some(session::Token::id()) {
				auth::probe();
			}
		});
		move || drop(listener)
	});

	html! {
		<BrowserRouter>
			<components::Navbar />
			<components::Toaster />
			<main>
				<Switch<route::Route> render={route::switch} />
			</main>
			<footer class="footer">
				<p>{"TRIIVYA \u{2014} Elegance Redefined"}</p>
			</footer>
		</BrowserRouter>
	}
}
