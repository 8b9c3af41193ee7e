use crate::data::{Address, OrderItem};
use crate::hooks::use_cart;
use crate::route::Route;
use crate::{api, notify};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Checkout() -> Html {
	let cart = use_cart();
	let navigator = use_navigator().unwrap();
	let address = use_state(Address::default);
	let placing = use_state(|| false);

	let field = |apply: fn(&mut Address, String)| {
		let address = address.clone();
		Callback::from(move |event: InputEvent| {
			let input: web_sys::HtmlInputElement = event.target_unchecked_into();
			let mut updated = (*address).clone();
			apply(&mut updated, input.value());
			address.set(updated);
		})
	};
	let oninput_name = field(|address, value| address.full_name = value);
	let oninput_line1 = field(|address, value| address.line1 = value);
	let oninput_line2 = field(|address, value| address.line2 = value);
	let oninput_city = field(|address, value| address.city = value);
	let oninput_state = field(|address, value| address.state = value);
	let oninput_postal = field(|address, value| address.postal_code = value);
	let oninput_country = field(|address, value| address.country = value);
	let oninput_phone = field(|address, value| address.phone = value);

	let onsubmit = {
		let cart = cart.clone();
		let address = address.clone();
		let placing = placing.clone();
		let navigator = navigator.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			if *placing || cart.entries.is_empty() {
				return;
			}
			let items = cart
				.entries
				.iter()
				.map(|entry| OrderItem {
					product_id: entry.product_id.clone(),
					name: entry.name.clone(),
					price: entry.price,
					quantity: entry.quantity,
					color: entry.color.clone(),
					size: entry.size.clone(),
				})
				.collect::<Vec<_>>();
			let order = api::orders::NewOrder {
				total: cart.total(),
				address: (*address).clone(),
				items,
			};
			placing.set(true);
			let placing = placing.clone();
			let navigator = navigator.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::orders::place(&order).await {
					Ok(order) => {
						notify::success(format!("Order {} placed", order.id));
						navigator.push(&Route::Profile);
					}
					Err(err) => notify::error(err.to_string()),
				}
				placing.set(false);
			});
		})
	};

	html! {
		<section class="checkout">
			<h1>{"Checkout"}</h1>
			<div class="summary">
				<p>{format!("{} item(s)", cart.entries.len())}</p>
				<strong>{format!("Total: \u{20b9}{:.2}", cart.total())}</strong>
			</div>
			<form {onsubmit}>
				<label>{"Full name"}<input value={address.full_name.clone()} oninput={oninput_name} required=true /></label>
				<label>{"Address line 1"}<input value={address.line1.clone()} oninput={oninput_line1} required=true /></label>
				<label>{"Address line 2"}<input value={address.line2.clone()} oninput={oninput_line2} /></label>
				<label>{"City"}<input value={address.city.clone()} oninput={oninput_city} required=true /></label>
				<label>{"State"}<input value={address.state.clone()} oninput={oninput_state} required=true /></label>
				<label>{"Postal code"}<input value={address.postal_code.clone()} oninput={oninput_postal} required=true /></label>
				<label>{"Country"}<input value={address.country.clone()} oninput={oninput_country} required=true /></label>
				<label>{"Phone"}<input value={address.phone.clone()} oninput={oninput_phone} /></label>
				<button class="button is-primary" type="submit" disabled={*placing || cart.entries.is_empty()}>
					{ if *placing { "Placing order" } else { "Place order" } }
				</button>
			</form>
		</section>
	}
}
