use crate::hooks::use_cart;
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn CartPage() -> Html {
	let cart = use_cart();
	if cart.entries.is_empty() {
		return html! {
			<section class="cart">
				<h1>{"Your Cart"}</h1>
				<p>{"Your cart is empty."}</p>
				<Link<Route> classes="button" to={Route::Products}>{"Continue shopping"}</Link<Route>>
			</section>
		};
	}
	let rows = cart
		.entries
		.iter()
		.map(|entry| {
			let decrement = {
				let cart = cart.clone();
				let id = entry.id.clone();
				let quantity = entry.quantity as i32 - 1;
				Callback::from(move |_| cart.update_quantity(id.clone(), quantity))
			};
			let increment = {
				let cart = cart.clone();
				let id = entry.id.clone();
				let quantity = entry.quantity as i32 + 1;
				Callback::from(move |_| cart.update_quantity(id.clone(), quantity))
			};
			let remove = {
				let cart = cart.clone();
				let id = entry.id.clone();
				Callback::from(move |_| cart.remove(id.clone()))
			};
			let variant = [entry.color.as_deref(), entry.size.as_deref()]
				.into_iter()
				.flatten()
				.collect::<Vec<_>>()
				.join(" / ");
			html! {
				<tr key={entry.id.clone()}>
					<td><img class="thumb" src={entry.image.clone()} alt={entry.name.clone()} /></td>
					<td>
						{&entry.name}
						{ (!variant.is_empty()).then(|| html! { <span class="variant">{variant.clone()}</span> }) }
					</td>
					<td>{format!("\u{20b9}{:.2}", entry.price)}</td>
					<td class="quantity">
						<button onclick={decrement}>{"\u{2212}"}</button>
						<span>{entry.quantity}</span>
						<button onclick={increment}>{"+"}</button>
					</td>
					<td>{format!("\u{20b9}{:.2}", entry.price * f64::from(entry.quantity))}</td>
					<td><button class="remove" onclick={remove}>{"Remove"}</button></td>
				</tr>
			}
		})
		.collect::<Html>();
	html! {
		<section class="cart">
			<h1>{"Your Cart"}</h1>
			<table>
				<tbody>{rows}</tbody>
			</table>
			<div class="summary">
				<strong>{format!("Total: \u{20b9}{:.2}", cart.total())}</strong>
				<Link<Route> classes="button is-primary" to={Route::Checkout}>{"Checkout"}</Link<Route>>
			</div>
		</section>
	}
}
