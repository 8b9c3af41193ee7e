use crate::data::CartEntry;
use crate::hooks::{use_cart, use_wishlist};
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn WishlistPage() -> Html {
	let wishlist = use_wishlist();
	let cart = use_cart();
	if wishlist.entries.is_empty() {
		return html! {
			<section class="wishlist">
				<h1>{"Your Wishlist"}</h1>
				<p>{"Nothing saved yet."}</p>
				<Link<Route> classes="button" to={Route::Products}>{"Browse the collection"}</Link<Route>>
			</section>
		};
	}
	let rows = wishlist
		.entries
		.iter()
		.map(|entry| {
			let remove = {
				let wishlist = wishlist.clone();
				let product = entry.product.clone();
				Callback::from(move |_| wishlist.remove(product.clone()))
			};
			let move_to_cart = {
				let cart = cart.clone();
				let entry = entry.clone();
				Callback::from(move |_| {
					cart.add(CartEntry {
						id: String::new(),
						product_id: entry.product.clone(),
						name: entry.name.clone(),
						price: entry.price,
						image: entry.image.clone(),
						quantity: 1,
						color: None,
						size: None,
					});
				})
			};
			html! {
				<div class="wishlist-row" key={entry.product.clone()}>
					<img class="thumb" src={entry.image.clone()} alt={entry.name.clone()} />
					<div class="info">
						<Link<Route> to={Route::Product { id: entry.product.clone() }}>{&entry.name}</Link<Route>>
						<span class="category">{&entry.category}</span>
						<span class="price">{format!("\u{20b9}{:.2}", entry.price)}</span>
					</div>
					<button class="button" onclick={move_to_cart}>{"Add to cart"}</button>
					<button class="remove" onclick={remove}>{"Remove"}</button>
				</div>
			}
		})
		.collect::<Html>();
	html! {
		<section class="wishlist">
			<h1>{"Your Wishlist"}</h1>
			{rows}
		</section>
	}
}
