use crate::data::{Product, WishlistEntry};
use crate::hooks::WishlistHandle;
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ProductCardProps {
	pub product: Product,
	pub wishlist: WishlistHandle,
}

#[function_component]
pub fn ProductCard(props: &ProductCardProps) -> Html {
	let product = &props.product;
	let wished = props.wishlist.contains(&product.id);
	let toggle_wishlist = {
		let wishlist = props.wishlist.clone();
		let product = product.clone();
		Callback::from(move |_| {
			if wishlist.contains(&product.id) {
				wishlist.remove(product.id.clone());
			} else {
				wishlist.add(WishlistEntry {
					id: String::new(),
					product: product.id.clone(),
					name: product.name.clone(),
					price: product.price,
					image: product.primary_image().to_owned(),
					category: product.category.clone(),
				});
			}
		})
	};
	html! {
		<div class="product-card">
			<Link<Route> to={Route::Product { id: product.id.clone() }}>
				<img src={product.primary_image().to_owned()} alt={product.name.clone()} />
			</Link<Route>>
			<button
				class={classes!("wishlist-toggle", wished.then_some("active"))}
				onclick={toggle_wishlist}
			>{"\u{2665}"}</button>
			<span class="category">{&product.category}</span>
			<Link<Route> to={Route::Product { id: product.id.clone() }}>
				<h3>{&product.name}</h3>
			</Link<Route>>
			<Price price={product.price} original={product.original_price} />
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct PriceProps {
	pub price: f64,
	#[prop_or_default]
	pub original: Option<f64>,
}

#[function_component]
pub fn Price(props: &PriceProps) -> Html {
	html! {
		<p class="price">
			<span>{format!("\u{20b9}{:.2}", props.price)}</span>
			{ props.original.map(|original| html! {
				<s>{format!("\u{20b9}{original:.2}")}</s>
			}) }
		</p>
	}
}
