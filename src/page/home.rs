use crate::api;
use crate::components::ProductCard;
use crate::hooks::use_wishlist;
use crate::route::Route;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::*;

#[function_component]
pub fn Home() -> Html {
	let wishlist = use_wishlist();
	let featured = use_async_with_options(
		async move { api::catalog::products().await.map_err(|err| err.to_string()) },
		UseAsyncOptions::enable_auto(),
	);
	let cards = match (&featured.data, &featured.error) {
		(Some(products), _) => html! {
			<div class="product-grid">
				{ for products.iter().take(4).map(|product| html! {
					<ProductCard key={product.id.clone()} product={product.clone()} wishlist={wishlist.clone()} />
				}) }
			</div>
		},
		(None, Some(error)) => html! { <p class="error">{error.clone()}</p> },
		_ => html! { <p>{"Loading"}</p> },
	};
	html! {<>
		<section class="hero">
			<h1>{"Elegance Redefined"}</h1>
			<p>{"Curated collections that blend timeless sophistication with contemporary style."}</p>
			<Link<Route> classes="button is-primary" to={Route::Products}>{"Shop the collection"}</Link<Route>>
		</section>
		<section class="featured">
			<h2>{"Featured"}</h2>
			{cards}
		</section>
	</>}
}
