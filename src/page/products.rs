use crate::api;
use crate::components::ProductCard;
use crate::hooks::use_wishlist;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

#[function_component]
pub fn Products() -> Html {
	let wishlist = use_wishlist();
	let category = use_state(|| None::<String>);
	let products = use_async_with_options(
		async move { api::catalog::products().await.map_err(|err| err.to_string()) },
		UseAsyncOptions::enable_auto(),
	);

	let body = if products.loading {
		html! { <p>{"Loading products"}</p> }
	} else if let Some(error) = &products.error {
		html! { <p class="error">{error.clone()}</p> }
	} else {
		let all = products.data.clone().unwrap_or_default();
		let mut categories: Vec<String> = all.iter().map(|product| product.category.clone()).collect();
		categories.sort();
		categories.dedup();
		let shown: Vec<_> = all
			.iter()
			.filter(|product| category.as_ref().map_or(true, |wanted| &product.category == wanted))
			.cloned()
			.collect();
		let pick = {
			let category = category.clone();
			Callback::from(move |event: Event| {
				let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
				let value = select.value();
				category.set((!value.is_empty()).then_some(value));
			})
		};
		html! {<>
			<div class="filters">
				<select onchange={pick}>
					<option value="" selected={category.is_none()}>{"All categories"}</option>
					{ for categories.iter().map(|name| html! {
						<option value={name.clone()} selected={category.as_deref() == Some(name)}>
							{name.clone()}
						</option>
					}) }
				</select>
			</div>
			<div class="product-grid">
				{ for shown.iter().map(|product| html! {
					<ProductCard key={product.id.clone()} product={product.clone()} wishlist={wishlist.clone()} />
				}) }
			</div>
		</>}
	};
	html! {
		<section class="products">
			<h1>{"Shop"}</h1>
			{body}
		</section>
	}
}
