use crate::api;
use crate::components::Price;
use crate::data::{CartEntry, WishlistEntry};
use crate::hooks::{use_cart, use_wishlist};
use yew::prelude::*;
use yew_hooks::use_async;

#[derive(Clone, PartialEq, Properties)]
pub struct ProductDetailProps {
	pub id: String,
}

#[function_component]
pub fn ProductDetail(props: &ProductDetailProps) -> Html {
	let cart = use_cart();
	let wishlist = use_wishlist();
	let color = use_state(|| None::<String>);
	let size = use_state(|| None::<String>);
	let quantity = use_state(|| 1u32);
	let fetched = {
		let id = props.id.clone();
		use_async(async move { api::catalog::product(&id).await.map_err(|err| err.to_string()) })
	};
	// refetch when routed to a different product
	{
		let fetched = fetched.clone();
		use_effect_with(props.id.clone(), move |_| fetched.run());
	}

	let Some(product) = fetched.data.clone() else {
		return match &fetched.error {
			Some(error) => html! { <p class="error">{error.clone()}</p> },
			None => html! { <p>{"Loading"}</p> },
		};
	};

	// Variant pickers default to the catalog's first option.
	let selected_color = (*color)
		.clone()
		.or_else(|| product.colors.first().map(|option| option.name.clone()));
	let selected_size = (*size)
		.clone()
		.or_else(|| product.sizes.first().map(|option| option.value.clone()));

	let colors = product.colors.iter().map(|option| {
		let active = selected_color.as_deref() == Some(option.name.as_str());
		let pick = {
			let color = color.clone();
			let name = option.name.clone();
			Callback::from(move |_| color.set(Some(name.clone())))
		};
		html! {
			<button
				key={option.name.clone()}
				class={classes!("variant", active.then_some("active"))}
				onclick={pick}
			>{option.name.clone()}</button>
		}
	});
	let sizes = product.sizes.iter().map(|option| {
		let active = selected_size.as_deref() == Some(option.value.as_str());
		let pick = {
			let size = size.clone();
			let value = option.value.clone();
			Callback::from(move |_| size.set(Some(value.clone())))
		};
		html! {
			<button
				key={option.value.clone()}
				class={classes!("variant", active.then_some("active"))}
				onclick={pick}
			>{option.value.clone()}</button>
		}
	});

	let decrement = {
		let quantity = quantity.clone();
		Callback::from(move |_| quantity.set((*quantity).saturating_sub(1).max(1)))
	};
	let increment = {
		let quantity = quantity.clone();
		Callback::from(move |_| quantity.set(*quantity + 1))
	};

	let add_to_cart = {
		let cart = cart.clone();
		let product = product.clone();
		let selected_color = selected_color.clone();
		let selected_size = selected_size.clone();
		let quantity = quantity.clone();
		Callback::from(move |_| {
			cart.add(CartEntry {
				id: String::new(),
				product_id: product.id.clone(),
				name: product.name.clone(),
				price: product.price,
				image: product.primary_image().to_owned(),
				quantity: *quantity,
				color: selected_color.clone(),
				size: selected_size.clone(),
			});
		})
	};
	let wished = wishlist.contains(&product.id);
	let toggle_wishlist = {
		let wishlist = wishlist.clone();
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
		<section class="product-detail">
			<div class="gallery">
				<img src={product.primary_image().to_owned()} alt={product.name.clone()} />
			</div>
			<div class="details">
				<span class="category">{&product.category}</span>
				<h1>{&product.name}</h1>
				<Price price={product.price} original={product.original_price} />
				<p class="description">{&product.description}</p>
				{ (!product.colors.is_empty()).then(|| html! {
					<div class="variants">
						<span>{"Color"}</span>
						{for colors}
					</div>
				}) }
				{ (!product.sizes.is_empty()).then(|| html! {
					<div class="variants">
						<span>{"Size"}</span>
						{for sizes}
					</div>
				}) }
				<div class="quantity">
					<button onclick={decrement}>{"\u{2212}"}</button>
					<span>{*quantity}</span>
					<button onclick={increment}>{"+"}</button>
				</div>
				<div class="actions">
					<button class="button is-primary" onclick={add_to_cart}>{"Add to cart"}</button>
					<button
						class={classes!("button", wished.then_some("active"))}
						onclick={toggle_wishlist}
					>{ if wished { "Remove from wishlist" } else { "Add to wishlist" } }</button>
				</div>
			</div>
		</section>
	}
}
