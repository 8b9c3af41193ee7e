use crate::api::{self, catalog::NewProduct};
use crate::data::{ColorOption, SizeOption};
use crate::notify;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

fn split_labels(raw: &str) -> Vec<String> {
	raw.split(',')
		.map(str::trim)
		.filter(|label| !label.is_empty())
		.map(str::to_owned)
		.collect()
}

#[function_component]
pub fn Admin() -> Html {
	let products = use_async_with_options(
		async move { api::catalog::products().await.map_err(|err| err.to_string()) },
		UseAsyncOptions::enable_auto(),
	);

	let name = use_state(String::new);
	let category = use_state(String::new);
	let description = use_state(String::new);
	let price = use_state(String::new);
	let stock = use_state(String::new);
	let images = use_state(String::new);
	let colors = use_state(String::new);
	let sizes = use_state(String::new);

	let bind = |state: &UseStateHandle<String>| {
		let state = state.clone();
		Callback::from(move |event: InputEvent| {
			let input: web_sys::HtmlInputElement = event.target_unchecked_into();
			state.set(input.value());
		})
	};
	let bind_area = |state: &UseStateHandle<String>| {
		let state = state.clone();
		Callback::from(move |event: InputEvent| {
			let area: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
			state.set(area.value());
		})
	};

	let oninput_name = bind(&name);
	let oninput_category = bind(&category);
	let oninput_price = bind(&price);
	let oninput_stock = bind(&stock);
	let oninput_colors = bind(&colors);
	let oninput_sizes = bind(&sizes);
	let oninput_description = bind_area(&description);
	let oninput_images = bind_area(&images);

	let onsubmit = {
		let products = products.clone();
		let name = name.clone();
		let category = category.clone();
		let description = description.clone();
		let price = price.clone();
		let stock = stock.clone();
		let images = images.clone();
		let colors = colors.clone();
		let sizes = sizes.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			let submission = NewProduct {
				name: (*name).clone(),
				description: (*description).clone(),
				category: (*category).clone(),
				price: price.parse().unwrap_or(0.0),
				stock: stock.parse().unwrap_or(0),
				images: images
					.lines()
					.map(str::trim)
					.filter(|line| !line.is_empty())
					.map(str::to_owned)
					.collect(),
				colors: split_labels(&colors)
					.into_iter()
					.map(|name| ColorOption { name, value: String::new() })
					.collect(),
				sizes: split_labels(&sizes)
					.into_iter()
					.map(|value| SizeOption { value })
					.collect(),
			};
			if submission.name.is_empty() || submission.price <= 0.0 {
				notify::error("A product needs a name and a positive price");
				return;
			}
			let products = products.clone();
			let name = name.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::catalog::create_product(&submission).await {
					Ok(created) => {
						notify::success(format!("{} added to the catalog", created.name));
						name.set(String::new());
						products.run();
					}
					Err(err) => notify::error(err.to_string()),
				}
			});
		})
	};

	let listing = match (&products.data, &products.error) {
		(Some(all), _) => all
			.iter()
			.map(|product| {
				let ondelete = {
					let products = products.clone();
					let id = product.id.clone();
					let name = product.name.clone();
					Callback::from(move |_| {
						let products = products.clone();
						let id = id.clone();
						let name = name.clone();
						wasm_bindgen_futures::spawn_local(async move {
							match api::catalog::delete_product(&id).await {
								Ok(()) => {
									notify::success(format!("{name} removed"));
									products.run();
								}
								Err(err) => notify::error(err.to_string()),
							}
						});
					})
				};
				html! {
					<tr key={product.id.clone()}>
						<td>{&product.name}</td>
						<td>{&product.category}</td>
						<td>{format!("\u{20b9}{:.2}", product.price)}</td>
						<td>{product.stock}</td>
						<td><button class="remove" onclick={ondelete}>{"Delete"}</button></td>
					</tr>
				}
			})
			.collect::<Html>(),
		(None, Some(error)) => html! { <tr><td colspan="5" class="error">{error.clone()}</td></tr> },
		_ => html! { <tr><td colspan="5">{"Loading"}</td></tr> },
	};

	html! {
		<section class="admin">
			<h1>{"Product Manager"}</h1>
			<form class="product-form" {onsubmit}>
				<label>{"Name"}<input value={(*name).clone()} oninput={oninput_name} required=true /></label>
				<label>{"Category"}<input value={(*category).clone()} oninput={oninput_category} /></label>
				<label>{"Price"}<input type="number" step="0.01" value={(*price).clone()} oninput={oninput_price} required=true /></label>
				<label>{"Stock"}<input type="number" value={(*stock).clone()} oninput={oninput_stock} /></label>
				<label>{"Colors (comma separated)"}<input value={(*colors).clone()} oninput={oninput_colors} /></label>
				<label>{"Sizes (comma separated)"}<input value={(*sizes).clone()} oninput={oninput_sizes} /></label>
				<label>{"Description"}<textarea value={(*description).clone()} oninput={oninput_description} /></label>
				<label>{"Image URLs (one per line)"}<textarea value={(*images).clone()} oninput={oninput_images} /></label>
				<button class="button is-primary" type="submit">{"Add product"}</button>
			</form>
			<table class="catalog">
				<thead>
					<tr>
						<th>{"Name"}</th>
						<th>{"Category"}</th>
						<th>{"Price"}</th>
						<th>{"Stock"}</th>
						<th></th>
					</tr>
				</thead>
				<tbody>{listing}</tbody>
			</table>
		</section>
	}
}

#[cfg(test)]
mod test {
	use super::split_labels;

	#[test]
	fn labels_are_trimmed_and_blank_entries_dropped() {
		assert_eq!(split_labels("Red, Blue , ,Green"), vec!["Red", "Blue", "Green"]);
		assert!(split_labels("  ").is_empty());
	}
}
