use crate::api;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

#[function_component]
pub fn Profile() -> Html {
	let me = use_async_with_options(
		async move { api::auth::me().await.map_err(|err| err.to_string()) },
		UseAsyncOptions::enable_auto(),
	);
	let orders = use_async_with_options(
		async move { api::orders::list().await.map_err(|err| err.to_string()) },
		UseAsyncOptions::enable_auto(),
	);

	let identity = match (&me.data, &me.error) {
		(Some(me), _) => html! {
			<div class="identity">
				<h2>{&me.name}</h2>
				<p>{&me.email}</p>
				{ me.is_admin.then(|| html! { <span class="tag">{"Administrator"}</span> }) }
			</div>
		},
		(None, Some(error)) => html! { <p class="error">{error.clone()}</p> },
		_ => html! { <p>{"Loading"}</p> },
	};

	let history = match (&orders.data, &orders.error) {
		(Some(orders), _) if orders.is_empty() => html! { <p>{"No orders yet."}</p> },
		(Some(orders), _) => orders
			.iter()
			.map(|order| {
				html! {
					<div class="order" key={order.id.clone()}>
						<div class="order-head">
							<span>{format!("Order {}", order.id)}</span>
							<span class="status">{&order.status}</span>
							<span>{&order.created_at}</span>
						</div>
						<ul>
							{ for order.items.iter().map(|item| html! {
								<li>{format!("{} \u{00d7} {}", item.quantity, item.name)}</li>
							}) }
						</ul>
						<strong>{format!("\u{20b9}{:.2}", order.total)}</strong>
					</div>
				}
			})
			.collect::<Html>(),
		(None, Some(error)) => html! { <p class="error">{error.clone()}</p> },
		_ => html! { <p>{"Loading"}</p> },
	};

	html! {
		<section class="profile">
			<h1>{"My Account"}</h1>
			{identity}
			<h2>{"Order History"}</h2>
			{history}
		</section>
	}
}
