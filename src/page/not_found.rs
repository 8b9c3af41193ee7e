use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn NotFound() -> Html {
	html! {
		<section class="not-found">
			<h1>{"404"}</h1>
			<p>{"That page does not exist."}</p>
			<Link<Route> classes="button" to={Route::Home}>{"Back to the shop"}</Link<Route>>
		</section>
	}
}
