use crate::notify::{Level, Notices};
use yew::prelude::*;
use yewdux::prelude::*;

/// Renders the notification queue in a fixed overlay. Each notice carries
/// its own dismiss button; expiry is handled by the queue itself.
#[function_component]
pub fn Toaster() -> Html {
	let (notices, dispatch) = use_store::<Notices>();
	let toasts = notices.entries().iter().map(|notice| {
		let class = match notice.level {
			Level::Success => "toast is-success",
			Level::Error => "toast is-danger",
		};
		let ondismiss = {
			let dispatch = dispatch.clone();
			let id = notice.id;
			Callback::from(move |_| dispatch.reduce_mut(|notices| notices.dismiss(id)))
		};
		html! {
			<div key={notice.id.to_string()} {class}>
				<button class="delete" onclick={ondismiss}>{"×"}</button>
				<span>{notice.text.clone()}</span>
			</div>
		}
	});
	html! {
		<div class="toaster">
			{for toasts}
		</div>
	}
}
