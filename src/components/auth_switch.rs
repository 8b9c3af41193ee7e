use crate::auth::Status;
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders one of two subtrees depending on the signed-in state. The pending
/// probe counts as anonymous, so guests never see a flash of account UI.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let status = use_store_value::<Status>();
	let empty = || html! {};
	if status.is_authenticated() {
		props.identified.clone().unwrap_or_else(empty)
	} else {
		props.anonymous.clone().unwrap_or_else(empty)
	}
}
