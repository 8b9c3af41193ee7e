use crate::auth;
use crate::data::{CartEntry, WishlistEntry};
use crate::{api, notify, storage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Cart access for views: the account cart when signed in, the guest store
/// otherwise. Mutations refresh the handle's list on success and surface
/// failures as notifications without touching the list.
#[derive(Clone, PartialEq)]
pub struct CartHandle {
	pub entries: UseStateHandle<Vec<CartEntry>>,
	authenticated: bool,
}

impl CartHandle {
	pub fn add(&self, entry: CartEntry) {
		let name = entry.name.clone();
		if self.authenticated {
			let entries = self.entries.clone();
			spawn_local(async move {
				let item = api::cart::AddItem {
					product_id: &entry.product_id,
					quantity: entry.quantity,
					color: entry.color.as_deref(),
					size: entry.size.as_deref(),
				};
				match api::cart::add(&item).await {
					Ok(items) => {
						entries.set(items);
						notify::success(format!("{name} added to cart"));
					}
					Err(err) => notify::error(err.to_string()),
				}
			});
		} else {
			storage::add_to_cart(entry);
			self.entries.set(storage::get_cart());
			notify::success(format!("{name} added to cart"));
		}
	}

	/// Non-positive quantities remove the row, mirroring the guest-store
	/// semantics on the server side.
	pub fn update_quantity(&self, id: String, quantity: i32) {
		if self.authenticated {
			let entries = self.entries.clone();
			spawn_local(async move {
				let result = if quantity <= 0 {
					api::cart::remove(&id).await
				} else {
					api::cart::update(&id, quantity as u32).await
				};
				match result {
					Ok(()) => {
						let mut items = (*entries).clone();
						storage::apply_cart_quantity(&mut items, &id, quantity);
						entries.set(items);
						notify::success("Quantity updated");
					}
					Err(err) => notify::error(err.to_string()),
				}
			});
		} else {
			storage::update_cart_item(&id, quantity);
			self.entries.set(storage::get_cart());
			notify::success("Quantity updated");
		}
	}

	pub fn remove(&self, id: String) {
		if self.authenticated {
			let entries = self.entries.clone();
			spawn_local(async move {
				match api::cart::remove(&id).await {
					Ok(()) => {
						let items = (*entries).iter().filter(|row| row.id != id).cloned().collect();
						entries.set(items);
						notify::success("Item removed from cart");
					}
					Err(err) => notify::error(err.to_string()),
				}
			});
		} else {
			storage::remove_from_cart(&id);
			self.entries.set(storage::get_cart());
			notify::success("Item removed from cart");
		}
	}

	pub fn total(&self) -> f64 {
		self.entries.iter().map(|row| row.price * f64::from(row.quantity)).sum()
	}
}

#[hook]
pub fn use_cart() -> CartHandle {
	let status = auth::use_auth();
	let entries = use_state(Vec::new);
	let authenticated = status.is_authenticated();
	{
		let entries = entries.clone();
		use_effect_with(authenticated, move |signed_in| {
			if *signed_in {
				spawn_local(async move {
					match api::cart::fetch().await {
						Ok(items) => entries.set(items),
						Err(err) => notify::error(err.to_string()),
					}
				});
			} else {
				entries.set(storage::get_cart());
			}
		});
	}
	CartHandle { entries, authenticated }
}

/// Wishlist access for views, with the same guest/account split as
/// [`use_cart`].
#[derive(Clone, PartialEq)]
pub struct WishlistHandle {
	pub entries: UseStateHandle<Vec<WishlistEntry>>,
	authenticated: bool,
}

impl WishlistHandle {
	pub fn contains(&self, product_id: &str) -> bool {
		self.entries.iter().any(|row| row.product == product_id)
	}

	pub fn add(&self, entry: WishlistEntry) {
		let name = entry.name.clone();
		if self.authenticated {
			let entries = self.entries.clone();
			spawn_local(async move {
				match api::wishlist::add(&entry.product).await {
					Ok(()) => {
						let mut items = (*entries).clone();
						if !items.iter().any(|row| row.product == entry.product) {
							items.push(entry);
						}
						entries.set(items);
						notify::success(format!("{name} added to wishlist"));
					}
					Err(err) => notify::error(err.to_string()),
				}
			});
		} else {
			storage::add_to_wishlist(entry);
			self.entries.set(storage::get_wishlist());
			notify::success(format!("{name} added to wishlist"));
		}
	}

	pub fn remove(&self, product_id: String) {
		if self.authenticated {
			let entries = self.entries.clone();
			spawn_local(async move {
				match api::wishlist::remove(&product_id).await {
					Ok(()) => {
						let items = (*entries)
							.iter()
							.filter(|row| row.product != product_id)
							.cloned()
							.collect();
						entries.set(items);
						notify::success("Removed from wishlist");
					}
					Err(err) => notify::error(err.to_string()),
				}
			});
		} else {
			storage::remove_from_wishlist(&product_id);
			self.entries.set(storage::get_wishlist());
			notify::success("Removed from wishlist");
		}
	}
}

#[hook]
pub fn use_wishlist() -> WishlistHandle {
	let status = auth::use_auth();
	let entries = use_state(Vec::new);
	let authenticated = status.is_authenticated();
	{
		let entries = entries.clone();
		use_effect_with(authenticated, move |signed_in| {
			if *signed_in {
				spawn_local(async move {
					match api::wishlist::fetch().await {
						Ok(items) => entries.set(items),
						Err(err) => notify::error(err.to_string()),
					}
				});
			} else {
				entries.set(storage::get_wishlist());
			}
		});
	}
	WishlistHandle { entries, authenticated }
}
