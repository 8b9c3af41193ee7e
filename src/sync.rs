use crate::{api, notify, storage};
use std::future::Future;

/// Drains the guest cart and wishlist into the signed-in account.
///
/// Runs once, immediately after a successful login. Pushes are strictly
/// sequential in stored order, cart before wishlist, and individually
/// fallible: a rejected item is reported the moment it fails and then
/// skipped rather than aborting the batch. Each guest collection is cleared
/// once every entry has been offered to the server, whether or not the
/// pushes succeeded, so the guest store never outlives the session that
/// absorbed it.
pub async fn sync_guest_data() {
	drain(
		storage::get_cart(),
		|entry| async move {
			let item = api::cart::AddItem {
				product_id: &entry.product_id,
				quantity: entry.quantity,
				color: entry.color.as_deref(),
				size: entry.size.as_deref(),
			};
			if let Err(err) = api::cart::add(&item).await {
				notify::error(format!("Failed to sync cart item {}: {err}", entry.name));
			}
		},
		|| storage::set_cart(Vec::new()),
	)
	.await;

	drain(
		storage::get_wishlist(),
		|entry| async move {
			if let Err(err) = api::wishlist::add(&entry.product).await {
				notify::error(format!("Failed to sync wishlist item {}: {err}", entry.name));
			}
		},
		|| storage::set_wishlist(Vec::new()),
	)
	.await;
}

/// Pushes every entry one awaited call at a time, in the order given, then
/// clears the source. The pusher owns its own failure reporting, so nothing
/// here can stop the batch and `clear` always runs.
async fn drain<T, F, Fut>(entries: Vec<T>, mut push: F, clear: impl FnOnce())
where
	F: FnMut(T) -> Fut,
	Fut: Future<Output = ()>,
{
	for entry in entries {
		push(entry).await;
	}
	clear();
}

#[cfg(test)]
mod test {
	use super::drain;
	use futures::executor::block_on;
	use std::cell::RefCell;

	#[test]
	fn batch_continues_past_a_failure() {
		let events = RefCell::new(Vec::new());
		let recorder = &events;
		block_on(drain(
			vec!["a", "b", "c"],
			move |entry| {
				recorder.borrow_mut().push(format!("pushed {entry}"));
				async move {
					if entry == "b" {
						recorder.borrow_mut().push(format!("Failed to sync {entry}"));
					}
				}
			},
			|| events.borrow_mut().push("cleared".into()),
		));
		assert_eq!(
			*events.borrow(),
			vec!["pushed a", "pushed b", "Failed to sync b", "pushed c", "cleared"]
		);
	}

	#[test]
	fn every_failure_is_reported_before_the_clear() {
		let events = RefCell::new(Vec::new());
		let recorder = &events;
		block_on(drain(
			vec![1, 2, 3],
			move |entry| {
				recorder.borrow_mut().push(format!("Failed to sync item {entry}"));
				async {}
			},
			|| events.borrow_mut().push("cleared".into()),
		));
		assert_eq!(
			*events.borrow(),
			vec!["Failed to sync item 1", "Failed to sync item 2", "Failed to sync item 3", "cleared"]
		);
	}

	#[test]
	fn empty_batch_still_clears() {
		let cleared = RefCell::new(false);
		block_on(drain(Vec::<u32>::new(), |_| async {}, || *cleared.borrow_mut() = true));
		assert!(*cleared.borrow());
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_test {
	use super::drain;
	use crate::data::CartEntry;
	use crate::storage;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	async fn guest_cart_is_emptied_even_when_every_push_is_rejected() {
		storage::set_cart(vec![CartEntry {
			id: "1".into(),
			product_id: "P1".into(),
			name: "Silk Saree".into(),
			price: 2499.0,
			image: "/saree.jpg".into(),
			quantity: 2,
			color: None,
			size: None,
		}]);
		drain(
			storage::get_cart(),
			|_| async {
				// server refused this one
			},
			|| storage::set_cart(Vec::new()),
		)
		.await;
		assert!(storage::get_cart().is_empty());
	}
}
