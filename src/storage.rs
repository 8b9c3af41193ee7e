use crate::data::{CartEntry, WishlistEntry};
use crate::session::StorageValue;
use serde::{Deserialize, Serialize};

/// Guest-owned cart rows, persisted under the `cart` key as a JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GuestCart(Vec<CartEntry>);
impl StorageValue for GuestCart {
	fn id() -> &'static str {
		"cart"
	}
}

/// Guest-owned wishlist rows, persisted under the `wishlist` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GuestWishlist(Vec<WishlistEntry>);
impl StorageValue for GuestWishlist {
	fn id() -> &'static str {
		"wishlist"
	}
}

pub fn get_cart() -> Vec<CartEntry> {
	GuestCart::load().map(|store| store.0).unwrap_or_default()
}

pub fn set_cart(cart: Vec<CartEntry>) {
	GuestCart(cart).save();
}

/// Adds a row to the guest cart. A row already holding the same
/// `(product, color, size)` variant absorbs the added quantity instead of
/// duplicating; otherwise the row is appended under a fresh local id.
pub fn add_to_cart(entry: CartEntry) {
	let mut cart = get_cart();
	merge_cart_entry(
		&mut cart,
		CartEntry {
			id: next_entry_id(),
			..entry
		},
	);
	set_cart(cart);
}

/// Sets the quantity of the row with the given id. A non-positive quantity
/// removes the row; an unknown id is left alone.
pub fn update_cart_item(id: &str, quantity: i32) {
	let mut cart = get_cart();
	apply_cart_quantity(&mut cart, id, quantity);
	set_cart(cart);
}

pub fn remove_from_cart(id: &str) {
	let mut cart = get_cart();
	cart.retain(|row| row.id != id);
	set_cart(cart);
}

pub fn get_wishlist() -> Vec<WishlistEntry> {
	GuestWishlist::load().map(|store| store.0).unwrap_or_default()
}

pub fn set_wishlist(wishlist: Vec<WishlistEntry>) {
	GuestWishlist(wishlist).save();
}

/// Adds a row to the guest wishlist; a second add of the same product is a
/// no-op.
pub fn add_to_wishlist(entry: WishlistEntry) {
	let mut wishlist = get_wishlist();
	push_wishlist_entry(
		&mut wishlist,
		WishlistEntry {
			id: next_entry_id(),
			..entry
		},
	);
	set_wishlist(wishlist);
}

pub fn remove_from_wishlist(product: &str) {
	let mut wishlist = get_wishlist();
	wishlist.retain(|row| row.product != product);
	set_wishlist(wishlist);
}

/// Merge step behind [`add_to_cart`], factored out so the invariant (one row
/// per distinct variant, quantities accumulate) holds independent of the
/// backing store.
pub fn merge_cart_entry(cart: &mut Vec<CartEntry>, entry: CartEntry) {
	match cart.iter_mut().find(|row| row.same_variant(&entry)) {
		Some(row) => row.quantity += entry.quantity,
		None => cart.push(entry),
	}
}

/// Quantity step behind [`update_cart_item`]: positive quantities are set
/// exactly (never accumulated), anything else removes the row.
pub fn apply_cart_quantity(cart: &mut Vec<CartEntry>, id: &str, quantity: i32) {
	let Some(index) = cart.iter().position(|row| row.id == id) else {
		return;
	};
	if quantity <= 0 {
		cart.remove(index);
	} else {
		cart[index].quantity = quantity as u32;
	}
}

/// Dedup step behind [`add_to_wishlist`]; returns whether the row was
/// inserted.
pub fn push_wishlist_entry(wishlist: &mut Vec<WishlistEntry>, entry: WishlistEntry) -> bool {
	if wishlist.iter().any(|row| row.product == entry.product) {
		return false;
	}
	wishlist.push(entry);
	true
}

/// Local ids are millisecond timestamps, matching the pre-sync id scheme
/// that the server replaces on first write.
fn next_entry_id() -> String {
	#[cfg(target_family = "wasm")]
	{
		format!("{}", web_sys::js_sys::Date::now() as u64)
	}
	#[cfg(not(target_family = "wasm"))]
	{
		use std::time::{SystemTime, UNIX_EPOCH};
		let ms = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|elapsed| elapsed.as_millis())
			.unwrap_or_default();
		format!("{ms}")
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn cart_row(id: &str, product: &str, quantity: u32, color: Option<&str>, size: Option<&str>) -> CartEntry {
		CartEntry {
			id: id.into(),
			product_id: product.into(),
			name: format!("Product {product}"),
			price: 499.0,
			image: "/p.jpg".into(),
			quantity,
			color: color.map(str::to_owned),
			size: size.map(str::to_owned),
		}
	}

	fn wishlist_row(id: &str, product: &str) -> WishlistEntry {
		WishlistEntry {
			id: id.into(),
			product: product.into(),
			name: format!("Product {product}"),
			price: 499.0,
			image: "/p.jpg".into(),
			category: "Sarees".into(),
		}
	}

	#[test]
	fn merge_accumulates_quantity_for_same_variant() {
		let mut cart = Vec::new();
		merge_cart_entry(&mut cart, cart_row("1", "P1", 2, Some("Red"), None));
		merge_cart_entry(&mut cart, cart_row("2", "P1", 1, Some("Red"), None));
		merge_cart_entry(&mut cart, cart_row("3", "P1", 4, Some("Red"), None));
		assert_eq!(cart.len(), 1);
		assert_eq!(cart[0].product_id, "P1");
		assert_eq!(cart[0].color.as_deref(), Some("Red"));
		assert_eq!(cart[0].quantity, 7);
	}

	#[test]
	fn differing_variants_become_separate_rows() {
		let mut cart = Vec::new();
		merge_cart_entry(&mut cart, cart_row("1", "P1", 1, Some("Red"), Some("M")));
		merge_cart_entry(&mut cart, cart_row("2", "P1", 1, Some("Blue"), Some("M")));
		merge_cart_entry(&mut cart, cart_row("3", "P1", 1, Some("Red"), Some("L")));
		merge_cart_entry(&mut cart, cart_row("4", "P2", 1, Some("Red"), Some("M")));
		assert_eq!(cart.len(), 4);
	}

	#[test]
	fn non_positive_quantity_removes_the_row() {
		let mut cart = vec![cart_row("1", "P1", 3, None, None), cart_row("2", "P2", 1, None, None)];
		apply_cart_quantity(&mut cart, "1", 0);
		assert_eq!(cart.len(), 1);
		assert_eq!(cart[0].id, "2");
		apply_cart_quantity(&mut cart, "2", -4);
		assert!(cart.is_empty());
	}

	#[test]
	fn positive_quantity_is_set_exactly() {
		let mut cart = vec![cart_row("1", "P1", 3, None, None)];
		apply_cart_quantity(&mut cart, "1", 5);
		assert_eq!(cart[0].quantity, 5);
		apply_cart_quantity(&mut cart, "1", 5);
		assert_eq!(cart[0].quantity, 5, "updates set, never accumulate");
	}

	#[test]
	fn unknown_id_is_a_noop() {
		let mut cart = vec![cart_row("1", "P1", 3, None, None)];
		apply_cart_quantity(&mut cart, "missing", 9);
		assert_eq!(cart, vec![cart_row("1", "P1", 3, None, None)]);
	}

	#[test]
	fn removal_is_idempotent() {
		let mut cart = vec![cart_row("1", "P1", 1, None, None)];
		cart.retain(|row| row.id != "missing");
		assert_eq!(cart.len(), 1);
		cart.retain(|row| row.id != "1");
		cart.retain(|row| row.id != "1");
		assert!(cart.is_empty());
	}

	#[test]
	fn duplicate_wishlist_add_is_a_noop() {
		let mut wishlist = Vec::new();
		assert!(push_wishlist_entry(&mut wishlist, wishlist_row("1", "P2")));
		assert!(!push_wishlist_entry(&mut wishlist, wishlist_row("2", "P2")));
		assert!(push_wishlist_entry(&mut wishlist, wishlist_row("3", "P3")));
		assert_eq!(wishlist.len(), 2);
		assert_eq!(wishlist[0].id, "1", "first add wins");
	}

	#[test]
	fn repeat_add_of_same_variant_yields_single_merged_row() {
		// Guest adds P1 (qty 2, Red), then P1 (qty 1, Red).
		let mut cart = Vec::new();
		merge_cart_entry(&mut cart, cart_row("1", "P1", 2, Some("Red"), None));
		merge_cart_entry(&mut cart, cart_row("2", "P1", 1, Some("Red"), None));
		assert_eq!(cart.len(), 1);
		assert_eq!(
			(cart[0].product_id.as_str(), cart[0].color.as_deref(), cart[0].quantity),
			("P1", Some("Red"), 3)
		);
	}

	#[test]
	fn guest_collections_serialize_as_plain_arrays() {
		let stored = serde_json::to_string(&GuestCart(vec![cart_row("1", "P1", 2, Some("Red"), None)]));
		let json = stored.expect("cart serializes");
		assert!(json.starts_with('['), "stored layout is a bare JSON array: {json}");
		assert!(json.contains("\"_id\":\"1\""));
		assert!(json.contains("\"productId\":\"P1\""));
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_test {
	use super::*;
	use gloo_storage::{LocalStorage, Storage};
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn reset() {
		LocalStorage::delete("cart");
		LocalStorage::delete("wishlist");
	}

	#[wasm_bindgen_test]
	fn cart_round_trips_through_local_storage() {
		reset();
		add_to_cart(CartEntry {
			id: String::new(),
			product_id: "P1".into(),
			name: "Silk Saree".into(),
			price: 2499.0,
			image: "/saree.jpg".into(),
			quantity: 2,
			color: Some("Red".into()),
			size: None,
		});
		let cart = get_cart();
		assert_eq!(cart.len(), 1);
		assert_eq!(cart[0].quantity, 2);
		assert!(!cart[0].id.is_empty());
	}

	#[wasm_bindgen_test]
	fn corrupt_store_reads_as_empty() {
		let _ = LocalStorage::raw().set_item("cart", "this is not json");
		assert!(get_cart().is_empty());
		// next write recovers the key
		set_cart(Vec::new());
		assert!(get_cart().is_empty());
		reset();
	}

	#[wasm_bindgen_test]
	fn wishlist_clears_wholesale() {
		reset();
		add_to_wishlist(WishlistEntry {
			id: String::new(),
			product: "P2".into(),
			name: "Lehenga".into(),
			price: 4999.0,
			image: "/lehenga.jpg".into(),
			category: "Lehengas".into(),
		});
		assert_eq!(get_wishlist().len(), 1);
		set_wishlist(Vec::new());
		assert!(get_wishlist().is_empty());
	}
}
