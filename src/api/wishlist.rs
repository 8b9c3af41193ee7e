use crate::data::WishlistEntry;
use crate::response::ApiError;
use serde::Serialize;

pub async fn fetch() -> Result<Vec<WishlistEntry>, ApiError> {
	super::get("/wishlist").send().await
}

/// Adds a product to the account wishlist. Only the product id travels.
pub async fn add(product_id: &str) -> Result<(), ApiError> {
	#[derive(Serialize)]
	struct AddItem<'a> {
		#[serde(rename = "productId")]
		product_id: &'a str,
	}
	super::post::<serde_json::Value>("/wishlist")
		.with_json(&AddItem { product_id })
		.send_ok()
		.await
}

pub async fn remove(product_id: &str) -> Result<(), ApiError> {
	super::delete::<serde_json::Value>(&format!("/wishlist/{product_id}"))
		.send_ok()
		.await
}
