use serde::{Deserialize, Serialize};

/// A cart row, held either in the guest store or returned by the server.
///
/// `name`, `price`, and `image` are a display snapshot captured when the row
/// was added; they are not refreshed from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
	/// Local timestamp token until the row reaches the server, the
	/// server-issued id afterwards.
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(rename = "productId")]
	pub product_id: String,
	pub name: String,
	pub price: f64,
	pub image: String,
	pub quantity: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size: Option<String>,
}

impl CartEntry {
	/// Rows merge when they reference the same product variant.
	pub fn same_variant(&self, other: &Self) -> bool {
		self.product_id == other.product_id && self.color == other.color && self.size == other.size
	}
}

/// A wishlist row. `product` is the catalog product id; the field name
/// differs from [`CartEntry::product_id`] by wire convention only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
	#[serde(rename = "_id")]
	pub id: String,
	pub product: String,
	pub name: String,
	pub price: f64,
	pub image: String,
	#[serde(default)]
	pub category: String,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorOption {
	pub name: String,
	#[serde(default)]
	pub value: String,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeOption {
	pub value: String,
}

/// Catalog product as served by `/products`.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
	#[serde(rename = "_id")]
	pub id: String,
	pub name: String,
	pub price: f64,
	#[serde(rename = "originalPrice", default, skip_serializing_if = "Option::is_none")]
	pub original_price: Option<f64>,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub images: Vec<String>,
	#[serde(default)]
	pub colors: Vec<ColorOption>,
	#[serde(default)]
	pub sizes: Vec<SizeOption>,
	#[serde(default)]
	pub rating: f32,
	#[serde(default)]
	pub stock: u32,
}

impl Product {
	pub fn primary_image(&self) -> &str {
		self.images.first().map(String::as_str).unwrap_or("/placeholder.svg")
	}
}

/// Identity-probe payload from `/auth/me`.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Me {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub email: String,
	#[serde(rename = "isAdmin", default)]
	pub is_admin: bool,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
	#[serde(rename = "fullName")]
	pub full_name: String,
	pub line1: String,
	#[serde(default)]
	pub line2: String,
	pub city: String,
	pub state: String,
	#[serde(rename = "postalCode")]
	pub postal_code: String,
	pub country: String,
	#[serde(default)]
	pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
	#[serde(rename = "productId")]
	pub product_id: String,
	pub name: String,
	pub price: f64,
	pub quantity: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
	#[serde(rename = "_id")]
	pub id: String,
	pub items: Vec<OrderItem>,
	pub total: f64,
	#[serde(default)]
	pub status: String,
	#[serde(rename = "createdAt", default)]
	pub created_at: String,
}
