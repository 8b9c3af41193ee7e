use crate::response::Response;
use reqwest::Method;
use serde::de::DeserializeOwned;

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod wishlist;

fn get<T: DeserializeOwned>(path: &str) -> Response<T> {
	Response::new(Method::GET, path)
}

fn post<T: DeserializeOwned>(path: &str) -> Response<T> {
	Response::new(Method::POST, path)
}

fn put<T: DeserializeOwned>(path: &str) -> Response<T> {
	Response::new(Method::PUT, path)
}

fn delete<T: DeserializeOwned>(path: &str) -> Response<T> {
	Response::new(Method::DELETE, path)
}
