//! Client module for the waifu.pics image API.

mod client;

pub use client::{
    default_client, get_waifu, ApiConfig, ApiError, WaifuClient, DEFAULT_BASE_URL, WAIFU_PATH,
};
