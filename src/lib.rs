// Copyright 2025 ModerRAS
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Waifu Client
//!
//! Async HTTP client for the [waifu.pics](https://waifu.pics) image API.
//!
//! The crate holds one pre-configured client (base URL `https://api.waifu.pics`,
//! `Accept: application/json`) and exposes a single request, `get_waifu`,
//! which returns the raw HTTP response. The body is not parsed.
//!
//! ## Example
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let response = waifu_client::get_waifu().await?;
//!
//!     println!("Status: {}", response.status());
//!     println!("Body: {}", response.text().await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom base URL
//!
//! ```rust,no_run
//! use waifu_client::{ApiConfig, WaifuClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = WaifuClient::new(
//!         ApiConfig::default().with_base_url("http://localhost:8080"),
//!     );
//!     let response = client.get_waifu().await?;
//!     println!("{}", response.text().await?);
//!     Ok(())
//! }
//! ```

pub mod api;

pub use api::{
    default_client, get_waifu, ApiConfig, ApiError, WaifuClient, DEFAULT_BASE_URL, WAIFU_PATH,
};
