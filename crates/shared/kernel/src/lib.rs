//! Kernel utilities shared by the tools.
//! Keep this crate lightweight: layered config loading and the JSON transport codec
//! for the domain contracts, which it re-exports as [`domain`].
//!
//! ## Decoding a document
//! ```rust
//! use central_kernel::codec::Codec;
//! use central_kernel::domain::organization::Rank;
//!
//! let ranks: Vec<Rank> = Codec::default()
//!     .decode_document(r#"[{ "id": "r1", "order": 1 }, { "unitId": "u1" }]"#)
//!     .unwrap();
//! assert_eq!(ranks.len(), 2);
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use central_kernel::config::load_config;
//! use central_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("central.toml")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod codec;

pub use central_domain as domain;
