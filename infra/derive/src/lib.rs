#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the data-contract crates.
//!
//! * [`macro@api_model`] turns a plain struct into a wire contract: serde derives,
//!   camelCase names, strict field checking and "absent means omitted" handling of
//!   every `Option` field.
//! * [`macro@central_error`] turns an enum into a `thiserror` error with a companion
//!   `...Ext` context trait.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros
//! in doctests; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro to define a wire data contract.
///
/// # Injected Behaviors
///
/// * **Derives**: Adds `Debug`, `Serialize`, and `Deserialize` if missing.
/// * **Serde Policy**:
///     * `rename_all = "camelCase"` by default (can be overridden).
///     * `deny_unknown_fields` by default (can be disabled).
/// * **Optional fields**: every field typed `Option<...>` receives
///   `#[serde(default, skip_serializing_if = "Option::is_none")]`, so a missing
///   key decodes to `None` and `None` is never written back as `null`.
///   Disable with `skip_absent = false`; fields that already carry their own
///   `skip_serializing_if` are left untouched.
///
/// # Arguments
///
/// * `rename_all = "..."` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Disables strict field checking.
/// * `skip_absent = false` - Writes absent optional fields as `null`.
///
/// # Example
///
/// ```rust,ignore
/// use central_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// #[derive(Clone, Default, PartialEq)]
/// pub struct Unit {
///     pub id: Option<String>,
///     pub parent_id: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// A high-level attribute macro for defining crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants that support context carry a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping an upstream error carry a `source` field (or a field marked
///    `#[source]`/`#[from]`) and must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[central_derive::central_error]
/// pub enum CodecError {
///     #[error("Malformed JSON{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal codec error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<Rank, CodecError> {
///     serde_json::from_str(raw).context("Decoding rank")
/// }
/// ```
#[proc_macro_attribute]
pub fn central_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
