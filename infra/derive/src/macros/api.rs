use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Attribute, Field, Fields, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Type, parse_quote};

/// Expands the `#[api_model]` attribute macro.
///
/// Adds the serde derives, configures camelCase naming and strict field checking,
/// and marks every `Option` field as omitted-when-absent.
pub fn expand_api_model(args: TokenStream, mut input: ItemStruct) -> TokenStream {
    let args = match ModelArgs::parse(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let serde_meta = match SerdeMeta::from_attrs(&input.attrs) {
        Ok(meta) => meta,
        Err(err) => return err.to_compile_error(),
    };

    let rename_attr = match rename_attr(args.rename_all, &serde_meta) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error(),
    };
    let deny_attr = match deny_unknown_attr(args.deny_unknown_fields, &serde_meta, &input) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error(),
    };

    if args.skip_absent {
        let Fields::Named(fields) = &mut input.fields else {
            return syn::Error::new_spanned(&input.ident, "api_model requires named fields")
                .to_compile_error();
        };
        for field in &mut fields.named {
            if let Err(err) = mark_optional(field) {
                return err.to_compile_error();
            }
        }
    }

    let derive_attr = derive_attr(&derived_trait_names(&input.attrs));

    quote! {
        #derive_attr
        #rename_attr
        #deny_attr
        #input
    }
}

struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
    skip_absent: bool,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
        let metas = parser.parse2(args)?;

        let mut rename_all = None;
        let mut deny_unknown_fields = None;
        let mut skip_absent = None;

        for meta in metas {
            let name_value = match meta {
                Meta::NameValue(name_value) => name_value,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "Expected name-value arguments like `rename_all = \"...\"`",
                    ));
                }
            };

            if name_value.path.is_ident("rename_all") {
                set_once(&mut rename_all, &name_value, string_literal(&name_value)?)?;
            } else if name_value.path.is_ident("deny_unknown_fields") {
                set_once(&mut deny_unknown_fields, &name_value, bool_literal(&name_value)?)?;
            } else if name_value.path.is_ident("skip_absent") {
                set_once(&mut skip_absent, &name_value, bool_literal(&name_value)?)?;
            } else {
                return Err(syn::Error::new_spanned(
                    name_value.path,
                    "Unsupported argument; expected rename_all, deny_unknown_fields or skip_absent",
                ));
            }
        }

        Ok(Self {
            rename_all,
            deny_unknown_fields: deny_unknown_fields.unwrap_or(true),
            skip_absent: skip_absent.unwrap_or(true),
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, token: &MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

fn literal(name_value: &MetaNameValue) -> Option<&Lit> {
    match &name_value.value {
        syn::Expr::Lit(expr_lit) => Some(&expr_lit.lit),
        _ => None,
    }
}

fn bool_literal(name_value: &MetaNameValue) -> syn::Result<bool> {
    match literal(name_value) {
        Some(Lit::Bool(lit)) => Ok(lit.value),
        _ => Err(syn::Error::new_spanned(&name_value.value, "expected a boolean literal")),
    }
}

fn string_literal(name_value: &MetaNameValue) -> syn::Result<LitStr> {
    match literal(name_value) {
        Some(Lit::Str(lit)) => Ok(lit.clone()),
        _ => Err(syn::Error::new_spanned(&name_value.value, "expected a string literal")),
    }
}

/// Serde settings already present on the struct or field.
#[derive(Default)]
struct SerdeMeta {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
    default: bool,
    skip_serializing: bool,
}

impl SerdeMeta {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut info = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    info.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    info.deny_unknown_fields = true;
                } else if meta.path.is_ident("default") {
                    info.default = true;
                    skip_value(&meta)?;
                } else if meta.path.is_ident("skip_serializing_if")
                    || meta.path.is_ident("skip_serializing")
                    || meta.path.is_ident("skip")
                {
                    info.skip_serializing = true;
                    skip_value(&meta)?;
                } else {
                    skip_value(&meta)?;
                }
                Ok(())
            })?;
        }

        Ok(info)
    }
}

/// Consumes `= value` or `(...)` after a serde key we do not interpret.
fn skip_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_value(&nested))?;
    }
    Ok(())
}

fn mark_optional(field: &mut Field) -> syn::Result<()> {
    if !is_option(&field.ty) {
        return Ok(());
    }

    let existing = SerdeMeta::from_attrs(&field.attrs)?;
    if !existing.default {
        field.attrs.push(parse_quote! { #[serde(default)] });
    }
    if !existing.skip_serializing {
        field.attrs.push(parse_quote! { #[serde(skip_serializing_if = "Option::is_none")] });
    }
    Ok(())
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.qself.is_none()
        && path.path.segments.last().is_some_and(|seg| {
            seg.ident == "Option" && matches!(seg.arguments, syn::PathArguments::AngleBracketed(_))
        })
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let tokens: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !derives.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn rename_attr(rename_all: Option<LitStr>, serde_meta: &SerdeMeta) -> syn::Result<TokenStream> {
    let wanted = rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));

    match &serde_meta.rename_all {
        Some(existing) if existing.value() != wanted.value() => Err(syn::Error::new_spanned(
            existing,
            "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #wanted)] }),
    }
}

fn deny_unknown_attr(
    deny_unknown_fields: bool,
    serde_meta: &SerdeMeta,
    input: &ItemStruct,
) -> syn::Result<TokenStream> {
    match (serde_meta.deny_unknown_fields, deny_unknown_fields) {
        (true, false) => Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        )),
        (false, true) => Ok(quote! { #[serde(deny_unknown_fields)] }),
        _ => Ok(quote! {}),
    }
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(seg) = meta.path.segments.last() {
                traits.insert(seg.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
