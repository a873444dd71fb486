use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Ident, Item, Token, parse_macro_input};

/// #[entity_id(entity_type = X)] 宏实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityIdAttrConfig);
    let input = parse_macro_input!(item as Item);

    let st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    if !st.generics.params.is_empty() {
        return syn::Error::new(st.generics.span(), "#[entity_id] does not support generics")
            .to_compile_error()
            .into();
    }

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed[0].ty.clone(),
        other => {
            return syn::Error::new(
                other.span(),
                "#[entity_id] supports only tuple struct with one field, e.g., struct DeviceId(Uuid);",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut st_out = st.clone();
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(Copy),
        syn::parse_quote!(Debug),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
        syn::parse_quote!(PartialOrd),
        syn::parse_quote!(Ord),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    apply_derives(&mut st_out.attrs, required);

    let ident = &st_out.ident;
    let variant = &cfg.entity_type;

    let out = quote! {
        #st_out

        impl #ident {
            pub const ENTITY_TYPE: ::rule_domain::id::EntityType =
                ::rule_domain::id::EntityType::#variant;

            pub const fn new(value: #inner_ty) -> Self { Self(value) }

            pub fn random() -> Self { Self(<#inner_ty>::new_v4()) }

            pub const fn id(&self) -> #inner_ty { self.0 }

            /// nil UUID 表示“未设置”
            pub fn is_null(&self) -> bool { self.0.is_nil() }

            pub const fn entity_type(&self) -> ::rule_domain::id::EntityType { Self::ENTITY_TYPE }
        }

        impl ::std::str::FromStr for #ident {
            type Err = <#inner_ty as ::std::str::FromStr>::Err;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let inner: #inner_ty = s.parse()?;
                ::std::result::Result::Ok(Self(inner))
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::core::convert::From<#inner_ty> for #ident {
            fn from(value: #inner_ty) -> Self { Self(value) }
        }

        impl ::core::convert::From<#ident> for #inner_ty {
            fn from(value: #ident) -> Self { value.0 }
        }

        impl ::core::convert::From<#ident> for ::rule_domain::id::EntityId {
            fn from(value: #ident) -> Self {
                ::rule_domain::id::EntityId::new(#ident::ENTITY_TYPE, value.0)
            }
        }

        impl ::core::convert::TryFrom<::rule_domain::id::EntityId> for #ident {
            type Error = ::rule_domain::error::DomainError;

            fn try_from(value: ::rule_domain::id::EntityId) -> ::std::result::Result<Self, Self::Error> {
                if value.entity_type() == Self::ENTITY_TYPE {
                    ::std::result::Result::Ok(Self(value.id()))
                } else {
                    ::std::result::Result::Err(::rule_domain::error::DomainError::TypeMismatch {
                        expected: Self::ENTITY_TYPE.to_string(),
                        found: value.entity_type().to_string(),
                    })
                }
            }
        }
    };

    TokenStream::from(out)
}

// 解析键值参数：entity_type = <EntityType 变体>
struct EntityIdAttrConfig {
    entity_type: Ident,
}

impl Parse for EntityIdAttrConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected `entity_type = <EntityType variant>`"));
        }

        let key: Ident = input.parse()?;
        if key != "entity_type" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'entity_type'",
            ));
        }
        input.parse::<Token![=]>()?;
        let entity_type: Ident = input.parse()?;

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after 'entity_type'"));
        }

        Ok(Self { entity_type })
    }
}
