//! Decides from the written type whether a field is copyable.
//!
//! Only the last path segment is inspected, so `std::string::String` and
//! `String` are treated alike. Types that are not recognized are objects;
//! `#[bulk(primitive)]` opts a custom type in.

const SCALARS: &[&str] = &[
    "bool", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128",
    "usize", "f32", "f64", "Decimal", "char", "String", "Uuid", "NaiveDate", "NaiveTime",
    "NaiveDateTime",
];

pub(crate) fn is_primitive(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Group(group) => is_primitive(&group.elem),
        syn::Type::Paren(paren) => is_primitive(&paren.elem),
        syn::Type::Path(path) if path.qself.is_none() => is_primitive_path(&path.path),
        _ => false,
    }
}

fn is_primitive_path(path: &syn::Path) -> bool {
    let Some(segment) = path.segments.last() else {
        return false;
    };

    let ident = segment.ident.to_string();

    match &segment.arguments {
        syn::PathArguments::None => SCALARS.contains(&ident.as_str()),
        syn::PathArguments::AngleBracketed(args) => {
            let Some(arg) = single_type_arg(args) else {
                return false;
            };

            match ident.as_str() {
                "Option" => is_primitive(arg),
                "Vec" => last_ident_is(arg, &["u8", "char"]),
                "DateTime" => last_ident_is(arg, &["Utc", "FixedOffset"]),
                _ => false,
            }
        }
        syn::PathArguments::Parenthesized(_) => false,
    }
}

fn single_type_arg(args: &syn::AngleBracketedGenericArguments) -> Option<&syn::Type> {
    let mut types = args.args.iter().filter_map(|arg| match arg {
        syn::GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });

    let ty = types.next()?;
    types.next().is_none().then_some(ty)
}

fn last_ident_is(ty: &syn::Type, names: &[&str]) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| {
            segment.arguments.is_none() && names.iter().any(|name| segment.ident == *name)
        })
}
