use proc_macro2::Span;
use syn::Attribute;

/// Name of the helper attribute of the derive.
pub const ATTRIBUTE: &str = "guarded";

/// Returns whether the attribute is a `#[guarded(...)]` attribute.
pub fn is_guarded(attr: &Attribute) -> bool {
    attr.path().is_ident(ATTRIBUTE)
}

/// Sets the value of an option, failing if it has already been provided.
pub fn set_once<T>(slot: &mut Option<T>, value: T, span: Span, option: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            span,
            format!("`{option}` is provided more than once"),
        ));
    }
    *slot = Some(value);
    Ok(())
}
