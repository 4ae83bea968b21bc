use syn::{
    Ident, ItemFn,
    parse::{Parse, ParseStream}, punctuated::Punctuated, token::Comma
};

/// Helper function to get function name as string
pub fn get_fn_name(func: &ItemFn) -> String {
    func.sig.ident.to_string()
}

/// Parse a list of identifiers from attribute args, as in `#[log_args(a, b)]`
pub struct IdList {
    pub ids: Vec<Ident>,
}

impl Parse for IdList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let args = Punctuated::<Ident, Comma>::parse_terminated(input)?;
        Ok(IdList {
            ids: args.into_iter().collect(),
        })
    }
}
