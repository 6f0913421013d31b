use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use std::{env, path::PathBuf};
use syn::{ItemFn, LitStr, parse_macro_input};

/// Generates one `#[test]` per file matching the glob, calling the annotated
/// function with the file's absolute path.
///
/// The glob is relative to the directory of the crate using the attribute.
///
/// ```ignore
/// #[fixture("../test-data/*.json")]
/// fn go_test<P: AsRef<Path>>(input_filepath: P) { /* ... */ }
/// ```
///
/// expands to `go_test` itself plus `go_test_<file_stem>` tests.
#[proc_macro_attribute]
pub fn fixture(attr: TokenStream, item: TokenStream) -> TokenStream {
    let pattern = parse_macro_input!(attr as LitStr);
    let func = parse_macro_input!(item as ItemFn);

    match expand(&pattern, &func) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(pattern: &LitStr, func: &ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let error = |msg: String| syn::Error::new(pattern.span(), msg);

    // rustc may run from the workspace root, so resolve against the crate dir
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map_err(|err| error(format!("CARGO_MANIFEST_DIR: {}", err)))?;
    let full_pattern = PathBuf::from(manifest_dir).join(pattern.value());
    let full_pattern = full_pattern.to_string_lossy();

    let paths = glob::glob(&full_pattern)
        .map_err(|err| error(format!("invalid glob {:?}: {}", full_pattern, err)))?;

    let fn_name = &func.sig.ident;
    let mut tests = vec![];

    for entry in paths {
        let path = entry.map_err(|err| error(err.to_string()))?;
        let Some(stem) = path.file_stem() else {
            continue;
        };

        let test_name = format_ident!(
            "{}_{}",
            fn_name,
            stem.to_string_lossy().to_case(Case::Snake)
        );
        let input_filepath = path.to_string_lossy().into_owned();

        tests.push(quote! {
            #[test]
            fn #test_name() {
                #fn_name(#input_filepath);
            }
        });
    }

    if tests.is_empty() {
        return Err(error(format!("no files match {:?}", full_pattern)));
    }

    Ok(quote! {
        #func
        #(#tests)*
    })
}
