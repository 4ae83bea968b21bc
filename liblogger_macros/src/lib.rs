/*
 * Procedural macros for function-level logging
 *
 * These attributes wrap plugin callbacks with debug-level traces. They expand
 * to `liblogger::log_*!` calls, so the annotated crate must depend on
 * liblogger directly.
 */

extern crate proc_macro;

mod macro_utils;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, ItemFn};

use crate::macro_utils::{get_fn_name, IdList};

/// Log entry and exit of a function
#[proc_macro_attribute]
pub fn log_entry_exit(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut input_fn = parse_macro_input!(input as ItemFn);
    let fn_name = get_fn_name(&input_fn);
    let orig_block = input_fn.block.clone();

    input_fn.block = Box::new(parse_quote!({
        liblogger::log_debug!("ENTRY: {}", #fn_name);

        let result = (|| #orig_block)();

        liblogger::log_debug!("EXIT: {}", #fn_name);
        result
    }));

    TokenStream::from(quote!(#input_fn))
}

/// Measure execution time of a function.
///
/// A panic is logged with the elapsed time and then resumed, so callers that
/// guard against unwinding still see it.
#[proc_macro_attribute]
pub fn measure_time(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut input_fn = parse_macro_input!(input as ItemFn);
    let fn_name = get_fn_name(&input_fn);
    let orig_block = input_fn.block.clone();

    input_fn.block = Box::new(parse_quote!({
        use std::time::Instant;
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let start_time = Instant::now();

        let result = catch_unwind(AssertUnwindSafe(|| #orig_block));

        let duration_us = start_time.elapsed().as_micros();

        match result {
            Ok(output) => {
                liblogger::log_debug!("{} completed in {} us", #fn_name, duration_us);
                output
            },
            Err(panic_err) => {
                liblogger::log_error!("{} panicked after {} us", #fn_name, duration_us);
                std::panic::resume_unwind(panic_err);
            }
        }
    }));

    TokenStream::from(quote!(#input_fn))
}

/// Log specified function arguments with their `Debug` representation
#[proc_macro_attribute]
pub fn log_args(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as IdList);
    let mut input_fn = parse_macro_input!(input as ItemFn);
    let fn_name = get_fn_name(&input_fn);
    let orig_block = input_fn.block.clone();

    let log_stmts = args.ids.iter().map(|arg_name| {
        let arg_str = arg_name.to_string();
        quote! {
            args_str.push_str(&format!("{} = {:?}, ", #arg_str, #arg_name));
        }
    });

    input_fn.block = Box::new(parse_quote!({
        let mut args_str = String::new();
        #(#log_stmts)*
        // Remove trailing comma and space
        if !args_str.is_empty() {
            args_str.truncate(args_str.len() - 2);
        }
        liblogger::log_debug!("Entering {} with args: {}", #fn_name, args_str);
        #orig_block
    }));

    TokenStream::from(quote!(#input_fn))
}
