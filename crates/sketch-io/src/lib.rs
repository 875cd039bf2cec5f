//! `sketch-io` persists rectangle tables to a line-oriented TSV format.
//!
//! One record per non-blank line, fields tab-separated in the fixed
//! [`sketch_model::Column`] order, `\n` terminated. Loading is strict and
//! all-or-nothing: any malformed line aborts the whole load with an error
//! naming the line and field, and the live table is left untouched.

mod tsv;

pub use tsv::{
    load_tsv_file, load_tsv_file_into, load_tsv_into, read_tsv, save_tsv_file, write_tsv, TsvError,
};
