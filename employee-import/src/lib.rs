#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Synthetic employee records for bulk-import testing, written as chunked spreadsheet files.

pub mod employee;
pub mod error;
pub mod generator;
pub mod request;
pub mod writer;
