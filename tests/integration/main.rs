//! Integration tests. They need a database or a running server and are
//! ignored by default: `cargo test -- --ignored`.

mod api_tests;
mod store_tests;
