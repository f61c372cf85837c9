//! Data records served by the API.

pub mod review;
