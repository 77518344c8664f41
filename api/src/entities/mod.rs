#![allow(clippy::wildcard_imports)]

pub mod prelude;

pub mod customers;
