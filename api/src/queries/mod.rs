#![allow(clippy::unused_async)]

mod customer;

#[derive(async_graphql::MergedObject, Default)]
pub struct Query(customer::Query);
