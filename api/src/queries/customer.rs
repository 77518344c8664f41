use async_graphql::{Context, Error, Object, Result};
use hub_core::tracing::error;
use sea_orm::EntityTrait;

use crate::{entities::prelude::Customers, objects::Customer, AppContext};

#[derive(Default)]
pub struct Query;

#[Object(name = "CustomerQuery")]
impl Query {
    /// Look up a customer by its ID. Returns `null` when no such customer exists.
    ///
    /// # Errors
    /// This function fails if the customer could not be read from the database
    async fn customer(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Customer>> {
        let AppContext { db } = ctx.data::<AppContext>()?;

        let customer = Customers::find_by_id(id)
            .one(db.get())
            .await
            .map_err(|e| {
                error!(id, "failed to load customer: {e}");

                Error::new(format!("failed to load customer {id}: {e}"))
            })?;

        Ok(customer.map(Into::into))
    }
}
