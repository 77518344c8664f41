use async_graphql::SimpleObject;

use crate::entities::customers;

/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Customer {
    /// The unique identifier of the customer
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<customers::Model> for Customer {
    fn from(
        customers::Model {
            id,
            name,
            email,
            phone,
        }: customers::Model,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
        }
    }
}
