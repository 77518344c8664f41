pub use super::customers::Entity as Customers;
