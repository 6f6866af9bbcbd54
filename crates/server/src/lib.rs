pub mod routes;
pub mod startup;
pub mod resource;
pub mod order_payment;
pub mod metrics;
pub mod errors;

pub use startup::run;
