pub mod bulk_renewal;
pub mod controller;
pub mod fuses;
pub mod name_wrapper;
pub mod price_feed;
pub mod price_oracle;
pub mod pricing;
pub mod registrar;
pub mod registry;
pub mod resolver;
pub mod reverse_registrar;
pub mod signature;
pub mod utils;
