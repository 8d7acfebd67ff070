extern crate chrono;
#[macro_use]
extern crate error_chain;
extern crate fern;
#[cfg(feature = "s3")]
extern crate futures;
#[macro_use]
extern crate log;
#[cfg(feature = "s3")]
extern crate rusoto_core;
#[cfg(feature = "s3")]
extern crate rusoto_s3;
extern crate uuid;

pub mod errors {
    error_chain!{
        errors {
            InvalidLocator(locator: String) {
                description("invalid object locator")
                display("Invalid object locator '{}', expected s3://bucket/key", locator)
            }
            ObjectNotFound(locator: String) {
                description("object not found")
                display("Object not found: {}", locator)
            }
            StoreConfiguration(reason: String) {
                description("object store is not configured")
                display("Object store configuration error: {}", reason)
            }
        }
    }
}

pub mod data_layer;
pub mod logging;

pub use logging::{init_logger, output_error};
