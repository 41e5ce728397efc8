use lambda_runtime::{service_fn, tracing, Error};
use serde_json::Value;

mod handler;

use crate::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(function_handler::<Value>)).await
}
