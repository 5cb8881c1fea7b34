pub mod config;
pub mod encode;
pub mod errors;
pub mod llm_client;
pub mod logging;
pub mod models;
pub mod review;
pub mod routes;
pub mod script;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
