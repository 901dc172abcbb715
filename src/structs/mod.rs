pub mod ai;
pub mod analysis_request;
pub mod analysis_result;
pub mod candidate;
pub mod cli;
pub mod config;
pub mod upstream_response;
