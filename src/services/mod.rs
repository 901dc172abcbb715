pub mod classifier_gateway;
pub mod http_transport;
pub mod image_decoder;
pub mod response_parser;
pub mod risk_rules;
pub mod screening_assistant;
