pub mod classification_response;
pub mod classifier_error;
pub mod commands;
pub mod image_payload;
pub mod suspicion_level;
