pub mod inference_transport;
