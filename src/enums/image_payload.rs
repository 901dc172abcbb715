/// Image as handed over by the capture layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePayload {
    /// `data:<mime>;base64,<payload>`
    DataUri(String),
    /// Bare base64 without a data-URI header.
    Base64(String),
    Bytes(Vec<u8>),
}
