use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while setting up or driving the browser client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a {1}")]
    WrongElement(String, &'static str),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::MissingElement("pong".into()).to_string(),
            "element #pong not found"
        );
        assert_eq!(
            ClientError::WrongElement("pong".into(), "canvas").to_string(),
            "element #pong is not a canvas"
        );
    }
}
