use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("missing page element: {selector}")]
    MissingElement { selector: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("entropy source unavailable: {0}")]
    Entropy(getrandom::Error),

    #[error("game not initialized; call init_game() first")]
    NotInitialized,

    #[error("game already initialized")]
    AlreadyInitialized,

    #[error("browser call failed: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = GameError::MissingElement {
            selector: "#start".into(),
        };
        assert_eq!(err.to_string(), "missing page element: #start");

        let err = GameError::InvalidConfig {
            message: "durationSecs must be positive".into(),
        };
        assert!(err.to_string().contains("durationSecs"));
    }

    #[test]
    fn test_json_errors_convert() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: GameError = parse.into();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }
}
