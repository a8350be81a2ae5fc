//! External API integrations

pub mod weather;

pub use weather::{ClientError, ClientResult, WeatherClient, WeatherProvider};
