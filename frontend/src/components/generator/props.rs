//! Defines the properties for the `GeneratorComponent`.

use common::requests::{DEFAULT_TIMEOUT_MS, GENERATE_PATH};
use yew::prelude::*;

/// Properties for the `GeneratorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct GeneratorProps {
    /// URL the form is posted to.
    #[prop_or(AttrValue::from(GENERATE_PATH))]
    pub endpoint: AttrValue,

    /// Milliseconds to wait for the backend before the request is aborted and
    /// reported as a timeout.
    #[prop_or(DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u32,
}
