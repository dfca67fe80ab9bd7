//! Actions and action creators
//!
//! An action describes something that happened: a type tag plus an optional
//! payload. Types follow the `"<slice>/<operation>"` convention and are the
//! routing key used by slice reducers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ReducerError, Result, StoreError};

/// Type of the internal action used to build the initial state tree
pub const INIT_ACTION_TYPE: &str = "@@INIT";

/// Separator between slice name and operation name in an action type
pub const TYPE_SEPARATOR: char = '/';

/// An immutable description of a requested state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
}

impl Action {
    /// Create an action without payload
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
        }
    }

    /// Create an action carrying a serialized payload
    pub fn with_payload<P: Serialize>(action_type: impl Into<String>, payload: &P) -> Result<Self> {
        Ok(Self {
            action_type: action_type.into(),
            payload: Some(serde_json::to_value(payload)?),
        })
    }

    /// The internal init action
    pub fn init() -> Self {
        Self::new(INIT_ACTION_TYPE)
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    /// Deserialize the payload into the type a case reducer expects
    pub fn payload_as<P: DeserializeOwned>(&self) -> Result<P, ReducerError> {
        let value = self.payload.as_ref().ok_or(ReducerError::MissingPayload)?;
        Ok(P::deserialize(value)?)
    }

    /// Operation name if this action targets the given slice
    ///
    /// `"cart/addItem"` yields `Some("addItem")` for slice `cart`.
    pub fn operation_for(&self, slice_name: &str) -> Option<&str> {
        self.action_type
            .strip_prefix(slice_name)?
            .strip_prefix(TYPE_SEPARATOR)
    }

    /// Reject empty types and types containing whitespace
    pub fn validate(&self) -> Result<()> {
        let t = &self.action_type;
        if t.is_empty() || t.chars().any(char::is_whitespace) {
            return Err(StoreError::MalformedAction(t.clone()));
        }
        Ok(())
    }
}

/// Builds actions for one operation of a slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCreator {
    action_type: String,
}

impl ActionCreator {
    pub fn new(slice_name: &str, operation: &str) -> Self {
        Self {
            action_type: format!("{slice_name}{TYPE_SEPARATOR}{operation}"),
        }
    }

    /// The action type every created action carries
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn create<P: Serialize>(&self, payload: &P) -> Result<Action> {
        Action::with_payload(self.action_type.clone(), payload)
    }

    pub fn empty(&self) -> Action {
        Action::new(self.action_type.clone())
    }

    /// Whether an action was produced by this creator
    pub fn matches(&self, action: &Action) -> bool {
        action.action_type() == self.action_type
    }
}
