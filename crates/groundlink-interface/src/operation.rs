//! The two remote call shapes a session can issue

use serde::{Deserialize, Serialize};

use crate::Attribute;

/// A named value to write on a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterAssignment {
    pub name: String,
    pub value: Attribute,
}

impl ParameterAssignment {
    pub fn new(name: impl Into<String>, value: impl Into<Attribute>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named action to run on a provider, with its arguments in call order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionInvocation {
    pub name: String,

    #[serde(default)]
    pub arguments: Vec<Attribute>,
}

impl ActionInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument
    pub fn with_argument(mut self, argument: impl Into<Attribute>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}
