//! Buffer configuration for dynamic packets.
//!
//! Fixed packets take their limits from const generics; dynamic packets read
//! them from a [`BufferConfig`], which can be built in code or loaded from
//! JSON:
//!
//! ```rust
//! use packet_fields::config::BufferConfig;
//!
//! let config = BufferConfig::from_json(r#"{ "max_length": 4096 }"#).unwrap();
//! assert_eq!(config.max_length, 4096);
//! assert_eq!(config.initial_capacity, BufferConfig::default().initial_capacity);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::types::CLIENT_PACKET_MAX;

/// Default number of bytes reserved up front by a dynamic buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Bytes allocated when the buffer is created.
    pub initial_capacity: usize,
    /// Ceiling on the buffer length; growth past it is rejected.
    pub max_length: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_length: CLIENT_PACKET_MAX,
        }
    }
}

impl BufferConfig {
    pub fn new(initial_capacity: usize, max_length: usize) -> Result<Self, FieldError> {
        let config = Self {
            initial_capacity,
            max_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FieldError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.max_length == 0 {
            return Err(FieldError::Config("max_length must be non-zero".into()));
        }
        if self.initial_capacity > self.max_length {
            return Err(FieldError::Config(format!(
                "initial_capacity {} exceeds max_length {}",
                self.initial_capacity, self.max_length
            )));
        }
        Ok(())
    }
}
