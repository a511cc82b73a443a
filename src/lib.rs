//! # vkreport - VkJSON capability report translator
//!
//! Turns a VkJSON instance document (the Vulkan capability dump produced by
//! the native introspection call) into a hierarchical device-info store
//! without losing any numeric or boolean information.
//!
//! ## What changes on the way through
//!
//! - Field names go from VkJSON camelCase to snake_case through an explicit
//!   table (`names`), e.g. `sparseProperties` becomes `sparse_properties`.
//! - uint64 and VkDeviceSize values become strings like `"0x8000000"`,
//!   since a double cannot hold every 64-bit value.
//! - VkBool32 numbers become real booleans: `written == (source != 0)`.
//! - `[tag, {properties}]` tuple arrays become arrays of uniform groups
//!   with the tag stored inside each group (`id`, `handle_type`).
//! - Device layers are written as an empty array.
//! - Vulkan 1.1 structures are only read for devices whose `apiVersion`
//!   reaches the configured gate.
//!
//! ## Quick Start
//!
//! ```rust
//! use vkreport::{JsonStore, Translator};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let document = json!({"deviceGroups": [], "layers": [], "extensions": [], "devices": []});
//!
//! let mut store = JsonStore::new();
//! Translator::default().translate(&document, &mut store)?;
//! let value = store.into_value()?;
//! assert_eq!(value["devices"], json!([]));
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;

pub mod codec;
pub mod error;
pub mod extensions;
pub mod names;
pub mod store;
pub mod types;
pub mod version;
pub mod walker;

// Re-export commonly used types for convenience
pub use error::{JsonKind, StoreError, TranslateError};
pub use extensions::{ExtensionHandler, ExtensionRegistry};
pub use store::{DeviceInfoStore, DuplicateKeys, JsonStore, RecordingStore, StoreEvent, Tee};
pub use types::{ArrayValue, Field, FieldKind, ResultValue, TranslateConfig};
pub use version::{ApiVersion, VK_API_VERSION_1_1};
pub use walker::{translate, Translator};

/// Parse a VkJSON document from raw bytes.
pub fn parse_document(mut bytes: Vec<u8>) -> Result<Value> {
    simd_json::serde::from_slice(&mut bytes).context("Failed to parse VkJSON document")
}

/// Main entry point: read a VkJSON document and translate it into a JSON store
pub fn translate_report<R: Read>(mut reader: R, config: TranslateConfig) -> Result<Value> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .context("Failed to read VkJSON document")?;
    let document = parse_document(bytes)?;

    let mut store = JsonStore::new();
    Translator::new(config)
        .translate(&document, &mut store)
        .context("Failed to translate VkJSON document")?;
    store.into_value().context("Store left open scopes")
}
