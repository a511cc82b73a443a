//! Extension dispatcher
//!
//! Some extensions come with a detail object next to the extensions array,
//! keyed by the extension name. Handlers are looked up by name after the
//! extensions array has been written; names without a handler are skipped
//! so newer producers keep working with this translator.

use crate::codec::{emit_bool, read_object};
use crate::error::Result;
use crate::names::convert_name;
use crate::store::DeviceInfoStore;
use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const VK_KHR_VARIABLE_POINTERS: &str = "VK_KHR_variable_pointers";

/// Emits the extra groups for one extension, reading from the object that
/// holds the extensions array.
pub type ExtensionHandler = fn(&mut dyn DeviceInfoStore, &Map<String, Value>) -> Result<()>;

/// Name to handler table
#[derive(Clone)]
pub struct ExtensionRegistry {
    handlers: HashMap<String, ExtensionHandler>,
}

impl Default for ExtensionRegistry {
    /// The registry with every built-in handler
    fn default() -> Self {
        let mut registry = ExtensionRegistry::empty();
        registry.register(VK_KHR_VARIABLE_POINTERS, emit_variable_pointer_features_khr);
        registry
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ExtensionRegistry").field("handlers", &names).finish()
    }
}

impl ExtensionRegistry {
    pub fn empty() -> Self {
        ExtensionRegistry {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, handler: ExtensionHandler) -> Option<ExtensionHandler> {
        self.handlers.insert(name.into(), handler)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<ExtensionHandler> {
        self.handlers.get(name).copied()
    }

    /// Run the handler for each extension entry, in list order. A name listed
    /// twice runs its handler twice.
    pub fn dispatch<'a, I>(&self, store: &mut dyn DeviceInfoStore, parent: &Map<String, Value>, names: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            match self.get(name) {
                Some(handler) => handler(store, parent)?,
                None => debug!("no handler for extension {}, skipping", name),
            }
        }
        Ok(())
    }
}

/// Handler for `VK_KHR_variable_pointers`.
///
/// Older producers advertise the extension without the detail object, so
/// an absent object is not an error. A present one must be complete.
pub fn emit_variable_pointer_features_khr(store: &mut dyn DeviceInfoStore, parent: &Map<String, Value>) -> Result<()> {
    let Some(ext) = parent.get(VK_KHR_VARIABLE_POINTERS).and_then(Value::as_object) else {
        debug!("{} advertised without detail object", VK_KHR_VARIABLE_POINTERS);
        return Ok(());
    };

    store.start_group_named(convert_name(VK_KHR_VARIABLE_POINTERS)?)?;
    {
        let features = read_object(ext, "variablePointerFeaturesKHR")?;
        store.start_group_named(convert_name("variablePointerFeaturesKHR")?)?;
        {
            emit_bool(store, features, "variablePointersStorageBuffer")?;
            emit_bool(store, features, "variablePointers")?;
        }
        store.end_group()?;
    }
    store.end_group()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonStore, RecordingStore, StoreEvent};
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_variable_pointers_detail_emitted() {
        let parent = object(json!({
            "VK_KHR_variable_pointers": {
                "variablePointerFeaturesKHR": {
                    "variablePointersStorageBuffer": 1,
                    "variablePointers": 0
                }
            }
        }));
        let mut store = JsonStore::new();
        ExtensionRegistry::default()
            .dispatch(&mut store, &parent, ["VK_KHR_variable_pointers"])
            .unwrap();

        assert_eq!(
            store.into_value().unwrap(),
            json!({
                "vk_khr_variable_pointers": {
                    "variable_pointer_features_khr": {
                        "variable_pointers_storage_buffer": true,
                        "variable_pointers": false
                    }
                }
            })
        );
    }

    #[test]
    fn test_absent_detail_is_silent() {
        let mut store = RecordingStore::new();
        ExtensionRegistry::default()
            .dispatch(&mut store, &Map::new(), ["VK_KHR_variable_pointers"])
            .unwrap();
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_incomplete_detail_is_fatal() {
        let parent = object(json!({"VK_KHR_variable_pointers": {}}));
        let mut store = RecordingStore::new();
        let err = ExtensionRegistry::default()
            .dispatch(&mut store, &parent, ["VK_KHR_variable_pointers"])
            .unwrap_err();
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_unknown_and_duplicate_names() {
        let parent = object(json!({
            "VK_KHR_variable_pointers": {
                "variablePointerFeaturesKHR": {
                    "variablePointersStorageBuffer": 1,
                    "variablePointers": 1
                }
            }
        }));
        let names = ["VK_KHR_swapchain", "VK_KHR_variable_pointers", "VK_KHR_variable_pointers"];

        let mut recording = RecordingStore::new();
        ExtensionRegistry::default()
            .dispatch(&mut recording, &parent, names)
            .unwrap();
        let handler_groups = recording
            .events()
            .iter()
            .filter(|e| **e == StoreEvent::StartGroup(Some("vk_khr_variable_pointers".to_string())))
            .count();
        assert_eq!(handler_groups, 2);
        assert!(recording.is_balanced());

        let mut store = JsonStore::new();
        ExtensionRegistry::default().dispatch(&mut store, &parent, names).unwrap();
        let value = store.into_value().unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_custom_handler() {
        fn mark(store: &mut dyn DeviceInfoStore, _: &Map<String, Value>) -> Result<()> {
            store.add_result("extension_name", "seen".into())?;
            Ok(())
        }

        let mut registry = ExtensionRegistry::empty();
        assert!(!registry.contains("VK_EXT_test"));
        registry.register("VK_EXT_test", mark);

        let mut store = RecordingStore::new();
        registry.dispatch(&mut store, &Map::new(), ["VK_EXT_test"]).unwrap();
        assert_eq!(store.events().len(), 1);
    }
}
