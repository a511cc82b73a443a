//! Schema walker: mirror a VkJSON instance document onto a device-info store
//!
//! The walk is a fixed, straight-line sequence: device groups, instance
//! layers, instance extensions, then devices. Every read failure aborts
//! the whole pass; there is no partial result.

pub mod device;
pub mod fields;

use crate::codec::{emit_fields, read_array, read_object, read_str};
use crate::error::{JsonKind, Result, TranslateError};
use crate::extensions::ExtensionRegistry;
use crate::names::convert_name;
use crate::store::DeviceInfoStore;
use crate::types::{Field, TranslateConfig};
use log::{debug, trace};
use serde_json::{Map, Value};

/// Translates VkJSON instance documents. Holds only configuration, so one
/// translator can be reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslateConfig,
    extensions: ExtensionRegistry,
}

impl Translator {
    pub fn new(config: TranslateConfig) -> Self {
        Translator {
            config,
            extensions: ExtensionRegistry::default(),
        }
    }

    /// Replace the extension handler table
    pub fn with_extensions(mut self, extensions: ExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn config(&self) -> &TranslateConfig {
        &self.config
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    /// True when a device reporting `api_version` carries the version-gated structures
    pub fn passes_version_gate(&self, api_version: i64) -> bool {
        api_version >= i64::from(self.config.version_gate)
    }

    /// Walk `document` and write everything it describes into `store`.
    pub fn translate<S: DeviceInfoStore>(&self, document: &Value, store: &mut S) -> Result<()> {
        let instance = document
            .as_object()
            .ok_or_else(|| TranslateError::schema("<root>", JsonKind::Object, JsonKind::of(Some(document))))?;

        self.emit_device_groups(store, instance)?;
        self.emit_layers(store, instance)?;
        self.emit_extensions(store, instance)?;
        self.emit_devices(store, instance)?;
        Ok(())
    }

    /// Parse `json` and translate it.
    pub fn translate_str<S: DeviceInfoStore>(&self, json: &str, store: &mut S) -> Result<()> {
        let document: Value = serde_json::from_str(json)?;
        self.translate(&document, store)
    }

    fn emit_device_groups<S: DeviceInfoStore>(&self, store: &mut S, parent: &Map<String, Value>) -> Result<()> {
        let device_groups = read_array(parent, "deviceGroups")?;
        store.start_array(convert_name("deviceGroups")?)?;
        for (idx, device_group) in device_groups.iter().enumerate() {
            let context = format!("deviceGroups[{}]", idx);
            let device_group = as_object(device_group, &context)?;
            store.start_group()?;
            emit_fields(store, device_group, fields::DEVICE_GROUP).map_err(|e| e.within(context))?;
            store.end_group()?;
        }
        store.end_array()?;
        Ok(())
    }

    fn emit_layers<S: DeviceInfoStore>(&self, store: &mut S, parent: &Map<String, Value>) -> Result<()> {
        let layers = read_array(parent, "layers")?;
        store.start_array(convert_name("layers")?)?;
        for (idx, layer) in layers.iter().enumerate() {
            let context = format!("layers[{}]", idx);
            let layer = as_object(layer, &context)?;
            store.start_group()?;
            {
                emit_group(store, layer, "properties", fields::LAYER_PROPERTIES)
                    .and_then(|_| self.emit_extensions(store, layer))
                    .map_err(|e| e.within(context))?;
            }
            store.end_group()?;
        }
        store.end_array()?;
        Ok(())
    }

    /// Write the `extensions` array of `parent`, then run the extension
    /// handlers against `parent` once the array is closed.
    pub(crate) fn emit_extensions<S: DeviceInfoStore>(&self, store: &mut S, parent: &Map<String, Value>) -> Result<()> {
        let extensions = read_array(parent, "extensions")?;
        let mut names = Vec::with_capacity(extensions.len());

        store.start_array(convert_name("extensions")?)?;
        for (idx, extension) in extensions.iter().enumerate() {
            let context = format!("extensions[{}]", idx);
            let extension = as_object(extension, &context)?;
            store.start_group()?;
            emit_fields(store, extension, fields::EXTENSION_PROPERTIES).map_err(|e| e.within(&context))?;
            store.end_group()?;
            names.push(read_str(extension, "extensionName").map_err(|e| e.within(context))?);
        }
        store.end_array()?;

        trace!("dispatching {} extension(s)", names.len());
        self.extensions.dispatch(store, parent, names.iter().copied())
    }

    fn emit_devices<S: DeviceInfoStore>(&self, store: &mut S, parent: &Map<String, Value>) -> Result<()> {
        let devices = read_array(parent, "devices")?;
        store.start_array(convert_name("devices")?)?;
        for (idx, device) in devices.iter().enumerate() {
            let context = format!("devices[{}]", idx);
            let device = as_object(device, &context)?;
            store.start_group()?;
            self.emit_device(store, device).map_err(|e| e.within(context))?;
            store.end_group()?;
        }
        store.end_array()?;
        debug!("translated {} device(s)", devices.len());
        Ok(())
    }
}

pub(crate) fn as_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| TranslateError::schema(context, JsonKind::Object, JsonKind::of(Some(value))))
}

/// Write the object `parent[name]` as a named group holding `fields`.
pub(crate) fn emit_group<S: DeviceInfoStore + ?Sized>(
    store: &mut S,
    parent: &Map<String, Value>,
    name: &str,
    fields: &[Field],
) -> Result<()> {
    let object = read_object(parent, name)?;
    trace!("group {}", name);
    store.start_group_named(convert_name(name)?)?;
    emit_fields(store, object, fields).map_err(|e| e.within(name))?;
    store.end_group()?;
    Ok(())
}

/// Translate with the default configuration into any store.
pub fn translate<S: DeviceInfoStore>(document: &Value, store: &mut S) -> Result<()> {
    Translator::default().translate(document, store)
}
