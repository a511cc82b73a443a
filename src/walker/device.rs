//! Per-device part of the walk

use crate::codec::{emit_fields, emit_int, emit_tagged_array, read_array, read_int, read_object};
use crate::error::Result;
use crate::names::convert_name;
use crate::store::DeviceInfoStore;
use crate::types::Field;
use crate::version::ApiVersion;
use crate::walker::fields;
use crate::walker::{as_object, emit_group, Translator};
use log::{debug, info};
use serde_json::{Map, Value};

impl Translator {
    /// Write one device. The caller has already opened the device's group.
    pub(crate) fn emit_device<S: DeviceInfoStore>(&self, store: &mut S, device: &Map<String, Value>) -> Result<()> {
        let properties = read_object(device, "properties")?;
        let api_version = read_int(properties, "apiVersion").map_err(|e| e.within("properties"))?;

        emit_properties(store, properties).map_err(|e| e.within("properties"))?;
        emit_group(store, device, "features", fields::FEATURES)?;
        emit_memory(store, device).map_err(|e| e.within("memory"))?;
        emit_queues(store, device)?;

        // VkJSON does not report extensions provided by device layers yet, so
        // device layers would only repeat the instance extension list.
        store.start_array(convert_name("layers")?)?;
        store.end_array()?;

        self.emit_extensions(store, device)?;

        emit_tagged_array(
            store,
            device,
            "formats",
            &self.config.formats_array_name,
            &self.config.format_tag,
            fields::FORMAT_PROPERTIES,
        )?;

        let version = u32::try_from(api_version).map(ApiVersion::from_packed).ok();
        if self.passes_version_gate(api_version) {
            info!(
                "device {:?} api {} carries 1.1 structures",
                properties.get("deviceName").and_then(Value::as_str).unwrap_or_default(),
                version.map_or_else(|| api_version.to_string(), |v| v.to_string())
            );
            self.emit_core_1_1(store, device)?;
        } else {
            debug!(
                "device api version {} below gate {}, skipping 1.1 structures",
                api_version, self.config.version_gate
            );
        }
        Ok(())
    }

    fn emit_core_1_1<S: DeviceInfoStore>(&self, store: &mut S, device: &Map<String, Value>) -> Result<()> {
        for (name, group_fields) in fields::CORE_1_1_GROUPS {
            emit_group(store, device, name, group_fields)?;
        }

        emit_tagged_array(
            store,
            device,
            "externalFenceProperties",
            convert_name("externalFenceProperties")?,
            &self.config.handle_type_tag,
            fields::EXTERNAL_FENCE_PROPERTIES,
        )?;
        emit_tagged_array(
            store,
            device,
            "externalSemaphoreProperties",
            convert_name("externalSemaphoreProperties")?,
            &self.config.handle_type_tag,
            fields::EXTERNAL_SEMAPHORE_PROPERTIES,
        )?;
        Ok(())
    }
}

fn emit_properties<S: DeviceInfoStore>(store: &mut S, properties: &Map<String, Value>) -> Result<()> {
    store.start_group_named(convert_name("properties")?)?;
    {
        emit_fields(store, properties, fields::DEVICE_PROPERTIES)?;
        emit_group(store, properties, "limits", fields::LIMITS)?;
        emit_group(store, properties, "sparseProperties", fields::SPARSE_PROPERTIES)?;
    }
    store.end_group()?;
    Ok(())
}

fn emit_memory<S: DeviceInfoStore>(store: &mut S, device: &Map<String, Value>) -> Result<()> {
    let memory = read_object(device, "memory")?;
    store.start_group_named(convert_name("memory")?)?;
    {
        emit_int(store, memory, "memoryTypeCount")?;
        emit_object_array(store, memory, "memoryTypes", fields::MEMORY_TYPE)?;
        emit_int(store, memory, "memoryHeapCount")?;
        emit_object_array(store, memory, "memoryHeaps", fields::MEMORY_HEAP)?;
    }
    store.end_group()?;
    Ok(())
}

fn emit_queues<S: DeviceInfoStore>(store: &mut S, device: &Map<String, Value>) -> Result<()> {
    let queues = read_array(device, "queues")?;
    store.start_array(convert_name("queues")?)?;
    for (idx, queue) in queues.iter().enumerate() {
        let context = format!("queues[{}]", idx);
        let queue = as_object(queue, &context)?;
        store.start_group()?;
        emit_fields(store, queue, fields::QUEUE_FAMILY)
            .and_then(|_| emit_group(store, queue, "minImageTransferGranularity", fields::EXTENT_3D))
            .map_err(|e| e.within(context))?;
        store.end_group()?;
    }
    store.end_array()?;
    Ok(())
}

/// Write `parent[name]`, an array of uniform objects, as an array of groups.
fn emit_object_array<S: DeviceInfoStore>(
    store: &mut S,
    parent: &Map<String, Value>,
    name: &str,
    element_fields: &[Field],
) -> Result<()> {
    let elements = read_array(parent, name)?;
    store.start_array(convert_name(name)?)?;
    for (idx, element) in elements.iter().enumerate() {
        let context = format!("{}[{}]", name, idx);
        let element = as_object(element, &context)?;
        store.start_group()?;
        emit_fields(store, element, element_fields).map_err(|e| e.within(context))?;
        store.end_group()?;
    }
    store.end_array()?;
    Ok(())
}
