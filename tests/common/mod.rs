#![allow(dead_code)]

use serde_json::{Map, Value};

pub const FIXTURE: &str = include_str!("../fixtures/vkjson_1_1.json");

/// Every device key that only exists from Vulkan 1.1 on
pub const CORE_1_1_KEYS: &[&str] = &[
    "subgroupProperties",
    "pointClippingProperties",
    "multiviewProperties",
    "idProperties",
    "maintenance3Properties",
    "16bitStorageFeatures",
    "multiviewFeatures",
    "variablePointerFeatures",
    "protectedMemoryFeatures",
    "samplerYcbcrConversionFeatures",
    "shaderDrawParameterFeatures",
    "externalFenceProperties",
    "externalSemaphoreProperties",
];

/// Store names of the gated groups and arrays, in output order
pub const CORE_1_1_STORE_KEYS: &[&str] = &[
    "subgroup_properties",
    "point_clipping_properties",
    "multiview_properties",
    "id_properties",
    "maintenance_3_properties",
    "bit16_storage_features",
    "multiview_features",
    "variable_pointer_features",
    "protected_memory_features",
    "sampler_ycbcr_conversion_features",
    "shader_draw_parameter_features",
    "external_fence_properties",
    "external_semaphore_properties",
];

pub fn fixture() -> Value {
    serde_json::from_str(FIXTURE).unwrap()
}

pub fn device_mut(document: &mut Value, idx: usize) -> &mut Map<String, Value> {
    document["devices"][idx].as_object_mut().unwrap()
}

pub fn set_api_version(document: &mut Value, idx: usize, api_version: u32) {
    device_mut(document, idx)["properties"]["apiVersion"] = Value::from(api_version);
}

/// Make device `idx` look like a Vulkan 1.0 report
pub fn strip_core_1_1(document: &mut Value, idx: usize) {
    let device = device_mut(document, idx);
    for key in CORE_1_1_KEYS {
        device.remove(*key);
    }
}
