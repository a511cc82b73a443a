mod common;

use common::*;
use serde_json::{json, Value};
use vkreport::{
    DeviceInfoStore, ExtensionRegistry, JsonStore, RecordingStore, StoreError, StoreEvent, TranslateConfig,
    TranslateError, Translator, VK_API_VERSION_1_1,
};

fn translate_to_json(translator: &Translator, document: &Value) -> Result<Value, TranslateError> {
    translate_to_json_with(translator, document, JsonStore::new())
}

fn translate_to_json_with(
    translator: &Translator,
    document: &Value,
    mut store: JsonStore,
) -> Result<Value, TranslateError> {
    translator.translate(document, &mut store)?;
    Ok(store.into_value()?)
}

fn translate_default(document: &Value) -> Value {
    translate_to_json(&Translator::default(), document).unwrap()
}

#[test]
fn test_top_level_order() {
    let out = translate_default(&fixture());
    let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["device_groups", "layers", "extensions", "devices"]);
}

#[test]
fn test_instance_sections() {
    let out = translate_default(&fixture());
    assert_eq!(out["device_groups"], json!([{"devices": [0], "subset_allocation": false}]));
    assert_eq!(
        out["layers"],
        json!([{
            "properties": {
                "layer_name": "VK_LAYER_KHRONOS_validation",
                "spec_version": 4198473,
                "implementation_version": 1,
                "description": "Khronos Validation Layer"
            },
            "extensions": [{"extension_name": "VK_EXT_debug_report", "spec_version": 9}]
        }])
    );
    assert_eq!(
        out["extensions"],
        json!([
            {"extension_name": "VK_KHR_surface", "spec_version": 25},
            {"extension_name": "VK_KHR_android_surface", "spec_version": 6}
        ])
    );
}

#[test]
fn test_device_group_order() {
    let out = translate_default(&fixture());
    let device = out["devices"][0].as_object().unwrap();
    let keys: Vec<&str> = device.keys().map(String::as_str).collect();

    let mut expected = vec![
        "properties",
        "features",
        "memory",
        "queues",
        "layers",
        "extensions",
        "vk_khr_variable_pointers",
        "supported_formats",
    ];
    expected.extend_from_slice(CORE_1_1_STORE_KEYS);
    assert_eq!(keys, expected);
}

#[test]
fn test_device_properties_and_limits() {
    let out = translate_default(&fixture());
    let properties = &out["devices"][0]["properties"];
    assert_eq!(properties["api_version"], json!(4198473));
    assert_eq!(properties["vendor_id"], json!(20803));
    assert_eq!(properties["device_name"], json!("Adreno (TM) 640"));
    assert_eq!(properties["pipeline_cache_uuid"].as_array().unwrap().len(), 16);

    let limits = &properties["limits"];
    assert_eq!(limits.as_object().unwrap().len(), 106);
    assert_eq!(limits["max_image_dimension_2d"], json!(16384));
    assert_eq!(limits["buffer_image_granularity"], json!("0x1000"));
    assert_eq!(limits["sparse_address_space_size"], json!("0xffffffffffffffff"));
    assert_eq!(limits["non_coherent_atom_size"], json!("0x40"));
    assert_eq!(limits["min_texel_offset"], json!(-8));
    assert_eq!(limits["max_compute_work_group_size"], json!([1024, 1024, 64]));
    assert_eq!(limits["viewport_bounds_range"], json!([-32768.0, 32767.0]));
    assert_eq!(limits["timestamp_period"], json!(52.083333333333336));
    assert_eq!(limits["timestamp_compute_and_graphics"], json!(true));
    assert_eq!(limits["strict_lines"], json!(false));

    let sparse = properties["sparse_properties"].as_object().unwrap();
    assert_eq!(sparse.len(), 5);
    assert!(sparse.values().all(|v| v == &json!(false)));
}

#[test]
fn test_features_are_booleans() {
    let out = translate_default(&fixture());
    let features = out["devices"][0]["features"].as_object().unwrap();
    assert_eq!(features.len(), 55);
    assert!(features.values().all(Value::is_boolean));
    assert_eq!(features["robust_buffer_access"], json!(true));
    assert_eq!(features["geometry_shader"], json!(false));
    assert_eq!(features["texture_compression_astc_ldr"], json!(true));
    // source value 2
    assert_eq!(features["variable_multisample_rate"], json!(true));
}

#[test]
fn test_memory_and_queues() {
    let out = translate_default(&fixture());
    let device = &out["devices"][0];
    assert_eq!(
        device["memory"],
        json!({
            "memory_type_count": 2,
            "memory_types": [
                {"property_flags": 1, "heap_index": 0},
                {"property_flags": 7, "heap_index": 0}
            ],
            "memory_heap_count": 1,
            "memory_heaps": [{"size": "0xec000000", "flags": 1}]
        })
    );
    assert_eq!(
        device["queues"],
        json!([{
            "queue_flags": 7,
            "queue_count": 3,
            "timestamp_valid_bits": 48,
            "min_image_transfer_granularity": {"width": 1, "height": 1, "depth": 1}
        }])
    );
}

#[test]
fn test_device_layers_always_empty() {
    let mut document = fixture();
    device_mut(&mut document, 0).insert(
        "layers".to_string(),
        json!([{"properties": {"layerName": "VK_LAYER_device"}}]),
    );
    let out = translate_default(&document);
    assert_eq!(out["devices"][0]["layers"], json!([]));
}

#[test]
fn test_formats_and_external_handles_flattened() {
    let out = translate_default(&fixture());
    let device = &out["devices"][0];
    assert_eq!(
        device["supported_formats"],
        json!([
            {"id": 37, "linear_tiling_features": 56731, "optimal_tiling_features": 122269, "buffer_features": 88},
            {"id": 124, "linear_tiling_features": 0, "optimal_tiling_features": 123393, "buffer_features": 0}
        ])
    );
    assert_eq!(
        device["external_fence_properties"],
        json!([
            {"handle_type": 1, "export_from_imported_handle_types": 0, "compatible_handle_types": 0, "external_fence_features": 0},
            {"handle_type": 8, "export_from_imported_handle_types": 8, "compatible_handle_types": 8, "external_fence_features": 3}
        ])
    );
    assert_eq!(
        device["external_semaphore_properties"],
        json!([
            {"handle_type": 16, "export_from_imported_handle_types": 16, "compatible_handle_types": 16, "external_semaphore_features": 3}
        ])
    );
}

#[test]
fn test_core_1_1_groups() {
    let out = translate_default(&fixture());
    let device = &out["devices"][0];
    assert_eq!(
        device["subgroup_properties"],
        json!({"subgroup_size": 64, "supported_stages": 32, "supported_operations": 127, "quad_operations_in_all_stages": false})
    );
    assert_eq!(
        device["maintenance_3_properties"],
        json!({"max_per_set_descriptors": 1024, "max_memory_allocation_size": "0xffffffffffffffff"})
    );
    assert_eq!(device["id_properties"]["device_luid"], json!([0, 0, 0, 0, 0, 0, 0, 0]));
    assert_eq!(device["id_properties"]["device_luid_valid"], json!(false));
    assert_eq!(device["bit16_storage_features"]["storage_buffer_16bit_access"], json!(true));
    assert_eq!(device["shader_draw_parameter_features"], json!({"shader_draw_parameters": false}));
}

#[test]
fn test_variable_pointers_extension_detail() {
    let out = translate_default(&fixture());
    assert_eq!(
        out["devices"][0]["vk_khr_variable_pointers"],
        json!({
            "variable_pointer_features_khr": {
                "variable_pointers_storage_buffer": true,
                "variable_pointers": true
            }
        })
    );
}

#[test]
fn test_api_version_exactly_at_gate() {
    let mut document = fixture();
    set_api_version(&mut document, 0, VK_API_VERSION_1_1);
    device_mut(&mut document, 0)["features"]["robustBufferAccess"] = json!(1);

    let out = translate_default(&document);
    let device = &out["devices"][0];
    assert_eq!(device["properties"]["api_version"], json!(4198400));
    assert_eq!(device["features"]["robust_buffer_access"], json!(true));
    assert!(device["subgroup_properties"].is_object());
}

#[test]
fn test_below_gate_skips_structures_silently() {
    let mut document = fixture();
    set_api_version(&mut document, 0, VK_API_VERSION_1_1 - 1);
    strip_core_1_1(&mut document, 0);

    let out = translate_default(&document);
    let device = out["devices"][0].as_object().unwrap();
    for key in CORE_1_1_STORE_KEYS {
        assert!(!device.contains_key(*key), "{} should be absent", key);
    }
    assert_eq!(device["supported_formats"].as_array().unwrap().len(), 2);
}

#[test]
fn test_below_gate_ignores_present_structures() {
    let mut document = fixture();
    set_api_version(&mut document, 0, 4194304);
    let out = translate_default(&document);
    assert!(out["devices"][0].get("subgroup_properties").is_none());
}

#[test]
fn test_at_gate_requires_structures() {
    let mut document = fixture();
    strip_core_1_1(&mut document, 0);
    let err = translate_to_json(&Translator::default(), &document).unwrap_err();
    assert!(err.is_schema_violation());
    assert_eq!(
        err.to_string(),
        "in devices[0]: schema violation at `subgroupProperties`: expected object, found missing"
    );
}

#[test]
fn test_configured_gate() {
    let mut document = fixture();
    strip_core_1_1(&mut document, 0);
    let translator = Translator::new(TranslateConfig {
        version_gate: vkreport::version::make_api_version(1, 2, 0),
        ..TranslateConfig::default()
    });
    let out = translate_to_json(&translator, &document).unwrap();
    assert!(out["devices"][0].get("subgroup_properties").is_none());
}

#[test]
fn test_configured_format_names() {
    let translator = Translator::new(TranslateConfig {
        format_tag: "format".to_string(),
        formats_array_name: "formats".to_string(),
        ..TranslateConfig::default()
    });
    let out = translate_to_json(&translator, &fixture()).unwrap();
    assert_eq!(out["devices"][0]["formats"][0]["format"], json!(37));
    assert!(out["devices"][0].get("supported_formats").is_none());
}

#[test]
fn test_unknown_extension_tolerated() {
    let mut document = fixture();
    device_mut(&mut document, 0)["extensions"]
        .as_array_mut()
        .unwrap()
        .push(json!({"extensionName": "VK_EXT_from_the_future", "specVersion": 3}));

    let out = translate_default(&document);
    let extensions = out["devices"][0]["extensions"].as_array().unwrap();
    assert_eq!(extensions.len(), 3);
    assert_eq!(extensions[2]["extension_name"], json!("VK_EXT_from_the_future"));
}

#[test]
fn test_repeated_extension_runs_handler_per_entry() {
    let mut document = fixture();
    device_mut(&mut document, 0)["extensions"]
        .as_array_mut()
        .unwrap()
        .push(json!({"extensionName": "VK_KHR_variable_pointers", "specVersion": 1}));

    let mut recording = RecordingStore::new();
    Translator::default().translate(&document, &mut recording).unwrap();
    let handler_groups = recording
        .events()
        .iter()
        .filter(|e| **e == StoreEvent::StartGroup(Some("vk_khr_variable_pointers".to_string())))
        .count();
    assert_eq!(handler_groups, 2);
    assert!(recording.is_balanced());

    let out = translate_default(&document);
    assert_eq!(out["devices"][0]["extensions"].as_array().unwrap().len(), 3);
    assert!(out["devices"][0]["vk_khr_variable_pointers"].is_object());

    let err = translate_to_json_with(&Translator::default(), &document, JsonStore::strict()).unwrap_err();
    assert!(matches!(err, TranslateError::Context { .. }));
    assert!(matches!(err.root_cause(), TranslateError::Store(StoreError::DuplicateKey(_))));
}

#[test]
fn test_double_precision_kept() {
    let period = 1.0715660391465826e-75_f64;
    let mut document = fixture();
    device_mut(&mut document, 0)["properties"]["limits"]["timestampPeriod"] = json!(period);
    let text = serde_json::to_string(&document).unwrap();

    let mut store = JsonStore::new();
    Translator::default().translate_str(&text, &mut store).unwrap();
    let from_str = store.into_value().unwrap();
    let from_report = vkreport::translate_report(text.as_bytes(), TranslateConfig::default()).unwrap();

    for out in [&from_str, &from_report] {
        let written = out["devices"][0]["properties"]["limits"]["timestamp_period"].as_f64().unwrap();
        assert_eq!(written.to_bits(), period.to_bits());
    }
}

#[test]
fn test_advertised_extension_without_detail() {
    let mut document = fixture();
    device_mut(&mut document, 0).remove("VK_KHR_variable_pointers");
    let out = translate_default(&document);
    assert!(out["devices"][0].get("vk_khr_variable_pointers").is_none());
}

#[test]
fn test_detail_without_advertised_extension_is_ignored() {
    let mut document = fixture();
    device_mut(&mut document, 0)["extensions"] = json!([]);
    let out = translate_default(&document);
    assert!(out["devices"][0].get("vk_khr_variable_pointers").is_none());
}

#[test]
fn test_empty_registry_skips_all_details() {
    let translator = Translator::default().with_extensions(ExtensionRegistry::empty());
    let out = translate_to_json(&translator, &fixture()).unwrap();
    assert!(out["devices"][0].get("vk_khr_variable_pointers").is_none());
}

#[test]
fn test_missing_feature_is_fatal() {
    let mut document = fixture();
    device_mut(&mut document, 0)["features"]
        .as_object_mut()
        .unwrap()
        .remove("robustBufferAccess");

    let mut store = RecordingStore::new();
    let err = Translator::default().translate(&document, &mut store).unwrap_err();
    assert!(err.is_schema_violation());
    assert!(!err.is_programming_error());
    assert_eq!(
        err.to_string(),
        "in devices[0]: in features: schema violation at `robustBufferAccess`: expected integer, found missing"
    );
    // aborted mid-walk, nothing closed the open scopes
    assert!(!store.is_balanced());
}

#[test]
fn test_wrong_type_is_fatal() {
    let mut document = fixture();
    device_mut(&mut document, 0)["properties"]["limits"]["maxViewports"] = json!("16");
    let err = translate_to_json(&Translator::default(), &document).unwrap_err();
    assert_eq!(
        err.to_string(),
        "in devices[0]: in properties: in limits: schema violation at `maxViewports`: expected integer, found string"
    );
}

#[test]
fn test_group_balance() {
    let mut store = RecordingStore::new();
    Translator::default().translate(&fixture(), &mut store).unwrap();
    assert!(store.is_balanced());
    assert_eq!(store.start_count(), store.end_count());
    assert!(store.max_depth() >= 4);

    let first = store.events().first().unwrap();
    assert_eq!(first, &StoreEvent::StartArray("device_groups".to_string()));
    assert_eq!(store.events().last().unwrap(), &StoreEvent::EndArray);
}

#[test]
fn test_translator_is_reusable() {
    let translator = Translator::default();
    let document = fixture();
    let first = translate_to_json(&translator, &document).unwrap();
    let second = translate_to_json(&translator, &document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_translate_str_and_report_agree() {
    let mut store = JsonStore::new();
    Translator::default().translate_str(FIXTURE, &mut store).unwrap();
    let from_str = store.into_value().unwrap();

    let from_report = vkreport::translate_report(FIXTURE.as_bytes(), TranslateConfig::default()).unwrap();
    assert_eq!(from_str, from_report);
}

#[test]
fn test_store_through_mut_reference() {
    fn run<S: DeviceInfoStore>(mut store: S) {
        Translator::default().translate(&fixture(), &mut store).unwrap();
    }
    let mut recording = RecordingStore::new();
    run(&mut recording);
    assert!(recording.is_balanced());
}
