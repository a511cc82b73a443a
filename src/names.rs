//! VkJSON field name to device-info field name mapping
//!
//! The table is spelled out by hand instead of derived from the camelCase
//! names, so both spellings can be found with a plain text search.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::{Result, TranslateError};

/// Every (VkJSON name, store name) pair the walker can emit.
pub static NAME_TABLE: &[(&str, &str)] = &[
    ("16bitStorageFeatures", "bit16_storage_features"),
    ("alphaToOne", "alpha_to_one"),
    ("apiVersion", "api_version"),
    ("bufferFeatures", "buffer_features"),
    ("bufferImageGranularity", "buffer_image_granularity"),
    ("compatibleHandleTypes", "compatible_handle_types"),
    ("depth", "depth"),
    ("depthBiasClamp", "depth_bias_clamp"),
    ("depthBounds", "depth_bounds"),
    ("depthClamp", "depth_clamp"),
    ("description", "description"),
    ("deviceGroups", "device_groups"),
    ("deviceID", "device_id"),
    ("deviceLUID", "device_luid"),
    ("deviceLUIDValid", "device_luid_valid"),
    ("deviceName", "device_name"),
    ("deviceNodeMask", "device_node_mask"),
    ("deviceType", "device_type"),
    ("deviceUUID", "device_uuid"),
    ("devices", "devices"),
    ("discreteQueuePriorities", "discrete_queue_priorities"),
    ("drawIndirectFirstInstance", "draw_indirect_first_instance"),
    ("driverVersion", "driver_version"),
    ("driverUUID", "driver_uuid"),
    ("dualSrcBlend", "dual_src_blend"),
    ("exportFromImportedHandleTypes", "export_from_imported_handle_types"),
    ("extensionName", "extension_name"),
    ("extensions", "extensions"),
    ("externalFenceFeatures", "external_fence_features"),
    ("externalFenceProperties", "external_fence_properties"),
    ("externalSemaphoreFeatures", "external_semaphore_features"),
    ("externalSemaphoreProperties", "external_semaphore_properties"),
    ("features", "features"),
    ("fillModeNonSolid", "fill_mode_non_solid"),
    ("flags", "flags"),
    ("formats", "formats"),
    ("fragmentStoresAndAtomics", "fragment_stores_and_atomics"),
    ("framebufferColorSampleCounts", "framebuffer_color_sample_counts"),
    ("framebufferDepthSampleCounts", "framebuffer_depth_sample_counts"),
    ("framebufferNoAttachmentsSampleCounts", "framebuffer_no_attachments_sample_counts"),
    ("framebufferStencilSampleCounts", "framebuffer_stencil_sample_counts"),
    ("fullDrawIndexUint32", "full_draw_index_uint32"),
    ("geometryShader", "geometry_shader"),
    ("heapIndex", "heap_index"),
    ("height", "height"),
    ("idProperties", "id_properties"),
    ("imageCubeArray", "image_cube_array"),
    ("implementationVersion", "implementation_version"),
    ("independentBlend", "independent_blend"),
    ("inheritedQueries", "inherited_queries"),
    ("largePoints", "large_points"),
    ("layerName", "layer_name"),
    ("layers", "layers"),
    ("limits", "limits"),
    ("lineWidthGranularity", "line_width_granularity"),
    ("lineWidthRange", "line_width_range"),
    ("linearTilingFeatures", "linear_tiling_features"),
    ("logicOp", "logic_op"),
    ("maintenance3Properties", "maintenance_3_properties"),
    ("maxBoundDescriptorSets", "max_bound_descriptor_sets"),
    ("maxClipDistances", "max_clip_distances"),
    ("maxColorAttachments", "max_color_attachments"),
    ("maxCombinedClipAndCullDistances", "max_combined_clip_and_cull_distances"),
    ("maxComputeSharedMemorySize", "max_compute_shared_memory_size"),
    ("maxComputeWorkGroupCount", "max_compute_work_group_count"),
    ("maxComputeWorkGroupInvocations", "max_compute_work_group_invocations"),
    ("maxComputeWorkGroupSize", "max_compute_work_group_size"),
    ("maxCullDistances", "max_cull_distances"),
    ("maxDescriptorSetInputAttachments", "max_descriptor_set_input_attachments"),
    ("maxDescriptorSetSampledImages", "max_descriptor_set_sampled_images"),
    ("maxDescriptorSetSamplers", "max_descriptor_set_samplers"),
    ("maxDescriptorSetStorageBuffers", "max_descriptor_set_storage_buffers"),
    ("maxDescriptorSetStorageBuffersDynamic", "max_descriptor_set_storage_buffers_dynamic"),
    ("maxDescriptorSetStorageImages", "max_descriptor_set_storage_images"),
    ("maxDescriptorSetUniformBuffers", "max_descriptor_set_uniform_buffers"),
    ("maxDescriptorSetUniformBuffersDynamic", "max_descriptor_set_uniform_buffers_dynamic"),
    ("maxDrawIndexedIndexValue", "max_draw_indexed_index_value"),
    ("maxDrawIndirectCount", "max_draw_indirect_count"),
    ("maxFragmentCombinedOutputResources", "max_fragment_combined_output_resources"),
    ("maxFragmentDualSrcAttachments", "max_fragment_dual_src_attachments"),
    ("maxFragmentInputComponents", "max_fragment_input_components"),
    ("maxFragmentOutputAttachments", "max_fragment_output_attachments"),
    ("maxFramebufferHeight", "max_framebuffer_height"),
    ("maxFramebufferLayers", "max_framebuffer_layers"),
    ("maxFramebufferWidth", "max_framebuffer_width"),
    ("maxGeometryInputComponents", "max_geometry_input_components"),
    ("maxGeometryOutputComponents", "max_geometry_output_components"),
    ("maxGeometryOutputVertices", "max_geometry_output_vertices"),
    ("maxGeometryShaderInvocations", "max_geometry_shader_invocations"),
    ("maxGeometryTotalOutputComponents", "max_geometry_total_output_components"),
    ("maxImageArrayLayers", "max_image_array_layers"),
    ("maxImageDimension1D", "max_image_dimension_1d"),
    ("maxImageDimension2D", "max_image_dimension_2d"),
    ("maxImageDimension3D", "max_image_dimension_3d"),
    ("maxImageDimensionCube", "max_image_dimension_cube"),
    ("maxInterpolationOffset", "max_interpolation_offset"),
    ("maxMemoryAllocationCount", "max_memory_allocation_count"),
    ("maxMemoryAllocationSize", "max_memory_allocation_size"),
    ("maxMultiviewInstanceIndex", "max_multiview_instance_index"),
    ("maxMultiviewViewCount", "max_multiview_view_count"),
    ("maxPerSetDescriptors", "max_per_set_descriptors"),
    ("maxPerStageDescriptorInputAttachments", "max_per_stage_descriptor_input_attachments"),
    ("maxPerStageDescriptorSampledImages", "max_per_stage_descriptor_sampled_images"),
    ("maxPerStageDescriptorSamplers", "max_per_stage_descriptor_samplers"),
    ("maxPerStageDescriptorStorageBuffers", "max_per_stage_descriptor_storage_buffers"),
    ("maxPerStageDescriptorStorageImages", "max_per_stage_descriptor_storage_images"),
    ("maxPerStageDescriptorUniformBuffers", "max_per_stage_descriptor_uniform_buffers"),
    ("maxPerStageResources", "max_per_stage_resources"),
    ("maxPushConstantsSize", "max_push_constants_size"),
    ("maxSampleMaskWords", "max_sample_mask_words"),
    ("maxSamplerAllocationCount", "max_sampler_allocation_count"),
    ("maxSamplerAnisotropy", "max_sampler_anisotropy"),
    ("maxSamplerLodBias", "max_sampler_lod_bias"),
    ("maxStorageBufferRange", "max_storage_buffer_range"),
    ("maxTessellationControlPerPatchOutputComponents", "max_tessellation_control_per_patch_output_components"),
    ("maxTessellationControlPerVertexInputComponents", "max_tessellation_control_per_vertex_input_components"),
    ("maxTessellationControlPerVertexOutputComponents", "max_tessellation_control_per_vertex_output_components"),
    ("maxTessellationControlTotalOutputComponents", "max_tessellation_control_total_output_components"),
    ("maxTessellationEvaluationInputComponents", "max_tessellation_evaluation_input_components"),
    ("maxTessellationEvaluationOutputComponents", "max_tessellation_evaluation_output_components"),
    ("maxTessellationGenerationLevel", "max_tessellation_generation_level"),
    ("maxTessellationPatchSize", "max_tessellation_patch_size"),
    ("maxTexelBufferElements", "max_texel_buffer_elements"),
    ("maxTexelGatherOffset", "max_texel_gather_offset"),
    ("maxTexelOffset", "max_texel_offset"),
    ("maxUniformBufferRange", "max_uniform_buffer_range"),
    ("maxVertexInputAttributeOffset", "max_vertex_input_attribute_offset"),
    ("maxVertexInputAttributes", "max_vertex_input_attributes"),
    ("maxVertexInputBindingStride", "max_vertex_input_binding_stride"),
    ("maxVertexInputBindings", "max_vertex_input_bindings"),
    ("maxVertexOutputComponents", "max_vertex_output_components"),
    ("maxViewportDimensions", "max_viewport_dimensions"),
    ("maxViewports", "max_viewports"),
    ("memory", "memory"),
    ("memoryHeapCount", "memory_heap_count"),
    ("memoryHeaps", "memory_heaps"),
    ("memoryTypeCount", "memory_type_count"),
    ("memoryTypes", "memory_types"),
    ("minImageTransferGranularity", "min_image_transfer_granularity"),
    ("minInterpolationOffset", "min_interpolation_offset"),
    ("minMemoryMapAlignment", "min_memory_map_alignment"),
    ("minStorageBufferOffsetAlignment", "min_storage_buffer_offset_alignment"),
    ("minTexelBufferOffsetAlignment", "min_texel_buffer_offset_alignment"),
    ("minTexelGatherOffset", "min_texel_gather_offset"),
    ("minTexelOffset", "min_texel_offset"),
    ("minUniformBufferOffsetAlignment", "min_uniform_buffer_offset_alignment"),
    ("mipmapPrecisionBits", "mipmap_precision_bits"),
    ("multiDrawIndirect", "multi_draw_indirect"),
    ("multiViewport", "multi_viewport"),
    ("multiview", "multiview"),
    ("multiviewFeatures", "multiview_features"),
    ("multiviewGeometryShader", "multiview_geometry_shader"),
    ("multiviewProperties", "multiview_properties"),
    ("multiviewTessellationShader", "multiview_tessellation_shader"),
    ("nonCoherentAtomSize", "non_coherent_atom_size"),
    ("occlusionQueryPrecise", "occlusion_query_precise"),
    ("optimalBufferCopyOffsetAlignment", "optimal_buffer_copy_offset_alignment"),
    ("optimalBufferCopyRowPitchAlignment", "optimal_buffer_copy_row_pitch_alignment"),
    ("optimalTilingFeatures", "optimal_tiling_features"),
    ("pipelineCacheUUID", "pipeline_cache_uuid"),
    ("pipelineStatisticsQuery", "pipeline_statistics_query"),
    ("pointClippingBehavior", "point_clipping_behavior"),
    ("pointClippingProperties", "point_clipping_properties"),
    ("pointSizeGranularity", "point_size_granularity"),
    ("pointSizeRange", "point_size_range"),
    ("properties", "properties"),
    ("propertyFlags", "property_flags"),
    ("protectedMemory", "protected_memory"),
    ("protectedMemoryFeatures", "protected_memory_features"),
    ("quadOperationsInAllStages", "quad_operations_in_all_stages"),
    ("queueCount", "queue_count"),
    ("queueFlags", "queue_flags"),
    ("queues", "queues"),
    ("residencyAlignedMipSize", "residency_aligned_mip_size"),
    ("residencyNonResidentStrict", "residency_non_resident_strict"),
    ("residencyStandard2DBlockShape", "residency_standard_2d_block_shape"),
    ("residencyStandard2DMultisampleBlockShape", "residency_standard_2d_multisample_block_shape"),
    ("residencyStandard3DBlockShape", "residency_standard_3d_block_shape"),
    ("robustBufferAccess", "robust_buffer_access"),
    ("sampleRateShading", "sample_rate_shading"),
    ("sampledImageColorSampleCounts", "sampled_image_color_sample_counts"),
    ("sampledImageDepthSampleCounts", "sampled_image_depth_sample_counts"),
    ("sampledImageIntegerSampleCounts", "sampled_image_integer_sample_counts"),
    ("sampledImageStencilSampleCounts", "sampled_image_stencil_sample_counts"),
    ("samplerAnisotropy", "sampler_anisotropy"),
    ("samplerYcbcrConversion", "sampler_ycbcr_conversion"),
    ("samplerYcbcrConversionFeatures", "sampler_ycbcr_conversion_features"),
    ("shaderClipDistance", "shader_clip_distance"),
    ("shaderCullDistance", "shader_cull_distance"),
    ("shaderDrawParameterFeatures", "shader_draw_parameter_features"),
    ("shaderDrawParameters", "shader_draw_parameters"),
    ("shaderFloat64", "shader_float64"),
    ("shaderImageGatherExtended", "shader_image_gather_extended"),
    ("shaderInt16", "shader_int16"),
    ("shaderInt64", "shader_int64"),
    ("shaderResourceMinLod", "shader_resource_min_lod"),
    ("shaderResourceResidency", "shader_resource_residency"),
    ("shaderSampledImageArrayDynamicIndexing", "shader_sampled_image_array_dynamic_indexing"),
    ("shaderStorageBufferArrayDynamicIndexing", "shader_storage_buffer_array_dynamic_indexing"),
    ("shaderStorageImageArrayDynamicIndexing", "shader_storage_image_array_dynamic_indexing"),
    ("shaderStorageImageExtendedFormats", "shader_storage_image_extended_formats"),
    ("shaderStorageImageMultisample", "shader_storage_image_multisample"),
    ("shaderStorageImageReadWithoutFormat", "shader_storage_image_read_without_format"),
    ("shaderStorageImageWriteWithoutFormat", "shader_storage_image_write_without_format"),
    ("shaderTessellationAndGeometryPointSize", "shader_tessellation_and_geometry_point_size"),
    ("shaderUniformBufferArrayDynamicIndexing", "shader_uniform_buffer_array_dynamic_indexing"),
    ("size", "size"),
    ("sparseAddressSpaceSize", "sparse_address_space_size"),
    ("sparseBinding", "sparse_binding"),
    ("sparseProperties", "sparse_properties"),
    ("sparseResidency16Samples", "sparse_residency_16_samples"),
    ("sparseResidency2Samples", "sparse_residency_2_samples"),
    ("sparseResidency4Samples", "sparse_residency_4_samples"),
    ("sparseResidency8Samples", "sparse_residency_8_samples"),
    ("sparseResidencyAliased", "sparse_residency_aliased"),
    ("sparseResidencyBuffer", "sparse_residency_buffer"),
    ("sparseResidencyImage2D", "sparse_residency_image_2d"),
    ("sparseResidencyImage3D", "sparse_residency_image_3d"),
    ("specVersion", "spec_version"),
    ("standardSampleLocations", "standard_sample_locations"),
    ("storageBuffer16BitAccess", "storage_buffer_16bit_access"),
    ("storageImageSampleCounts", "storage_image_sample_counts"),
    ("storageInputOutput16", "storage_input_output_16"),
    ("storagePushConstant16", "storage_push_constant_16"),
    ("strictLines", "strict_lines"),
    ("subPixelInterpolationOffsetBits", "sub_pixel_interpolation_offset_bits"),
    ("subPixelPrecisionBits", "sub_pixel_precision_bits"),
    ("subTexelPrecisionBits", "sub_texel_precision_bits"),
    ("subgroupProperties", "subgroup_properties"),
    ("subgroupSize", "subgroup_size"),
    ("subsetAllocation", "subset_allocation"),
    ("supportedOperations", "supported_operations"),
    ("supportedStages", "supported_stages"),
    ("tessellationShader", "tessellation_shader"),
    ("textureCompressionASTC_LDR", "texture_compression_astc_ldr"),
    ("textureCompressionBC", "texture_compression_bc"),
    ("textureCompressionETC2", "texture_compression_etc2"),
    ("timestampComputeAndGraphics", "timestamp_compute_and_graphics"),
    ("timestampPeriod", "timestamp_period"),
    ("timestampValidBits", "timestamp_valid_bits"),
    ("uniformAndStorageBuffer16BitAccess", "uniform_and_storage_buffer_16bit_access"),
    ("variableMultisampleRate", "variable_multisample_rate"),
    ("variablePointerFeatures", "variable_pointer_features"),
    ("variablePointerFeaturesKHR", "variable_pointer_features_khr"),
    ("variablePointers", "variable_pointers"),
    ("variablePointersStorageBuffer", "variable_pointers_storage_buffer"),
    ("vendorID", "vendor_id"),
    ("vertexPipelineStoresAndAtomics", "vertex_pipeline_stores_and_atomics"),
    ("viewportBoundsRange", "viewport_bounds_range"),
    ("viewportSubPixelBits", "viewport_sub_pixel_bits"),
    ("VK_KHR_variable_pointers", "vk_khr_variable_pointers"),
    ("wideLines", "wide_lines"),
    ("width", "width"),
];

static NAMES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| NAME_TABLE.iter().copied().collect());

/// Convert a VkJSON field name to its store name.
///
/// An unknown name means the walker and this table have drifted apart.
pub fn convert_name(name: &str) -> Result<&'static str> {
    NAMES
        .get(name)
        .copied()
        .ok_or_else(|| TranslateError::UnmappedName(name.to_string()))
}
