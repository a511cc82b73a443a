//! Field tables for the fixed-shape VkJSON structures
//!
//! Order matches the order the fields are written to the store.

use crate::types::Field;

/// `VkPhysicalDeviceProperties`, without the nested limits and sparse properties
pub const DEVICE_PROPERTIES: &[Field] = &[
    Field::int("apiVersion"),
    Field::int("driverVersion"),
    Field::int("vendorID"),
    Field::int("deviceID"),
    Field::int("deviceType"),
    Field::string("deviceName"),
    Field::int_array("pipelineCacheUUID"),
];

/// `VkPhysicalDeviceLimits`
pub const LIMITS: &[Field] = &[
    Field::int("maxImageDimension1D"),
    Field::int("maxImageDimension2D"),
    Field::int("maxImageDimension3D"),
    Field::int("maxImageDimensionCube"),
    Field::int("maxImageArrayLayers"),
    Field::int("maxTexelBufferElements"),
    Field::int("maxUniformBufferRange"),
    Field::int("maxStorageBufferRange"),
    Field::int("maxPushConstantsSize"),
    Field::int("maxMemoryAllocationCount"),
    Field::int("maxSamplerAllocationCount"),
    Field::hex("bufferImageGranularity"),
    Field::hex("sparseAddressSpaceSize"),
    Field::int("maxBoundDescriptorSets"),
    Field::int("maxPerStageDescriptorSamplers"),
    Field::int("maxPerStageDescriptorUniformBuffers"),
    Field::int("maxPerStageDescriptorStorageBuffers"),
    Field::int("maxPerStageDescriptorSampledImages"),
    Field::int("maxPerStageDescriptorStorageImages"),
    Field::int("maxPerStageDescriptorInputAttachments"),
    Field::int("maxPerStageResources"),
    Field::int("maxDescriptorSetSamplers"),
    Field::int("maxDescriptorSetUniformBuffers"),
    Field::int("maxDescriptorSetUniformBuffersDynamic"),
    Field::int("maxDescriptorSetStorageBuffers"),
    Field::int("maxDescriptorSetStorageBuffersDynamic"),
    Field::int("maxDescriptorSetSampledImages"),
    Field::int("maxDescriptorSetStorageImages"),
    Field::int("maxDescriptorSetInputAttachments"),
    Field::int("maxVertexInputAttributes"),
    Field::int("maxVertexInputBindings"),
    Field::int("maxVertexInputAttributeOffset"),
    Field::int("maxVertexInputBindingStride"),
    Field::int("maxVertexOutputComponents"),
    Field::int("maxTessellationGenerationLevel"),
    Field::int("maxTessellationPatchSize"),
    Field::int("maxTessellationControlPerVertexInputComponents"),
    Field::int("maxTessellationControlPerVertexOutputComponents"),
    Field::int("maxTessellationControlPerPatchOutputComponents"),
    Field::int("maxTessellationControlTotalOutputComponents"),
    Field::int("maxTessellationEvaluationInputComponents"),
    Field::int("maxTessellationEvaluationOutputComponents"),
    Field::int("maxGeometryShaderInvocations"),
    Field::int("maxGeometryInputComponents"),
    Field::int("maxGeometryOutputComponents"),
    Field::int("maxGeometryOutputVertices"),
    Field::int("maxGeometryTotalOutputComponents"),
    Field::int("maxFragmentInputComponents"),
    Field::int("maxFragmentOutputAttachments"),
    Field::int("maxFragmentDualSrcAttachments"),
    Field::int("maxFragmentCombinedOutputResources"),
    Field::int("maxComputeSharedMemorySize"),
    Field::int_array("maxComputeWorkGroupCount"),
    Field::int("maxComputeWorkGroupInvocations"),
    Field::int_array("maxComputeWorkGroupSize"),
    Field::int("subPixelPrecisionBits"),
    Field::int("subTexelPrecisionBits"),
    Field::int("mipmapPrecisionBits"),
    Field::int("maxDrawIndexedIndexValue"),
    Field::int("maxDrawIndirectCount"),
    Field::double("maxSamplerLodBias"),
    Field::double("maxSamplerAnisotropy"),
    Field::int("maxViewports"),
    Field::int_array("maxViewportDimensions"),
    Field::double_array("viewportBoundsRange"),
    Field::int("viewportSubPixelBits"),
    Field::hex("minMemoryMapAlignment"),
    Field::hex("minTexelBufferOffsetAlignment"),
    Field::hex("minUniformBufferOffsetAlignment"),
    Field::hex("minStorageBufferOffsetAlignment"),
    Field::int("minTexelOffset"),
    Field::int("maxTexelOffset"),
    Field::int("minTexelGatherOffset"),
    Field::int("maxTexelGatherOffset"),
    Field::double("minInterpolationOffset"),
    Field::double("maxInterpolationOffset"),
    Field::int("subPixelInterpolationOffsetBits"),
    Field::int("maxFramebufferWidth"),
    Field::int("maxFramebufferHeight"),
    Field::int("maxFramebufferLayers"),
    Field::int("framebufferColorSampleCounts"),
    Field::int("framebufferDepthSampleCounts"),
    Field::int("framebufferStencilSampleCounts"),
    Field::int("framebufferNoAttachmentsSampleCounts"),
    Field::int("maxColorAttachments"),
    Field::int("sampledImageColorSampleCounts"),
    Field::int("sampledImageIntegerSampleCounts"),
    Field::int("sampledImageDepthSampleCounts"),
    Field::int("sampledImageStencilSampleCounts"),
    Field::int("storageImageSampleCounts"),
    Field::int("maxSampleMaskWords"),
    Field::bool("timestampComputeAndGraphics"),
    Field::double("timestampPeriod"),
    Field::int("maxClipDistances"),
    Field::int("maxCullDistances"),
    Field::int("maxCombinedClipAndCullDistances"),
    Field::int("discreteQueuePriorities"),
    Field::double_array("pointSizeRange"),
    Field::double_array("lineWidthRange"),
    Field::double("pointSizeGranularity"),
    Field::double("lineWidthGranularity"),
    Field::bool("strictLines"),
    Field::bool("standardSampleLocations"),
    Field::hex("optimalBufferCopyOffsetAlignment"),
    Field::hex("optimalBufferCopyRowPitchAlignment"),
    Field::hex("nonCoherentAtomSize"),
];

/// `VkPhysicalDeviceSparseProperties`
pub const SPARSE_PROPERTIES: &[Field] = &[
    Field::bool("residencyStandard2DBlockShape"),
    Field::bool("residencyStandard2DMultisampleBlockShape"),
    Field::bool("residencyStandard3DBlockShape"),
    Field::bool("residencyAlignedMipSize"),
    Field::bool("residencyNonResidentStrict"),
];

/// `VkPhysicalDeviceFeatures`
pub const FEATURES: &[Field] = &[
    Field::bool("robustBufferAccess"),
    Field::bool("fullDrawIndexUint32"),
    Field::bool("imageCubeArray"),
    Field::bool("independentBlend"),
    Field::bool("geometryShader"),
    Field::bool("tessellationShader"),
    Field::bool("sampleRateShading"),
    Field::bool("dualSrcBlend"),
    Field::bool("logicOp"),
    Field::bool("multiDrawIndirect"),
    Field::bool("drawIndirectFirstInstance"),
    Field::bool("depthClamp"),
    Field::bool("depthBiasClamp"),
    Field::bool("fillModeNonSolid"),
    Field::bool("depthBounds"),
    Field::bool("wideLines"),
    Field::bool("largePoints"),
    Field::bool("alphaToOne"),
    Field::bool("multiViewport"),
    Field::bool("samplerAnisotropy"),
    Field::bool("textureCompressionETC2"),
    Field::bool("textureCompressionASTC_LDR"),
    Field::bool("textureCompressionBC"),
    Field::bool("occlusionQueryPrecise"),
    Field::bool("pipelineStatisticsQuery"),
    Field::bool("vertexPipelineStoresAndAtomics"),
    Field::bool("fragmentStoresAndAtomics"),
    Field::bool("shaderTessellationAndGeometryPointSize"),
    Field::bool("shaderImageGatherExtended"),
    Field::bool("shaderStorageImageExtendedFormats"),
    Field::bool("shaderStorageImageMultisample"),
    Field::bool("shaderStorageImageReadWithoutFormat"),
    Field::bool("shaderStorageImageWriteWithoutFormat"),
    Field::bool("shaderUniformBufferArrayDynamicIndexing"),
    Field::bool("shaderSampledImageArrayDynamicIndexing"),
    Field::bool("shaderStorageBufferArrayDynamicIndexing"),
    Field::bool("shaderStorageImageArrayDynamicIndexing"),
    Field::bool("shaderClipDistance"),
    Field::bool("shaderCullDistance"),
    Field::bool("shaderFloat64"),
    Field::bool("shaderInt64"),
    Field::bool("shaderInt16"),
    Field::bool("shaderResourceResidency"),
    Field::bool("shaderResourceMinLod"),
    Field::bool("sparseBinding"),
    Field::bool("sparseResidencyBuffer"),
    Field::bool("sparseResidencyImage2D"),
    Field::bool("sparseResidencyImage3D"),
    Field::bool("sparseResidency2Samples"),
    Field::bool("sparseResidency4Samples"),
    Field::bool("sparseResidency8Samples"),
    Field::bool("sparseResidency16Samples"),
    Field::bool("sparseResidencyAliased"),
    Field::bool("variableMultisampleRate"),
    Field::bool("inheritedQueries"),
];

pub const DEVICE_GROUP: &[Field] = &[
    Field::int_array("devices"),
    Field::bool("subsetAllocation"),
];

pub const LAYER_PROPERTIES: &[Field] = &[
    Field::string("layerName"),
    Field::int("specVersion"),
    Field::int("implementationVersion"),
    Field::string("description"),
];

pub const EXTENSION_PROPERTIES: &[Field] = &[
    Field::string("extensionName"),
    Field::int("specVersion"),
];

pub const MEMORY_TYPE: &[Field] = &[
    Field::int("propertyFlags"),
    Field::int("heapIndex"),
];

pub const MEMORY_HEAP: &[Field] = &[
    Field::hex("size"),
    Field::int("flags"),
];

pub const QUEUE_FAMILY: &[Field] = &[
    Field::int("queueFlags"),
    Field::int("queueCount"),
    Field::int("timestampValidBits"),
];

/// `VkExtent3D`
pub const EXTENT_3D: &[Field] = &[
    Field::int("width"),
    Field::int("height"),
    Field::int("depth"),
];

pub const FORMAT_PROPERTIES: &[Field] = &[
    Field::int("linearTilingFeatures"),
    Field::int("optimalTilingFeatures"),
    Field::int("bufferFeatures"),
];

pub const EXTERNAL_FENCE_PROPERTIES: &[Field] = &[
    Field::int("exportFromImportedHandleTypes"),
    Field::int("compatibleHandleTypes"),
    Field::int("externalFenceFeatures"),
];

pub const EXTERNAL_SEMAPHORE_PROPERTIES: &[Field] = &[
    Field::int("exportFromImportedHandleTypes"),
    Field::int("compatibleHandleTypes"),
    Field::int("externalSemaphoreFeatures"),
];

/// Vulkan 1.1 structures written as plain groups, keyed by their VkJSON name
pub const CORE_1_1_GROUPS: &[(&str, &[Field])] = &[
    (
        "subgroupProperties",
        &[
            Field::int("subgroupSize"),
            Field::int("supportedStages"),
            Field::int("supportedOperations"),
            Field::bool("quadOperationsInAllStages"),
        ],
    ),
    ("pointClippingProperties", &[Field::int("pointClippingBehavior")]),
    (
        "multiviewProperties",
        &[
            Field::int("maxMultiviewViewCount"),
            Field::int("maxMultiviewInstanceIndex"),
        ],
    ),
    (
        "idProperties",
        &[
            Field::int_array("deviceUUID"),
            Field::int_array("driverUUID"),
            Field::int_array("deviceLUID"),
            Field::int("deviceNodeMask"),
            Field::bool("deviceLUIDValid"),
        ],
    ),
    (
        "maintenance3Properties",
        &[
            Field::int("maxPerSetDescriptors"),
            Field::hex("maxMemoryAllocationSize"),
        ],
    ),
    (
        "16bitStorageFeatures",
        &[
            Field::bool("storageBuffer16BitAccess"),
            Field::bool("uniformAndStorageBuffer16BitAccess"),
            Field::bool("storagePushConstant16"),
            Field::bool("storageInputOutput16"),
        ],
    ),
    (
        "multiviewFeatures",
        &[
            Field::bool("multiview"),
            Field::bool("multiviewGeometryShader"),
            Field::bool("multiviewTessellationShader"),
        ],
    ),
    (
        "variablePointerFeatures",
        &[
            Field::bool("variablePointersStorageBuffer"),
            Field::bool("variablePointers"),
        ],
    ),
    ("protectedMemoryFeatures", &[Field::bool("protectedMemory")]),
    ("samplerYcbcrConversionFeatures", &[Field::bool("samplerYcbcrConversion")]),
    ("shaderDrawParameterFeatures", &[Field::bool("shaderDrawParameters")]),
];
