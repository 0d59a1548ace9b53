//! Data model for extracted component documentation, independent of output format.

use serde::Serialize;

/// Documentation table a property is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    /// @CesiumProp / `*CesiumProps`
    CesiumProp,
    /// @CesiumReadonlyProp / `*CesiumReadonlyProps`
    CesiumReadonlyProp,
    /// @CesiumEvent / `*CesiumEvents`
    CesiumEvent,
    /// @prop / `*Props`
    Prop,
}

/// A single documented property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyRecord {
    pub name: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub ty: String,
    pub hidden: bool,
    pub description: String,
}

/// Complete extracted documentation for one component source file.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRecord {
    pub name: String,
    pub cesium_props: Vec<PropertyRecord>,
    pub cesium_readonly_props: Vec<PropertyRecord>,
    pub cesium_events: Vec<PropertyRecord>,
    pub props: Vec<PropertyRecord>,
    /// @summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// @scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// @example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// @example-imports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_imports: Option<String>,
}

impl DeclarationRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn bucket(&self, bucket: Bucket) -> &[PropertyRecord] {
        match bucket {
            Bucket::CesiumProp => &self.cesium_props,
            Bucket::CesiumReadonlyProp => &self.cesium_readonly_props,
            Bucket::CesiumEvent => &self.cesium_events,
            Bucket::Prop => &self.props,
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<PropertyRecord> {
        match bucket {
            Bucket::CesiumProp => &mut self.cesium_props,
            Bucket::CesiumReadonlyProp => &mut self.cesium_readonly_props,
            Bucket::CesiumEvent => &mut self.cesium_events,
            Bucket::Prop => &mut self.props,
        }
    }

    /// Total number of properties across all buckets.
    pub fn property_count(&self) -> usize {
        self.cesium_props.len()
            + self.cesium_readonly_props.len()
            + self.cesium_events.len()
            + self.props.len()
    }
}

/// Ordered `(native event name, prop name)` pairs read from `cesiumEventProps`.
pub type EventNameMapping = Vec<(String, String)>;
