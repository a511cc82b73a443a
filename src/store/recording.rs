use crate::error::StoreError;
use crate::store::DeviceInfoStore;
use crate::types::{ArrayValue, ResultValue};
use std::fmt;

/// One call made against a store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    StartGroup(Option<String>),
    EndGroup,
    StartArray(String),
    EndArray,
    Result(String, ResultValue),
    ArrayResult(String, ArrayValue),
}

impl StoreEvent {
    pub fn is_start(&self) -> bool {
        matches!(self, StoreEvent::StartGroup(_) | StoreEvent::StartArray(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, StoreEvent::EndGroup | StoreEvent::EndArray)
    }
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::StartGroup(None) => write!(f, "start_group()"),
            StoreEvent::StartGroup(Some(name)) => write!(f, "start_group({})", name),
            StoreEvent::EndGroup => write!(f, "end_group()"),
            StoreEvent::StartArray(name) => write!(f, "start_array({})", name),
            StoreEvent::EndArray => write!(f, "end_array()"),
            StoreEvent::Result(name, value) => write!(f, "add_result({}, {:?})", name, value),
            StoreEvent::ArrayResult(name, value) => {
                write!(f, "add_array_result({}, {:?})", name, value)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Group,
    Array,
}

/// A store that only records the calls made against it.
///
/// Scope kinds are tracked so a mismatched or underflowing end call is
/// rejected at the point it happens.
#[derive(Debug, Default)]
pub struct RecordingStore {
    events: Vec<StoreEvent>,
    open: Vec<Scope>,
    max_depth: usize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[StoreEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<StoreEvent> {
        self.events
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// True when every start has been matched by an end
    pub fn is_balanced(&self) -> bool {
        self.open.is_empty()
    }

    pub fn start_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_start()).count()
    }

    pub fn end_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_end()).count()
    }

    fn open(&mut self, scope: Scope, event: StoreEvent) {
        self.open.push(scope);
        self.max_depth = self.max_depth.max(self.open.len());
        self.events.push(event);
    }

    fn close(&mut self, scope: Scope, event: StoreEvent) -> Result<(), StoreError> {
        if self.open.last() != Some(&scope) {
            let (call, expected) = match scope {
                Scope::Group => ("end_group", "group"),
                Scope::Array => ("end_array", "array"),
            };
            return Err(StoreError::Unbalanced { call, expected });
        }
        self.open.pop();
        self.events.push(event);
        Ok(())
    }
}

impl DeviceInfoStore for RecordingStore {
    fn start_group(&mut self) -> Result<(), StoreError> {
        self.open(Scope::Group, StoreEvent::StartGroup(None));
        Ok(())
    }

    fn start_group_named(&mut self, name: &str) -> Result<(), StoreError> {
        self.open(Scope::Group, StoreEvent::StartGroup(Some(name.to_string())));
        Ok(())
    }

    fn end_group(&mut self) -> Result<(), StoreError> {
        self.close(Scope::Group, StoreEvent::EndGroup)
    }

    fn start_array(&mut self, name: &str) -> Result<(), StoreError> {
        self.open(Scope::Array, StoreEvent::StartArray(name.to_string()));
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), StoreError> {
        self.close(Scope::Array, StoreEvent::EndArray)
    }

    fn add_result(&mut self, name: &str, value: ResultValue) -> Result<(), StoreError> {
        self.events.push(StoreEvent::Result(name.to_string(), value));
        Ok(())
    }

    fn add_array_result(&mut self, name: &str, value: ArrayValue) -> Result<(), StoreError> {
        self.events.push(StoreEvent::ArrayResult(name.to_string(), value));
        Ok(())
    }
}

/// Forwards every call to two stores, first `0` then `1`.
pub struct Tee<A, B>(pub A, pub B);

impl<A: DeviceInfoStore, B: DeviceInfoStore> DeviceInfoStore for Tee<A, B> {
    fn start_group(&mut self) -> Result<(), StoreError> {
        self.0.start_group()?;
        self.1.start_group()
    }

    fn start_group_named(&mut self, name: &str) -> Result<(), StoreError> {
        self.0.start_group_named(name)?;
        self.1.start_group_named(name)
    }

    fn end_group(&mut self) -> Result<(), StoreError> {
        self.0.end_group()?;
        self.1.end_group()
    }

    fn start_array(&mut self, name: &str) -> Result<(), StoreError> {
        self.0.start_array(name)?;
        self.1.start_array(name)
    }

    fn end_array(&mut self) -> Result<(), StoreError> {
        self.0.end_array()?;
        self.1.end_array()
    }

    fn add_result(&mut self, name: &str, value: ResultValue) -> Result<(), StoreError> {
        self.0.add_result(name, value.clone())?;
        self.1.add_result(name, value)
    }

    fn add_array_result(&mut self, name: &str, value: ArrayValue) -> Result<(), StoreError> {
        self.0.add_array_result(name, value.clone())?;
        self.1.add_array_result(name, value)
    }
}
