//! Device-info store sinks
//!
//! A store is a nested group/array/key-value sink with a deliberately
//! narrow write API. Groups and arrays are closed in LIFO order, arrays
//! only hold anonymous groups, and arrays of scalars are written whole
//! with `add_array_result`.

pub mod json;
pub mod recording;

pub use json::{DuplicateKeys, JsonStore};
pub use recording::{RecordingStore, StoreEvent, Tee};

use crate::error::StoreError;
use crate::types::{ArrayValue, ResultValue};

/// The write API a translation drives.
pub trait DeviceInfoStore {
    /// Open an anonymous group; only valid directly inside an array.
    fn start_group(&mut self) -> Result<(), StoreError>;

    /// Open a named group inside the current group.
    fn start_group_named(&mut self, name: &str) -> Result<(), StoreError>;

    fn end_group(&mut self) -> Result<(), StoreError>;

    /// Open a named array of groups inside the current group.
    fn start_array(&mut self, name: &str) -> Result<(), StoreError>;

    fn end_array(&mut self) -> Result<(), StoreError>;

    fn add_result(&mut self, name: &str, value: ResultValue) -> Result<(), StoreError>;

    fn add_array_result(&mut self, name: &str, value: ArrayValue) -> Result<(), StoreError>;
}

impl<S: DeviceInfoStore + ?Sized> DeviceInfoStore for &mut S {
    fn start_group(&mut self) -> Result<(), StoreError> {
        (**self).start_group()
    }

    fn start_group_named(&mut self, name: &str) -> Result<(), StoreError> {
        (**self).start_group_named(name)
    }

    fn end_group(&mut self) -> Result<(), StoreError> {
        (**self).end_group()
    }

    fn start_array(&mut self, name: &str) -> Result<(), StoreError> {
        (**self).start_array(name)
    }

    fn end_array(&mut self) -> Result<(), StoreError> {
        (**self).end_array()
    }

    fn add_result(&mut self, name: &str, value: ResultValue) -> Result<(), StoreError> {
        (**self).add_result(name, value)
    }

    fn add_array_result(&mut self, name: &str, value: ArrayValue) -> Result<(), StoreError> {
        (**self).add_array_result(name, value)
    }
}
