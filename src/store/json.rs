use crate::error::StoreError;
use crate::store::DeviceInfoStore;
use crate::types::{ArrayValue, ResultValue};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::Write;

/// What a group does when a key is written into it a second time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The later value replaces the earlier one in place, as a reader of a
    /// JSON stream with repeated keys would see it.
    #[default]
    KeepLast,
    /// Fail with `StoreError::DuplicateKey`.
    Reject,
}

enum Frame {
    /// Root group or an anonymous group inside an array
    Group {
        name: Option<String>,
        fields: Map<String, Value>,
    },
    Array {
        name: String,
        items: Vec<Value>,
    },
}

/// A store that builds a JSON tree, enforcing the group grammar as it goes.
///
/// Groups become objects, arrays become arrays of objects, and keys keep
/// their insertion order.
pub struct JsonStore {
    stack: Vec<Frame>,
    duplicates: DuplicateKeys,
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonStore {
    pub fn new() -> Self {
        Self::with_duplicate_keys(DuplicateKeys::default())
    }

    /// A store that rejects any key written twice into the same group
    pub fn strict() -> Self {
        Self::with_duplicate_keys(DuplicateKeys::Reject)
    }

    pub fn with_duplicate_keys(duplicates: DuplicateKeys) -> Self {
        JsonStore {
            stack: vec![Frame::Group {
                name: None,
                fields: Map::new(),
            }],
            duplicates,
        }
    }

    pub fn duplicate_keys(&self) -> DuplicateKeys {
        self.duplicates
    }

    /// Number of scopes currently open below the root
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Finish the store and return the root object.
    pub fn into_value(mut self) -> std::result::Result<Value, StoreError> {
        if self.stack.len() != 1 {
            return Err(StoreError::Unclosed(self.depth()));
        }
        match self.stack.pop() {
            Some(Frame::Group { fields, .. }) => Ok(Value::Object(fields)),
            _ => Err(StoreError::Unclosed(0)),
        }
    }

    /// Finish the store and write it to `writer`, pretty-printed unless `compact`.
    pub fn write_to<W: Write>(self, mut writer: W, compact: bool) -> Result<()> {
        let value = self.into_value().context("Store left open scopes")?;
        let written = if compact {
            serde_json::to_writer(&mut writer, &value)
        } else {
            serde_json::to_writer_pretty(&mut writer, &value)
        };
        written.context("Failed to serialize store")?;
        writeln!(writer).context("Failed to write store")?;
        writer.flush().context("Failed to flush writer")
    }

    /// The fields of the innermost group, if the innermost scope is a group
    fn current_group(&mut self, name: &str) -> std::result::Result<&mut Map<String, Value>, StoreError> {
        let reject = self.duplicates == DuplicateKeys::Reject;
        match self.stack.last_mut() {
            Some(Frame::Group { fields, .. }) => {
                if reject && fields.contains_key(name) {
                    return Err(StoreError::DuplicateKey(name.to_string()));
                }
                Ok(fields)
            }
            _ => Err(StoreError::NamedInsideArray(name.to_string())),
        }
    }

    fn insert(&mut self, name: &str, value: Value) -> std::result::Result<(), StoreError> {
        self.current_group(name)?.insert(name.to_string(), value);
        Ok(())
    }

    /// Attach a finished scope to whatever is now on top of the stack
    fn attach(&mut self, name: Option<String>, value: Value) -> std::result::Result<(), StoreError> {
        match (self.stack.last_mut(), name) {
            (Some(Frame::Array { items, .. }), None) => {
                items.push(value);
                Ok(())
            }
            (Some(Frame::Group { fields, .. }), Some(name)) => {
                fields.insert(name, value);
                Ok(())
            }
            (Some(Frame::Array { .. }), Some(name)) => Err(StoreError::NamedInsideArray(name)),
            (_, None) => Err(StoreError::AnonymousOutsideArray),
            (None, Some(_)) => Err(StoreError::Unbalanced {
                call: "end",
                expected: "scope",
            }),
        }
    }
}

impl DeviceInfoStore for JsonStore {
    fn start_group(&mut self) -> std::result::Result<(), StoreError> {
        match self.stack.last() {
            Some(Frame::Array { .. }) => {
                self.stack.push(Frame::Group {
                    name: None,
                    fields: Map::new(),
                });
                Ok(())
            }
            _ => Err(StoreError::AnonymousOutsideArray),
        }
    }

    fn start_group_named(&mut self, name: &str) -> std::result::Result<(), StoreError> {
        self.current_group(name)?;
        self.stack.push(Frame::Group {
            name: Some(name.to_string()),
            fields: Map::new(),
        });
        Ok(())
    }

    fn end_group(&mut self) -> std::result::Result<(), StoreError> {
        if self.stack.len() < 2 || !matches!(self.stack.last(), Some(Frame::Group { .. })) {
            return Err(StoreError::Unbalanced {
                call: "end_group",
                expected: "group",
            });
        }
        match self.stack.pop() {
            Some(Frame::Group { name, fields }) => self.attach(name, Value::Object(fields)),
            _ => Err(StoreError::Unbalanced {
                call: "end_group",
                expected: "group",
            }),
        }
    }

    fn start_array(&mut self, name: &str) -> std::result::Result<(), StoreError> {
        self.current_group(name)?;
        self.stack.push(Frame::Array {
            name: name.to_string(),
            items: Vec::new(),
        });
        Ok(())
    }

    fn end_array(&mut self) -> std::result::Result<(), StoreError> {
        if !matches!(self.stack.last(), Some(Frame::Array { .. })) {
            return Err(StoreError::Unbalanced {
                call: "end_array",
                expected: "array",
            });
        }
        match self.stack.pop() {
            Some(Frame::Array { name, items }) => self.attach(Some(name), Value::Array(items)),
            _ => Err(StoreError::Unbalanced {
                call: "end_array",
                expected: "array",
            }),
        }
    }

    fn add_result(&mut self, name: &str, value: ResultValue) -> std::result::Result<(), StoreError> {
        let value = match value {
            ResultValue::Int(v) => Value::from(v),
            ResultValue::Double(v) => Value::from(v),
            ResultValue::Bool(v) => Value::Bool(v),
            ResultValue::Str(v) => Value::String(v),
        };
        self.insert(name, value)
    }

    fn add_array_result(&mut self, name: &str, value: ArrayValue) -> std::result::Result<(), StoreError> {
        let value = match value {
            ArrayValue::Ints(v) => Value::from(v),
            ArrayValue::Doubles(v) => Value::from(v),
        };
        self.insert(name, value)
    }
}
