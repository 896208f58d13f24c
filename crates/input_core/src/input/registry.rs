// crates/input_core/src/input/registry.rs
use std::collections::HashMap;

use input_shared::ActionId;

use crate::error::{InputError, Result};

/// Maps binding names to dense ids handed out in registration order.
#[derive(Debug, Default, Clone)]
pub struct ActionRegistry {
    name_to_id: HashMap<String, ActionId>,
    names: Vec<String>,
}

impl ActionRegistry {
    pub fn register(&mut self, name: &str) -> Result<ActionId> {
        if self.name_to_id.contains_key(name) {
            return Err(InputError::DuplicateBinding { name: name.to_string() });
        }
        let id = self.names.len() as ActionId;
        self.name_to_id.insert(name.to_string(), id);
        self.names.push(name.to_string());
        Ok(id)
    }

    pub fn get_id(&self, name: &str) -> Option<ActionId> {
        self.name_to_id.get(name).copied()
    }

    pub fn name(&self, id: ActionId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
