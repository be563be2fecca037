use serde::{Deserialize, Serialize};

/// Value tag naming the handler shape subscribers of an event kind must
/// implement. Compared and hashed by value; construction is total.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityTag(String);

impl CapabilityTag {
    pub fn new(id: impl Into<String>) -> Self {
        CapabilityTag(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Typed, comparable identifier for a category of push event.
///
/// Routing is keyed by the whole token rather than the display name alone,
/// so two categories that happen to share a name but require different
/// handler shapes never cross-wire. Built once per category and shared
/// read-only from then on; subscriptions hold clones of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventKind {
    name: String,
    capability: CapabilityTag,
}

impl EventKind {
    pub fn new(name: impl Into<String>, capability: CapabilityTag) -> Self {
        EventKind {
            name: name.into(),
            capability,
        }
    }

    /// Human-readable category name, used for storage keys and diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capability(&self) -> &CapabilityTag {
        &self.capability
    }
}
