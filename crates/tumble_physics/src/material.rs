//! Surface materials and the contact properties of material pairs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference to a surface material registered with the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// Friction and restitution used when two surfaces touch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactProperties {
    /// Friction coefficient (0 = frictionless)
    pub friction: f32,
    /// Restitution/bounciness (0 = no bounce, 1 = perfect bounce)
    pub restitution: f32,
}

impl Default for ContactProperties {
    fn default() -> Self {
        Self {
            friction: 0.1,
            restitution: 0.7,
        }
    }
}

impl ContactProperties {
    /// Create new contact properties
    pub fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction,
            restitution,
        }
    }
}

/// Named surface material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceMaterial {
    pub id: MaterialId,
    pub name: String,
}

/// Contact properties indexed by material pair, with a default for
/// unknown pairs and bodies without a material.
#[derive(Debug, Clone, Default)]
pub struct ContactMaterialTable {
    materials: Vec<SurfaceMaterial>,
    pairs: HashMap<(MaterialId, MaterialId), ContactProperties>,
    default: ContactProperties,
}

impl ContactMaterialTable {
    /// Create a table whose fallback is `default`
    pub fn new(default: ContactProperties) -> Self {
        Self {
            materials: Vec::new(),
            pairs: HashMap::new(),
            default,
        }
    }

    /// Register a named material
    pub fn register(&mut self, name: impl Into<String>) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(SurfaceMaterial {
            id,
            name: name.into(),
        });
        id
    }

    /// Look up a material by name
    pub fn find(&self, name: &str) -> Option<MaterialId> {
        self.materials.iter().find(|m| m.name == name).map(|m| m.id)
    }

    /// Set the contact properties for a pair (order-independent)
    pub fn insert_pair(&mut self, a: MaterialId, b: MaterialId, props: ContactProperties) {
        self.pairs.insert(pair_key(a, b), props);
    }

    /// Replace the fallback properties
    pub fn set_default(&mut self, props: ContactProperties) {
        self.default = props;
    }

    /// Resolve the properties for two (optional) materials
    pub fn resolve(&self, a: Option<MaterialId>, b: Option<MaterialId>) -> ContactProperties {
        match (a, b) {
            (Some(a), Some(b)) => self
                .pairs
                .get(&pair_key(a, b))
                .copied()
                .unwrap_or(self.default),
            _ => self.default,
        }
    }
}

fn pair_key(a: MaterialId, b: MaterialId) -> (MaterialId, MaterialId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_lookup_is_order_independent() {
        let mut table = ContactMaterialTable::new(ContactProperties::default());
        let ice = table.register("ice");
        let rubber = table.register("rubber");
        table.insert_pair(rubber, ice, ContactProperties::new(0.02, 0.3));

        assert_eq!(table.resolve(Some(ice), Some(rubber)).friction, 0.02);
        assert_eq!(table.resolve(Some(rubber), Some(ice)).restitution, 0.3);
    }

    #[test]
    fn test_missing_pair_uses_default() {
        let mut table = ContactMaterialTable::new(ContactProperties::new(0.1, 0.7));
        let default = table.register("default");

        assert_eq!(table.resolve(Some(default), Some(default)), ContactProperties::new(0.1, 0.7));
        assert_eq!(table.resolve(None, Some(default)), ContactProperties::new(0.1, 0.7));
        assert_eq!(table.find("default"), Some(default));
        assert_eq!(table.find("missing"), None);
    }
}
