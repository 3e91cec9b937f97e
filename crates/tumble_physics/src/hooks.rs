//! Contact modification hook applying the material-pair table

use crate::material::{ContactMaterialTable, MaterialId};
use rapier3d::prelude as rapier;

/// Collider user data carries the material as `id + 1`; zero means none.
pub(crate) fn encode_material(material: Option<MaterialId>) -> u128 {
    material.map_or(0, |m| m.0 as u128 + 1)
}

pub(crate) fn decode_material(user_data: u128) -> Option<MaterialId> {
    if user_data == 0 {
        None
    } else {
        Some(MaterialId((user_data - 1) as u32))
    }
}

pub(crate) struct ContactMaterialHooks<'a> {
    pub(crate) table: &'a ContactMaterialTable,
}

impl rapier::PhysicsHooks for ContactMaterialHooks<'_> {
    fn modify_solver_contacts(&self, context: &mut rapier::ContactModificationContext) {
        let a = context
            .colliders
            .get(context.collider1)
            .and_then(|c| decode_material(c.user_data));
        let b = context
            .colliders
            .get(context.collider2)
            .and_then(|c| decode_material(c.user_data));
        let props = self.table.resolve(a, b);

        for contact in context.solver_contacts.iter_mut() {
            contact.friction = props.friction;
            contact.restitution = props.restitution;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_user_data_encoding() {
        assert_eq!(decode_material(encode_material(None)), None);
        assert_eq!(
            decode_material(encode_material(Some(MaterialId(0)))),
            Some(MaterialId(0))
        );
        assert_eq!(
            decode_material(encode_material(Some(MaterialId(41)))),
            Some(MaterialId(41))
        );
    }
}
