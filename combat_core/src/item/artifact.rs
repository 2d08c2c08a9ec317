//! ArtifactItem - an artifact worn directly or imbued into an item

use super::{ArtifactAttribute, ArtifactAttributeType, ArtifactRecord, Imbue};
use crate::modifier::{ArtifactModifier, ModifierSource};
use crate::unit::Unit;

#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactItem {
    pub name: String,
    pub level: u32,
    attributes: Vec<ArtifactAttribute>,
}

impl ArtifactItem {
    pub fn new(record: &ArtifactRecord) -> Self {
        ArtifactItem {
            name: record.name.clone(),
            level: record.level,
            attributes: record.attributes.clone(),
        }
    }

    /// Artifact restricted to the imbue's enabled affixes
    pub fn imbued(imbue: &Imbue) -> Self {
        let mut item = Self::new(&imbue.artifact);
        if !imbue.affixes.is_empty() {
            item.attributes
                .retain(|attribute| imbue.affixes.contains(&attribute.attribute_type));
        }
        item
    }

    pub fn attributes(&self) -> &[ArtifactAttribute] {
        &self.attributes
    }

    pub fn has_affix(&self, attribute_type: ArtifactAttributeType) -> bool {
        self.attributes
            .iter()
            .any(|attribute| attribute.attribute_type == attribute_type)
    }

    /// Register the artifact's affixes on `unit`
    pub fn equip(self, unit: &mut Unit, source: ModifierSource) {
        if self.attributes.is_empty() {
            return;
        }
        unit.apply_modifier(Box::new(ArtifactModifier::new(self.attributes)), source, None);
    }
}
