//! Snapshot intake: validates ingestion records into an immutable entity set.

use std::collections::HashMap;

use tracing::{info, warn};

use super::entity::{Entity, RawEntity};
use crate::errors::SnapshotError;

/// A record that was left out of the snapshot, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedRecord {
    /// Zero-based position in the delivered document.
    pub position: usize,
    /// Identity, when the record carried one.
    pub identity: Option<String>,
    pub reason: SnapshotError,
}

/// An immutable, validated set of entities for one render/query cycle.
///
/// Entities keep their delivery order. Malformed records are excluded
/// rather than failing the whole snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entities: Vec<Entity>,
    excluded: Vec<ExcludedRecord>,
}

impl Snapshot {
    /// Validate ingestion records.
    ///
    /// A record is excluded when a required field is missing, a numeric
    /// field is non-finite, its identity is empty, or its identity repeats
    /// one already admitted (first occurrence wins).
    pub fn from_records(records: Vec<RawEntity>) -> Self {
        let mut intake = Intake::with_capacity(records.len());
        for (position, raw) in records.into_iter().enumerate() {
            let identity = raw.identity.clone();
            intake.admit(position, identity, raw.into_entity(position));
        }
        intake.finish()
    }

    /// Build a snapshot from already-typed entities, applying the same
    /// finiteness and uniqueness checks as [`Snapshot::from_records`].
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self::from_records(entities.into_iter().map(RawEntity::from).collect())
    }

    /// Parse a JSON array of records.
    ///
    /// Only a document that is not a JSON array is an error. Array elements
    /// that do not decode as a record are excluded like any other bad record.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| SnapshotError::DocumentParse {
                message: e.to_string(),
            })?;

        let mut intake = Intake::with_capacity(values.len());
        for (position, value) in values.into_iter().enumerate() {
            let identity = value
                .get("identity")
                .and_then(|v| v.as_str())
                .map(String::from);
            let entity = serde_json::from_value::<RawEntity>(value)
                .map_err(|e| SnapshotError::MalformedRecord {
                    position,
                    message: e.to_string(),
                })
                .and_then(|raw| raw.into_entity(position));
            intake.admit(position, identity, entity);
        }
        Ok(intake.finish())
    }

    /// Admitted entities in snapshot order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Records left out during intake.
    pub fn excluded(&self) -> &[ExcludedRecord] {
        &self.excluded
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an admitted entity by identity.
    pub fn get(&self, identity: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.identity == identity)
    }
}

/// Accumulates admitted and excluded records during intake.
struct Intake {
    entities: Vec<Entity>,
    excluded: Vec<ExcludedRecord>,
    seen: HashMap<String, usize>,
}

impl Intake {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            excluded: Vec::new(),
            seen: HashMap::with_capacity(capacity),
        }
    }

    fn admit(
        &mut self,
        position: usize,
        identity: Option<String>,
        entity: Result<Entity, SnapshotError>,
    ) {
        let result = entity.and_then(|e| match self.seen.get(&e.identity) {
            Some(&first_position) => Err(SnapshotError::DuplicateIdentity {
                position,
                identity: e.identity.clone(),
                first_position,
            }),
            None => Ok(e),
        });

        match result {
            Ok(e) => {
                self.seen.insert(e.identity.clone(), position);
                self.entities.push(e);
            }
            Err(reason) => {
                warn!(position, identity = ?identity, %reason, "excluding snapshot record");
                self.excluded.push(ExcludedRecord {
                    position,
                    identity,
                    reason,
                });
            }
        }
    }

    fn finish(self) -> Snapshot {
        info!(
            admitted = self.entities.len(),
            excluded = self.excluded.len(),
            "snapshot intake complete"
        );
        Snapshot {
            entities: self.entities,
            excluded: self.excluded,
        }
    }
}
