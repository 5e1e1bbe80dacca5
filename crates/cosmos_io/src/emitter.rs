use crate::error::Result;
use crate::sink::RecordSink;
use cosmos_core::{OrbitSet, StarField};
use cosmos_data::SceneRecord;

/// Builds the JSON line for one snapshot.
pub fn encode_record(stars: &StarField, orbits: &OrbitSet, timestamp: i64) -> Result<String> {
    let record = SceneRecord {
        stars: stars.stars(),
        orbits: orbits.orbits(),
        timestamp,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Serializes scene snapshots and pushes them into a [`RecordSink`].
pub struct Emitter<K> {
    sink: K,
    emitted: u64,
}

impl<K: RecordSink + Send> Emitter<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, emitted: 0 }
    }

    /// Writes one self-contained record. Only reads the simulation state.
    pub async fn emit(
        &mut self,
        stars: &StarField,
        orbits: &OrbitSet,
        timestamp: i64,
    ) -> Result<()> {
        let line = encode_record(stars, orbits, timestamp)?;
        tracing::trace!(bytes = line.len(), timestamp, "Emitting scene record");
        self.sink.send(line).await?;
        self.emitted += 1;
        Ok(())
    }

    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }
}
