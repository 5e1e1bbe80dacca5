//! Output side of the scene feed: turning simulation state into
//! newline-delimited JSON records and delivering them to a consumer.

pub mod emitter;
pub mod error;
pub mod sink;

pub use emitter::{encode_record, Emitter};
pub use error::{EmitError, Result};
pub use sink::{ChannelSink, RecordSink, WriterSink};
