//! Domain types for the protocol subsystem.
//!
//! Pure value types with no infrastructure dependencies: identifier
//! newtypes, field codecs, descriptors, generated definitions, and message
//! instances. Generated definitions are immutable after construction.

mod codec;
mod descriptor;
mod envelope;
mod generated;
mod ids;
mod model;

pub use codec::FieldCodec;
pub use descriptor::{FieldSource, MessageDescriptor};
pub use envelope::{MessageEnvelope, ThreadInfo};
pub use generated::{FieldDef, GeneratedMessageType, ModelTypeDef, SchemaTypeDef};
pub use ids::{HandlerLocator, MessageId, MessageTypeUri};
pub use model::{MessageModel, MessageModelBuilder};

pub(crate) use model::{ID_KEY, THREAD_KEY, TYPE_KEY, thread_to_wire};
