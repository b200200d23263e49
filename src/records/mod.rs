//! Typed records for the OpenF1 timing API.
//!
//! Upstream responses are plain JSON arrays. Each element is deserialized
//! into one of the record types here at the retrieval boundary; everything
//! past that boundary (classification, aggregation, assembly) operates on
//! these typed records only, never on raw JSON maps.
//!
//! Field names match the upstream wire format, so the records round-trip
//! through serde without rename attributes. Structs carry `#[serde(default)]`
//! because the API omits fields it has no data for.

mod driver;
mod lap;
mod meeting;
mod results;
mod session;
mod stint;

pub use driver::Driver;
pub use lap::Lap;
pub use meeting::Meeting;
pub use results::SessionResult;
pub use session::Session;
pub use stint::Stint;
