/// JSON payload builders shaped like real API responses.
pub mod fixtures;
/// Wire-format roundtrip assertions.
pub mod roundtrip;
