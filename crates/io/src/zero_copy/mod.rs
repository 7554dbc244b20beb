//! Buffer-backed codec: encode into a growable sink, decode views out of a
//! borrowed slice.
//!
//! Reads never fail. Each `next_*` call returns a value (zero / empty on
//! failure) together with flags:
//!
//! * `eof` - the buffer ran out before the field was complete;
//! * `irregular` - a var-int or length prefix was structurally invalid.
//!
//! Callers fold the flags into a [`Decoded`](crate::Decoded) once the record
//! is read.

mod sink;
mod source;

pub use sink::ZeroCopySink;
pub use source::ZeroCopySource;
