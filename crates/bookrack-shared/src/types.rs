//! Common types

use uuid::Uuid;

/// Identifier of one logical client connection. A session is bound to
/// exactly one of these, not to the user behind it.
pub type ConnectionId = Uuid;

pub fn new_connection_id() -> ConnectionId {
    Uuid::new_v4()
}
