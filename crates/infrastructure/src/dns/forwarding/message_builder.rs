//! Wire encoding of upstream queries.

use hickory_proto::op::Message;
use mesh64_domain::DomainError;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Copies `request` under a fresh random id and serializes it.
    ///
    /// Returns the id so the reply can be matched.
    pub fn build_query_with_id(request: &Message) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let mut message = request.clone();
        message.set_id(id);
        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        message.to_vec().map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })
    }
}
