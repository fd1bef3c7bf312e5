use hickory_proto::op::Message;
use mesh64_domain::DomainError;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes an upstream reply and checks it answers query `expected_id`.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }

        if message.truncated() {
            debug!(id = message.id(), "Upstream response truncated");
        }

        debug!(
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            "Upstream response parsed"
        );

        Ok(message)
    }
}
