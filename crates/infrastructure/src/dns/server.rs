use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use mesh64_application::use_cases::HandleDnsQueryUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns raw client datagrams into pipeline calls and encodes the replies.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// `None` means nothing is sent back to the client.
    pub async fn handle_raw_udp(&self, query: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(query) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client, id = request.id(), "Ignoring non-query message");
            return None;
        }

        if request.op_code() != OpCode::Query {
            debug!(client = %client, op_code = ?request.op_code(), "Unsupported opcode");
            return encode(&error_response(&request, ResponseCode::NotImp));
        }

        let response = match self.use_case.execute(&request).await {
            Ok(Some(response)) => response,
            Ok(None) => return None,
            Err(failure) => {
                error!(client = %client, error = %failure.source, "Query resolution failed");
                failure.response
            }
        };

        encode(&response)
    }
}

fn error_response(request: &Message, code: ResponseCode) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true)
        .set_response_code(code);
    for query in request.queries() {
        response.add_query(query.clone());
    }
    response
}

fn encode(response: &Message) -> Option<Vec<u8>> {
    match response.to_vec() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(id = response.id(), error = %e, "Failed to encode response");
            None
        }
    }
}
