use super::record_rewrite::{aaaa_record, rewrite_ptr_owner, RecordRewriter};
use crate::ports::{ResponseCachePort, UpstreamLookup};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, Record, RecordType};
use mesh64_domain::dns_name::normalize_fqdn;
use mesh64_domain::reverse::{extract_synthesized_ipv4, reverse_name_v4};
use mesh64_domain::{DomainError, ProxyState, Zone};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// TTL of answers built from static overrides.
const STATIC_TTL: u32 = 3600;

/// Upstream failure together with the SERVFAIL reply that still goes to the client.
#[derive(Debug, thiserror::Error)]
#[error("query failed: {source}")]
pub struct QueryFailure {
    pub response: Message,
    pub source: DomainError,
}

pub struct HandleDnsQueryUseCase {
    state: Arc<ProxyState>,
    cache: Arc<dyn ResponseCachePort>,
    upstream: Arc<dyn UpstreamLookup>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        state: Arc<ProxyState>,
        cache: Arc<dyn ResponseCachePort>,
        upstream: Arc<dyn UpstreamLookup>,
    ) -> Self {
        Self {
            state,
            cache,
            upstream,
        }
    }

    /// `Ok(None)` when the request carries no question.
    pub async fn execute(&self, request: &Message) -> Result<Option<Message>, QueryFailure> {
        let Some(question) = request.queries().first() else {
            debug!(id = request.id(), "Request without question, no reply");
            return Ok(None);
        };

        let name = question.name().to_ascii();
        let server = self.state.forwarders.resolve(&name);

        let Some(zone) = self.state.zones.resolve(&name) else {
            debug!(domain = %name, "No zone for domain, answering NXDOMAIN");
            let response = error_response(question, ResponseCode::NXDomain);
            return Ok(Some(finalize(request, response)));
        };

        debug!(
            domain = %name,
            record_type = %question.query_type(),
            zone = %zone.id,
            upstream = %server,
            "Handling query"
        );

        let outcome = match question.query_type() {
            RecordType::A => self.process_a(&server, zone, request, question).await,
            RecordType::AAAA => {
                self.process_aaaa(&server, zone, request, question, &name)
                    .await
            }
            RecordType::PTR => {
                self.process_ptr(&server, zone, request, question, &name)
                    .await
            }
            RecordType::ANY => self.process_any(&server, zone, request, question).await,
            _ => self.forward(&server, request, question).await,
        };

        match outcome {
            Ok(response) => Ok(Some(finalize(request, response))),
            Err(source) => {
                warn!(
                    domain = %name,
                    record_type = %question.query_type(),
                    upstream = %server,
                    error = %source,
                    "Upstream lookup failed, answering SERVFAIL"
                );
                let response = error_response(question, ResponseCode::ServFail);
                Err(QueryFailure {
                    response: finalize(request, response),
                    source,
                })
            }
        }
    }

    async fn forward(
        &self,
        server: &str,
        request: &Message,
        question: &Query,
    ) -> Result<Message, DomainError> {
        self.upstream
            .lookup(server, &upstream_request(request, question.clone()))
            .await
    }

    async fn process_a(
        &self,
        server: &str,
        zone: &Zone,
        request: &Message,
        question: &Query,
    ) -> Result<Message, DomainError> {
        let mut response = self.forward(server, request, question).await?;
        if !zone.return_public_ipv4 {
            let hidden = response.take_answers();
            debug!(zone = %zone.id, hidden = hidden.len(), "IPv4 answers hidden for zone");
        }
        Ok(response)
    }

    async fn process_aaaa(
        &self,
        server: &str,
        zone: &Zone,
        request: &Message,
        question: &Query,
        name: &str,
    ) -> Result<Message, DomainError> {
        let key = normalize_fqdn(name);

        if let Some(records) = self.cache.get(&key) {
            debug!(domain = %name, records = records.len(), "AAAA served from cache");
            return Ok(answer_response(question, records.to_vec()));
        }

        if let Some(ipv4) = self.state.static_hosts.lookup(name) {
            let answers: Vec<Record> = zone
                .prefix
                .map(|prefix| aaaa_record(question.name().clone(), STATIC_TTL, prefix.embed(ipv4)))
                .into_iter()
                .collect();
            debug!(domain = %name, %ipv4, records = answers.len(), "AAAA from static override");
            self.cache.set(&key, answers.clone(), Duration::ZERO);
            return Ok(answer_response(question, answers));
        }

        let rewriter = RecordRewriter::new(zone, self.state.invalid_address, &self.state.mesh);

        let mut response = self.forward(server, request, question).await?;
        let native = rewriter.mesh_addresses(response.take_answers());
        if !native.is_empty() {
            debug!(domain = %name, records = native.len(), "Native mesh AAAA passed through");
            self.cache.set(&key, native.clone(), Duration::ZERO);
            response.insert_answers(native);
            return Ok(response);
        }

        let mut a_question = question.clone();
        a_question.set_query_type(RecordType::A);
        let mut response = self
            .upstream
            .lookup(server, &upstream_request(request, a_question))
            .await?;

        let synthesized = rewriter.synthesize_from_a(question.name(), response.take_answers());
        debug!(domain = %name, records = synthesized.len(), "AAAA synthesized from A");
        if !synthesized.is_empty() {
            self.cache.set(&key, synthesized.clone(), Duration::ZERO);
        }

        replace_question(&mut response, question);
        response.insert_answers(synthesized);
        Ok(response)
    }

    async fn process_ptr(
        &self,
        server: &str,
        zone: &Zone,
        request: &Message,
        question: &Query,
        name: &str,
    ) -> Result<Message, DomainError> {
        let ipv4 = match zone
            .required_prefix()
            .and_then(|prefix| extract_synthesized_ipv4(name, &prefix))
        {
            Ok(ipv4) => ipv4,
            Err(e) => {
                debug!(domain = %name, zone = %zone.id, error = %e, "PTR not translatable");
                return Ok(error_response(question, ResponseCode::NXDomain));
            }
        };

        let reverse = Name::from_ascii(reverse_name_v4(ipv4))
            .map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;
        let mut ptr_question = question.clone();
        ptr_question.set_name(reverse);

        let mut response = self
            .upstream
            .lookup(server, &upstream_request(request, ptr_question))
            .await?;

        let answers = rewrite_ptr_owner(question.name(), response.take_answers());
        debug!(domain = %name, %ipv4, records = answers.len(), "PTR translated");

        replace_question(&mut response, question);
        response.insert_answers(answers);
        Ok(response)
    }

    async fn process_any(
        &self,
        server: &str,
        zone: &Zone,
        request: &Message,
        question: &Query,
    ) -> Result<Message, DomainError> {
        let mut response = self.forward(server, request, question).await?;
        let rewriter = RecordRewriter::new(zone, self.state.invalid_address, &self.state.mesh);

        let answers = rewriter.rewrite_section(response.take_answers());
        let additionals = rewriter.rewrite_section(response.take_additionals());
        response.insert_answers(answers);
        response.insert_additionals(additionals);
        Ok(response)
    }
}

/// Outgoing message to the upstream carrying one question.
fn upstream_request(request: &Message, question: Query) -> Message {
    let mut message = Message::new();
    message
        .set_id(request.id())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(request.recursion_desired())
        .add_query(question);
    message
}

fn answer_response(question: &Query, answers: Vec<Record>) -> Message {
    let mut message = Message::new();
    message.add_query(question.clone());
    message.insert_answers(answers);
    message
}

fn error_response(question: &Query, code: ResponseCode) -> Message {
    let mut message = Message::new();
    message.add_query(question.clone()).set_response_code(code);
    message
}

fn replace_question(response: &mut Message, question: &Query) {
    response.take_queries();
    response.add_query(question.clone());
}

/// Header fields every reply carries, whatever path produced it.
fn finalize(request: &Message, mut response: Message) -> Message {
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true);
    response
}
