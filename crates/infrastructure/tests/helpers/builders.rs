#![allow(dead_code)]
use super::dns_server_mock::MockAnswer;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, Record, RecordType};
use std::collections::HashMap;

/// Scripted answers for [`super::MockDnsServer`].
#[derive(Default)]
pub struct MockAnswersBuilder {
    answers: HashMap<(String, RecordType), MockAnswer>,
}

impl MockAnswersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(mut self, name: &str, record_type: RecordType, records: Vec<Record>) -> Self {
        self.answers.insert(
            (name.to_ascii_lowercase(), record_type),
            MockAnswer::Records(records),
        );
        self
    }

    pub fn answer(mut self, name: &str, record_type: RecordType, answer: MockAnswer) -> Self {
        self.answers
            .insert((name.to_ascii_lowercase(), record_type), answer);
        self
    }

    pub fn build(self) -> HashMap<(String, RecordType), MockAnswer> {
        self.answers
    }
}

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message
}
