use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Record, RecordType};
use mesh64_application::ports::{ResponseCachePort, UpstreamLookup};
use mesh64_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

#[derive(Clone)]
enum Scripted {
    Answer {
        answers: Vec<Record>,
        additionals: Vec<Record>,
        code: ResponseCode,
    },
    Fail(DomainError),
}

/// Upstream stub answering from a table keyed by (name, type).
/// Unknown questions get an empty NOERROR reply.
pub struct MockUpstream {
    script: RwLock<HashMap<(String, RecordType), Scripted>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, Message)>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self {
            script: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn answer(&self, name: &str, record_type: RecordType, answers: Vec<Record>) -> &Self {
        self.answer_with_additionals(name, record_type, answers, vec![])
    }

    pub fn answer_with_additionals(
        &self,
        name: &str,
        record_type: RecordType,
        answers: Vec<Record>,
        additionals: Vec<Record>,
    ) -> &Self {
        self.script.write().unwrap().insert(
            (name.to_ascii_lowercase(), record_type),
            Scripted::Answer {
                answers,
                additionals,
                code: ResponseCode::NoError,
            },
        );
        self
    }

    pub fn fail(&self, name: &str, record_type: RecordType, error: DomainError) -> &Self {
        self.script
            .write()
            .unwrap()
            .insert((name.to_ascii_lowercase(), record_type), Scripted::Fail(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// (server, question name, question type) of every lookup, in order.
    pub fn questions(&self) -> Vec<(String, String, RecordType)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(server, message)| {
                let query = &message.queries()[0];
                (server.clone(), query.name().to_ascii(), query.query_type())
            })
            .collect()
    }
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamLookup for MockUpstream {
    async fn lookup(&self, server: &str, request: &Message) -> Result<Message, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((server.to_string(), request.clone()));

        let query = request.queries()[0].clone();
        let key = (query.name().to_ascii().to_ascii_lowercase(), query.query_type());
        let scripted = self.script.read().unwrap().get(&key).cloned();

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .add_query(query);

        match scripted {
            Some(Scripted::Fail(error)) => Err(error),
            Some(Scripted::Answer {
                answers,
                additionals,
                code,
            }) => {
                response.set_response_code(code);
                response.insert_answers(answers);
                response.insert_additionals(additionals);
                Ok(response)
            }
            None => Ok(response),
        }
    }
}

/// In-memory cache that records every write.
pub struct MockResponseCache {
    entries: RwLock<HashMap<String, Arc<[Record]>>>,
    writes: Mutex<Vec<(String, usize, Duration)>>,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// (key, record count, ttl) per `set` call.
    pub fn writes(&self) -> Vec<(String, usize, Duration)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().unwrap().contains_key(name)
    }
}

impl Default for MockResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCachePort for MockResponseCache {
    fn get(&self, name: &str) -> Option<Arc<[Record]>> {
        self.entries.read().unwrap().get(name).cloned()
    }

    fn set(&self, name: &str, records: Vec<Record>, ttl: Duration) {
        self.writes
            .lock()
            .unwrap()
            .push((name.to_string(), records.len(), ttl));
        self.entries
            .write()
            .unwrap()
            .insert(name.to_string(), Arc::from(records));
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}
