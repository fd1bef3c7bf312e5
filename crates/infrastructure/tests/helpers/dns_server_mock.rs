#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, PTR};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock does with a question.
#[derive(Clone)]
pub enum MockAnswer {
    Records(Vec<Record>),
    Code(ResponseCode),
    /// Reply with an id that does not match the query.
    WrongId,
    /// Send the query back unchanged.
    Echo,
    /// Never reply.
    Silent,
}

/// UDP DNS server answering from a fixed table. Unknown questions get NXDOMAIN.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(
        answers: HashMap<(String, RecordType), MockAnswer>,
    ) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&answers, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_mock_response(
        answers: &HashMap<(String, RecordType), MockAnswer>,
        query: &[u8],
    ) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();
        let key = (question.name().to_ascii().to_ascii_lowercase(), question.query_type());

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .add_query(question);

        match answers.get(&key) {
            Some(MockAnswer::Records(records)) => {
                response.insert_answers(records.clone());
            }
            Some(MockAnswer::Code(code)) => {
                response.set_response_code(*code);
            }
            Some(MockAnswer::WrongId) => {
                response.set_id(request.id().wrapping_add(1));
            }
            Some(MockAnswer::Echo) => return Some(query.to_vec()),
            Some(MockAnswer::Silent) => return None,
            None => {
                response.set_response_code(ResponseCode::NXDomain);
            }
        }

        response.to_vec().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn a_record(name: &str, addr: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        300,
        RData::A(A(addr.parse().unwrap())),
    )
}

pub fn aaaa_record(name: &str, addr: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        300,
        RData::AAAA(AAAA(addr.parse().unwrap())),
    )
}

pub fn ptr_record(name: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        300,
        RData::PTR(PTR(Name::from_ascii(target).unwrap())),
    )
}
