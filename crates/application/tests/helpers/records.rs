use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, PTR};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use mesh64_domain::{Config, ProxyState};

pub fn a(name: &str, addr: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        300,
        RData::A(A(addr.parse().unwrap())),
    )
}

pub fn aaaa(name: &str, addr: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        300,
        RData::AAAA(AAAA(addr.parse().unwrap())),
    )
}

pub fn ptr(name: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(name).unwrap(),
        300,
        RData::PTR(PTR(Name::from_ascii(target).unwrap())),
    )
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

pub fn state_from_toml(toml: &str) -> ProxyState {
    let config = Config::from_toml_str(toml).unwrap();
    ProxyState::from_config(&config).unwrap()
}
