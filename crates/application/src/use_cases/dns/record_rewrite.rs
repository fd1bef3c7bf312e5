//! Per-record translation of upstream answers.
//!
//! Every upstream record is classified into a [`RecordKind`] and handed to the
//! rewrite function for that kind. The zone decides whether synthesis is
//! possible and whether genuine IPv4 answers stay visible, the invalid-address
//! policy decides what happens to `0.0.0.0` and `::`.

use hickory_proto::rr::rdata::{A, AAAA, PTR};
use hickory_proto::rr::{Name, RData, Record};
use mesh64_domain::{InvalidAddressAction, InvalidAddressPolicy, MeshNetwork, Zone};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Record variants the pipeline treats differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind<'a> {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ptr(&'a Name),
    Other,
}

impl<'a> RecordKind<'a> {
    pub fn of(record: &'a Record) -> Self {
        match record.data() {
            RData::A(A(addr)) => Self::A(*addr),
            RData::AAAA(AAAA(addr)) => Self::Aaaa(*addr),
            RData::PTR(PTR(target)) => Self::Ptr(target),
            _ => Self::Other,
        }
    }
}

pub fn aaaa_record(owner: Name, ttl: u32, addr: Ipv6Addr) -> Record {
    Record::from_rdata(owner, ttl, RData::AAAA(AAAA(addr)))
}

/// Rewrites records of a zone under a policy.
pub struct RecordRewriter<'a> {
    zone: &'a Zone,
    policy: InvalidAddressPolicy,
    mesh: &'a MeshNetwork,
}

impl<'a> RecordRewriter<'a> {
    pub fn new(zone: &'a Zone, policy: InvalidAddressPolicy, mesh: &'a MeshNetwork) -> Self {
        Self { zone, policy, mesh }
    }

    /// Generic rewrite used for `ANY` answers and additionals.
    pub fn rewrite_section(&self, records: Vec<Record>) -> Vec<Record> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            match RecordKind::of(&record) {
                RecordKind::A(addr) => self.rewrite_a(record, addr, &mut out),
                RecordKind::Aaaa(addr) => self.rewrite_aaaa(record, addr, &mut out),
                RecordKind::Ptr(_) | RecordKind::Other => out.push(record),
            }
        }
        out
    }

    fn rewrite_a(&self, record: Record, addr: Ipv4Addr, out: &mut Vec<Record>) {
        match self.policy.for_ipv4(addr) {
            InvalidAddressAction::Drop => {}
            InvalidAddressAction::KeepAsIs => out.push(record),
            InvalidAddressAction::Rewrite => {
                out.push(aaaa_record(
                    record.name().clone(),
                    record.ttl(),
                    Ipv6Addr::UNSPECIFIED,
                ));
                if self.zone.return_public_ipv4 {
                    out.push(record);
                }
            }
            InvalidAddressAction::Translate => {
                if let Some(prefix) = self.zone.prefix {
                    out.push(aaaa_record(
                        record.name().clone(),
                        record.ttl(),
                        prefix.embed(addr),
                    ));
                }
                if self.zone.return_public_ipv4 {
                    out.push(record);
                }
            }
        }
    }

    fn rewrite_aaaa(&self, record: Record, addr: Ipv6Addr, out: &mut Vec<Record>) {
        match self.policy.for_ipv6(addr) {
            InvalidAddressAction::Drop => {}
            InvalidAddressAction::KeepAsIs | InvalidAddressAction::Rewrite => out.push(record),
            // Foreign IPv6 is unreachable from the mesh.
            InvalidAddressAction::Translate => {
                if self.mesh.contains(addr) {
                    out.push(record);
                }
            }
        }
    }

    /// Upstream AAAA answers that already live in the mesh range.
    pub fn mesh_addresses(&self, records: Vec<Record>) -> Vec<Record> {
        records
            .into_iter()
            .filter(|record| {
                matches!(RecordKind::of(record), RecordKind::Aaaa(addr) if self.mesh.contains(addr))
            })
            .collect()
    }

    /// Turns the A answer for `owner` into the AAAA answer for the same name.
    /// Records other than A are dropped.
    pub fn synthesize_from_a(&self, owner: &Name, records: Vec<Record>) -> Vec<Record> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            let RecordKind::A(addr) = RecordKind::of(&record) else {
                continue;
            };
            match self.policy.for_ipv4(addr) {
                InvalidAddressAction::Drop => {}
                InvalidAddressAction::KeepAsIs => out.push(record),
                InvalidAddressAction::Rewrite => {
                    out.push(aaaa_record(owner.clone(), record.ttl(), Ipv6Addr::UNSPECIFIED))
                }
                InvalidAddressAction::Translate => {
                    if let Some(prefix) = self.zone.prefix {
                        out.push(aaaa_record(owner.clone(), record.ttl(), prefix.embed(addr)));
                    }
                }
            }
        }
        out
    }
}

/// Re-owns PTR answers to `owner`, keeping their targets. Other records are dropped.
pub fn rewrite_ptr_owner(owner: &Name, records: Vec<Record>) -> Vec<Record> {
    records
        .iter()
        .filter_map(|record| match RecordKind::of(record) {
            RecordKind::Ptr(target) => Some(Record::from_rdata(
                owner.clone(),
                record.ttl(),
                RData::PTR(PTR(target.clone())),
            )),
            _ => None,
        })
        .collect()
}
