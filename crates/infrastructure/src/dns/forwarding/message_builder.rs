//! Builds DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use doh_relay_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a standard recursive DNS query and serialize it to wire format.
    ///
    /// The message carries a fresh random transaction id, the RD flag and a
    /// single IN-class question. The caller has already validated the domain
    /// name syntactically; `Name` parsing catches anything that slipped
    /// through presentation-form checks.
    pub fn build_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(query).map(|(_, bytes)| bytes)
    }

    /// Like [`build_query`](Self::build_query) but also returns the
    /// transaction id, for callers that match responses by id.
    pub fn build_query_with_id(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&query.domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_wire(&query.record_type));
        question.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.metadata.recursion_desired = true;
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InternalError(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
