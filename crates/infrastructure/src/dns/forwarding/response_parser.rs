use super::record_type_map::RecordTypeMapper;
use bytes::Bytes;
use doh_relay_domain::{Answer, AnswerRecord, DomainError, Question};
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a wire-format DNS response into an [`Answer`].
    ///
    /// Every answer-section record is flattened into the record list in
    /// encounter order. Record types outside the gateway's known set are kept
    /// but rendered as the registered type name with a note instead of the
    /// rdata text.
    pub fn parse_bytes(response_bytes: Bytes) -> Result<Answer, DomainError> {
        let message = Message::from_vec(&response_bytes)
            .map_err(|e| DomainError::MalformedMessage(format!("Failed to parse DNS response: {}", e)))?;

        let rcode = message.metadata.response_code;

        let question = match message.queries.first() {
            Some(q) => Question {
                name: q.name().to_utf8().trim_end_matches('.').to_string(),
                record_type: render_type(q.query_type()),
            },
            None => Question {
                name: String::new(),
                record_type: String::new(),
            },
        };

        let mut records = Vec::with_capacity(message.answers.len());
        for record in &message.answers {
            let type_text = render_type(record.record_type());
            let data = match RecordTypeMapper::from_wire(record.record_type()) {
                Some(_) => record.data.to_string(),
                None => format!("{} (full decoding not attempted)", type_text),
            };

            records.push(AnswerRecord {
                name: record.name.to_utf8(),
                record_type: type_text,
                ttl: record.ttl,
                data,
            });
        }

        debug!(
            rcode = ?rcode,
            records = records.len(),
            "DNS response parsed"
        );

        Ok(Answer {
            status: Self::rcode_to_status(rcode).to_string(),
            question,
            records,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<Answer, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

/// Text for a wire record type: the registered mnemonic when known,
/// `TYPEnnn` (RFC 3597 style) otherwise.
fn render_type(wire_type: hickory_proto::rr::RecordType) -> String {
    match RecordTypeMapper::from_wire(wire_type) {
        Some(rt) => rt.as_str().to_string(),
        None => format!("TYPE{}", u16::from(wire_type)),
    }
}
