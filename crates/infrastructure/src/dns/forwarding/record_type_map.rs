use doh_relay_domain::RecordType;
use hickory_proto::rr::RecordType as WireRecordType;

/// Maps between the domain-layer record-type enum and `hickory-proto`'s.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Domain `RecordType` → wire type, for building queries.
    pub fn to_wire(record_type: &RecordType) -> WireRecordType {
        match record_type {
            RecordType::A => WireRecordType::A,
            RecordType::AAAA => WireRecordType::AAAA,
            RecordType::CNAME => WireRecordType::CNAME,
            RecordType::MX => WireRecordType::MX,
            RecordType::TXT => WireRecordType::TXT,
            RecordType::PTR => WireRecordType::PTR,

            RecordType::SRV => WireRecordType::SRV,
            RecordType::SOA => WireRecordType::SOA,
            RecordType::NS => WireRecordType::NS,
            RecordType::NAPTR => WireRecordType::NAPTR,
            RecordType::DS => WireRecordType::DS,
            RecordType::DNSKEY => WireRecordType::DNSKEY,
            RecordType::SVCB => WireRecordType::SVCB,
            RecordType::HTTPS => WireRecordType::HTTPS,

            RecordType::CAA => WireRecordType::CAA,
            RecordType::TLSA => WireRecordType::TLSA,
            RecordType::SSHFP => WireRecordType::SSHFP,
            // No named DNAME variant in hickory; wire value 39.
            RecordType::DNAME => WireRecordType::Unknown(39),

            RecordType::RRSIG => WireRecordType::RRSIG,
            RecordType::NSEC => WireRecordType::NSEC,
            RecordType::NSEC3 => WireRecordType::NSEC3,
            RecordType::NSEC3PARAM => WireRecordType::NSEC3PARAM,

            RecordType::CDS => WireRecordType::CDS,
            RecordType::CDNSKEY => WireRecordType::CDNSKEY,

            RecordType::OPT => WireRecordType::OPT,

            RecordType::NULL => WireRecordType::NULL,
            RecordType::HINFO => WireRecordType::HINFO,
            RecordType::OPENPGPKEY => WireRecordType::OPENPGPKEY,

            RecordType::ANAME => WireRecordType::ANAME,
        }
    }

    /// Wire type → domain `RecordType`, for rendering answers.
    ///
    /// Returns `None` for types the gateway does not fully decode.
    pub fn from_wire(wire_type: WireRecordType) -> Option<RecordType> {
        match wire_type {
            WireRecordType::A => Some(RecordType::A),
            WireRecordType::AAAA => Some(RecordType::AAAA),
            WireRecordType::CNAME => Some(RecordType::CNAME),
            WireRecordType::MX => Some(RecordType::MX),
            WireRecordType::TXT => Some(RecordType::TXT),
            WireRecordType::PTR => Some(RecordType::PTR),

            WireRecordType::SRV => Some(RecordType::SRV),
            WireRecordType::SOA => Some(RecordType::SOA),
            WireRecordType::NS => Some(RecordType::NS),
            WireRecordType::NAPTR => Some(RecordType::NAPTR),
            WireRecordType::DS => Some(RecordType::DS),
            WireRecordType::DNSKEY => Some(RecordType::DNSKEY),
            WireRecordType::SVCB => Some(RecordType::SVCB),
            WireRecordType::HTTPS => Some(RecordType::HTTPS),

            WireRecordType::CAA => Some(RecordType::CAA),
            WireRecordType::TLSA => Some(RecordType::TLSA),
            WireRecordType::SSHFP => Some(RecordType::SSHFP),

            WireRecordType::RRSIG => Some(RecordType::RRSIG),
            WireRecordType::NSEC => Some(RecordType::NSEC),
            WireRecordType::NSEC3 => Some(RecordType::NSEC3),
            WireRecordType::NSEC3PARAM => Some(RecordType::NSEC3PARAM),

            WireRecordType::CDS => Some(RecordType::CDS),
            WireRecordType::CDNSKEY => Some(RecordType::CDNSKEY),

            WireRecordType::OPT => Some(RecordType::OPT),

            WireRecordType::NULL => Some(RecordType::NULL),
            WireRecordType::HINFO => Some(RecordType::HINFO),
            WireRecordType::OPENPGPKEY => Some(RecordType::OPENPGPKEY),

            WireRecordType::ANAME => Some(RecordType::ANAME),
            WireRecordType::Unknown(39) => Some(RecordType::DNAME),

            _ => None,
        }
    }
}
