use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS resource-record types the gateway accepts in queries.
///
/// This is a closed set: anything a caller sends that does not parse into one
/// of these variants is rejected before any wire encoding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,
    DS,
    DNSKEY,
    SVCB,
    HTTPS,

    CAA,
    TLSA,
    SSHFP,
    DNAME,

    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,

    CDS,
    CDNSKEY,

    OPT,

    NULL,
    HINFO,
    OPENPGPKEY,

    ANAME,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::DNAME => "DNAME",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::CDS => "CDS",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::OPT => "OPT",
            RecordType::NULL => "NULL",
            RecordType::HINFO => "HINFO",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::ANAME => "ANAME",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::NULL => 10,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::DNAME => 39,
            RecordType::OPT => 41,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::OPENPGPKEY => 61,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::CAA => 257,
            RecordType::ANAME => 32769,
        }
    }

    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            10 => Some(RecordType::NULL),
            12 => Some(RecordType::PTR),
            13 => Some(RecordType::HINFO),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            33 => Some(RecordType::SRV),
            35 => Some(RecordType::NAPTR),
            39 => Some(RecordType::DNAME),
            41 => Some(RecordType::OPT),
            43 => Some(RecordType::DS),
            44 => Some(RecordType::SSHFP),
            46 => Some(RecordType::RRSIG),
            47 => Some(RecordType::NSEC),
            48 => Some(RecordType::DNSKEY),
            50 => Some(RecordType::NSEC3),
            51 => Some(RecordType::NSEC3PARAM),
            52 => Some(RecordType::TLSA),
            59 => Some(RecordType::CDS),
            60 => Some(RecordType::CDNSKEY),
            61 => Some(RecordType::OPENPGPKEY),
            64 => Some(RecordType::SVCB),
            65 => Some(RecordType::HTTPS),
            257 => Some(RecordType::CAA),
            32769 => Some(RecordType::ANAME),
            _ => None,
        }
    }

    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::MX,
            RecordType::TXT,
            RecordType::PTR,
            RecordType::SRV,
            RecordType::SOA,
            RecordType::NS,
            RecordType::NAPTR,
            RecordType::DS,
            RecordType::DNSKEY,
            RecordType::SVCB,
            RecordType::HTTPS,
            RecordType::CAA,
            RecordType::TLSA,
            RecordType::SSHFP,
            RecordType::DNAME,
            RecordType::RRSIG,
            RecordType::NSEC,
            RecordType::NSEC3,
            RecordType::NSEC3PARAM,
            RecordType::CDS,
            RecordType::CDNSKEY,
            RecordType::OPT,
            RecordType::NULL,
            RecordType::HINFO,
            RecordType::OPENPGPKEY,
            RecordType::ANAME,
        ]
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .find(|rt| rt.as_str() == upper)
            .copied()
            .ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
