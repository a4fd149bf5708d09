//! Guest RSVP records.
//!
//! `FormFields` holds the raw values as entered; `RsvpRecord` is the
//! validated form handed to the form bridge. A record is immutable once
//! constructed and is never persisted beyond the single submission
//! attempt.

use serde::{Deserialize, Serialize};

use crate::error::{RsvpError, RsvpResult};

/// Whether the guest is coming or wants a nudge closer to the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsvpStatus {
    Confirmed,
    Tentative,
}

/// A validated RSVP ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpRecord {
    pub name: String,
    pub phone: String,
    pub party_size: u32,
    pub status: RsvpStatus,
}

impl RsvpRecord {
    pub fn new(
        name: &str,
        phone: &str,
        party_size: u32,
        status: RsvpStatus,
    ) -> RsvpResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RsvpError::InvalidField("name must not be empty".into()));
        }

        let phone = phone.trim();
        if phone.is_empty() {
            return Err(RsvpError::InvalidField(
                "phone number must not be empty".into(),
            ));
        }

        if party_size < 1 {
            return Err(RsvpError::InvalidField(
                "party size must be at least 1".into(),
            ));
        }

        Ok(RsvpRecord {
            name: name.to_string(),
            phone: phone.to_string(),
            party_size,
            status,
        })
    }
}

/// Raw form input, including the hidden honeypot field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub party_size: String,
    /// Invisible to humans; any content marks the submission as automated.
    pub honeypot: String,
}

impl FormFields {
    /// Validate the entered values into a submittable record.
    pub fn to_record(&self, status: RsvpStatus) -> RsvpResult<RsvpRecord> {
        let party_size = self.party_size.trim().parse::<u32>().map_err(|_| {
            RsvpError::InvalidField("party size must be a whole number".into())
        })?;

        RsvpRecord::new(&self.name, &self.phone, party_size, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_rejects_empty_name() {
        let result = RsvpRecord::new("  ", "5035551234", 2, RsvpStatus::Confirmed);
        assert!(matches!(result, Err(RsvpError::InvalidField(_))));
    }

    #[test]
    fn test_record_rejects_empty_phone() {
        let result = RsvpRecord::new("Ayesha Khan", "", 2, RsvpStatus::Confirmed);
        assert!(matches!(result, Err(RsvpError::InvalidField(_))));
    }

    #[test]
    fn test_record_rejects_zero_party() {
        let result = RsvpRecord::new("Ayesha Khan", "5035551234", 0, RsvpStatus::Confirmed);
        assert!(matches!(result, Err(RsvpError::InvalidField(_))));
    }

    #[test]
    fn test_record_trims_whitespace() {
        let record =
            RsvpRecord::new(" Ayesha Khan ", " 5035551234 ", 3, RsvpStatus::Tentative).unwrap();
        assert_eq!(record.name, "Ayesha Khan");
        assert_eq!(record.phone, "5035551234");
    }

    #[test]
    fn test_fields_parse_party_size() {
        let fields = FormFields {
            name: "Ayesha Khan".into(),
            phone: "5035551234".into(),
            party_size: "3".into(),
            honeypot: String::new(),
        };

        let record = fields.to_record(RsvpStatus::Confirmed).unwrap();
        assert_eq!(record.party_size, 3);
        assert_eq!(record.status, RsvpStatus::Confirmed);
    }

    #[test]
    fn test_fields_reject_bad_party_size() {
        for bad in ["", "0", "abc", "-1", "2.5"] {
            let fields = FormFields {
                name: "Ayesha Khan".into(),
                phone: "5035551234".into(),
                party_size: bad.into(),
                honeypot: String::new(),
            };
            assert!(
                fields.to_record(RsvpStatus::Confirmed).is_err(),
                "party size {:?} should be rejected",
                bad
            );
        }
    }
}
