use crate::error::ValidationError;
use crate::models::BookingRequest;

/// Salon WhatsApp number appointment requests are handed off to.
pub const WHATSAPP_NUMBER: &str = "254110400242";

impl BookingRequest {
    /// Name, phone, service, date and time must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("service", &self.service),
            ("date", &self.date),
            ("time", &self.time),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        Ok(())
    }

    /// The appointment request exactly as the salon receives it.
    pub fn whatsapp_message(&self) -> String {
        let service_line = if self.home_service {
            "Home Service Requested"
        } else {
            "In-salon Service"
        };

        let notes_line = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|m| format!("Notes: {m}"))
            .unwrap_or_default();

        format!(
            "New Appointment Request:\nName: {}\nPhone: {}\nService: {}\nDate: {}\nTime: {}\n{}\n{}",
            self.name, self.phone, self.service, self.date, self.time, service_line, notes_line
        )
    }

    /// `wa.me` link with the message percent-encoded into the text query.
    /// Opening it is the caller's concern; nothing here touches the network.
    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{WHATSAPP_NUMBER}?text={}",
            urlencoding::encode(&self.whatsapp_message())
        )
    }
}
