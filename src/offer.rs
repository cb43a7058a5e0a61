use chrono::Utc;

use crate::error::{Error, StorageError, ValidationError};
use crate::models::{CustomGradient, GradientDirection, Offer, OfferDraft, Theme};
use crate::store::Store;

pub const OFFER_KEY: &str = "offer";

pub const MAX_TITLE_LEN: usize = 50;
pub const MAX_BODY_LEN: usize = 200;
pub const MIN_DISPLAY_DELAY_MINUTES: i64 = 1;
pub const MAX_DISPLAY_DELAY_MINUTES: i64 = 10;

/// Named gradients offered by the editor, in display order.
pub const PALETTE: [(&str, &str); 5] = [
    ("pink-gold", "linear-gradient(135deg, #ff6b9d, #ffd700)"),
    ("purple-pink", "linear-gradient(135deg, #8b5cf6, #ff6b9d)"),
    ("blue-purple", "linear-gradient(135deg, #3b82f6, #8b5cf6)"),
    ("sunset", "linear-gradient(135deg, #f59e0b, #ef4444, #ec4899)"),
    ("emerald", "linear-gradient(135deg, #10b981, #3b82f6)"),
];

fn palette_descriptor(name: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|(id, _)| *id == name)
        .map(|(_, descriptor)| *descriptor)
        .unwrap_or(PALETTE[0].1)
}

impl Theme {
    /// Resolve to a literal gradient descriptor. Unknown palette names fall
    /// back to pink-gold.
    pub fn descriptor(&self) -> String {
        match self {
            Theme::Named(name) => palette_descriptor(name).to_string(),
            Theme::Custom(gradient) => gradient.descriptor(),
        }
    }
}

impl CustomGradient {
    pub fn descriptor(&self) -> String {
        let [c1, c2, c3] = &self.colors;
        match self.direction {
            GradientDirection::Radial => format!("radial-gradient(circle, {c1}, {c2}, {c3})"),
            GradientDirection::Angle(deg) => {
                format!("linear-gradient({deg}deg, {c1}, {c2}, {c3})")
            }
        }
    }
}

impl OfferDraft {
    /// Editor limits: title and body non-empty after trimming, title ≤50
    /// chars, body ≤200 chars, delay within 1..=10 minutes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title_len = self.title.trim().chars().count();
        let body_len = self.body.trim().chars().count();

        if title_len == 0 {
            return Err(ValidationError::EmptyTitle);
        }
        if title_len > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong(title_len));
        }
        if body_len == 0 {
            return Err(ValidationError::EmptyBody);
        }
        if body_len > MAX_BODY_LEN {
            return Err(ValidationError::BodyTooLong(body_len));
        }
        if !(MIN_DISPLAY_DELAY_MINUTES..=MAX_DISPLAY_DELAY_MINUTES)
            .contains(&self.display_delay_minutes)
        {
            return Err(ValidationError::DelayOutOfRange(self.display_delay_minutes));
        }

        Ok(())
    }
}

/// The single current promotional offer. At most one exists at a time;
/// absence is the normal "no active offer" state.
pub struct OfferRepository<'a> {
    store: &'a Store,
    current: Option<Offer>,
}

impl<'a> OfferRepository<'a> {
    /// Load the stored offer if a valid one exists. Never fails.
    pub fn load(store: &'a Store) -> Self {
        let current = store.get::<Offer>(OFFER_KEY);
        OfferRepository { store, current }
    }

    pub fn current(&self) -> Option<&Offer> {
        self.current.as_ref()
    }

    /// Validate the draft, resolve its theme to a literal descriptor, stamp
    /// the creation time and replace whatever offer is live. Nothing is
    /// written when validation fails.
    pub fn publish(&mut self, draft: OfferDraft) -> Result<Offer, Error> {
        draft.validate()?;

        let offer = Offer {
            title: draft.title.trim().to_string(),
            body: draft.body.trim().to_string(),
            visual_theme: draft.theme.descriptor(),
            display_delay_minutes: draft.display_delay_minutes,
            created_at: Utc::now(),
        };

        self.store.put(OFFER_KEY, &offer)?;
        self.current = Some(offer.clone());

        Ok(offer)
    }

    /// Delete the persisted offer. Subsequent loads see no active offer.
    pub fn remove(&mut self) -> Result<(), StorageError> {
        self.store.remove(OFFER_KEY)?;
        self.current = None;
        Ok(())
    }
}
