mod booking;
mod catalog;
mod defaults;
mod error;
mod models;
mod offer;
mod session;
mod store;


pub use booking::WHATSAPP_NUMBER;
pub use catalog::{CatalogRepository, CATALOG_KEY};
pub use defaults::default_catalog;
pub use error::{Error, StorageError, ValidationError};
pub use models::{
    BookingRequest, Catalog, Category, CustomGradient, GradientDirection, Offer, OfferDraft,
    ServiceItem, SessionRecord, Theme,
};
pub use offer::{
    OfferRepository, MAX_BODY_LEN, MAX_DISPLAY_DELAY_MINUTES, MAX_TITLE_LEN,
    MIN_DISPLAY_DELAY_MINUTES, OFFER_KEY, PALETTE,
};
pub use session::{AdminSession, ADMIN_PASSWORD, SESSION_KEY};
pub use store::Store;
