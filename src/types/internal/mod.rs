// Domain types shared by services, stores and the API layer

pub mod account;
pub mod collection;
pub mod detection;

pub use account::{
    CollectionRecord, CollectionStatus, CreditActivity, GreenCreditProfile, Notification,
    NotificationKind, Reward,
};
pub use collection::{
    CollectionDetails, PaymentMethod, WasteType, WizardStep, TIME_SLOTS, USER_DEFAULT_ADDRESS,
};
pub use detection::DetectionRecord;
