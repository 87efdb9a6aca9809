// Services layer - Business logic and orchestration

pub mod detector;
pub mod pricing;
pub mod reference;
pub mod validation;
pub mod wizard;

pub use detector::DetectorService;
pub use reference::ReferenceDataClient;
pub use validation::{CollectionValidator, FieldViolation};
pub use wizard::{TransitionError, WizardSession};
