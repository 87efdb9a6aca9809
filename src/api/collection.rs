use std::sync::Arc;

use chrono::{Local, NaiveDate};
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use uuid::Uuid;

use crate::errors::CollectionError;
use crate::services::wizard::{TransitionError, WizardSession};
use crate::services::{pricing, CollectionValidator};
use crate::stores::SessionStore;
use crate::types::dto::collection::{
    CollectionDetailsRequest, CollectionDetailsView, CollectionSessionResponse, FieldError,
    PaymentSelectionRequest,
};
use crate::types::internal::WizardStep;

/// Collection-request wizard API endpoints
pub struct CollectionApi {
    sessions: Arc<SessionStore>,
    validator: CollectionValidator,
}

impl CollectionApi {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self {
            sessions,
            validator: CollectionValidator::new(),
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn parse_session_id(raw: &str) -> Result<Uuid, CollectionError> {
        Uuid::parse_str(raw).map_err(|_| CollectionError::session_not_found(raw))
    }

    /// Run a transition and translate the outcome into a session
    /// response
    fn transition(
        &self,
        raw_id: &str,
        op: impl FnOnce(&mut WizardSession) -> Result<(), TransitionError>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        let id = Self::parse_session_id(raw_id)?;

        let (outcome, snapshot) = self
            .sessions
            .with_session(&id, op)
            .ok_or_else(|| CollectionError::session_not_found(raw_id))?;

        match outcome {
            Ok(()) => Ok(Json(session_response(id, &snapshot))),
            Err(error) => Err(map_transition_error(snapshot.step(), error)),
        }
    }
}

/// API tags for collection endpoints
#[derive(Tags)]
enum ApiTags {
    /// Collection-request wizard endpoints
    Collections,
}

#[OpenApi]
impl CollectionApi {
    /// Start a new collection request
    ///
    /// Creates a wizard session at the details step with the form
    /// defaults prefilled
    #[oai(path = "/collections", method = "post", tag = "ApiTags::Collections")]
    async fn create_session(&self) -> Json<CollectionSessionResponse> {
        let (id, session) = self.sessions.create(Self::today());
        Json(session_response(id, &session))
    }

    /// Fetch the current state of a wizard session
    #[oai(path = "/collections/:session_id", method = "get", tag = "ApiTags::Collections")]
    async fn get_session(
        &self,
        session_id: Path<String>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        let id = Self::parse_session_id(&session_id.0)?;

        let session = self
            .sessions
            .get(&id)
            .ok_or_else(|| CollectionError::session_not_found(&session_id.0))?;

        Ok(Json(session_response(id, &session)))
    }

    /// Submit the collection details
    ///
    /// Advances Details → Payment when every field validates; otherwise
    /// the session stays at the details step and the response carries
    /// one message per invalid field
    #[oai(
        path = "/collections/:session_id/details",
        method = "put",
        tag = "ApiTags::Collections"
    )]
    async fn submit_details(
        &self,
        session_id: Path<String>,
        body: Json<CollectionDetailsRequest>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        let details = self
            .validator
            .validate(&body.0, Self::today())
            .map_err(|violations| {
                CollectionError::validation_failed(
                    violations
                        .into_iter()
                        .map(|violation| FieldError {
                            field: violation.field.to_string(),
                            message: violation.message,
                        })
                        .collect(),
                )
            })?;

        self.transition(&session_id.0, |session| session.submit_details(details))
    }

    /// Select the payment method
    #[oai(
        path = "/collections/:session_id/payment",
        method = "put",
        tag = "ApiTags::Collections"
    )]
    async fn select_payment(
        &self,
        session_id: Path<String>,
        body: Json<PaymentSelectionRequest>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        self.transition(&session_id.0, |session| session.select_payment(body.0.method))
    }

    /// Advance Payment → Review
    ///
    /// Requires a previously selected payment method
    #[oai(
        path = "/collections/:session_id/advance",
        method = "post",
        tag = "ApiTags::Collections"
    )]
    async fn advance(
        &self,
        session_id: Path<String>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        self.transition(&session_id.0, |session| session.advance())
    }

    /// Go back one step without discarding any entered data
    #[oai(
        path = "/collections/:session_id/back",
        method = "post",
        tag = "ApiTags::Collections"
    )]
    async fn back(
        &self,
        session_id: Path<String>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        self.transition(&session_id.0, |session| session.back())
    }

    /// Confirm the reviewed request
    #[oai(
        path = "/collections/:session_id/confirm",
        method = "post",
        tag = "ApiTags::Collections"
    )]
    async fn confirm(
        &self,
        session_id: Path<String>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        self.transition(&session_id.0, |session| session.confirm())
    }

    /// Cancel the reviewed request
    #[oai(
        path = "/collections/:session_id/cancel",
        method = "post",
        tag = "ApiTags::Collections"
    )]
    async fn cancel(
        &self,
        session_id: Path<String>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        self.transition(&session_id.0, |session| session.cancel())
    }

    /// Reset a cancelled request back to an empty details form
    #[oai(
        path = "/collections/:session_id/reset",
        method = "post",
        tag = "ApiTags::Collections"
    )]
    async fn reset(
        &self,
        session_id: Path<String>,
    ) -> Result<Json<CollectionSessionResponse>, CollectionError> {
        let today = Self::today();
        self.transition(&session_id.0, |session| session.reset(today))
    }
}

fn map_transition_error(step: WizardStep, error: TransitionError) -> CollectionError {
    match error {
        TransitionError::WrongStep(_) => {
            CollectionError::invalid_transition(step, "Operação não permitida neste passo")
        }
        TransitionError::PaymentMethodRequired => {
            CollectionError::invalid_transition(step, "Selecione um método de pagamento")
        }
    }
}

fn session_response(id: Uuid, session: &WizardSession) -> CollectionSessionResponse {
    let details = session.details();
    let cost_kz = session.cost_kz();

    let status_message = match session.step() {
        WizardStep::Confirmed => Some(format!(
            "Obrigado! Sua recolha de {} Kg foi confirmada para {} às {}.",
            details.quantity_kg,
            details.collection_date.format("%Y-%m-%d"),
            details.collection_time
        )),
        WizardStep::Cancelled => Some(
            "Sua solicitação de recolha foi cancelada. Você pode solicitar uma nova recolha a qualquer momento."
                .to_string(),
        ),
        _ => None,
    };

    CollectionSessionResponse {
        session_id: id.to_string(),
        step: session.step(),
        details: CollectionDetailsView::from(details),
        payment_method: session.payment_method(),
        cost_kz,
        cost_display: pricing::format_kz(cost_kz),
        status_message,
    }
}
