use chrono::NaiveDate;

use crate::services::pricing;
use crate::types::internal::{CollectionDetails, PaymentMethod, WizardStep};

/// A transition was requested that the current step does not allow
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("operation not allowed in the current step")]
    WrongStep(WizardStep),

    #[error("a payment method must be selected before review")]
    PaymentMethodRequired,
}

/// One collection-request wizard session
///
/// Linear flow with a single branch at review:
/// Details → Payment → Review → Confirmed | Cancelled.
/// Cancelled can reset back to Details; Confirmed is terminal.
/// Backward navigation never discards entered data.
#[derive(Debug, Clone)]
pub struct WizardSession {
    step: WizardStep,
    details: CollectionDetails,
    payment_method: Option<PaymentMethod>,
}

impl WizardSession {
    /// Start a session at the details step with the form defaults
    pub fn new(today: NaiveDate) -> Self {
        Self {
            step: WizardStep::Details,
            details: CollectionDetails::defaults(today),
            payment_method: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn details(&self) -> &CollectionDetails {
        &self.details
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    /// Estimated cost in AOA, always recomputed from the current
    /// quantity
    pub fn cost_kz(&self) -> f64 {
        pricing::cost_for_weight(self.details.quantity_kg)
    }

    /// Details → Payment with validated details
    ///
    /// The caller validates first; this method only accepts the
    /// already-validated result, so an invalid submission can never
    /// advance the step.
    pub fn submit_details(&mut self, details: CollectionDetails) -> Result<(), TransitionError> {
        if self.step != WizardStep::Details {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.details = details;
        self.step = WizardStep::Payment;
        Ok(())
    }

    /// Select a payment method; only meaningful at the payment step
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), TransitionError> {
        if self.step != WizardStep::Payment {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.payment_method = Some(method);
        Ok(())
    }

    /// Payment → Review, guarded by a selected payment method
    pub fn advance(&mut self) -> Result<(), TransitionError> {
        if self.step != WizardStep::Payment {
            return Err(TransitionError::WrongStep(self.step));
        }
        if self.payment_method.is_none() {
            return Err(TransitionError::PaymentMethodRequired);
        }
        self.step = WizardStep::Review;
        Ok(())
    }

    /// Payment → Details or Review → Payment; keeps all entered data
    pub fn back(&mut self) -> Result<(), TransitionError> {
        match self.step {
            WizardStep::Payment => {
                self.step = WizardStep::Details;
                Ok(())
            }
            WizardStep::Review => {
                self.step = WizardStep::Payment;
                Ok(())
            }
            step => Err(TransitionError::WrongStep(step)),
        }
    }

    /// Review → Confirmed; finalizes the in-memory request
    pub fn confirm(&mut self) -> Result<(), TransitionError> {
        if self.step != WizardStep::Review {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.step = WizardStep::Confirmed;
        Ok(())
    }

    /// Review → Cancelled; data is kept until an explicit reset
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        if self.step != WizardStep::Review {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.step = WizardStep::Cancelled;
        Ok(())
    }

    /// Cancelled → Details; restores every field to its default and
    /// clears the payment method
    pub fn reset(&mut self, today: NaiveDate) -> Result<(), TransitionError> {
        if self.step != WizardStep::Cancelled {
            return Err(TransitionError::WrongStep(self.step));
        }
        self.details = CollectionDetails::defaults(today);
        self.payment_method = None;
        self.step = WizardStep::Details;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{today, valid_details};
    use crate::types::internal::USER_DEFAULT_ADDRESS;

    fn session_at_review() -> WizardSession {
        let mut session = WizardSession::new(today());
        session.submit_details(valid_details()).unwrap();
        session.select_payment(PaymentMethod::PrePago).unwrap();
        session.advance().unwrap();
        session
    }

    #[test]
    fn happy_path_reaches_confirmed() {
        let mut session = WizardSession::new(today());
        assert_eq!(session.step(), WizardStep::Details);

        session.submit_details(valid_details()).unwrap();
        assert_eq!(session.step(), WizardStep::Payment);

        session.select_payment(PaymentMethod::Eletronico).unwrap();
        session.advance().unwrap();
        assert_eq!(session.step(), WizardStep::Review);

        session.confirm().unwrap();
        assert_eq!(session.step(), WizardStep::Confirmed);
    }

    #[test]
    fn cost_tracks_the_submitted_quantity() {
        let mut session = WizardSession::new(today());
        assert_eq!(session.cost_kz(), 1300.0);

        session.submit_details(valid_details()).unwrap();
        assert_eq!(session.cost_kz(), 7150.0);
    }

    #[test]
    fn advance_requires_a_payment_method() {
        let mut session = WizardSession::new(today());
        session.submit_details(valid_details()).unwrap();

        assert_eq!(
            session.advance(),
            Err(TransitionError::PaymentMethodRequired)
        );
        assert_eq!(session.step(), WizardStep::Payment);
    }

    #[test]
    fn backward_navigation_keeps_entered_data() {
        let mut session = session_at_review();
        let details_before = session.details().clone();

        session.back().unwrap();
        assert_eq!(session.step(), WizardStep::Payment);
        assert_eq!(session.details(), &details_before);
        assert_eq!(session.payment_method(), Some(PaymentMethod::PrePago));

        session.back().unwrap();
        assert_eq!(session.step(), WizardStep::Details);
        assert_eq!(session.details(), &details_before);
    }

    #[test]
    fn reset_after_cancel_restores_defaults() {
        let mut session = session_at_review();
        session.cancel().unwrap();
        assert_eq!(session.step(), WizardStep::Cancelled);

        session.reset(today()).unwrap();
        assert_eq!(session.step(), WizardStep::Details);
        assert_eq!(session.payment_method(), None);

        let details = session.details();
        assert!(details.first_name.is_empty());
        assert_eq!(details.address, USER_DEFAULT_ADDRESS);
        assert!(details.waste_types.is_empty());
        assert_eq!(details.quantity_kg, 1.0);
    }

    #[test]
    fn confirmed_is_terminal() {
        let mut session = session_at_review();
        session.confirm().unwrap();

        assert!(session.back().is_err());
        assert!(session.cancel().is_err());
        assert!(session.reset(today()).is_err());
        assert!(session.submit_details(valid_details()).is_err());
        assert_eq!(session.step(), WizardStep::Confirmed);
    }

    #[test]
    fn operations_are_rejected_outside_their_step() {
        let mut session = WizardSession::new(today());

        assert_eq!(
            session.select_payment(PaymentMethod::PrePago),
            Err(TransitionError::WrongStep(WizardStep::Details))
        );
        assert!(session.back().is_err());
        assert!(session.confirm().is_err());
        assert!(session.cancel().is_err());
        assert!(session.reset(today()).is_err());

        let mut session = session_at_review();
        assert_eq!(
            session.submit_details(valid_details()),
            Err(TransitionError::WrongStep(WizardStep::Review))
        );
    }

    #[test]
    fn cancelled_session_keeps_data_until_reset() {
        let mut session = session_at_review();
        let details_before = session.details().clone();

        session.cancel().unwrap();
        assert_eq!(session.details(), &details_before);
        assert_eq!(session.payment_method(), Some(PaymentMethod::PrePago));
    }
}
