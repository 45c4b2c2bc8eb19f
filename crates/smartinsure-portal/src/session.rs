//! One visitor's portal session
//!
//! [`PortalSession`] wraps the pure [`PortalState`] with everything impure:
//! the RNG, the premium calculator, the toast queue and the pending AI quote
//! delay. Every mutation goes through [`PortalSession::dispatch`].

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use serde::Serialize;
use smartinsure_common::{Result, RiskProfile, SmartInsureError, Toast};
use smartinsure_pricing::customization::draw_ai_base_premium;
use smartinsure_pricing::{session_rng, AdjustedQuote, CoverageOptions, PremiumCalculator, RiskScore};
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalogue::{self, CoachingInsights};
use crate::config::PortalConfig;
use crate::delay::{simulated_delay, DelayHandle, DelayOutcome, SimulatedDelay};
use crate::state::{
    self, claims::ClaimsStats, AssessmentAction, ClaimsAction, ClaimsState, CoachingUpdate,
    DashboardView, InstantQuoteAction, PortalAction, PortalState, StepOutline, Tab, TabAction,
};

/// Identifies one AI quote run
pub type AiQuoteTicket = u64;

pub struct PortalSession {
    id: Uuid,
    state: PortalState,
    rng: StdRng,
    calculator: PremiumCalculator,
    toasts: Vec<Toast>,
    processing_delay: Duration,
    pending_ai_quote: Option<(AiQuoteTicket, DelayHandle)>,
    next_ticket: AiQuoteTicket,
    last_active: DateTime<Utc>,
}

impl PortalSession {
    pub fn new(id: Uuid, config: &PortalConfig) -> Self {
        let state = PortalState {
            claims: ClaimsState::with_year(config.claim_year),
            ..PortalState::default()
        };
        Self {
            id,
            state,
            rng: session_rng(config.rng_seed),
            calculator: PremiumCalculator::new(),
            toasts: Vec::new(),
            processing_delay: config.processing_delay(),
            pending_ai_quote: None,
            next_ticket: 0,
            last_active: Utc::now(),
        }
    }

    /// Price the wizard against a fixed model year instead of the clock
    pub fn with_calculator(mut self, calculator: PremiumCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &PortalState {
        &self.state
    }

    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
    }

    /// Apply an action, queueing any toasts it raises.
    ///
    /// On error the state is left untouched.
    pub fn dispatch(&mut self, action: PortalAction) -> Result<()> {
        self.last_active = Utc::now();
        let next = state::reduce(self.state.clone(), action)?;
        self.state = next.state;
        self.toasts.extend(next.toasts);
        Ok(())
    }

    /// Take every queued toast, oldest first
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    // ---- tabs ----

    pub fn select_tab(&mut self, tab: Tab) -> Result<()> {
        self.dispatch(PortalAction::Tab(TabAction::Select(tab)))
    }

    pub fn get_quote(&mut self) -> Result<()> {
        self.dispatch(PortalAction::Tab(TabAction::GetQuote))
    }

    // ---- instant quote ----

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.dispatch(PortalAction::InstantQuote(InstantQuoteAction::SetDescription(
            description.into(),
        )))
    }

    pub fn set_coverage(&mut self, coverage: CoverageOptions) -> Result<()> {
        self.dispatch(PortalAction::InstantQuote(InstantQuoteAction::SetCoverage(
            coverage,
        )))
    }

    pub fn instant_quote(&self) -> AdjustedQuote {
        self.state.instant_quote.quote()
    }

    /// Mark the instant quote as processing and hand back the delay to wait
    /// on. Feed the outcome to [`finish_ai_quote`](Self::finish_ai_quote).
    pub fn begin_ai_quote(&mut self) -> Result<(AiQuoteTicket, SimulatedDelay)> {
        self.dispatch(PortalAction::InstantQuote(InstantQuoteAction::StartAiQuote))?;

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let (handle, delay) = simulated_delay(self.processing_delay);
        self.pending_ai_quote = Some((ticket, handle));

        debug!(session = %self.id, ticket, "AI quote started");
        Ok((ticket, delay))
    }

    /// Complete an AI quote run. Returns the new base premium, or `None` if
    /// the run was cancelled or superseded.
    pub fn finish_ai_quote(
        &mut self,
        ticket: AiQuoteTicket,
        outcome: DelayOutcome,
    ) -> Result<Option<Decimal>> {
        match self.pending_ai_quote {
            Some((current, _)) if current == ticket => {}
            _ => {
                debug!(session = %self.id, ticket, "Dropping stale AI quote result");
                return Ok(None);
            }
        }
        self.pending_ai_quote = None;

        if outcome == DelayOutcome::Cancelled {
            return Ok(None);
        }

        let base_premium = draw_ai_base_premium(&mut self.rng);
        self.dispatch(PortalAction::InstantQuote(
            InstantQuoteAction::AiQuoteCompleted { base_premium },
        ))?;
        info!(session = %self.id, %base_premium, "AI quote generated");
        Ok(Some(base_premium))
    }

    /// Cancel the in-flight AI quote, if any. The base premium is kept.
    pub fn cancel_ai_quote(&mut self) -> Result<bool> {
        let Some((ticket, mut handle)) = self.pending_ai_quote.take() else {
            return Ok(false);
        };
        handle.cancel();
        self.dispatch(PortalAction::InstantQuote(InstantQuoteAction::AiQuoteCancelled))?;
        debug!(session = %self.id, ticket, "AI quote cancelled");
        Ok(true)
    }

    // ---- risk assessment ----

    pub fn assessment_set_field(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        self.dispatch(PortalAction::Assessment(AssessmentAction::SetField {
            field: field.to_string(),
            value: value.into(),
        }))
    }

    /// Advance the wizard; on the last step this prices the profile.
    ///
    /// A profile that fails validation raises an error toast and leaves the
    /// wizard where it is.
    pub fn assessment_next(&mut self) -> Result<()> {
        if !self.state.assessment.is_final_step() {
            return self.dispatch(PortalAction::Assessment(AssessmentAction::Next));
        }

        let priced = RiskProfile::from_form(&self.state.assessment.form)
            .map_err(SmartInsureError::from)
            .and_then(|profile| self.calculator.quote(&profile, &mut self.rng));

        match priced {
            Ok(quote) => {
                let risk_score = RiskScore::draw(&mut self.rng);
                info!(
                    session = %self.id,
                    premium = quote.monthly_premium,
                    risk_score = risk_score.value(),
                    "Assessment quote generated"
                );
                self.dispatch(PortalAction::Assessment(AssessmentAction::QuoteGenerated {
                    quote,
                    risk_score,
                }))
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "Assessment rejected");
                self.toasts
                    .push(Toast::error("Unable to generate quote", err.to_string()));
                Err(err)
            }
        }
    }

    pub fn assessment_previous(&mut self) -> Result<()> {
        self.dispatch(PortalAction::Assessment(AssessmentAction::Previous))
    }

    pub fn assessment_reset(&mut self) -> Result<()> {
        self.dispatch(PortalAction::Assessment(AssessmentAction::Reset))
    }

    // ---- claims ----

    pub fn open_claim_form(&mut self) -> Result<()> {
        self.dispatch(PortalAction::Claims(ClaimsAction::OpenForm))
    }

    pub fn close_claim_form(&mut self) -> Result<()> {
        self.dispatch(PortalAction::Claims(ClaimsAction::CloseForm))
    }

    pub fn set_claim_field(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        self.dispatch(PortalAction::Claims(ClaimsAction::SetField {
            field: field.to_string(),
            value: value.into(),
        }))
    }

    /// Submit the claim form, returning the new claim id
    pub fn submit_claim(&mut self) -> Result<String> {
        self.dispatch(PortalAction::Claims(ClaimsAction::Submit))
            .inspect_err(|err| warn!(session = %self.id, error = %err, "Claim rejected"))?;
        let id = self
            .state
            .claims
            .claims
            .first()
            .map(|c| c.id.clone())
            .ok_or_else(|| SmartInsureError::Internal("submitted claim missing".into()))?;
        info!(session = %self.id, claim_id = %id, "Claim submitted");
        Ok(id)
    }

    // ---- coaching ----

    pub fn complete_coaching(&mut self, action_id: u32) -> Result<()> {
        self.dispatch(PortalAction::Coaching(CoachingUpdate::Complete(action_id)))
    }

    pub fn coaching(&self) -> CoachingView {
        let coaching = &self.state.coaching;
        CoachingView {
            completed: coaching.completed.iter().copied().collect(),
            completed_count: coaching.completed_count(),
            total_count: coaching.total_count(),
            total_savings: coaching.total_savings(),
            actions: coaching.actions.clone(),
            insights: catalogue::coaching_insights(),
        }
    }

    pub fn dashboard(&self) -> DashboardView {
        DashboardView::build()
    }

    /// Snapshot of everything the client renders
    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            state: self.state.clone(),
            instant_quote: self.instant_quote(),
            assessment_progress: self.state.assessment.progress(),
            assessment_step: self.state.assessment.outline(),
            claims_stats: self.state.claims.stats(),
            next_claim_id: self.state.claims.next_claim_id(),
            coaching_savings: self.state.coaching.total_savings(),
            pending_toasts: self.toasts.len(),
        }
    }
}

/// Coaching view with derived totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingView {
    pub actions: Vec<smartinsure_common::CoachingAction>,
    pub completed: Vec<u32>,
    pub completed_count: usize,
    pub total_count: usize,
    pub total_savings: Decimal,
    pub insights: CoachingInsights,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub state: PortalState,
    pub instant_quote: AdjustedQuote,
    pub assessment_progress: u8,
    pub assessment_step: StepOutline,
    pub claims_stats: ClaimsStats,
    pub next_claim_id: String,
    pub coaching_savings: Decimal,
    pub pending_toasts: usize,
}
