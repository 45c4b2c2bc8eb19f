//! Portal view state
//!
//! Each view owns a small state value with a pure `reduce` function. A
//! reducer consumes the old state and an action and returns the next state
//! together with any toasts the action raised. Nothing here sleeps, draws
//! random numbers or touches a clock; the session layer does that and feeds
//! the results back in as actions.

pub mod assessment;
pub mod claims;
pub mod coaching;
pub mod dashboard;
pub mod instant_quote;
pub mod tabs;

use serde::{Deserialize, Serialize};
use smartinsure_common::{Result, Toast};

pub use assessment::{AssessmentAction, AssessmentResult, AssessmentState, StepOutline};
pub use claims::{ClaimsAction, ClaimsState};
pub use coaching::{CoachingState, CoachingUpdate};
pub use dashboard::{DashboardView, PolicyCard};
pub use instant_quote::{InstantQuoteAction, InstantQuoteState};
pub use tabs::{Tab, TabAction, TabState};

/// Next state plus the toasts raised getting there
#[derive(Debug, Clone)]
pub struct Transition<S> {
    pub state: S,
    pub toasts: Vec<Toast>,
}

impl<S> Transition<S> {
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            toasts: Vec::new(),
        }
    }

    pub fn with_toast(state: S, toast: Toast) -> Self {
        Self {
            state,
            toasts: vec![toast],
        }
    }

    /// Lift a view transition into a larger state
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Transition<T> {
        Transition {
            state: f(self.state),
            toasts: self.toasts,
        }
    }
}

/// Complete state of one visitor's portal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalState {
    pub tabs: TabState,
    pub instant_quote: InstantQuoteState,
    pub assessment: AssessmentState,
    pub claims: ClaimsState,
    pub coaching: CoachingState,
}

#[derive(Debug, Clone)]
pub enum PortalAction {
    Tab(TabAction),
    InstantQuote(InstantQuoteAction),
    Assessment(AssessmentAction),
    Claims(ClaimsAction),
    Coaching(CoachingUpdate),
}

/// Route an action to the view that owns it
pub fn reduce(state: PortalState, action: PortalAction) -> Result<Transition<PortalState>> {
    let PortalState {
        tabs,
        instant_quote,
        assessment,
        claims,
        coaching,
    } = state;

    Ok(match action {
        PortalAction::Tab(action) => tabs.reduce(action).map(|tabs| PortalState {
            tabs,
            instant_quote,
            assessment,
            claims,
            coaching,
        }),
        PortalAction::InstantQuote(action) => {
            instant_quote
                .reduce(action)?
                .map(|instant_quote| PortalState {
                    tabs,
                    instant_quote,
                    assessment,
                    claims,
                    coaching,
                })
        }
        PortalAction::Assessment(action) => assessment.reduce(action)?.map(|assessment| PortalState {
            tabs,
            instant_quote,
            assessment,
            claims,
            coaching,
        }),
        PortalAction::Claims(action) => claims.reduce(action)?.map(|claims| PortalState {
            tabs,
            instant_quote,
            assessment,
            claims,
            coaching,
        }),
        PortalAction::Coaching(action) => coaching.reduce(action)?.map(|coaching| PortalState {
            tabs,
            instant_quote,
            assessment,
            claims,
            coaching,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_routes_to_view() {
        let t = reduce(
            PortalState::default(),
            PortalAction::Tab(TabAction::Select(Tab::Coaching)),
        )
        .unwrap();
        assert_eq!(t.state.tabs.active, Tab::Coaching);
        assert_eq!(t.state.claims.claims.len(), 3);
    }

    #[test]
    fn test_failed_action_reports_error() {
        let res = reduce(
            PortalState::default(),
            PortalAction::InstantQuote(InstantQuoteAction::StartAiQuote),
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_views_are_independent() {
        let state = reduce(
            PortalState::default(),
            PortalAction::Coaching(CoachingUpdate::Complete(2)),
        )
        .unwrap()
        .state;
        let state = reduce(state, PortalAction::Tab(TabAction::GetQuote))
            .unwrap()
            .state;
        assert!(state.coaching.is_completed(2));
        assert_eq!(state.tabs.active, Tab::InstantQuote);
    }
}
