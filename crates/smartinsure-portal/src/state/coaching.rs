//! Smart coaching: completing actions earns monthly discounts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smartinsure_common::{CoachingAction, Result, SessionError, Toast};
use std::collections::BTreeSet;

use super::Transition;
use crate::catalogue;

#[derive(Debug, Clone)]
pub enum CoachingUpdate {
    Complete(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingState {
    pub actions: Vec<CoachingAction>,
    pub completed: BTreeSet<u32>,
}

impl Default for CoachingState {
    fn default() -> Self {
        Self {
            actions: catalogue::coaching_actions(),
            completed: BTreeSet::new(),
        }
    }
}

impl CoachingState {
    pub fn is_completed(&self, id: u32) -> bool {
        self.completed.contains(&id)
    }

    /// Monthly discount earned so far
    pub fn total_savings(&self) -> Decimal {
        self.actions
            .iter()
            .filter(|a| self.is_completed(a.id))
            .map(|a| a.discount)
            .sum()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total_count(&self) -> usize {
        self.actions.len()
    }

    pub fn reduce(self, action: CoachingUpdate) -> Result<Transition<Self>> {
        match action {
            CoachingUpdate::Complete(id) => {
                let discount = self
                    .actions
                    .iter()
                    .find(|a| a.id == id)
                    .map(|a| a.discount)
                    .ok_or(SessionError::UnknownAction(id))?;

                if self.is_completed(id) {
                    return Ok(Transition::quiet(self));
                }

                let mut completed = self.completed;
                completed.insert(id);
                Ok(Transition::with_toast(
                    Self { completed, ..self },
                    Toast::new(
                        "Action Completed!",
                        format!(
                            "Great! You've earned a ${discount:.2}/month discount by completing \
                             this risk reduction action."
                        ),
                    ),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use smartinsure_common::SmartInsureError;

    #[test]
    fn test_complete_earns_discount() {
        let t = CoachingState::default()
            .reduce(CoachingUpdate::Complete(1))
            .unwrap();
        assert_eq!(t.state.total_savings(), dec!(8.50));
        assert_eq!(
            t.toasts[0].description,
            "Great! You've earned a $8.50/month discount by completing this risk reduction action."
        );
    }

    #[test]
    fn test_complete_is_idempotent() {
        let state = CoachingState::default()
            .reduce(CoachingUpdate::Complete(2))
            .unwrap()
            .state;
        let t = state.reduce(CoachingUpdate::Complete(2)).unwrap();
        assert!(t.toasts.is_empty());
        assert_eq!(t.state.completed_count(), 1);
        assert_eq!(t.state.total_savings(), dec!(15));
    }

    #[test]
    fn test_all_actions() {
        let state = (1..=4).fold(CoachingState::default(), |s, id| {
            s.reduce(CoachingUpdate::Complete(id)).unwrap().state
        });
        assert_eq!(state.completed_count(), state.total_count());
        assert_eq!(state.total_savings(), dec!(55.50));
    }

    #[test]
    fn test_unknown_action() {
        let err = CoachingState::default()
            .reduce(CoachingUpdate::Complete(42))
            .unwrap_err();
        assert!(matches!(
            err,
            SmartInsureError::Session(SessionError::UnknownAction(42))
        ));
    }
}
