//! # SmartInsure Portal
//!
//! Headless state for the SmartInsure demo portal.
//!
//! The portal has six views: home, instant quote, risk assessment wizard,
//! policy dashboard, claims and smart coaching. Each view keeps a small
//! state value with a pure reducer; a [`PortalSession`] owns one visitor's
//! state together with the impure pieces (RNG, calculator, toast queue,
//! simulated AI delay) and a [`SessionStore`] holds sessions for the API.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  SessionStore                    │
//! │   DashMap<Uuid, Arc<Mutex<PortalSession>>>       │
//! └────────────────────────┬─────────────────────────┘
//!                          │
//! ┌────────────────────────┴─────────────────────────┐
//! │                 PortalSession                    │
//! │  StdRng · PremiumCalculator · toasts · delay     │
//! └────────────────────────┬─────────────────────────┘
//!                          │ dispatch(PortalAction)
//! ┌────────────────────────┴─────────────────────────┐
//! │              state::reduce (pure)                │
//! │  tabs · instant_quote · assessment · claims ·    │
//! │  coaching                                        │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod catalogue;
pub mod config;
pub mod delay;
pub mod session;
pub mod state;
pub mod store;

pub use config::PortalConfig;
pub use delay::{simulated_delay, DelayHandle, DelayOutcome, SimulatedDelay, Sleeper};
pub use session::{CoachingView, PortalSession, SessionView};
pub use state::{PortalAction, PortalState, Tab, Transition};
pub use store::{SessionStore, SharedSession};
