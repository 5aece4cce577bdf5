pub mod propagator;

pub use propagator::{
    AppliedSetting, CredentialPropagator, PropagationOutcome, PropagationSettings,
    ResolutionPath,
};
