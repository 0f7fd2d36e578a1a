pub mod classifier;
pub mod notifier;

pub use classifier::{classify, SkipReason};
pub use notifier::{DispatchOutcome, MatchNotifier};
