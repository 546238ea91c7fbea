pub mod simulated_notifier;

pub use simulated_notifier::SimulatedContactNotifier;
