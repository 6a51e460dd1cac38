//! Email delivery implementations

mod logging_notifier;

pub use logging_notifier::LoggingEmailNotifier;
