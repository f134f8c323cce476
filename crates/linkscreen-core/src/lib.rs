pub mod config;
pub mod logging;

pub mod blacklist;
pub mod classifier;
pub mod reputation;
pub mod url_model;

pub use blacklist::{Blacklist, BlacklistMatch};
pub use classifier::{Classifier, ClassifierError, Reason, ScreenReport, Verdict};
pub use reputation::ReputationSource;
