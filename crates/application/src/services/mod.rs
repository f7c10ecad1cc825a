pub mod arp_classifier;

pub use arp_classifier::{ArpClassifier, LineClass};
