//! Starts a fetch whenever the requested id changes.

mod orchestrator;

pub use orchestrator::FetchOrchestrator;
