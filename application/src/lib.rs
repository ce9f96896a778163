//! Application layer for consilium
//!
//! This crate contains the consultation use case, the service boundary,
//! and port definitions. It depends only on the domain layer.

pub mod ports;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    consultation_logger::{ConsultationEvent, ConsultationLogger, NoConsultationLogger},
    progress::{NoProgress, ProgressNotifier},
    specialist_gateway::{SpecialistCallError, SpecialistGateway},
};
pub use service::ConsultationService;
pub use use_cases::run_consultation::{ConsultationError, RunConsultationUseCase};
