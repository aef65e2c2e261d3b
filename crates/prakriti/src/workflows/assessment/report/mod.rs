mod document;
pub mod recommendations;
mod summary;
pub mod views;

pub use document::{document_file_name, render_document, DocumentFormat, ReportDocument};
pub use recommendations::{guidance_for, traits_for, DoshaTraits, PairGuidance, Recommendations};
pub use summary::AssessmentReport;
