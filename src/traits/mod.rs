pub mod assessor;
pub mod executor;
pub mod synthesizer;

pub use assessor::QualityAssessor;
pub use executor::SandboxExecutor;
pub use synthesizer::TestSynthesizer;
