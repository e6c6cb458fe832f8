pub mod aggregator;
pub mod engine;
pub mod generator;
pub mod pipeline;
pub mod scanner;

pub use crate::domain::model::{
    Artifact, ArtifactKind, Declaration, Declarations, GenerationReport, GroupRegistry,
    ScannedFile, SourceFile,
};
pub use crate::domain::ports::{
    ArtifactSink, ConfigProvider, DeclarationExtractor, Pipeline, SourceStore,
};
pub use crate::utils::error::Result;
