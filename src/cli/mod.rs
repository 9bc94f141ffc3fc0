//! Command line support

pub mod orchestration;

pub use orchestration::{effective_config, resolve_workflow, ResolveWorkflowArgs, WorkflowResult};
