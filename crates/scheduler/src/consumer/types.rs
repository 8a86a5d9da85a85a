pub mod batch;
pub mod config;
pub mod process_data;
pub mod state;

pub use self::{
    batch::ProcessTrackerBatch,
    config::SchedulerConfig,
    process_data::ProcessData,
    state::{DummyWorkflowState, WorkflowState},
};
