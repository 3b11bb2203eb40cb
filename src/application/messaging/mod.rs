//! Message handling - routing, authorization and execution

pub mod context;
pub mod dispatcher;
pub mod executor;
pub mod gate;
pub mod router;

pub use context::DispatchContext;
pub use dispatcher::{Dispatch, MessageDispatcher};
pub use executor::{Execution, ExecutionOutcome, Executor, FAILURE_NOTICE};
pub use gate::{authorize, AuthorizationGate, Decision, DenyReason, GlobalMode, MaintenanceSwitch};
pub use router::{split_args, Route, Router, Target, Trigger};
