pub mod session;

pub use session::{
    LogoutOutcome, RestoreOutcome, SessionError, SessionOperation, SessionOrchestrator,
};
