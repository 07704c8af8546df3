//! Normalized change set data model.
//!
//! All entities are transient: built fresh per review from the API
//! payload (or from its JSON form), decorated in place by the analysis
//! pass, and discarded after rendering.

mod change;
mod changeset;
mod keyvalue;

pub use change::{
    Action, ChangeDetail, ChangeSource, ChangeTarget, Evaluation, Replacement, RequiresRecreation,
    ResourceChange, TargetAttribute,
};
pub use changeset::{
    Change, ChangeSetDescription, Parameter, ReviewSubject, StackDescription, Tag,
    EXECUTION_STATUS_UNAVAILABLE,
};
pub use keyvalue::{KeyValueChange, KeyValueChanges};
