//! # Kickoff Shared
//! Common functionality shared between kickoff session hosts: experience
//! identifiers, option-string parsing, and the deferred one-shot scheduler
//! primitive.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod experience_id;
mod option_string;
mod scheduler;

pub use experience_id::{AssetKind, ExperienceId, ExperienceIdError};
pub use option_string::OptionString;
pub use scheduler::{NextTickQueue, TaskHandle};
