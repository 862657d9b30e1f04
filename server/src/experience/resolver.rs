use crate::experience::source::CandidateSource;

use kickoff_shared::ExperienceId;

/// Outcome of walking the candidate source chain. Produced once per session
/// startup and handed off by value; never mutated afterward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        id: ExperienceId,
        /// Diagnostic label of the source that won
        source: &'static str,
    },
    Unresolved,
}

/// Walks the chain in declaration order and accepts the first valid
/// identifier, short-circuiting the rest. Sources may have side effects, but
/// only the winning source's output is official.
///
/// No fallback is synthesized when every source comes up empty: an
/// `Unresolved` result must surface, so operators can tell "stuck forever"
/// apart from "still loading".
pub fn resolve(chain: &mut [Box<dyn CandidateSource>]) -> Resolution {
    for source in chain {
        if let Some(id) = source.candidate() {
            if id.is_valid() {
                return Resolution::Resolved {
                    id,
                    source: source.label(),
                };
            }
        }
    }
    Resolution::Unresolved
}
