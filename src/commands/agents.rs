//! Implementation of the `govcheck agents` command.

use super::{Outcome, Session};
use crate::error::Result;
use crate::registry::AgentRegistry;

/// List the registry path and every agent identifier, sorted.
pub fn cmd_agents(session: &Session) -> Result<Outcome> {
    let registry = AgentRegistry::load(&session.ctx.registry_candidates)?;

    println!(
        "Agents in {} ({}):",
        session.ctx.display_path(registry.path()),
        registry.len()
    );
    for id in registry.ids() {
        println!("  {}", id);
    }

    Ok(Outcome::Passed)
}
