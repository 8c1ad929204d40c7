use std::path::Path;

use ash_mechanics::Rules;
use ash_session::{Session, SessionConfig};
use colored::Colorize;

pub fn run(
    path: &Path,
    campaign: Option<String>,
    ring_limit: Option<usize>,
    base_soul_cost: Option<u64>,
    force: bool,
) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let mut rules = Rules::default();
    if let Some(limit) = ring_limit {
        rules = rules.with_ring_limit(limit).map_err(|e| e.to_string())?;
    }
    if let Some(cost) = base_soul_cost {
        rules = rules.with_base_soul_cost(cost).map_err(|e| e.to_string())?;
    }
    let mut config = SessionConfig::default().with_rules(rules);
    if let Some(title) = campaign {
        config = config.with_campaign(title);
    }

    let session = Session::new(config);
    super::save(&session, path)?;

    println!(
        "  Started {} in {}",
        session.config().campaign.bold(),
        path.display()
    );
    Ok(())
}
