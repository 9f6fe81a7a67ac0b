use ipgen_common::config::Config;
use ipgen_common::network::Family;
use tracing::debug;

use crate::commands::build_all;
use crate::terminal::print;

pub fn render(family: Family, values: &[String], cfg: &Config) -> anyhow::Result<()> {
    let fragments = build_all(family, values)?;
    debug!(count = fragments.len(), %family, "rendering fragments");

    if cfg.json {
        print::json(&fragments)
    } else {
        fragments.iter().for_each(|fragment| print::output(fragment));
        Ok(())
    }
}
