use std::cmp::Ordering;

use ipgen_common::config::Config;
use ipgen_common::network::{Family, Fragment};
use tracing::debug;

use crate::commands::build_all;
use crate::terminal::print;

pub fn sort(family: Family, reverse: bool, values: &[String], cfg: &Config) -> anyhow::Result<()> {
    let mut fragments = build_all(family, values)?;
    sort_fragments(&mut fragments, reverse);
    debug!(count = fragments.len(), %family, reverse, "sorted fragments");

    if cfg.json {
        print::json(&fragments)
    } else {
        fragments.iter().for_each(|fragment| print::output(fragment));
        Ok(())
    }
}

/// All fragments come from one family, so `partial_cmp` always has an answer.
fn sort_fragments(fragments: &mut [Fragment], reverse: bool) {
    fragments.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if reverse {
        fragments.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipgen_common::network::FragmentV6;

    #[test]
    fn test_sort_fragments() {
        let mut fragments: Vec<Fragment> = ["0F00", "a", "00FF", "ffff"]
            .iter()
            .map(|s| Fragment::from(s.parse::<FragmentV6>().unwrap()))
            .collect();

        sort_fragments(&mut fragments, false);
        let rendered: Vec<String> = fragments.iter().map(Fragment::render).collect();
        assert_eq!(rendered, ["000A", "00FF", "0F00", "FFFF"]);

        sort_fragments(&mut fragments, true);
        assert_eq!(fragments[0].render(), "FFFF");
    }
}
