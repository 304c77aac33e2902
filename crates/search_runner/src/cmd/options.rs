use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use poke_search::search::get_options;

use crate::models::OptionsReport;
use crate::utils::load_state;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Battle state JSON file
    pub state: PathBuf,
}

pub fn execute(args: OptionsArgs) -> Result<()> {
    let state = load_state(&args.state)?;
    let (user, opponent) = get_options(&state);
    let report = OptionsReport { user, opponent };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
