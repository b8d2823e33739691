use anyhow::Result;

use geoquest_core::catalog;

use crate::cli::ValidateArgs;
use crate::output::OutputWriter;

pub fn execute(args: ValidateArgs, output: &OutputWriter) -> Result<()> {
    match catalog::load_quest_file(&args.path) {
        Ok(quests) => {
            output.success(format!(
                "{}: {} quests, all integrity checks passed",
                args.path.display(),
                quests.len()
            ));
            Ok(())
        }
        Err(e) => {
            output.error(format!("{}: {}", args.path.display(), e));
            std::process::exit(1);
        }
    }
}
