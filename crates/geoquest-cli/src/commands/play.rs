//! Terminal rendition of the quiz session: positions are typed in instead of
//! observed from a device, everything else follows the tracker.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use geoquest_core::config::LayeredConfig;
use geoquest_core::error::QuestError;
use geoquest_core::tracker::{Grade, OpenQuestion, QuestTracker, TrackerSettings};

use crate::cli::PlayArgs;
use crate::output::OutputWriter;

const GIVE_UP: &str = "(give up)";

pub fn execute(args: PlayArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        output.warning("play is interactive; --json is ignored");
    }

    let quests = super::load_quests(config)?;
    let settings = TrackerSettings::from(config);
    let mut tracker = QuestTracker::new(quests, settings)?;

    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        tracker.record_position(lat, lng, 0.0)?;
        output.info(format!("Starting at ({}, {})", lat, lng));
    }

    let theme = ColorfulTheme::default();
    let menu = ["Set position", "Attempt a quest", "Show progress", "Quit"];

    loop {
        let progress = tracker.progress();
        if progress.completed == progress.total {
            output.success(format!(
                "All {} quests completed! Final score: {}",
                progress.total, progress.score
            ));
            return Ok(());
        }

        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&menu)
            .default(0)
            .interact()?;

        match choice {
            0 => set_position(&mut tracker, &theme, output)?,
            1 => attempt_quest(&mut tracker, &theme, output)?,
            2 => {
                let p = tracker.progress();
                output.info(format!(
                    "You scored: {} | Completed: {}/{}",
                    p.score, p.completed, p.total
                ));
            }
            _ => return Ok(()),
        }
    }
}

fn set_position(
    tracker: &mut QuestTracker,
    theme: &ColorfulTheme,
    output: &OutputWriter,
) -> Result<()> {
    let latitude: f64 = Input::with_theme(theme).with_prompt("Latitude").interact_text()?;
    let longitude: f64 = Input::with_theme(theme).with_prompt("Longitude").interact_text()?;

    match tracker.record_position(latitude, longitude, 0.0) {
        Ok(()) => output.success("Position updated"),
        Err(e) => output.error(e),
    }

    Ok(())
}

fn attempt_quest(
    tracker: &mut QuestTracker,
    theme: &ColorfulTheme,
    output: &OutputWriter,
) -> Result<()> {
    let labels: Vec<String> = tracker
        .quests()
        .iter()
        .map(|q| {
            if q.completed {
                format!("{}. {} (done)", q.id, q.name)
            } else {
                format!("{}. {}", q.id, q.name)
            }
        })
        .collect();

    let picked = Select::with_theme(theme)
        .with_prompt("Which quest?")
        .items(&labels)
        .default(0)
        .interact()?;
    let id = tracker.quests()[picked].id;

    let question = match tracker.attempt_quest(id) {
        Ok(question) => question,
        Err(
            e @ (QuestError::TooFar { .. }
            | QuestError::AlreadyCompleted { .. }
            | QuestError::LocationUnavailable),
        ) => {
            output.warning(e);
            return Ok(());
        }
        Err(e) => {
            output.error(e);
            return Ok(());
        }
    };

    ask_question(tracker, &question, theme, output)
}

fn ask_question(
    tracker: &mut QuestTracker,
    question: &OpenQuestion,
    theme: &ColorfulTheme,
    output: &OutputWriter,
) -> Result<()> {
    output.info(format!("{}: {}", question.name, question.question));

    let mut choices = question.options.clone();
    choices.push(GIVE_UP.to_string());

    loop {
        let picked = Select::with_theme(theme)
            .with_prompt("Your answer")
            .items(&choices)
            .default(0)
            .interact()?;

        if choices[picked] == GIVE_UP {
            output.info("Question left open; attempt it again when ready");
            return Ok(());
        }

        tracker.select_option(choices[picked].clone())?;
        match tracker.submit_answer()? {
            Grade::Correct => {
                let award = tracker.settings().award_points;
                output.success(format!("Correct answer! You've earned {} points.", award));
                return Ok(());
            }
            Grade::Incorrect => {
                output.warning("Incorrect answer! Try again.");
            }
        }
    }
}
