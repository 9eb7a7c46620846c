mod entry;
mod mood;
mod stats;
mod store;
mod ui;

use color_eyre::Result;
use log::warn;

use entry::{MoodEntry, ThoughtEntry};
use store::Store;
use ui::{Action, Intent, UI};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // The stores live here and nowhere else; every screen mutates them
    // through the operations below.
    let mut moods: Store<MoodEntry> = Store::new();
    let mut thoughts: Store<ThoughtEntry> = Store::new();
    let mut ui = UI::new()?;

    loop {
        match ui.home(&moods, &thoughts)? {
            Some(Action::TrackMood) => {
                if let Some(new_entry) = ui.track_mood()? {
                    moods.add(new_entry);
                }
            }
            Some(Action::WriteThought) => {
                if let Some(new_entry) = ui.write_thought()? {
                    thoughts.add(new_entry);
                }
            }
            Some(Action::MoodHistory) => match ui.mood_history(&moods)? {
                Some(Intent::Edit(original)) => {
                    if let Some(patch) = ui.edit_mood_entry(&original)? {
                        if let Err(e) = moods.update(&original.id, patch) {
                            warn!("edit discarded: {e}");
                        }
                    }
                }
                Some(Intent::Delete(id)) => moods.remove(&id),
                None => {}
            },
            Some(Action::Thoughts) => match ui.thoughts(&thoughts)? {
                Some(Intent::Edit(original)) => {
                    if let Some(patch) = ui.edit_thought_entry(&original)? {
                        if let Err(e) = thoughts.update(&original.id, patch) {
                            warn!("edit discarded: {e}");
                        }
                    }
                }
                Some(Intent::Delete(id)) => thoughts.remove(&id),
                None => {}
            },
            Some(Action::Stats) => ui.stats(&moods, &thoughts)?,
            Some(Action::Quit) => break,
            None => {}
        }
    }

    Ok(())
}
