use crate::entry::{self, MoodEntry, MoodField, ThoughtEntry, ThoughtField};
use crate::mood::{self, Mood};
use crate::stats;
use crate::store::{sort_view, Store};
use chrono::Local;
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use std::io::{stdout, Stdout};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DESCRIPTION_LIMIT: usize = 100;

pub enum Action {
    TrackMood,
    WriteThought,
    MoodHistory,
    Thoughts,
    Stats,
    Quit,
}

/// What the user asked to do with a record in a browse screen. The main
/// loop owns the stores and applies the mutation.
pub enum Intent<R> {
    Edit(R),
    Delete(String),
}

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl UI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI { terminal })
    }

    /// Home screen: quick stats plus the key hints, then one key press.
    pub fn home(
        &mut self,
        moods: &Store<MoodEntry>,
        thoughts: &Store<ThoughtEntry>,
    ) -> Result<Option<Action>> {
        let quick = stats::mood_stats(moods.records());
        let thought_count = thoughts.len();
        let mood_count = moods.len();

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(3),
                        Constraint::Min(0),
                        Constraint::Length(3),
                    ]
                    .as_ref(),
                )
                .split(f.area());

            let title = Paragraph::new("Mood Journal")
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(ratatui::layout::Alignment::Center);
            f.render_widget(title, chunks[0]);

            let stats_lines = vec![
                Line::from(format!("Moods tracked: {mood_count}")),
                Line::from(format!("Thoughts written: {thought_count}")),
                Line::from(format!(
                    "Most common mood: {}",
                    stats::format_category(quick.most_common.as_deref())
                )),
                Line::from(format!(
                    "Longest streak: {}",
                    stats::format_streak(quick.longest_streak)
                )),
                Line::from(format!(
                    "Average mood rating: {}",
                    stats::format_average(quick.average)
                )),
            ];
            let quick_stats = Paragraph::new(stats_lines)
                .block(Block::default().borders(Borders::ALL).title("Quick Stats"));
            f.render_widget(quick_stats, chunks[1]);

            let controls = Line::from(vec![
                Span::raw("Press "),
                Span::styled("m", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" to track a mood, "),
                Span::styled("t", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" to write a thought, "),
                Span::styled("h", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" for history, "),
                Span::styled("j", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" for thoughts, "),
                Span::styled("g", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" for stats, "),
                Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" to quit"),
            ]);
            let controls_paragraph = Paragraph::new(controls)
                .style(Style::default().fg(Color::Yellow))
                .alignment(ratatui::layout::Alignment::Center);
            f.render_widget(controls_paragraph, chunks[2]);
        })?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('m') => Ok(Some(Action::TrackMood)),
                KeyCode::Char('t') => Ok(Some(Action::WriteThought)),
                KeyCode::Char('h') => Ok(Some(Action::MoodHistory)),
                KeyCode::Char('j') => Ok(Some(Action::Thoughts)),
                KeyCode::Char('g') => Ok(Some(Action::Stats)),
                KeyCode::Char('q') => Ok(Some(Action::Quit)),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Track-mood form. The mood is inferred live from the description;
    /// typing a category into the mood field overrides the inference.
    pub fn track_mood(&mut self) -> Result<Option<MoodEntry>> {
        let mut description = String::new();
        let mut override_mood = String::new();
        let mut date = Local::now().format("%Y-%m-%d").to_string();
        let mut focus = 0usize; // 0 = description, 1 = mood, 2 = date

        loop {
            let inferred = mood::infer(&description);
            let category = if override_mood.is_empty() {
                inferred.label().to_string()
            } else {
                override_mood.clone()
            };
            let profile = mood::profile_for(&category);

            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Min(4),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let title = Paragraph::new("Track Mood")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(title, chunks[0]);

                let description_input = Paragraph::new(description.clone())
                    .block(field_block("How are you feeling?", focus == 0));
                f.render_widget(description_input, chunks[1]);

                let mood_input = Paragraph::new(override_mood.clone())
                    .block(field_block("Mood (blank = inferred)", focus == 1));
                f.render_widget(mood_input, chunks[2]);

                let date_input = Paragraph::new(date.clone())
                    .block(field_block("Date (YYYY-MM-DD)", focus == 2));
                f.render_widget(date_input, chunks[3]);

                let detected = Paragraph::new(format!(
                    "Detected mood: {} {}",
                    mood_badge(&category),
                    category
                ))
                .block(Block::default().borders(Borders::ALL).title("Mood"));
                f.render_widget(detected, chunks[4]);

                let advice = Paragraph::new(vec![
                    Line::from(Span::styled(
                        profile.quote,
                        Style::default().add_modifier(Modifier::ITALIC),
                    )),
                    Line::from(""),
                    Line::from(profile.recommendation),
                ])
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("For You"));
                f.render_widget(advice, chunks[5]);

                let instructions = Paragraph::new("Tab: next field, Enter: save, Esc: cancel")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(instructions, chunks[6]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Enter => {
                        return Ok(Some(MoodEntry::new(category, description, date)));
                    }
                    KeyCode::Tab => focus = (focus + 1) % 3,
                    KeyCode::BackTab => focus = (focus + 2) % 3,
                    KeyCode::Char(c) => match focus {
                        0 => {
                            if description.chars().count() < DESCRIPTION_LIMIT {
                                description.push(c);
                            }
                        }
                        1 => override_mood.push(c),
                        _ => date.push(c),
                    },
                    KeyCode::Backspace => {
                        match focus {
                            0 => description.pop(),
                            1 => override_mood.pop(),
                            _ => date.pop(),
                        };
                    }
                    _ => {}
                }
            }
        }
    }

    pub fn write_thought(&mut self) -> Result<Option<ThoughtEntry>> {
        match self.thought_form("Write Thought", String::new(), String::new())? {
            Some((text, tag)) => Ok(Some(ThoughtEntry::new(text, tag))),
            None => Ok(None),
        }
    }

    /// Edit form prefilled from an existing thought. Id and creation time
    /// are preserved by `Store::update`, not here.
    pub fn edit_thought_entry(&mut self, original: &ThoughtEntry) -> Result<Option<ThoughtEntry>> {
        match self.thought_form("Edit Thought", original.text.clone(), original.tag.clone())? {
            Some((text, tag)) => Ok(Some(ThoughtEntry::new(text, tag))),
            None => Ok(None),
        }
    }

    fn thought_form(
        &mut self,
        title_text: &str,
        mut text: String,
        mut tag: String,
    ) -> Result<Option<(String, String)>> {
        let mut focus = 0usize; // 0 = text, 1 = tag

        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Min(6),
                            Constraint::Length(3),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let title = Paragraph::new(title_text)
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(title, chunks[0]);

                let text_input = Paragraph::new(text.clone())
                    .wrap(Wrap { trim: false })
                    .block(field_block("Write down your thoughts...", focus == 0));
                f.render_widget(text_input, chunks[1]);

                let tag_input = Paragraph::new(tag.clone()).block(field_block("Tag", focus == 1));
                f.render_widget(tag_input, chunks[2]);

                let instructions = Paragraph::new("Tab: next field, Enter: save, Esc: cancel")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(instructions, chunks[3]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Enter => return Ok(Some((text, tag))),
                    KeyCode::Tab | KeyCode::BackTab => focus = 1 - focus,
                    KeyCode::Char(c) => {
                        if focus == 0 {
                            text.push(c);
                        } else {
                            tag.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        if focus == 0 {
                            text.pop();
                        } else {
                            tag.pop();
                        };
                    }
                    _ => {}
                }
            }
        }
    }

    /// Browse mood history: filter, sort, pick an entry to edit or delete,
    /// or preview the share text. The store is read-only here.
    pub fn mood_history(&mut self, store: &Store<MoodEntry>) -> Result<Option<Intent<MoodEntry>>> {
        let mut query = String::new();
        let mut filtering = false;
        let mut sort_field: Option<MoodField> = None;
        let mut selected = 0usize;

        loop {
            let mut view = store.filter(&query);
            if let Some(field) = sort_field {
                sort_view(&mut view, field);
            }
            if !view.is_empty() && selected >= view.len() {
                selected = view.len() - 1;
            }

            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Min(6),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let title = Paragraph::new(match sort_field {
                    Some(field) => format!("Mood History (sorted by {})", field.label()),
                    None => "Mood History".to_string(),
                })
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(title, chunks[0]);

                let filter_input = Paragraph::new(query.clone())
                    .block(field_block("Filter (date, mood or description)", filtering));
                f.render_widget(filter_input, chunks[1]);

                let width = chunks[2].width.saturating_sub(4) as usize;
                let items: Vec<ListItem> = view
                    .iter()
                    .map(|e| {
                        ListItem::new(vec![
                            Line::from(Span::raw(format!(
                                "[{}] {} {}",
                                e.date,
                                mood_badge(&e.mood),
                                e.mood
                            ))),
                            Line::from(Span::raw(truncate(&e.description, width))),
                        ])
                    })
                    .collect();
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title("Entries"))
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");
                f.render_stateful_widget(
                    list,
                    chunks[2],
                    &mut ListState::default().with_selected(Some(selected)),
                );

                let hint = if filtering {
                    "Type to filter, Enter: done, Esc: clear"
                } else {
                    "/: filter, o: sort, e: edit, d: delete, y: share, Esc: back"
                };
                let instructions = Paragraph::new(hint)
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(instructions, chunks[3]);
            })?;

            if let Event::Key(key) = event::read()? {
                if filtering {
                    match key.code {
                        KeyCode::Enter => filtering = false,
                        KeyCode::Esc => {
                            query.clear();
                            filtering = false;
                        }
                        KeyCode::Char(c) => query.push(c),
                        KeyCode::Backspace => {
                            query.pop();
                        }
                        _ => {}
                    }
                    continue;
                }
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('/') => filtering = true,
                    KeyCode::Char('o') => {
                        sort_field = match sort_field {
                            None => Some(MoodField::Date),
                            Some(MoodField::Date) => Some(MoodField::Mood),
                            Some(MoodField::Mood) => Some(MoodField::Description),
                            Some(MoodField::Description) => None,
                        };
                    }
                    KeyCode::Up => selected = selected.saturating_sub(1),
                    KeyCode::Down => {
                        if selected + 1 < view.len() {
                            selected += 1;
                        }
                    }
                    KeyCode::Char('e') => {
                        if let Some(picked) = view.get(selected) {
                            return Ok(Some(Intent::Edit(picked.clone())));
                        }
                    }
                    KeyCode::Char('d') => {
                        if let Some(picked) = view.get(selected) {
                            return Ok(Some(Intent::Delete(picked.id.clone())));
                        }
                    }
                    KeyCode::Char('y') => {
                        if let Some(picked) = view.get(selected) {
                            let message = entry::share_message(picked);
                            self.show_message("Share Preview", &message)?;
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    pub fn edit_mood_entry(&mut self, original: &MoodEntry) -> Result<Option<MoodEntry>> {
        let mut date = original.date.clone();
        let mut category = original.mood.clone();
        let mut description = original.description.clone();
        let mut focus = 0usize; // 0 = date, 1 = mood, 2 = description

        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Min(0),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let title = Paragraph::new("Edit Mood Entry")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(title, chunks[0]);

                let date_input =
                    Paragraph::new(date.clone()).block(field_block("Date (YYYY-MM-DD)", focus == 0));
                f.render_widget(date_input, chunks[1]);

                let mood_input =
                    Paragraph::new(category.clone()).block(field_block("Mood", focus == 1));
                f.render_widget(mood_input, chunks[2]);

                let description_input = Paragraph::new(description.clone())
                    .block(field_block("Description", focus == 2));
                f.render_widget(description_input, chunks[3]);

                let instructions = Paragraph::new("Tab: next field, Enter: save, Esc: cancel")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(instructions, chunks[5]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Enter => {
                        return Ok(Some(MoodEntry::new(category, description, date)));
                    }
                    KeyCode::Tab => focus = (focus + 1) % 3,
                    KeyCode::BackTab => focus = (focus + 2) % 3,
                    KeyCode::Char(c) => match focus {
                        0 => date.push(c),
                        1 => category.push(c),
                        _ => {
                            if description.chars().count() < DESCRIPTION_LIMIT {
                                description.push(c);
                            }
                        }
                    },
                    KeyCode::Backspace => {
                        match focus {
                            0 => date.pop(),
                            1 => category.pop(),
                            _ => description.pop(),
                        };
                    }
                    _ => {}
                }
            }
        }
    }

    /// Browse thoughts, mirroring the mood history screen.
    pub fn thoughts(
        &mut self,
        store: &Store<ThoughtEntry>,
    ) -> Result<Option<Intent<ThoughtEntry>>> {
        let mut query = String::new();
        let mut filtering = false;
        let mut sort_field: Option<ThoughtField> = None;
        let mut selected = 0usize;

        loop {
            let mut view = store.filter(&query);
            if let Some(field) = sort_field {
                sort_view(&mut view, field);
            }
            if !view.is_empty() && selected >= view.len() {
                selected = view.len() - 1;
            }

            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Min(6),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let title = Paragraph::new(match sort_field {
                    Some(field) => format!("Thoughts (sorted by {})", field.label()),
                    None => "Thoughts".to_string(),
                })
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(title, chunks[0]);

                let filter_input = Paragraph::new(query.clone())
                    .block(field_block("Filter (text or tag)", filtering));
                f.render_widget(filter_input, chunks[1]);

                let width = chunks[2].width.saturating_sub(4) as usize;
                let items: Vec<ListItem> = view
                    .iter()
                    .map(|t| {
                        ListItem::new(vec![
                            Line::from(Span::raw(format!(
                                "[{}] {}",
                                t.created_at.format("%Y-%m-%d %H:%M"),
                                truncate(t.text.lines().next().unwrap_or(""), width)
                            ))),
                            Line::from(Span::raw(format!("Tag: {}", t.tag))),
                        ])
                    })
                    .collect();
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title("Thoughts"))
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");
                f.render_stateful_widget(
                    list,
                    chunks[2],
                    &mut ListState::default().with_selected(Some(selected)),
                );

                let hint = if filtering {
                    "Type to filter, Enter: done, Esc: clear"
                } else {
                    "/: filter, o: sort, e: edit, d: delete, Esc: back"
                };
                let instructions = Paragraph::new(hint)
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(instructions, chunks[3]);
            })?;

            if let Event::Key(key) = event::read()? {
                if filtering {
                    match key.code {
                        KeyCode::Enter => filtering = false,
                        KeyCode::Esc => {
                            query.clear();
                            filtering = false;
                        }
                        KeyCode::Char(c) => query.push(c),
                        KeyCode::Backspace => {
                            query.pop();
                        }
                        _ => {}
                    }
                    continue;
                }
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('/') => filtering = true,
                    KeyCode::Char('o') => {
                        sort_field = match sort_field {
                            None => Some(ThoughtField::Date),
                            Some(ThoughtField::Date) => Some(ThoughtField::Text),
                            Some(ThoughtField::Text) => Some(ThoughtField::Tag),
                            Some(ThoughtField::Tag) => None,
                        };
                    }
                    KeyCode::Up => selected = selected.saturating_sub(1),
                    KeyCode::Down => {
                        if selected + 1 < view.len() {
                            selected += 1;
                        }
                    }
                    KeyCode::Char('e') => {
                        if let Some(picked) = view.get(selected) {
                            return Ok(Some(Intent::Edit(picked.clone())));
                        }
                    }
                    KeyCode::Char('d') => {
                        if let Some(picked) = view.get(selected) {
                            return Ok(Some(Intent::Delete(picked.id.clone())));
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// Stats screen: the mood distribution plus the derived aggregates, and
    /// the quote and recommendation for the most common mood.
    pub fn stats(
        &mut self,
        moods: &Store<MoodEntry>,
        thoughts: &Store<ThoughtEntry>,
    ) -> Result<()> {
        let mood_stats = stats::mood_stats(moods.records());
        let top_tag = stats::most_common_tag(thoughts.records());
        let top_mood = stats::format_category(mood_stats.most_common.as_deref());
        let profile = mood::profile_for(&top_mood);

        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Min(6),
                            Constraint::Length(6),
                            Constraint::Min(4),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let title = Paragraph::new("Statistics")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(title, chunks[0]);

                let distribution: Vec<ListItem> = if mood_stats.counts.is_empty() {
                    vec![ListItem::new("No mood history available.")]
                } else {
                    mood_stats
                        .counts
                        .iter()
                        .map(|(category, count)| {
                            ListItem::new(Line::from(format!(
                                "{} {}: {}",
                                mood_badge(category),
                                category,
                                count
                            )))
                        })
                        .collect()
                };
                let distribution_list = List::new(distribution).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Mood Distribution"),
                );
                f.render_widget(distribution_list, chunks[1]);

                let summary = Paragraph::new(vec![
                    Line::from(format!("Most common mood: {top_mood}")),
                    Line::from(format!(
                        "Longest streak: {}",
                        stats::format_streak(mood_stats.longest_streak)
                    )),
                    Line::from(format!(
                        "Average mood rating: {}",
                        stats::format_average(mood_stats.average)
                    )),
                    Line::from(format!(
                        "Most common thought tag: {}",
                        stats::format_category(top_tag.as_deref())
                    )),
                ])
                .block(Block::default().borders(Borders::ALL).title("Summary"));
                f.render_widget(summary, chunks[2]);

                let advice = Paragraph::new(vec![
                    Line::from(Span::styled(
                        profile.quote,
                        Style::default().add_modifier(Modifier::ITALIC),
                    )),
                    Line::from(""),
                    Line::from(profile.recommendation),
                ])
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("For You"));
                f.render_widget(advice, chunks[3]);

                let instructions = Paragraph::new("Esc: back")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(ratatui::layout::Alignment::Center);
                f.render_widget(instructions, chunks[4]);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Esc {
                    break;
                }
            }
        }

        Ok(())
    }

    fn show_message(&mut self, title_text: &str, message: &str) -> Result<()> {
        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([Constraint::Min(4), Constraint::Length(3)].as_ref())
                .split(f.area());

            let body = Paragraph::new(message.to_string())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title_text.to_string()),
                );
            f.render_widget(body, chunks[0]);

            let instructions = Paragraph::new("Press any key to continue")
                .style(Style::default().fg(Color::Yellow))
                .alignment(ratatui::layout::Alignment::Center);
            f.render_widget(instructions, chunks[1]);
        })?;

        loop {
            if let Event::Key(_) = event::read()? {
                break;
            }
        }
        Ok(())
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Yellow))
    } else {
        block
    }
}

/// Emoji for known categories; free-text categories get a plain bullet.
fn mood_badge(category: &str) -> &'static str {
    match Mood::parse(category) {
        Some(m) => m.emoji(),
        None => "·",
    }
}

/// Clips a line to the given display width, appending an ellipsis when
/// anything was cut.
fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut clipped = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        clipped.push(c);
        used += w;
    }
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_lines_alone() {
        assert_eq!(truncate("short", 20), "short");
    }

    #[test]
    fn truncate_clips_to_width_with_ellipsis() {
        let clipped = truncate("a rather long description of the day", 10);
        assert!(clipped.ends_with('…'));
        assert!(UnicodeWidthStr::width(clipped.as_str()) <= 10);
    }

    #[test]
    fn badge_falls_back_for_free_text_categories() {
        assert_eq!(mood_badge("happy"), "😊");
        assert_eq!(mood_badge("melancholy"), "·");
    }
}
