//! The interactive script picker.
//!
//! Runs on the alternate screen in raw mode; raw mode is dropped and the
//! screen restored whatever way the picker is left.

use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use crossterm::style::Color::{DarkBlue, DarkGreen, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, event, queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use qds_core::error::Result;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, PickChoice, ScriptListing, UiState, ViewportState};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on drop
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

enum KeyOutcome {
    Chosen(PickChoice),
    Changed(UiState),
    Ignored,
}

/// Prompts the user to choose one script from the listing.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub fn pick_script(prompt: &str, listings: &[ScriptListing]) -> Result<PickChoice> {
    let mut stdout_handle = stdout();
    stdout_handle.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, the terminal is restored

    let (width, height) = terminal::size()?;
    let mut ui_state = UiState {
        selected_index: 0,
        viewport: ViewportState {
            offset: 0,
            height: height.saturating_sub(2), // Subtract 2 for header and filter line
            width,
        },
        is_filtering: false,
        filter_text: String::new(),
    };

    let mut visible = filter_listing_indexes(listings, &ui_state.filter_text);
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            visible = filter_listing_indexes(listings, &ui_state.filter_text);
            if ui_state.selected_index >= visible.len() {
                ui_state.selected_index = visible.len().saturating_sub(1);
            }
            redraw_ui(prompt, &ui_state, &visible, listings)?;
            needs_redraw = false;
        }

        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => match handle_key_event(key_event, &ui_state, &visible) {
                KeyOutcome::Chosen(choice) => return Ok(choice),
                KeyOutcome::Changed(new_state) => {
                    ui_state = new_state;
                    needs_redraw = true;
                }
                KeyOutcome::Ignored => {}
            },
            Event::Resize(new_width, new_height) => {
                ui_state.viewport.width = new_width;
                ui_state.viewport.height = new_height.saturating_sub(2);
                needs_redraw = true;
            }
            _ => {}
        }
    }
}

fn handle_key_event(
    key_event: event::KeyEvent,
    ui_state: &UiState,
    visible: &[usize],
) -> KeyOutcome {
    match key_event.code {
        KeyCode::Up => KeyOutcome::Changed(move_selected_index(ui_state, visible.len(), Up)),
        KeyCode::Down => KeyOutcome::Changed(move_selected_index(ui_state, visible.len(), Down)),
        KeyCode::Enter => match visible.get(ui_state.selected_index) {
            Some(original_index) => KeyOutcome::Chosen(PickChoice::Index(*original_index)),
            None => KeyOutcome::Ignored,
        },
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Chosen(PickChoice::Quit)
        }
        KeyCode::Backspace if ui_state.is_filtering => {
            let mut updated = ui_state.clone();
            updated.filter_text.pop();
            KeyOutcome::Changed(updated)
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated = ui_state.clone();
            updated.is_filtering = false;
            updated.filter_text.clear();
            KeyOutcome::Changed(updated)
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut updated = ui_state.clone();
            updated.filter_text.push(c);
            KeyOutcome::Changed(updated)
        }
        KeyCode::Char('/') => {
            let mut updated = ui_state.clone();
            updated.is_filtering = true;
            KeyOutcome::Changed(updated)
        }
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Chosen(PickChoice::Quit),
        _ => KeyOutcome::Ignored,
    }
}

fn redraw_ui(
    prompt: &str,
    ui_state: &UiState,
    visible: &[usize],
    listings: &[ScriptListing],
) -> Result<()> {
    let mut stdout_handle = stdout();

    queue!(stdout_handle, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(prompt, ui_state, visible.len())?;

    if visible.is_empty() {
        queue!(
            stdout_handle,
            MoveTo(0, 1),
            SetForegroundColor(Red),
            Print("No matching scripts!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        let rows = visible
            .iter()
            .skip(ui_state.viewport.offset)
            .take(ui_state.viewport.height as usize);

        for (row, original_index) in rows.enumerate() {
            let is_selected = row + ui_state.viewport.offset == ui_state.selected_index;
            write_listing_row(
                row as u16 + 1,
                &listings[*original_index],
                *original_index,
                listings.len(),
                is_selected,
                ui_state.viewport.width,
            )?;
            queue!(stdout_handle, cursor::MoveToNextLine(1))?;
        }
    }

    if ui_state.is_filtering {
        queue!(
            stdout_handle,
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout_handle.flush()?;
    Ok(())
}

fn print_header(prompt: &str, ui_state: &UiState, visible_count: usize) -> Result<()> {
    let mut stdout_handle = stdout();
    let width = ui_state.viewport.width as usize;

    let left_padding_size = 2usize;
    let left_padding = " ".repeat(left_padding_size);

    let instructions = if ui_state.is_filtering {
        format!("{prompt}   |   <esc>: Stop Filtering")
    } else {
        format!(
            "{prompt}   |   {}/{}   |   /: Filter   |   q: Quit",
            pad_to_width_of(ui_state.selected_index + 1, visible_count),
            visible_count
        )
    };

    let right_padding =
        " ".repeat(width.saturating_sub(left_padding_size + instructions.chars().count()));

    queue!(
        stdout_handle,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

fn write_listing_row(
    row: u16,
    listing: &ScriptListing,
    original_index: usize,
    total: usize,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout_handle = stdout();

    queue!(stdout_handle, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let index_as_string = pad_to_width_of(original_index + 1, total);
    let content = format!("[{index_as_string}] {listing}");

    let padding = if content.chars().count() < terminal_width as usize {
        " ".repeat(terminal_width as usize - content.chars().count())
    } else {
        String::new()
    };

    if is_selected {
        queue!(
            stdout_handle,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    }

    queue!(
        stdout_handle,
        Print(content),
        Print(padding),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Move the selected index in the given direction, wrapping at both ends
/// and keeping the selection inside the viewport.
fn move_selected_index(
    ui_state: &UiState,
    visible_count: usize,
    direction: CycleDirection,
) -> UiState {
    let mut updated = ui_state.clone();
    if visible_count == 0 {
        return updated;
    }

    let viewport_height = updated.viewport.height as usize;

    match direction {
        Up => {
            if updated.selected_index == 0 {
                updated.selected_index = visible_count - 1;
                updated.viewport.offset = updated
                    .selected_index
                    .saturating_sub(viewport_height.saturating_sub(1));
            } else {
                updated.selected_index -= 1;
                if updated.selected_index < updated.viewport.offset {
                    updated.viewport.offset = updated.selected_index;
                }
            }
        }
        Down => {
            let previous = updated.selected_index;
            updated.selected_index = (updated.selected_index + 1) % visible_count;
            if updated.selected_index < previous {
                updated.viewport.offset = 0;
            } else if updated.selected_index >= updated.viewport.offset + viewport_height {
                updated.viewport.offset = updated
                    .selected_index
                    .saturating_sub(viewport_height.saturating_sub(1));
            }
        }
    }

    updated
}

/// Indexes into `listings` that match the filter text, in listing order.
fn filter_listing_indexes(listings: &[ScriptListing], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..listings.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    listings
        .iter()
        .enumerate()
        .filter_map(|(index, listing)| {
            matcher
                .fuzzy_match(&listing.to_string(), predicate)
                .map(|_| index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listings() -> Vec<ScriptListing> {
        vec![
            ScriptListing::new("greet", "Say hello"),
            ScriptListing::new("deploy", "Ship it"),
            ScriptListing::new("grep-logs", "Search the logs"),
        ]
    }

    fn ui_state(selected_index: usize, offset: usize, height: u16) -> UiState {
        UiState {
            selected_index,
            viewport: ViewportState {
                offset,
                height,
                width: 80,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }

    #[test]
    fn test_filter_empty_predicate_keeps_all() {
        assert_eq!(filter_listing_indexes(&listings(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_fuzzy_matches_name() {
        let matched = filter_listing_indexes(&listings(), "gre");
        assert!(matched.contains(&0));
        assert!(matched.contains(&2));
        assert!(!matched.contains(&1));
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_listing_indexes(&listings(), "zzz").is_empty());
    }

    #[test]
    fn test_move_down_wraps_to_top() {
        let state = ui_state(2, 0, 10);
        let moved = move_selected_index(&state, 3, Down);
        assert_eq!(moved.selected_index, 0);
        assert_eq!(moved.viewport.offset, 0);
    }

    #[test]
    fn test_move_up_wraps_to_bottom() {
        let state = ui_state(0, 0, 2);
        let moved = move_selected_index(&state, 5, Up);
        assert_eq!(moved.selected_index, 4);
        // Viewport scrolled so the selection is visible
        assert_eq!(moved.viewport.offset, 3);
    }

    #[test]
    fn test_move_down_scrolls_viewport() {
        let state = ui_state(1, 0, 2);
        let moved = move_selected_index(&state, 5, Down);
        assert_eq!(moved.selected_index, 2);
        assert_eq!(moved.viewport.offset, 1);
    }

    #[test]
    fn test_move_in_empty_listing_is_noop() {
        let state = ui_state(0, 0, 10);
        let moved = move_selected_index(&state, 0, Down);
        assert_eq!(moved, state);
    }

    #[test]
    fn test_pad_to_width_of() {
        assert_eq!(pad_to_width_of(1, 100), "  1");
        assert_eq!(pad_to_width_of(42, 100), " 42");
        assert_eq!(pad_to_width_of(7, 9), "7");
    }
}
