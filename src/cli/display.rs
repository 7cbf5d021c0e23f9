// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the recipe-ranker CLI.
//!
//! Cards are drawn as boxed rows: star rating, title, publisher, detail link.
//! OneDark colors on dark terminals, One Light on light ones. Colors are
//! dropped for `NO_COLOR` and whenever stdout is not a TTY, so piping the
//! output gives plain text.
//!
//! # Theme detection order
//!
//! 1. `RECIPE_RANKER_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use recipe_ranker::{FilterMode, Listing, Recipe, RecipeCard, NO_RESULTS_MESSAGE};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("RECIPE_RANKER_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(RED);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only for a TTY that has not asked for `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├──────────────────┤
pub fn section_mid() {
    println!("{}", border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Star badge, colored by how high the rating is.
pub fn rating_badge(rating: i64) -> String {
    let text = format!("★ {:>3}", rating);
    if rating >= 90 {
        themed(GREEN, &[BOLD], &text)
    } else if rating >= 50 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Badge for the active filter mode.
pub fn mode_badge(mode: FilterMode) -> String {
    let label = format!("[{}]", mode);
    match mode {
        FilterMode::All => themed(GRAY, &[], &label),
        FilterMode::Popular => themed(GREEN, &[], &label),
        FilterMode::Recent => themed(BLUE, &[], &label),
        FilterMode::Trending => themed(YELLOW, &[BOLD], &label),
    }
}

/// The first line of a card: rating, title, publisher.
pub fn card_headline(card: &RecipeCard) -> String {
    let publisher = if card.publisher.is_empty() {
        String::new()
    } else {
        format!(" by {}", card.publisher)
    };
    // "★ 100  " takes 7 columns
    let text = truncate(&format!("{}{}", card.title, publisher), BOX_WIDTH - 8);
    format!("{}  {}", rating_badge(card.rating), text)
}

/// The second line of a card: cooking time and detail link.
pub fn card_details(card: &RecipeCard) -> String {
    let time = card
        .cooking_time
        .map(|m| format!("{} mins  ", m))
        .unwrap_or_default();
    let text = truncate(&format!("{}{}", time, card.detail_href), BOX_WIDTH - 8);
    format!("       {}", themed(GRAY, &[DIM], &text))
}

// ═══════════════════════════════════════════════════════════════════════════
// SCREENS
// ═══════════════════════════════════════════════════════════════════════════

/// Ranked listing, or the explicit empty state.
pub fn print_listing(listing: &Listing, mode: FilterMode, query: &str, total: usize) {
    let label = if query.is_empty() {
        format!("RECIPES {}", mode_badge(mode))
    } else {
        format!("RECIPES {} \"{}\"", mode_badge(mode), truncate(query, 24))
    };
    section_top(&label);

    match listing {
        Listing::Empty => row(&themed(RED, &[], NO_RESULTS_MESSAGE)),
        Listing::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    section_mid();
                }
                row(&card_headline(card));
                row(&card_details(card));
            }
        }
    }

    section_bot();
    println!(
        "{}",
        themed(
            GRAY,
            &[],
            &format!("  {} shown of {} recipes", listing.cards().len(), total)
        )
    );
}

/// Full detail for one recipe.
pub fn print_recipe(recipe: &Recipe, card: &RecipeCard) {
    section_top(&truncate(&recipe.title, BOX_WIDTH - 6));
    row(&format!("Publisher   {}", truncate(&recipe.publisher, BOX_WIDTH - 14)));
    row(&format!("Rating      {}", rating_badge(card.rating)));
    if let Some(minutes) = recipe.cooking_time {
        row(&format!("Time        {} mins", minutes));
    }
    row(&format!("Image       {}", truncate(&recipe.image_url, BOX_WIDTH - 14)));
    row(&format!("Source      {}", truncate(&recipe.source_url, BOX_WIDTH - 14)));
    row(&format!("Details     {}", truncate(&card.detail_href, BOX_WIDTH - 14)));
    section_bot();
}

/// Summary line for `validate`.
pub fn print_valid(path: &str, count: usize) {
    println!(
        "{} {} valid recipes in {}",
        themed(GREEN, &[BOLD], "✓"),
        count,
        path
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_ranker::testing::make_recipe;
    use recipe_ranker::LinkStyle;

    #[test]
    fn test_visible_len_with_escapes() {
        assert_eq!(visible_len("hello"), 5);
        assert_eq!(visible_len("\x1b[32mhello\x1b[0m"), 5);
    }

    #[test]
    fn test_rgb_format() {
        assert_eq!(rgb(255, 128, 64), "\x1b[38;2;255;128;64m");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a longe…");
        assert_eq!(truncate("crème brûlée", 6).chars().count(), 6);
    }

    #[test]
    fn test_card_headline_fits_box() {
        let mut recipe = make_recipe(1, &"Very long recipe title ".repeat(10), 99.6);
        recipe.publisher = "Someone".into();
        let card = RecipeCard::new(&recipe, LinkStyle::Static);
        assert!(visible_len(&card_headline(&card)) < BOX_WIDTH);
        assert!(card_headline(&card).contains("100"));
    }

    #[test]
    fn test_card_headline_without_publisher() {
        let mut recipe = make_recipe(1, "Pie", 5.0);
        recipe.publisher.clear();
        let card = RecipeCard::new(&recipe, LinkStyle::Static);
        assert!(!card_headline(&card).contains(" by "));
    }

    #[test]
    fn test_theme_colors_are_different() {
        assert_ne!(onedark::GREEN, onelight::GREEN);
        assert_ne!(onedark::GRAY, onelight::GRAY);
    }
}
